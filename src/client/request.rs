//! Outgoing request shape handed to the dispatcher.

// self
use crate::{_prelude::*, error::ConfigError, http::Method};

/// Query parameters; URL encoding requires string values.
pub type Query = BTreeMap<String, String>;

/// Collects any iterator of string-like pairs into a [`Query`].
pub fn query_from<I, K, V>(pairs: I) -> Query
where
	I: IntoIterator<Item = (K, V)>,
	K: Into<String>,
	V: Into<String>,
{
	pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// Ephemeral API request: verb, route below the versioned API root, query, and JSON body.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// Verb to issue.
	pub method: Method,
	/// Route appended to the versioned API root (for example `/runtime/player`).
	pub route: String,
	/// Query parameters; the access token is added by the client.
	pub query: Query,
	/// Serialized JSON body.
	pub body: Option<Vec<u8>>,
}
impl ApiRequest {
	/// Creates a request without query parameters or body.
	pub fn new(method: Method, route: impl Into<String>) -> Self {
		Self { method, route: route.into(), query: Query::new(), body: None }
	}

	/// Creates a request from a verb string; unknown verbs become `HEAD` requests.
	pub fn from_verb(verb: &str, route: impl Into<String>) -> Self {
		Self::new(Method::from_verb(verb), route)
	}

	/// Adds or replaces a single query parameter.
	pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.insert(key.into(), value.into());

		self
	}

	/// Adds or replaces several query parameters.
	pub fn queries<I, K, V>(mut self, pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.query.extend(query_from(pairs));

		self
	}

	/// Serializes `body` as the JSON request body.
	pub fn json<B>(mut self, body: &B) -> Result<Self, ConfigError>
	where
		B: ?Sized + Serialize,
	{
		self.body = Some(serde_json::to_vec(body).map_err(ConfigError::RequestBody)?);

		Ok(self)
	}

	/// Builds `api_endpoint + route + "?" + encoded query`.
	pub fn url(&self, api_endpoint: &str) -> Result<Url, ConfigError> {
		let mut url = Url::parse(&format!("{api_endpoint}{}", self.route))
			.map_err(|source| ConfigError::InvalidRoute { route: self.route.clone(), source })?;

		if !self.query.is_empty() {
			url.query_pairs_mut().extend_pairs(self.query.iter());
		}

		Ok(url)
	}
}
