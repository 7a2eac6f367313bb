//! Validating builder for [`ClientConfig`].

// self
use crate::{
	_prelude::*,
	auth::{GrantType, TokenSecret},
	config::{
		ClientConfig, ClientEndpoints, DEFAULT_API_BASE_URL, DEFAULT_API_VERSION,
		DEFAULT_AUTHORIZATION_URL, DEFAULT_TOKEN_URL,
	},
	error::ConfigError,
};

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: TokenSecret,
	/// Grant used for token fetches (defaults to client credentials).
	pub grant_type: GrantType,
	/// API version tag (defaults to `v2`).
	pub version: String,
	/// Redirect URI (required for the authorization-code grant).
	pub redirect_uri: Option<Url>,
	/// Authorization endpoint override, parsed by [`build`](Self::build).
	pub authorization_endpoint: Option<String>,
	/// Token endpoint override, parsed by [`build`](Self::build).
	pub token_endpoint: Option<String>,
	/// Resource API root override, parsed by [`build`](Self::build).
	pub api_base: Option<String>,
}
impl ClientConfigBuilder {
	/// Creates a new builder seeded with the provided credentials.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: TokenSecret::new(client_secret),
			grant_type: GrantType::default(),
			version: DEFAULT_API_VERSION.into(),
			redirect_uri: None,
			authorization_endpoint: None,
			token_endpoint: None,
			api_base: None,
		}
	}

	/// Sets the grant used for token fetches.
	pub fn grant_type(mut self, grant: GrantType) -> Self {
		self.grant_type = grant;

		self
	}

	/// Sets the API version tag.
	pub fn version(mut self, version: impl Into<String>) -> Self {
		self.version = version.into();

		self
	}

	/// Sets the redirect URI registered for the authorization-code grant.
	pub fn redirect_uri(mut self, url: Url) -> Self {
		self.redirect_uri = Some(url);

		self
	}

	/// Overrides the authorization endpoint.
	///
	/// Accepts a [`Url`] or any string; strings are validated by [`build`](Self::build).
	pub fn authorization_endpoint(mut self, url: impl AsRef<str>) -> Self {
		self.authorization_endpoint = Some(url.as_ref().to_owned());

		self
	}

	/// Overrides the token endpoint.
	///
	/// Accepts a [`Url`] or any string; strings are validated by [`build`](Self::build).
	pub fn token_endpoint(mut self, url: impl AsRef<str>) -> Self {
		self.token_endpoint = Some(url.as_ref().to_owned());

		self
	}

	/// Overrides the resource API root.
	///
	/// Accepts a [`Url`] or any string; strings are validated by [`build`](Self::build).
	pub fn api_base(mut self, url: impl AsRef<str>) -> Self {
		self.api_base = Some(url.as_ref().to_owned());

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		if self.client_id.is_empty() {
			return Err(ConfigError::MissingClientId);
		}
		if self.version.is_empty() || self.version.contains('/') {
			return Err(ConfigError::InvalidVersion { version: self.version });
		}
		if self.grant_type == GrantType::AuthorizationCode && self.redirect_uri.is_none() {
			return Err(ConfigError::MissingRedirectUri);
		}

		let endpoints = ClientEndpoints {
			authorization: endpoint_or_default(
				"authorization",
				self.authorization_endpoint,
				DEFAULT_AUTHORIZATION_URL,
			)?,
			token: endpoint_or_default("token", self.token_endpoint, DEFAULT_TOKEN_URL)?,
			api_base: endpoint_or_default("api", self.api_base, DEFAULT_API_BASE_URL)?,
		};
		let api_endpoint =
			format!("{}/{}", endpoints.api_base.as_str().trim_end_matches('/'), self.version);

		Ok(ClientConfig {
			client_id: self.client_id,
			client_secret: self.client_secret,
			grant_type: self.grant_type,
			version: self.version,
			redirect_uri: self.redirect_uri,
			endpoints,
			api_endpoint,
		})
	}
}

fn endpoint_or_default(
	name: &'static str,
	url: Option<String>,
	default: &str,
) -> Result<Url, ConfigError> {
	let raw = url.as_deref().unwrap_or(default);

	Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint { endpoint: name, source })
}
