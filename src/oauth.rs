//! Token endpoint exchanges and the authorization redirect URL.
//!
//! Token requests are JSON bodies (not form posts) carrying the client credentials and the grant
//! type; authorization-code requests add the redirect URI and the recorded code. The endpoint
//! answers with `{access_token, expires_in}` or an `{error, error_description}` payload.

// self
use crate::{
	_prelude::*,
	auth::{GrantType, StoredToken},
	client::response,
	config::ClientConfig,
	error::ConfigError,
	http::{HttpRequest, HttpTransport, Method},
	obs::{self, CallKind, CallOutcome, CallSpan, CallTarget},
};

/// JSON body posted to the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenRequestBody<'a> {
	/// OAuth client identifier.
	pub client_id: &'a str,
	/// OAuth client secret.
	pub client_secret: &'a str,
	/// Redirect URI (authorization-code grant only).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub redirect_uri: Option<&'a str>,
	/// Authorization code (authorization-code grant only).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub code: Option<&'a str>,
	/// Grant identifier.
	pub grant_type: GrantType,
}
impl<'a> TokenRequestBody<'a> {
	/// Builds the grant-specific body for `config`.
	///
	/// Authorization-code bodies always carry a `code` field; when no code has been recorded yet
	/// it is sent empty and the token endpoint rejects the exchange.
	pub fn for_config(config: &'a ClientConfig, code: Option<&'a str>) -> Self {
		let (redirect_uri, code) = match config.grant_type {
			GrantType::ClientCredentials => (None, None),
			GrantType::AuthorizationCode =>
				(config.redirect_uri.as_ref().map(Url::as_str), Some(code.unwrap_or_default())),
		};

		Self {
			client_id: &config.client_id,
			client_secret: config.client_secret.expose(),
			redirect_uri,
			code,
			grant_type: config.grant_type,
		}
	}
}

/// Successful token endpoint response.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
	/// Bearer token.
	pub access_token: String,
	/// Lifetime in seconds, relative to the response; fractional values are truncated.
	#[serde(deserialize_with = "lifetime_seconds")]
	pub expires_in: i64,
}

fn lifetime_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
	D: serde::Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Seconds {
		Whole(i64),
		Fractional(f64),
	}

	Ok(match Seconds::deserialize(deserializer)? {
		Seconds::Whole(seconds) => seconds,
		// Float-to-int casts saturate at the i64 bounds.
		Seconds::Fractional(seconds) => seconds as i64,
	})
}

/// Performs the token exchange and returns the token with its absolute expiry.
pub(crate) async fn fetch_token<C>(
	http: &C,
	config: &ClientConfig,
	code: Option<&str>,
) -> Result<StoredToken>
where
	C: ?Sized + HttpTransport,
{
	const KIND: CallKind = CallKind::TokenExchange;

	let span = CallSpan::new(CallTarget::Token(config.grant_type), &config.version);

	obs::record_call_outcome(KIND, CallOutcome::Attempt);

	let result = span
		.instrument(async move {
			let body = serde_json::to_vec(&TokenRequestBody::for_config(config, code))
				.map_err(ConfigError::RequestBody)?;
			let response = http
				.execute(HttpRequest {
					method: Method::Post,
					url: config.endpoints.token.clone(),
					body: Some(body),
					endpoint: "token",
				})
				.await?;

			response::check_api_error(&response.body)?;

			let token: TokenResponse = response::decode_json(&response.body)?;

			Ok(StoredToken::issued_at(
				token.access_token,
				OffsetDateTime::now_utc(),
				Duration::seconds(token.expires_in),
			))
		})
		.await;

	if let Err(e) = &result {
		span.record_error(e);
	}

	obs::record_call_outcome(KIND, CallOutcome::of(&result));

	result
}

/// Builds the browser redirect URL that starts the authorization-code grant.
pub fn authorization_url(config: &ClientConfig) -> Url {
	let mut url = config.endpoints.authorization.clone();
	let redirect_uri = config.redirect_uri.as_ref().map(Url::as_str).unwrap_or_default();

	url.query_pairs_mut()
		.append_pair("response_type", "code")
		.append_pair("redirect_uri", redirect_uri)
		.append_pair("client_id", &config.client_id);

	url
}
