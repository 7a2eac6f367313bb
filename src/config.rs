//! Immutable client configuration: credentials, grant type, API version, and endpoints.
//!
//! Configuration is assembled once through [`ClientConfigBuilder`] and never mutated afterward.
//! Endpoints default to the public Playlyfe deployment but can be pointed at any compatible
//! server (staging stacks, mock servers in tests).

pub mod builder;

pub use builder::*;

// self
use crate::{
	_prelude::*,
	auth::{GrantType, TokenSecret},
};

/// Browser redirect target for the authorization-code grant.
pub const DEFAULT_AUTHORIZATION_URL: &str = "https://playlyfe.com/auth";
/// OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://playlyfe.com/auth/token";
/// Root of the resource API; the version tag is appended as a path segment.
pub const DEFAULT_API_BASE_URL: &str = "https://api.playlyfe.com/";
/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v2";

/// Endpoint set used by a client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientEndpoints {
	/// Authorization endpoint users are redirected to.
	pub authorization: Url,
	/// Token endpoint used for every token exchange.
	pub token: Url,
	/// Resource API root (without the version segment).
	pub api_base: Url,
}

/// Immutable client configuration consumed by [`Client`](crate::client::Client).
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: TokenSecret,
	/// Grant used whenever a new token is fetched.
	pub grant_type: GrantType,
	/// API version tag (for example `v2`).
	pub version: String,
	/// Redirect URI registered for the authorization-code grant.
	pub redirect_uri: Option<Url>,
	/// Endpoint definitions.
	pub endpoints: ClientEndpoints,
	/// Versioned API root every route is appended to (`<api_base>/<version>`).
	pub api_endpoint: String,
}
impl ClientConfig {
	/// Creates a new builder for the provided credentials.
	pub fn builder(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> ClientConfigBuilder {
		ClientConfigBuilder::new(client_id, client_secret)
	}
}
