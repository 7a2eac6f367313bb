//! The Playlyfe API client: token gateway, request dispatcher, and verb façades.
//!
//! Every public call flows through the same pipeline: the token gateway loads the cached token
//! from the configured [`TokenStore`], fetches and saves a new one when the cached token is
//! missing or expired, injects it as the `access_token` query parameter, and the dispatcher
//! issues the request and classifies the body.

pub mod dispatch;
pub mod gateway;
pub mod request;

pub(crate) mod response;

pub use gateway::ACCESS_TOKEN_PARAM;
pub use request::*;

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	config::ClientConfig,
	http::HttpTransport,
	oauth,
	store::{MemoryStore, TokenStore},
};
#[cfg(feature = "reqwest")]
use crate::{auth::GrantType, error::ConfigError, http::ReqwestHttpClient};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = Client<ReqwestHttpClient>;

/// Playlyfe API client bound to one configuration, token store, and transport.
///
/// Clones share the transport, the token store, and the recorded authorization code.
pub struct Client<C>
where
	C: ?Sized + HttpTransport,
{
	config: ClientConfig,
	store: Arc<dyn TokenStore>,
	http_client: Arc<C>,
	code: Arc<RwLock<Option<TokenSecret>>>,
}
impl<C> Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Creates a client that reuses the caller-provided transport and keeps tokens in memory.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			config,
			store: Arc::new(MemoryStore::default()),
			http_client: http_client.into(),
			code: Default::default(),
		}
	}

	/// Replaces the token store (for example with a [`FnStore`](crate::store::FnStore) or
	/// [`FileStore`](crate::store::FileStore)).
	pub fn with_store(mut self, store: Arc<dyn TokenStore>) -> Self {
		self.store = store;

		self
	}

	/// Immutable configuration this client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Token store consulted before every request.
	pub fn store(&self) -> &Arc<dyn TokenStore> {
		&self.store
	}

	/// Records the code received on the authorization redirect.
	///
	/// The code is used by every subsequent authorization-code token fetch.
	pub fn exchange_code(&self, code: impl Into<String>) {
		*self.code.write() = Some(TokenSecret::new(code));
	}

	/// Browser URL that starts the authorization-code grant.
	pub fn authorization_url(&self) -> Url {
		oauth::authorization_url(&self.config)
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport and an in-memory store.
	pub fn new(config: ClientConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}

	/// Client-credentials client against API `v2` on the public deployment.
	pub fn client_v2(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Result<Self, ConfigError> {
		let config = ClientConfig::builder(client_id, client_secret)
			.grant_type(GrantType::ClientCredentials)
			.build()?;

		Ok(Self::new(config))
	}

	/// Authorization-code client against API `v2` on the public deployment.
	pub fn code_v2(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: Url,
	) -> Result<Self, ConfigError> {
		let config = ClientConfig::builder(client_id, client_secret)
			.grant_type(GrantType::AuthorizationCode)
			.redirect_uri(redirect_uri)
			.build()?;

		Ok(Self::new(config))
	}
}
impl<C> Clone for Client<C>
where
	C: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			store: self.store.clone(),
			http_client: self.http_client.clone(),
			code: self.code.clone(),
		}
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("config", &self.config)
			.field("code_set", &self.code.read().is_some())
			.finish()
	}
}
