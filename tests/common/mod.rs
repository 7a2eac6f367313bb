//! Shared fixtures for reqwest-backed integration tests.

#![allow(dead_code)]

// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
// self
use playlyfe::{
	client::Client,
	config::{ClientConfig, ClientConfigBuilder},
	http::ReqwestHttpClient,
	store::{MemoryStore, TokenStore},
	url::Url,
};

pub const CLIENT_ID: &str = "client-it";
pub const CLIENT_SECRET: &str = "secret-it";

/// Client type used across integration tests.
pub type TestClient = Client<ReqwestHttpClient>;

/// Seeds a configuration builder whose endpoints all point at the mock server.
pub fn config_builder(server: &MockServer) -> ClientConfigBuilder {
	let parse = |path: &str| Url::parse(&server.url(path)).expect("Mock endpoint URL should parse.");

	ClientConfig::builder(CLIENT_ID, CLIENT_SECRET)
		.authorization_endpoint(parse("/auth"))
		.token_endpoint(parse("/auth/token"))
		.api_base(parse("/"))
}

/// Builds a client-credentials client backed by an in-memory store the test can inspect.
pub fn build_client(server: &MockServer) -> (TestClient, Arc<MemoryStore>) {
	let config = config_builder(server).build().expect("Mock configuration should build.");

	build_client_with(config)
}

/// Builds a client for `config` backed by an in-memory store the test can inspect.
pub fn build_client_with(config: ClientConfig) -> (TestClient, Arc<MemoryStore>) {
	let store_backend = Arc::new(MemoryStore::default());
	let store: Arc<dyn TokenStore> = store_backend.clone();
	let client = Client::new(config).with_store(store);

	(client, store_backend)
}

/// Registers a token endpoint answering with `access_token` for one hour.
pub async fn mock_token<'a>(server: &'a MockServer, access_token: &str) -> httpmock::Mock<'a> {
	let body = format!("{{\"access_token\":\"{access_token}\",\"expires_in\":3600}}");

	server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/token");
			then.status(200).header("content-type", "application/json").body(body);
		})
		.await
}
