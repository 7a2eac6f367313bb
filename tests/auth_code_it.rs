// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use playlyfe::{
	auth::GrantType,
	client::{ACCESS_TOKEN_PARAM, Query},
	url::Url,
};

mod common;

const REDIRECT_URI: &str = "https://app.example.com/callback";

fn redirect_uri() -> Url {
	Url::parse(REDIRECT_URI).expect("Redirect URI should parse.")
}

#[tokio::test]
async fn authorization_url_targets_configured_endpoint() {
	let server = MockServer::start_async().await;
	let config = common::config_builder(&server)
		.grant_type(GrantType::AuthorizationCode)
		.redirect_uri(redirect_uri())
		.build()
		.expect("Authorization-code configuration should build.");
	let (client, _store) = common::build_client_with(config);
	let url = client.authorization_url();
	let pairs = url.query_pairs().into_owned().collect::<Vec<_>>();

	assert!(url.as_str().starts_with(&server.url("/auth")));
	assert_eq!(
		pairs,
		vec![
			("response_type".to_owned(), "code".to_owned()),
			("redirect_uri".to_owned(), REDIRECT_URI.to_owned()),
			("client_id".to_owned(), common::CLIENT_ID.to_owned()),
		]
	);
}

#[tokio::test]
async fn exchanged_code_is_sent_with_redirect_uri() {
	let server = MockServer::start_async().await;
	let config = common::config_builder(&server)
		.grant_type(GrantType::AuthorizationCode)
		.redirect_uri(redirect_uri())
		.build()
		.expect("Authorization-code configuration should build.");
	let (client, store) = common::build_client_with(config);
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/token").json_body(json!({
				"client_id": common::CLIENT_ID,
				"client_secret": common::CLIENT_SECRET,
				"redirect_uri": REDIRECT_URI,
				"code": "redirect-code",
				"grant_type": "authorization_code",
			}));
			then.status(200).body("{\"access_token\":\"user-token\",\"expires_in\":3600}");
		})
		.await;
	let player_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/runtime/player").query_param(ACCESS_TOKEN_PARAM, "user-token");
			then.status(200).body("{\"id\":\"student1\",\"alias\":\"Student 1\"}");
		})
		.await;

	client.exchange_code("redirect-code");

	let player: serde_json::Value =
		client.get("/runtime/player", Query::new()).await.expect("Player lookup should succeed.");

	assert_eq!(player["id"], "student1");
	assert_eq!(
		store.snapshot().map(|token| token.access_token.expose().to_owned()).as_deref(),
		Some("user-token")
	);

	token_mock.assert_async().await;
	player_mock.assert_async().await;
}

#[tokio::test]
async fn missing_code_is_rejected_by_token_endpoint() {
	let server = MockServer::start_async().await;
	let config = common::config_builder(&server)
		.grant_type(GrantType::AuthorizationCode)
		.redirect_uri(redirect_uri())
		.build()
		.expect("Authorization-code configuration should build.");
	let (client, store) = common::build_client_with(config);
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/token").json_body(json!({
				"client_id": common::CLIENT_ID,
				"client_secret": common::CLIENT_SECRET,
				"redirect_uri": REDIRECT_URI,
				"code": "",
				"grant_type": "authorization_code",
			}));
			then.status(400).body(
				"{\"error\":\"invalid_request\",\"error_description\":\"The code is missing\"}",
			);
		})
		.await;
	let err = client
		.get::<serde_json::Value>("/runtime/player", Query::new())
		.await
		.expect_err("Token fetch without a code should fail.");

	assert_eq!(err.code(), Some("invalid_request"));
	assert!(store.snapshot().is_none());

	token_mock.assert_async().await;
}
