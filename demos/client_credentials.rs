//! Demonstrates the client-credentials flow with the default reqwest transport and the in-memory
//! token store: the first request fetches a token, the second reuses it.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde::Deserialize;
// self
use playlyfe::{client::Client, config::ClientConfig, url::Url};

#[derive(Debug, Deserialize)]
struct Player {
	id: String,
	alias: String,
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"demo-access\",\"expires_in\":900}");
		})
		.await;
	let player_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v2/runtime/player")
				.query_param("player_id", "student1")
				.query_param("access_token", "demo-access");
			then.status(200).body("{\"id\":\"student1\",\"alias\":\"Student 1\"}");
		})
		.await;
	let config = ClientConfig::builder("demo-client", "super-secret")
		.token_endpoint(Url::parse(&server.url("/auth/token"))?)
		.api_base(Url::parse(&server.url("/"))?)
		.build()?;
	let client = Client::new(config);

	for _ in 0..2 {
		let player: Player = client.get("/runtime/player", [("player_id", "student1")]).await?;

		println!("Player {} is known as {}.", player.id, player.alias);
	}

	token_mock.assert_async().await;
	player_mock.assert_calls_async(2).await;

	Ok(())
}
