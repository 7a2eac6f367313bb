//! Mints a runtime assertion for a player, the way a backend hands a scoped credential to a
//! browser client.

// crates.io
use color_eyre::Result;
use time::Duration;
// self
use playlyfe::auth::mint_jwt;

fn main() -> Result<()> {
	color_eyre::install()?;

	let assertion = mint_jwt(
		"demo-client",
		"super-secret",
		"student1",
		&["player.runtime.read", "player.runtime.write"],
		Duration::minutes(15),
	)?;

	println!("Runtime assertion: {assertion}");

	Ok(())
}
