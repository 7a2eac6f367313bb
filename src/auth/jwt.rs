//! Runtime JWT assertions for the player-facing authentication scheme.
//!
//! The runtime scheme is independent of OAuth: a backend mints a short-lived HS256 token that
//! names a player and the scopes they may use, signs it with the client secret, and prefixes the
//! client identifier so the relying party can pick the verification key without parsing the
//! token.

// crates.io
use jsonwebtoken::{EncodingKey, Header};
// self
use crate::{_prelude::*, error::SigningError};

/// Claims embedded in a runtime assertion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeClaims {
	/// Player the assertion speaks for.
	pub player_id: String,
	/// Scopes granted to the player, in caller order.
	pub scopes: Vec<String>,
	/// Absolute expiry as Unix seconds.
	pub exp: i64,
}

/// Mints an HS256 assertion and returns it as `"{client_id}:{token}"`.
pub fn mint_jwt<S>(
	client_id: &str,
	client_secret: &str,
	player_id: &str,
	scopes: &[S],
	ttl: Duration,
) -> Result<String, SigningError>
where
	S: AsRef<str>,
{
	let expires_at =
		OffsetDateTime::now_utc().checked_add(ttl).ok_or(SigningError::ExpiryOutOfRange { ttl })?;
	let claims = RuntimeClaims {
		player_id: player_id.to_owned(),
		scopes: scopes.iter().map(|scope| scope.as_ref().to_owned()).collect(),
		exp: expires_at.unix_timestamp(),
	};
	let token = jsonwebtoken::encode(
		&Header::default(),
		&claims,
		&EncodingKey::from_secret(client_secret.as_bytes()),
	)?;

	Ok(format!("{client_id}:{token}"))
}
