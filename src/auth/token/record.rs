//! Cached access token pair and its lifecycle status.

// crates.io
use time::PrimitiveDateTime;
// self
use crate::{_prelude::*, auth::token::secret::TokenSecret};

/// Lifecycle status for a cached token at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenStatus {
	/// No token has been issued (or the store handed back an empty string).
	Unset,
	/// Token is usable.
	Valid,
	/// Token reached its expiry instant.
	Expired,
}

/// Access token plus its absolute expiry, as persisted by a [`TokenStore`](crate::store::TokenStore).
///
/// The expiry is serialized as a Unix timestamp in seconds so hand-written stores can keep the
/// `(token, expires_at)` pair in whatever medium they like.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
	/// Bearer token attached to every API call; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Instant after which the token must be re-fetched.
	#[serde(with = "time::serde::timestamp")]
	pub expires_at: OffsetDateTime,
}
impl StoredToken {
	/// Creates a token pair with an absolute expiry.
	pub fn new(access_token: impl Into<String>, expires_at: OffsetDateTime) -> Self {
		Self { access_token: TokenSecret::new(access_token), expires_at }
	}

	/// Creates a token pair that expires `expires_in` after `issued_at`.
	///
	/// Lifetimes reaching past the representable date range saturate at its bounds.
	pub fn issued_at(
		access_token: impl Into<String>,
		issued_at: OffsetDateTime,
		expires_in: Duration,
	) -> Self {
		let expires_at = issued_at.checked_add(expires_in).unwrap_or_else(|| {
			if expires_in.is_negative() {
				PrimitiveDateTime::MIN.assume_utc()
			} else {
				PrimitiveDateTime::MAX.assume_utc()
			}
		});

		Self::new(access_token, expires_at)
	}

	/// Computes the lifecycle status at a given instant.
	///
	/// The token is only usable while `expires_at` lies strictly after `instant`.
	pub fn status_at(&self, instant: OffsetDateTime) -> TokenStatus {
		if self.access_token.is_empty() {
			return TokenStatus::Unset;
		}
		if self.expires_at <= instant {
			return TokenStatus::Expired;
		}

		TokenStatus::Valid
	}

	/// Convenience helper that checks the status using the current UTC instant.
	pub fn status(&self) -> TokenStatus {
		self.status_at(OffsetDateTime::now_utc())
	}

	/// Returns `true` if the token can be attached to a request at the provided instant.
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		matches!(self.status_at(instant), TokenStatus::Valid)
	}

	/// Expiry as Unix seconds, the representation used on the wire and by most stores.
	pub fn expires_at_unix(&self) -> i64 {
		self.expires_at.unix_timestamp()
	}
}
impl Debug for StoredToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("StoredToken")
			.field("access_token", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.finish()
	}
}
