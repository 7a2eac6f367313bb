//! Thread-safe in-memory [`TokenStore`], the default when no store is supplied.

// self
use crate::{
	_prelude::*,
	auth::StoredToken,
	store::{StoreFuture, TokenStore},
};

/// Keeps the token pair in-process for the lifetime of the client that owns it.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Arc<RwLock<Option<StoredToken>>>);
impl MemoryStore {
	/// Returns a copy of the held token without going through the async contract.
	pub fn snapshot(&self) -> Option<StoredToken> {
		self.0.read().clone()
	}
}
impl TokenStore for MemoryStore {
	fn load(&self) -> StoreFuture<'_, Option<StoredToken>> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(slot.read().clone()) })
	}

	fn save(&self, token: StoredToken) -> StoreFuture<'_, ()> {
		let slot = self.0.clone();

		Box::pin(async move {
			*slot.write() = Some(token);

			Ok(())
		})
	}
}
