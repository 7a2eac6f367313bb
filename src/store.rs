//! Token state contract and built-in store implementations.
//!
//! The client never writes token state directly: it reads through [`TokenStore::load`] and
//! persists freshly fetched tokens through [`TokenStore::save`]. Implementations are
//! responsible for their own thread safety. Concurrent refreshes are last-write-wins; callers
//! that need single-flight refresh should serialize access inside their store.

pub mod file;
pub mod func;
pub mod memory;

pub use file::FileStore;
pub use func::FnStore;
pub use memory::MemoryStore;

// self
use crate::{_prelude::*, auth::StoredToken};

/// Future returned by [`TokenStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Storage backend contract implemented by token stores.
pub trait TokenStore
where
	Self: Send + Sync,
{
	/// Returns the currently held token pair, if any.
	fn load(&self) -> StoreFuture<'_, Option<StoredToken>>;

	/// Persists or replaces the held token pair.
	fn save(&self, token: StoredToken) -> StoreFuture<'_, ()>;
}

/// Error type produced by [`TokenStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
