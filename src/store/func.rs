//! Closure-backed [`TokenStore`] for callers that already persist tokens elsewhere.

// self
use crate::{
	_prelude::*,
	auth::StoredToken,
	store::{StoreFuture, TokenStore},
};

type LoadFn = dyn Fn() -> Option<StoredToken> + Send + Sync;
type SaveFn = dyn Fn(StoredToken) + Send + Sync;

/// Adapts a load/store callback pair into a [`TokenStore`].
///
/// `load` runs before every request and `save` runs once per token fetch. Both run on the
/// caller's task, so they should return quickly.
#[derive(Clone)]
pub struct FnStore {
	load: Arc<LoadFn>,
	save: Arc<SaveFn>,
}
impl FnStore {
	/// Wraps the provided callbacks.
	pub fn new<L, S>(load: L, save: S) -> Self
	where
		L: 'static + Fn() -> Option<StoredToken> + Send + Sync,
		S: 'static + Fn(StoredToken) + Send + Sync,
	{
		Self { load: Arc::new(load), save: Arc::new(save) }
	}
}
impl TokenStore for FnStore {
	fn load(&self) -> StoreFuture<'_, Option<StoredToken>> {
		Box::pin(async move { Ok((self.load)()) })
	}

	fn save(&self, token: StoredToken) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			(self.save)(token);

			Ok(())
		})
	}
}
impl Debug for FnStore {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FnStore(..)")
	}
}
