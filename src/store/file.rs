//! File-backed [`TokenStore`] so cached tokens survive process restarts.

// std
use std::{
	fs::{self, File},
	io::{Error as IoError, ErrorKind, Write},
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	auth::StoredToken,
	store::{StoreError, StoreFuture, TokenStore},
};

/// Persists the token pair to a JSON file after each save.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	inner: Arc<RwLock<Option<StoredToken>>>,
}
impl FileStore {
	/// Opens (or creates) a store at the provided path, eagerly loading existing data.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();

		Self::ensure_parent_exists(&path)?;

		let snapshot = Self::load_snapshot(&path)?;

		Ok(Self { path, inner: Arc::new(RwLock::new(snapshot)) })
	}

	/// Path of the backing file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn load_snapshot(path: &Path) -> Result<Option<StoredToken>, StoreError> {
		let bytes = match fs::read(path) {
			Ok(bytes) => bytes,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
			Err(e) => return Err(io_failure("read", path, e)),
		};

		if bytes.is_empty() {
			return Ok(None);
		}

		serde_json::from_slice(&bytes).map(Some).map_err(|e| StoreError::Serialization {
			message: format!("Token snapshot {} is not valid JSON: {e}", path.display()),
		})
	}

	fn ensure_parent_exists(path: &Path) -> Result<(), StoreError> {
		match path.parent().filter(|p| !p.as_os_str().is_empty()) {
			Some(parent) => fs::create_dir_all(parent).map_err(|e| io_failure("create", parent, e)),
			None => Ok(()),
		}
	}

	// Write the sibling `.tmp` file fully, then rename it over the snapshot.
	fn persist(&self, token: &StoredToken) -> Result<(), StoreError> {
		Self::ensure_parent_exists(&self.path)?;

		let snapshot = serde_json::to_vec_pretty(token).map_err(|e| StoreError::Serialization {
			message: format!("Token snapshot could not be encoded: {e}"),
		})?;
		let tmp_path = self.path.with_extension("tmp");
		let mut file = File::create(&tmp_path).map_err(|e| io_failure("create", &tmp_path, e))?;

		file.write_all(&snapshot).map_err(|e| io_failure("write", &tmp_path, e))?;
		file.sync_all().map_err(|e| io_failure("sync", &tmp_path, e))?;
		drop(file);

		fs::rename(&tmp_path, &self.path).map_err(|e| io_failure("replace", &self.path, e))
	}
}
impl TokenStore for FileStore {
	fn load(&self) -> StoreFuture<'_, Option<StoredToken>> {
		Box::pin(async move { Ok(self.inner.read().clone()) })
	}

	fn save(&self, token: StoredToken) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			self.persist(&token)?;
			*guard = Some(token);

			Ok(())
		})
	}
}

fn io_failure(action: &str, path: &Path, e: IoError) -> StoreError {
	StoreError::Backend { message: format!("Failed to {action} {}: {e}", path.display()) }
}

#[cfg(test)]
mod tests {
	// std
	use std::{env, process};
	// crates.io
	use tokio::runtime::Runtime;
	// self
	use super::*;

	fn temp_path(tag: &str) -> PathBuf {
		let unique = format!(
			"playlyfe_file_store_{tag}_{}_{}.json",
			process::id(),
			OffsetDateTime::now_utc().unix_timestamp_nanos(),
		);

		env::temp_dir().join(unique)
	}

	#[test]
	fn save_and_reload_round_trip() {
		let path = temp_path("reload");
		let store = FileStore::open(&path).expect("Failed to open file store.");

		assert_eq!(store.path(), path.as_path());

		let token = StoredToken::new("access-token", OffsetDateTime::now_utc() + Duration::hours(1));
		let rt = Runtime::new().expect("Failed to build Tokio runtime for file store test.");

		rt.block_on(store.save(token.clone())).expect("Failed to save token to file store.");
		drop(store);

		let reopened = FileStore::open(&path).expect("Failed to reopen file store.");
		let fetched = rt
			.block_on(reopened.load())
			.expect("Failed to load token from file store.")
			.expect("File store lost token after reopen.");

		assert_eq!(fetched.access_token.expose(), "access-token");
		assert_eq!(fetched.expires_at_unix(), token.expires_at_unix());

		fs::remove_file(&path).unwrap_or_else(|e| {
			panic!("Failed to remove temporary file store snapshot {}: {e}", path.display())
		});
	}

	#[test]
	fn corrupt_snapshot_is_reported() {
		let path = temp_path("corrupt");

		fs::write(&path, b"not json").expect("Failed to seed corrupt snapshot.");

		let err = FileStore::open(&path).expect_err("Corrupt snapshot should be rejected.");

		assert!(matches!(err, StoreError::Serialization { .. }));

		fs::remove_file(&path).unwrap_or_else(|e| {
			panic!("Failed to remove temporary file store snapshot {}: {e}", path.display())
		});
	}
}
