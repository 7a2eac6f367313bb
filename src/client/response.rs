//! Response classification shared by the token fetcher and the request dispatcher.

// self
use crate::{
	_prelude::*,
	error::{ApiError, DecodeError},
};

const ERROR_MARKER: &[u8] = b"\"error\"";

/// Returns `true` when the raw body mentions the `"error"` marker anywhere.
pub(crate) fn has_error_marker(body: &[u8]) -> bool {
	body.windows(ERROR_MARKER.len()).any(|window| window == ERROR_MARKER)
}

/// Classifies a raw body as a service error or a candidate success payload.
///
/// Bodies without the `"error"` marker pass through untouched. A marked body is always a
/// failure: it becomes an [`ApiError`] when it decodes as an error object (missing fields stay
/// empty) and a [`DecodeError`] otherwise.
pub(crate) fn check_api_error(body: &[u8]) -> Result<()> {
	if !has_error_marker(body) {
		return Ok(());
	}

	let api_error: ApiError = decode_json(body)?;

	Err(api_error.into())
}

/// Decodes a JSON body, keeping the failing path for diagnostics.
pub(crate) fn decode_json<T>(body: &[u8]) -> Result<T, DecodeError>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	Ok(serde_path_to_error::deserialize(&mut deserializer)?)
}
