//! Client-level error types shared across the token gateway, dispatcher, stores, and minter.
//!
//! Callers that implement their own retry policy should branch on the variant: [`Error::Api`]
//! carries the service's verdict, while [`Error::Transport`] and [`Error::Decode`] describe
//! failures that never produced a usable answer.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Machine-readable code attached to locally synthesized decode failures.
pub const INVALID_BODY_CODE: &str = "invalid_body";
/// Human-readable description attached to locally synthesized decode failures.
pub const INVALID_BODY_DESCRIPTION: &str = "The Response Body could not be unmarshalled";

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Token store failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration or request construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The service answered with an `error` payload.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// A response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Runtime assertion signing failed.
	#[error(transparent)]
	Signing(#[from] SigningError),
}
impl Error {
	/// Returns the machine-readable error code for service and decode failures.
	pub fn code(&self) -> Option<&str> {
		match self {
			Self::Api(e) => Some(e.name.as_str()),
			Self::Decode(_) => Some(INVALID_BODY_CODE),
			_ => None,
		}
	}

	/// Returns the service error, if the failure originated from an `error` payload.
	pub fn as_api(&self) -> Option<&ApiError> {
		match self {
			Self::Api(e) => Some(e),
			_ => None,
		}
	}
}

/// Error payload returned by the Playlyfe API and token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("{name}: {description}")]
pub struct ApiError {
	/// Machine-readable error code (for example `client_auth_fail`).
	#[serde(rename = "error", default)]
	pub name: String,
	/// Human-readable explanation supplied by the service.
	#[serde(rename = "error_description", default)]
	pub description: String,
}
impl ApiError {
	/// Creates an error from its code and description.
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self { name: name.into(), description: description.into() }
	}
}

/// Response body that could not be decoded into the expected shape.
#[derive(Debug, ThisError)]
#[error("{INVALID_BODY_CODE}: {INVALID_BODY_DESCRIPTION}.")]
pub struct DecodeError {
	/// JSON path at which decoding stopped (`.` when the failure is at the root).
	pub path: String,
	/// Underlying parsing failure.
	#[source]
	pub source: serde_json::Error,
}
impl DecodeError {
	/// Machine-readable code shared by every decode failure.
	pub fn code(&self) -> &'static str {
		INVALID_BODY_CODE
	}

	/// Fixed human-readable description shared by every decode failure.
	pub fn description(&self) -> &'static str {
		INVALID_BODY_DESCRIPTION
	}
}
impl From<serde_json::Error> for DecodeError {
	fn from(source: serde_json::Error) -> Self {
		Self { path: ".".into(), source }
	}
}
impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self { path, source: e.into_inner() }
	}
}

/// Runtime assertion failures raised by [`mint_jwt`](crate::auth::mint_jwt).
#[derive(Debug, ThisError)]
pub enum SigningError {
	/// The expiry instant falls outside the representable date range.
	#[error("Runtime assertion lifetime {ttl} is out of range.")]
	ExpiryOutOfRange {
		/// Requested lifetime.
		ttl: Duration,
	},
	/// The signer rejected the claims or key.
	#[error("Runtime assertion could not be signed.")]
	Encode(#[from] jsonwebtoken::errors::Error),
}

/// Configuration and request construction failures raised locally.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A configured endpoint cannot be parsed.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The resource URL built from the route cannot be parsed.
	#[error("Route `{route}` does not form a valid URL.")]
	InvalidRoute {
		/// Route supplied by the caller.
		route: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Client identifier is empty.
	#[error("Client identifier is required.")]
	MissingClientId,
	/// API version tag is empty or not a single path segment.
	#[error("API version `{version}` is invalid.")]
	InvalidVersion {
		/// Rejected version tag.
		version: String,
	},
	/// Authorization-code clients need a redirect URI.
	#[error("The authorization_code grant requires a redirect URI.")]
	MissingRedirectUri,
	/// Request body cannot be serialized to JSON.
	#[error("Request body could not be serialized.")]
	RequestBody(#[source] serde_json::Error),
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {endpoint}.")]
	Network {
		/// Endpoint label (`token` or `api`).
		endpoint: &'static str,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(endpoint: &'static str, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { endpoint, source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn decode_error_reports_fixed_code_and_path() {
		let result: std::result::Result<Vec<u32>, _> = serde_path_to_error::deserialize(
			&mut serde_json::Deserializer::from_str("[1, \"two\"]"),
		);
		let err = result.expect_err("A string element should not decode as u32.");
		let decode = DecodeError::from(err);

		assert_eq!(decode.path, "[1]");
		assert_eq!(decode.code(), "invalid_body");
		assert_eq!(
			decode.to_string(),
			"invalid_body: The Response Body could not be unmarshalled."
		);

		let error = Error::from(decode);

		assert_eq!(error.code(), Some("invalid_body"));
		assert!(error.as_api().is_none());
	}

	#[test]
	fn api_error_displays_code_and_description() {
		let error = Error::from(ApiError::new("client_auth_fail", "Client authentication failed"));

		assert_eq!(error.to_string(), "client_auth_fail: Client authentication failed");
		assert_eq!(error.code(), Some("client_auth_fail"));
	}

	#[test]
	fn api_error_tolerates_missing_description() {
		let error: ApiError = serde_json::from_str("{\"error\":\"route_not_found\"}")
			.expect("Error payload without description should decode.");

		assert_eq!(error, ApiError::new("route_not_found", ""));
	}
}
