//! Optional observability helpers for token exchanges and API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run every call inside a `playlyfe.call` span carrying the call `kind`,
//!   the HTTP `method`, the `resource` (route or grant), the API `version`, and the service
//!   `error_code` once a call fails with one.
//! - Enable `metrics` to increment the `playlyfe_call_total` counter for every attempt and
//!   terminal outcome, labeled by `kind` + `outcome`. Calls the service rejected with an error
//!   payload are counted as `rejected`, apart from transport and decode failures.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, auth::GrantType, http::Method};

/// Outbound call kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// OAuth token exchange against the token endpoint.
	TokenExchange,
	/// Resource API request.
	ApiRequest,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::TokenExchange => "token_exchange",
			CallKind::ApiRequest => "api_request",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Destination of an outbound call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallTarget<'a> {
	/// Token endpoint exchange for the configured grant.
	Token(GrantType),
	/// Resource route below the versioned API root.
	Route {
		/// Verb issued against the route.
		method: Method,
		/// Route relative to the versioned API root.
		route: &'a str,
	},
}
impl<'a> CallTarget<'a> {
	/// Kind of call this target implies.
	pub const fn kind(&self) -> CallKind {
		match self {
			Self::Token(_) => CallKind::TokenExchange,
			Self::Route { .. } => CallKind::ApiRequest,
		}
	}

	/// Verb sent on the wire; token exchanges are always `POST`.
	pub const fn method(&self) -> Method {
		match self {
			Self::Token(_) => Method::Post,
			Self::Route { method, .. } => *method,
		}
	}

	/// Route for API requests, grant name for token exchanges.
	pub fn resource(&self) -> &'a str {
		match self {
			Self::Token(grant) => grant.as_str(),
			Self::Route { route, .. } => *route,
		}
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client helper.
	Attempt,
	/// Successful completion.
	Success,
	/// The service answered with an `error` payload.
	Rejected,
	/// Transport, decode, store, or local failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Rejected => "rejected",
			CallOutcome::Failure => "failure",
		}
	}

	/// Maps a result onto its terminal outcome.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => CallOutcome::Success,
			Err(Error::Api(_)) => CallOutcome::Rejected,
			Err(_) => CallOutcome::Failure,
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
