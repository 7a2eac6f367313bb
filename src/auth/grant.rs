//! Grant types the token endpoint accepts.

// self
use crate::_prelude::*;

/// OAuth 2.0 grant types accepted by the Playlyfe token endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Client Credentials grant for app-only tokens.
	#[default]
	ClientCredentials,
	/// Authorization Code grant; the code must be recorded before the first request.
	AuthorizationCode,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::ClientCredentials => "client_credentials",
			GrantType::AuthorizationCode => "authorization_code",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
