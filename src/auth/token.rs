//! Cached access token state and the redacting secret wrapper it carries.

pub mod record;
pub mod secret;
