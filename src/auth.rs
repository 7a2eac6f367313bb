//! Auth-domain models: grant types, cached token state, and runtime JWT assertions.

pub mod grant;
pub mod jwt;
pub mod token;

pub use grant::*;
pub use jwt::*;
pub use token::{record::*, secret::*};
