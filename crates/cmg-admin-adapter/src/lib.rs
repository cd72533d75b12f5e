/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public admin adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{AuthManager, Session, SessionFile, SessionStore, TokenClaims};

// Re-export commonly used types from http
pub use http::{AdminClient, AdminError, ClientConfig, Result};

// Re-export all types
pub use types::*;
