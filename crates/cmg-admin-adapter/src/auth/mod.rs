/*
[INPUT]:  Operator credentials and token responses
[OUTPUT]: Persisted sessions, decoded claims, and auth errors
[POS]:    Auth layer - handles admin API authentication
[UPDATE]: When auth flow or session storage changes
*/

pub mod claims;
pub mod manager;
pub mod session;
pub mod validation;

pub use claims::TokenClaims;
pub use manager::AuthManager;
pub use session::{Session, SessionFile, SessionStore};
pub use validation::{MIN_LOGIN_PASSWORD_LEN, check_email, check_password_complexity};
