/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod categories;
pub mod client;
pub mod error;

pub use error::{AdminError, Result};

pub use client::{AdminClient, ClientConfig, DEFAULT_BASE_URL};
