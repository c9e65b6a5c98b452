/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod assets;
pub mod client;
pub mod error;
pub mod funding;
pub mod liquidations;
pub mod orders;
pub mod positions;
pub mod registration;
pub mod woofi;

pub use client::{ClientConfig, OrderlyClient};
pub use error::{OrderlyError, Result};
