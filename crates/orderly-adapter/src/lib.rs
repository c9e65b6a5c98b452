/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Orderly adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod codec;
pub mod config;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AuthHeaderBuilder,
    Credentials,
    Ed25519Signer,
    MockWalletSigner,
    SigningRequest,
    SigningScheme,
    TypedDataPayload,
    WalletSigner,
};

// Re-export commonly used types from config and http
pub use config::Config;
pub use http::{
    ClientConfig,
    OrderlyClient,
    OrderlyError,
    Result,
};

// Re-export all types
pub use types::*;
