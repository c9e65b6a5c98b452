/*
[INPUT]:  Credentials and outgoing request descriptors
[OUTPUT]: Signed auth headers and wallet-signable typed-data payloads
[POS]:    Auth layer - request signing for the exchange API
[UPDATE]: When the signing contract or wallet-signed flows change
*/

pub mod canonical;
pub mod credentials;
pub mod headers;
pub mod scheme;
pub mod signer;
pub mod typed_data;
pub mod wallet;

pub use canonical::{SigningRequest, canonical_json, canonical_message, legacy_message};
pub use credentials::Credentials;
pub use headers::AuthHeaderBuilder;
pub use scheme::SigningScheme;
pub use signer::Ed25519Signer;
pub use typed_data::{
    TypeDefinitions, TypedDataDomain, TypedDataPayload, TypedField,
    insurance_fund_claim_payload, liquidation_claim_payload, settlement_payload,
    verifying_contract,
};
pub use wallet::{MockWalletSigner, WalletSigner};
