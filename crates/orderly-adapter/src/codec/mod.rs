/*
[INPUT]:  Raw bytes and text encodings
[OUTPUT]: Base58 and base64url codec functions
[POS]:    Codec layer - binary-to-text encodings used by request signing
[UPDATE]: When adding new encodings
*/

pub mod base58;
pub mod base64url;
