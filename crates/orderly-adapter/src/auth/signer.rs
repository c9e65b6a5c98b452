/*
[INPUT]:  Message bytes and raw ed25519 secret key material
[OUTPUT]: Ed25519 signatures and derived public keys
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or key format
*/

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};
use rand::rngs::OsRng;

use crate::codec::base58;
use crate::http::{OrderlyError, Result};

/// Ed25519 signer for request authentication.
///
/// Thin marshalling layer over `ed25519-dalek`; no curve arithmetic here.
#[derive(Debug)]
pub struct Ed25519Signer {
    signing_key: SigningKey,
}

impl Ed25519Signer {
    /// Generate a new random keypair
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Create signer from a raw secret scalar.
    ///
    /// Rejects anything that is not exactly 32 bytes.
    pub fn from_secret_key(bytes: &[u8]) -> Result<Self> {
        let scalar: [u8; 32] = bytes.try_into().map_err(|_| {
            OrderlyError::InvalidKeyMaterial(format!(
                "expected 32-byte ed25519 secret key, got {} bytes",
                bytes.len()
            ))
        })?;
        Ok(Self {
            signing_key: SigningKey::from_bytes(&scalar),
        })
    }

    /// Create signer from a base58-encoded secret key.
    pub fn from_base58(secret_key: &str) -> Result<Self> {
        Self::from_secret_key(&base58::decode(secret_key)?)
    }

    /// Sign a message and return the 64-byte signature
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Get the derived public key in base58 encoding
    pub fn public_key_base58(&self) -> String {
        base58::encode(self.signing_key.verifying_key().as_bytes())
    }

    /// Get the raw derived public key bytes
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Verify a signature against a message
    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> bool {
        self.signing_key
            .verifying_key()
            .verify(message, &Signature::from_bytes(signature))
            .is_ok()
    }
}
