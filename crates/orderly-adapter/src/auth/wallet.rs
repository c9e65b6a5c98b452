/*
[INPUT]:  Typed-data payload and wallet private key
[OUTPUT]: Signature string for wallet-signed operations
[POS]:    Auth layer - wallet integration abstraction
[UPDATE]: When adding new wallet types or changing signature format
*/

use async_trait::async_trait;

use crate::auth::typed_data::TypedDataPayload;
use crate::http::Result;
use crate::types::ChainType;

/// Trait for external wallet signing of typed-data payloads.
///
/// Implement this for your wallet type (EVM, Solana, hardware). The trait
/// is async to support hardware wallets and external signers; the returned
/// signature is forwarded to the exchange verbatim.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Get the chain family this wallet signs for
    fn chain_type(&self) -> ChainType;

    /// Get the wallet address
    fn address(&self) -> &str;

    /// Sign a typed-data payload and return the signature
    ///
    /// For EVM: hex-encoded EIP-712 signature (0x...)
    async fn sign_typed_data(&self, payload: &TypedDataPayload) -> Result<String>;
}

/// Mock wallet signer for testing
#[derive(Debug, Clone)]
pub struct MockWalletSigner {
    chain_type: ChainType,
    address: String,
    signature: String,
}

impl MockWalletSigner {
    /// Create a new mock signer with predetermined signature
    pub fn new(chain_type: ChainType, address: &str, signature: &str) -> Self {
        Self {
            chain_type,
            address: address.to_string(),
            signature: signature.to_string(),
        }
    }
}

#[async_trait]
impl WalletSigner for MockWalletSigner {
    fn chain_type(&self) -> ChainType {
        self.chain_type
    }

    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_typed_data(&self, _payload: &TypedDataPayload) -> Result<String> {
        Ok(self.signature.clone())
    }
}
