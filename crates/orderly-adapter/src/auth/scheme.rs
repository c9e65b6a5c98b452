/*
[INPUT]:  Configured protocol revision
[OUTPUT]: Signing scheme selection for the header builder
[POS]:    Auth layer - versioning of the request-signing protocol
[UPDATE]: When the exchange revises its signing contract
*/

/// Request-signing scheme, selected once at configuration time.
///
/// The signing contract was revised across protocol generations; each
/// variant pins one complete combination of message-construction rule, key
/// encoding, and header format. Call sites never branch on ad hoc version
/// flags, only on this enum inside the header builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningScheme {
    /// HMAC-SHA256 over `timestamp ++ METHOD ++ path ++ body`, hex digest,
    /// stored API key sent raw. First-generation scheme; deprecated,
    /// kept for compatibility testing only.
    HmacV1,
    /// Ed25519 over `timestamp ++ METHOD ++ path ++ body` (query omitted),
    /// stored API key sent raw. Second-generation scheme; deprecated.
    Ed25519V2,
    /// Ed25519 over `timestamp ++ METHOD ++ path ++ query ++ body`, public
    /// key derived from the secret and sent as `ed25519:<base58>`. The
    /// live scheme.
    #[default]
    Ed25519V3,
}

impl SigningScheme {
    /// Whether the signed message includes the query string.
    pub fn signs_query(&self) -> bool {
        matches!(self, SigningScheme::Ed25519V3)
    }

    /// Whether the key header carries a derived public key rather than the
    /// stored API key.
    pub fn derives_public_key(&self) -> bool {
        matches!(self, SigningScheme::Ed25519V3)
    }

    pub fn is_deprecated(&self) -> bool {
        !matches!(self, SigningScheme::Ed25519V3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_live_scheme_signs_query_and_derives_key() {
        for scheme in [SigningScheme::HmacV1, SigningScheme::Ed25519V2] {
            assert!(!scheme.signs_query());
            assert!(!scheme.derives_public_key());
            assert!(scheme.is_deprecated());
        }

        let live = SigningScheme::default();
        assert_eq!(live, SigningScheme::Ed25519V3);
        assert!(live.signs_query());
        assert!(live.derives_public_key());
        assert!(!live.is_deprecated());
    }
}
