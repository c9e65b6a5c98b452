/*
[INPUT]:  Base58 strings and raw byte slices
[OUTPUT]: Decoded key bytes / base58-encoded strings
[POS]:    Codec layer - binary-to-text encoding for key material
[UPDATE]: When changing the base58 backend or error mapping
*/

use crate::http::{OrderlyError, Result};

/// Decode a base58 string into raw bytes.
///
/// Every character is validated against the 58-character alphabet; each
/// leading `'1'` becomes exactly one leading zero byte. Delegates the
/// big-integer arithmetic to the vetted `bs58` crate.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    bs58::decode(input)
        .into_vec()
        .map_err(|e| OrderlyError::InvalidEncoding(format!("invalid base58: {e}")))
}

/// Encode raw bytes as a base58 string.
///
/// Inverse of [`decode`]; leading zero bytes map back to leading `'1'`s.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[])]
    #[case(&[0])]
    #[case(&[0, 0, 0])]
    #[case(&[0, 0, 1, 2])]
    #[case(&[255; 32])]
    #[case(&[1, 2, 3, 4, 5])]
    fn test_round_trip(#[case] bytes: &[u8]) {
        assert_eq!(decode(&encode(bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_leading_zero_bytes_become_ones() {
        assert_eq!(encode(&[0, 0, 1, 2]), "11".to_string() + &encode(&[1, 2]));
        assert_eq!(decode("11").unwrap(), vec![0, 0]);
    }

    #[rstest]
    #[case("0")]
    #[case("O")]
    #[case("I")]
    #[case("l")]
    #[case("abc!def")]
    fn test_rejects_characters_outside_alphabet(#[case] input: &str) {
        let err = decode(input).unwrap_err();
        assert!(matches!(err, OrderlyError::InvalidEncoding(_)));
    }

    #[test]
    fn test_known_secret_key_decodes_to_32_bytes() {
        let bytes = decode("5Hd7DLap5XV5qP3tkTYKwrbkiB1mzc2v9gk5U1K52FDq").unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(
            hex::encode(&bytes),
            "3fb0ddfa0b78882750666a4ba7d5ef0a2ff746184bbb1c4729ac4ae1ef019808"
        );
    }
}
