/*
[INPUT]:  Raw byte slices and base64url strings
[OUTPUT]: Unpadded URL-safe base64 strings / decoded bytes
[POS]:    Codec layer - signature encoding for auth headers
[UPDATE]: When the signature header encoding changes
*/

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::http::{OrderlyError, Result};

/// Encode bytes as unpadded URL-safe base64 (`-`/`_` alphabet, no `=`).
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode an unpadded URL-safe base64 string. Exact inverse of [`encode`].
pub fn decode(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| OrderlyError::InvalidEncoding(format!("invalid base64url: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[])]
    #[case(&[0])]
    #[case(&[251, 255])]
    #[case(&[255; 64])]
    #[case(b"hello world")]
    fn test_round_trip(#[case] bytes: &[u8]) {
        assert_eq!(decode(&encode(bytes)).unwrap(), bytes);
    }

    #[rstest]
    #[case(&[255, 239], "_-8")]
    #[case(b"any carnal pleasure.", "YW55IGNhcm5hbCBwbGVhc3VyZS4")]
    fn test_url_safe_alphabet_no_padding(#[case] bytes: &[u8], #[case] expected: &str) {
        assert_eq!(encode(bytes), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(64)]
    fn test_output_length_and_alphabet(#[case] n: usize) {
        let encoded = encode(&vec![0xAB; n]);
        assert_eq!(encoded.len(), (4 * n).div_ceil(3));
        assert!(!encoded.contains(['+', '/', '=']));
    }
}
