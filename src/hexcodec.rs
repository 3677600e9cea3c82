use crate::error::{CatalogIdError, Result};

/// Lowercase hex of `bytes`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Decode a hex string; either case is accepted.
///
/// # Errors
///
/// Returns `MalformedHex` on odd length or a non-hex character.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>> {
    ::hex::decode(input).map_err(|_| CatalogIdError::MalformedHex {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_hex_lowercase() {
        assert_eq!(bytes_to_hex(&[0xab, 0x01, 0xff]), "ab01ff");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("ab01ff").unwrap(), vec![0xab, 0x01, 0xff]);
        assert_eq!(hex_to_bytes("AB01FF").unwrap(), vec![0xab, 0x01, 0xff]);
    }

    #[test]
    fn test_hex_to_bytes_odd_length() {
        assert_eq!(
            hex_to_bytes("abc"),
            Err(CatalogIdError::MalformedHex {
                input: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_hex_to_bytes_non_hex() {
        assert!(hex_to_bytes("zz").is_err());
        assert!(hex_to_bytes("0x12").is_err());
    }
}
