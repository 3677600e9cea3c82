#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogIdError {
    #[error("invalid base62 symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("decoded value does not fit in {length} bytes")]
    Overflow { length: usize },

    #[error("malformed hex string: {input}")]
    MalformedHex { input: String },

    #[error("not a {kind} locator: {locator}")]
    NotAMatch { kind: String, locator: String },

    #[error("unknown locator: {locator}")]
    UnknownLocator { locator: String },

    #[error("{operation} is not applicable to an unsupported locator")]
    NotApplicable { operation: &'static str },

    #[error("{kind} identifiers do not support {operation}")]
    UnsupportedOperation {
        kind: String,
        operation: &'static str,
    },
}

impl CatalogIdError {
    /// Returns true for failures raised by the base62 or hex codecs.
    pub const fn is_codec_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSymbol { .. } | Self::Overflow { .. } | Self::MalformedHex { .. }
        )
    }

    /// Returns true for failures raised while matching or classifying locators.
    pub const fn is_locator_error(&self) -> bool {
        matches!(self, Self::NotAMatch { .. } | Self::UnknownLocator { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogIdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_symbol_display() {
        let error = CatalogIdError::InvalidSymbol {
            symbol: '!',
            position: 3,
        };
        assert_eq!(error.to_string(), "invalid base62 symbol '!' at position 3");
    }

    #[test]
    fn test_overflow_display() {
        let error = CatalogIdError::Overflow { length: 16 };
        assert_eq!(error.to_string(), "decoded value does not fit in 16 bytes");
    }

    #[test]
    fn test_malformed_hex_display() {
        let error = CatalogIdError::MalformedHex {
            input: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "malformed hex string: abc");
    }

    #[test]
    fn test_not_a_match_display() {
        let error = CatalogIdError::NotAMatch {
            kind: "track".to_string(),
            locator: "spotify:album:xyz".to_string(),
        };
        assert_eq!(error.to_string(), "not a track locator: spotify:album:xyz");
    }

    #[test]
    fn test_unknown_locator_display() {
        let error = CatalogIdError::UnknownLocator {
            locator: "spotify:foo:bar".to_string(),
        };
        assert_eq!(error.to_string(), "unknown locator: spotify:foo:bar");
    }

    #[test]
    fn test_not_applicable_display() {
        let error = CatalogIdError::NotApplicable { operation: "hex" };
        assert_eq!(
            error.to_string(),
            "hex is not applicable to an unsupported locator"
        );
    }

    #[test]
    fn test_unsupported_operation_display() {
        let error = CatalogIdError::UnsupportedOperation {
            kind: "playlist".to_string(),
            operation: "mercury locator",
        };
        assert_eq!(
            error.to_string(),
            "playlist identifiers do not support mercury locator"
        );
    }

    #[test]
    fn test_error_categories() {
        assert!(CatalogIdError::Overflow { length: 16 }.is_codec_error());
        assert!(!CatalogIdError::Overflow { length: 16 }.is_locator_error());
        let unknown = CatalogIdError::UnknownLocator {
            locator: "x".to_string(),
        };
        assert!(unknown.is_locator_error());
        assert!(!unknown.is_codec_error());
        assert!(!CatalogIdError::NotApplicable { operation: "gid" }.is_codec_error());
    }

    #[test]
    fn test_error_clone_equality() {
        let error1 = CatalogIdError::MalformedHex {
            input: "zz".to_string(),
        };
        let error2 = error1.clone();
        assert_eq!(error1, error2);
    }

    #[test]
    fn test_result_type_err() {
        let error = CatalogIdError::Overflow { length: 1 };
        let result: Result<i32> = Err(error.clone());
        assert_eq!(result, Err(error));
    }
}
