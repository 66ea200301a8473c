//! Encoding Utilities

use base64::{Engine, engine::general_purpose};

/// Encode bytes as standard base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode standard base64, ignoring surrounding whitespace
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_known_value() {
        assert_eq!(to_base64(&hex::decode("deadbeef").unwrap()), "3q2+7w==");
        assert_eq!(from_base64(" 3q2+7w==\n").unwrap(), hex::decode("deadbeef").unwrap());
    }

    #[test]
    fn test_invalid_base64() {
        assert!(from_base64("***").is_err());
    }
}
