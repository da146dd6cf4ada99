//! Base64 handling for byte fields.
//!
//! Typed structs hold raw `Vec<u8>`; their serde form is a standard base64
//! string. Decoding is lenient about padding and about the `base64:` marker
//! that key material carries in backup documents.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// Marker placed in front of key material in backup documents.
pub const BASE64_PREFIX: &str = "base64:";

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as padded standard base64.
pub fn encode(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Decode standard base64, with or without padding and with or without the
/// `base64:` marker.
pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    LENIENT.decode(strip_prefix(text.trim()))
}

/// Drop the `base64:` marker if present.
pub fn strip_prefix(text: &str) -> &str {
    text.strip_prefix(BASE64_PREFIX).unwrap_or(text)
}

/// `#[serde(with = "...")]` adapter for `Option<Vec<u8>>`.
pub mod opt_base64 {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_str(&super::encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let text: Option<String> = Option::deserialize(deserializer)?;
        text.map(|t| super::decode(&t).map_err(D::Error::custom))
            .transpose()
    }
}

/// `#[serde(with = "...")]` adapter for repeated byte fields.
pub mod opt_base64_list {
    use serde::{de::Error, ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Vec<Vec<u8>>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for bytes in items {
                    seq.serialize_element(&super::encode(bytes))?;
                }
                seq.end()
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<Vec<u8>>>, D::Error> {
        let items: Option<Vec<String>> = Option::deserialize(deserializer)?;
        items
            .map(|list| {
                list.iter()
                    .map(|t| super::decode(t).map_err(D::Error::custom))
                    .collect()
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_accepts_prefix_and_missing_padding() {
        assert_eq!(decode("AQID").unwrap(), vec![1, 2, 3]);
        assert_eq!(decode("base64:AQID").unwrap(), vec![1, 2, 3]);
        assert_eq!(decode("AQ==").unwrap(), vec![1]);
        assert_eq!(decode("AQ").unwrap(), vec![1]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("not base64!").is_err());
    }
}
