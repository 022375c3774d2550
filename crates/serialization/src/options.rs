//! Codec configuration.
//!
//! [`CodecOptions`] deserializes from camelCase keys with every setting
//! optional, so hosts can nest it inside their own configuration documents.

use serde::{Deserialize, Serialize};

/// What to do with input keys that match no attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKeyPolicy {
    /// Drop the key and continue.
    #[default]
    Ignore,
    /// Fail with [`crate::CodecError::UnknownField`].
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecOptions {
    /// Policy applied to unrecognized keys while decoding.
    pub unknown_keys: UnknownKeyPolicy,
    /// Emit unset attributes as explicit `null` instead of omitting them.
    pub emit_unset: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_forward_compatible() {
        let options = CodecOptions::default();
        assert_eq!(options.unknown_keys, UnknownKeyPolicy::Ignore);
        assert!(!options.emit_unset);
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let options: CodecOptions = serde_json::from_str(r#"{"unknownKeys": "reject"}"#).expect("deserialize options");
        assert_eq!(options.unknown_keys, UnknownKeyPolicy::Reject);
        assert!(!options.emit_unset);

        let empty: CodecOptions = serde_json::from_str("{}").expect("deserialize empty options");
        assert_eq!(empty, CodecOptions::default());
    }
}
