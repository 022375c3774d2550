use serde_json::Value;
use thiserror::Error;

/// Error surfaced while encoding or decoding a model.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A value does not match the type declared in the attribute map.
    #[error("type mismatch at '{path}': expected {expected}, found {found}")]
    TypeMismatch { path: String, expected: String, found: String },
    /// A key has no descriptor and the codec is configured to reject such keys.
    #[error("unknown field '{path}'")]
    UnknownField { path: String },
    /// Malformed JSON text, or the record's serde implementation refused a checked value.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    /// Location of the offending value, when the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            CodecError::TypeMismatch { path, .. } | CodecError::UnknownField { path } => Some(path),
            CodecError::Json(_) => None,
        }
    }

    pub(crate) fn mismatch(path: &str, expected: impl ToString, found: &Value) -> Self {
        CodecError::TypeMismatch {
            path: display_path(path),
            expected: expected.to_string(),
            found: describe(found).to_string(),
        }
    }

    pub(crate) fn malformed_timestamp(path: &str, text: &str) -> Self {
        CodecError::TypeMismatch {
            path: display_path(path),
            expected: "iso-8601".to_string(),
            found: format!("string '{}'", text),
        }
    }
}

/// JSON kind name used in error messages.
pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn join_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

pub(crate) fn join_index(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

fn display_path(path: &str) -> String {
    if path.is_empty() { "<root>".to_string() } else { path.to_string() }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn paths_join_keys_and_indices() {
        let nested = join_key(&join_key("", "resourceGroup"), "region");
        assert_eq!(nested, "resourceGroup.region");
        assert_eq!(join_index("events", 2), "events[2]");
    }

    #[test]
    fn mismatch_reports_kind_and_location() {
        let error = CodecError::mismatch("events[1]", "str", &json!(7));
        assert_eq!(error.path(), Some("events[1]"));
        assert_eq!(error.to_string(), "type mismatch at 'events[1]': expected str, found number");

        let root = CodecError::mismatch("", "Provider", &json!([]));
        assert_eq!(root.path(), Some("<root>"));
    }
}
