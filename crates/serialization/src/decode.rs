//! Metadata-driven decoding.
//!
//! Input objects are walked against a record's attribute map: keys are
//! resolved through the configured [`KeyExtractor`], values are checked
//! against their declared [`ValueType`], and the accepted values are re-keyed
//! to wire keys so the record's serde derive can build the typed value.

use serde_json::{Map, Value};
use teamcloud_types::{AttributeMap, Timestamp, ValueType};
use tracing::debug;

use crate::error::{CodecError, join_index, join_key};
use crate::keys::KeyExtractor;
use crate::options::{CodecOptions, UnknownKeyPolicy};

pub(crate) struct Decoder<'a> {
    options: &'a CodecOptions,
    extractor: KeyExtractor,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(options: &'a CodecOptions, extractor: KeyExtractor) -> Self {
        Self { options, extractor }
    }

    /// Check `value` against `map`, returning a wire-keyed object holding only recognized, set attributes.
    pub(crate) fn record(&self, map: &AttributeMap, value: &Value, path: &str) -> Result<Map<String, Value>, CodecError> {
        let Value::Object(object) = value else {
            return Err(CodecError::mismatch(path, map.model(), value));
        };

        let mut normalized = Map::new();
        for (key, item) in object {
            let item_path = join_key(path, key);
            let Some(field) = self.extractor.resolve(map, key) else {
                match self.options.unknown_keys {
                    UnknownKeyPolicy::Ignore => {
                        debug!(model = map.model(), key = %item_path, "ignoring unknown key");
                        continue;
                    }
                    UnknownKeyPolicy::Reject => return Err(CodecError::UnknownField { path: item_path }),
                }
            };
            if item.is_null() {
                continue;
            }
            let checked = self.value(&field.value_type, item, &item_path)?;
            normalized.insert(field.key.to_string(), checked);
        }
        Ok(normalized)
    }

    fn value(&self, value_type: &ValueType, value: &Value, path: &str) -> Result<Value, CodecError> {
        match (value_type, value) {
            (ValueType::String, Value::String(_)) => Ok(value.clone()),
            (ValueType::Iso8601, Value::String(text)) => {
                text.parse::<Timestamp>()
                    .map_err(|_| CodecError::malformed_timestamp(path, text))?;
                Ok(value.clone())
            }
            (ValueType::Model(model), _) => {
                debug!(model = model.name, path, "decoding nested model");
                self.record(model.attribute_map(), value, path).map(Value::Object)
            }
            (ValueType::Sequence(inner), Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| self.value(inner, item, &join_index(path, index)))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            (ValueType::Mapping(inner), Value::Object(entries)) => entries
                .iter()
                .map(|(key, item)| Ok((key.clone(), self.value(inner, item, &join_key(path, key))?)))
                .collect::<Result<Map<_, _>, CodecError>>()
                .map(Value::Object),
            _ => Err(CodecError::mismatch(path, value_type, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use teamcloud_types::{Model, Provider};

    use super::*;

    fn decode(value: Value) -> Result<Map<String, Value>, CodecError> {
        let options = CodecOptions::default();
        Decoder::new(&options, KeyExtractor::Wire).record(Provider::attribute_map(), &value, "")
    }

    #[test]
    fn drops_unknown_and_null_keys() {
        let normalized = decode(json!({"id": "p1", "flavor": "vanilla", "url": null})).unwrap();
        assert_eq!(Value::Object(normalized), json!({"id": "p1"}));
    }

    #[test]
    fn rejects_non_object_root() {
        let error = decode(json!(["p1"])).unwrap_err();
        assert!(matches!(
            &error,
            CodecError::TypeMismatch { expected, found, .. } if expected == "Provider" && found == "array"
        ));
    }

    #[test]
    fn reports_nested_paths() {
        let error = decode(json!({"resourceGroup": {"region": 5}})).unwrap_err();
        assert_eq!(error.path(), Some("resourceGroup.region"));

        let error = decode(json!({"events": ["created", false]})).unwrap_err();
        assert_eq!(error.path(), Some("events[1]"));

        let error = decode(json!({"properties": {"tier": ["gold"]}})).unwrap_err();
        assert_eq!(error.path(), Some("properties.tier"));
    }

    #[test]
    fn null_items_inside_collections_are_mismatches() {
        let error = decode(json!({"events": [null]})).unwrap_err();
        assert!(matches!(error, CodecError::TypeMismatch { ref found, .. } if found == "null"));
    }

    #[test]
    fn malformed_timestamp_is_a_mismatch() {
        let error = decode(json!({"registered": "last tuesday"})).unwrap_err();
        assert!(matches!(
            &error,
            CodecError::TypeMismatch { expected, .. } if expected == "iso-8601"
        ));
        assert_eq!(error.path(), Some("registered"));
    }

    #[test]
    fn reject_policy_fails_on_unknown_key() {
        let options = CodecOptions {
            unknown_keys: UnknownKeyPolicy::Reject,
            ..Default::default()
        };
        let decoder = Decoder::new(&options, KeyExtractor::Wire);
        let error = decoder
            .record(Provider::attribute_map(), &json!({"resourceGroup": {"zone": "1"}}), "")
            .unwrap_err();
        assert!(matches!(error, CodecError::UnknownField { ref path } if path == "resourceGroup.zone"));
    }
}
