//! Metadata-driven encoding.
//!
//! The record is first serialized through its serde derive; the resulting
//! object is then walked in attribute-map order so every emitted value is
//! checked against its declared type and keyed by the chosen transformer.

use serde_json::{Map, Value};
use teamcloud_types::{AttributeMap, Timestamp, ValueType};
use tracing::warn;

use crate::error::{CodecError, join_index, join_key};
use crate::keys::KeyTransformer;
use crate::options::CodecOptions;

pub(crate) struct Encoder<'a> {
    options: &'a CodecOptions,
    transformer: KeyTransformer,
}

impl<'a> Encoder<'a> {
    pub(crate) fn new(options: &'a CodecOptions, transformer: KeyTransformer) -> Self {
        Self { options, transformer }
    }

    pub(crate) fn record(&self, map: &AttributeMap, value: &Value, path: &str) -> Result<Value, CodecError> {
        let Value::Object(object) = value else {
            return Err(CodecError::mismatch(path, map.model(), value));
        };

        let mut encoded = Map::new();
        for field in map.iter() {
            let output_key = self.transformer.key_for(field).to_string();
            match object.get(field.key) {
                None | Some(Value::Null) => {
                    if self.options.emit_unset {
                        encoded.insert(output_key, Value::Null);
                    }
                }
                Some(item) => {
                    let item = self.value(&field.value_type, item, &join_key(path, field.key))?;
                    encoded.insert(output_key, item);
                }
            }
        }

        for key in object.keys().filter(|key| map.by_key(key).is_none()) {
            warn!(model = map.model(), key = %key, "serialized key has no attribute descriptor; dropping");
        }
        Ok(Value::Object(encoded))
    }

    fn value(&self, value_type: &ValueType, value: &Value, path: &str) -> Result<Value, CodecError> {
        let encoded = match (value_type, value) {
            (ValueType::String, Value::String(_)) => Ok(value.clone()),
            (ValueType::Iso8601, Value::String(text)) => match text.parse::<Timestamp>() {
                Ok(_) => Ok(value.clone()),
                Err(_) => Err(CodecError::malformed_timestamp(path, text)),
            },
            (ValueType::Model(model), _) => self.record(model.attribute_map(), value, path),
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
        };
        if let Err(CodecError::TypeMismatch { path, expected, found }) = &encoded {
            warn!(%path, %expected, %found, "value disagrees with its declared type");
        }
        encoded
    }
}
