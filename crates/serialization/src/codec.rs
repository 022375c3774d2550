use serde_json::Value;
use teamcloud_types::Model;

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::CodecError;
use crate::keys::{KeyExtractor, KeyTransformer};
use crate::options::CodecOptions;

/// Converts [`Model`] records to and from JSON using their attribute maps.
///
/// A codec holds no per-type state; the same instance serves every model and
/// can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    options: CodecOptions,
}

impl Codec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encode `record` into its wire object.
    pub fn encode<T: Model>(&self, record: &T) -> Result<Value, CodecError> {
        self.encode_with(record, KeyTransformer::Wire)
    }

    /// Encode `record`, naming each attribute according to `transformer`.
    pub fn encode_with<T: Model>(&self, record: &T, transformer: KeyTransformer) -> Result<Value, CodecError> {
        let raw = serde_json::to_value(record)?;
        Encoder::new(&self.options, transformer).record(T::attribute_map(), &raw, "")
    }

    pub fn encode_to_string<T: Model>(&self, record: &T) -> Result<String, CodecError> {
        Ok(serde_json::to_string(&self.encode(record)?)?)
    }

    /// Decode a wire object into a new record.
    ///
    /// Missing keys and `null` values leave attributes unset; unknown keys
    /// follow [`CodecOptions::unknown_keys`].
    pub fn decode<T: Model>(&self, wire: &Value) -> Result<T, CodecError> {
        self.decode_with(wire, KeyExtractor::Wire)
    }

    /// Decode `data`, resolving its keys through `extractor`.
    pub fn decode_with<T: Model>(&self, data: &Value, extractor: KeyExtractor) -> Result<T, CodecError> {
        let normalized = Decoder::new(&self.options, extractor).record(T::attribute_map(), data, "")?;
        Ok(serde_json::from_value(Value::Object(normalized))?)
    }

    pub fn decode_str<T: Model>(&self, text: &str) -> Result<T, CodecError> {
        let wire: Value = serde_json::from_str(text)?;
        self.decode(&wire)
    }
}

/// Convenience conversions for any [`Model`] using a default [`Codec`].
pub trait ModelExt: Model + Sized {
    /// Wire representation, as sent to the service.
    fn to_wire(&self) -> Result<Value, CodecError> {
        Codec::default().encode(self)
    }

    fn from_wire(wire: &Value) -> Result<Self, CodecError> {
        Codec::default().decode(wire)
    }

    /// Object keyed by attribute names rather than wire keys.
    fn as_dict(&self) -> Result<Value, CodecError> {
        Codec::default().encode_with(self, KeyTransformer::Attribute)
    }

    /// Build a record from attribute-named values, like keyword construction.
    fn from_dict(data: &Value) -> Result<Self, CodecError> {
        Codec::default().decode_with(data, KeyExtractor::Attribute)
    }
}

impl<T: Model> ModelExt for T {}
