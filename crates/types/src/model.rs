//! Field metadata shared by every generated record.
//!
//! Each record declares a static table of [`FieldDescriptor`]s describing how
//! its attributes map onto wire keys and which [`ValueType`] each attribute
//! carries. Codecs read these tables through [`Model::attribute_map`] and never
//! need per-type serialization code.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, de::DeserializeOwned};

/// A record whose attributes are described by a static metadata table.
///
/// The `serde` implementations must use the same wire keys as the table; the
/// codec relies on that to hand checked wire objects to the derive.
pub trait Model: Serialize + DeserializeOwned {
    /// Type name as it appears in value-type descriptors (e.g. `AzureResourceGroup`).
    const NAME: &'static str;

    /// The attribute map for this type, built once and shared by all instances.
    fn attribute_map() -> &'static AttributeMap;
}

/// Describes the value carried by a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Plain string (`str`).
    String,
    /// ISO-8601 encoded timestamp (`iso-8601`).
    Iso8601,
    /// Nested record, resolved through its own attribute map.
    Model(ModelRef),
    /// Ordered sequence of the inner type (`[T]`).
    Sequence(&'static ValueType),
    /// Mapping from string keys to the inner type (`{T}`).
    Mapping(&'static ValueType),
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => f.write_str("str"),
            ValueType::Iso8601 => f.write_str("iso-8601"),
            ValueType::Model(model) => f.write_str(model.name),
            ValueType::Sequence(inner) => write!(f, "[{}]", inner),
            ValueType::Mapping(inner) => write!(f, "{{{}}}", inner),
        }
    }
}

/// Type-erased handle to a nested record's metadata.
#[derive(Clone, Copy)]
pub struct ModelRef {
    /// Name of the nested type.
    pub name: &'static str,
    attribute_map: fn() -> &'static AttributeMap,
}

impl ModelRef {
    /// Reference the metadata of `T`.
    pub const fn of<T: Model>() -> Self {
        Self {
            name: T::NAME,
            attribute_map: T::attribute_map,
        }
    }

    /// Attribute map of the referenced type.
    pub fn attribute_map(&self) -> &'static AttributeMap {
        (self.attribute_map)()
    }
}

impl fmt::Debug for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelRef").field(&self.name).finish()
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ModelRef {}

/// Metadata for one attribute of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Attribute name in Rust (e.g. `auth_code`).
    pub name: &'static str,
    /// Key used on the wire (e.g. `authCode`).
    pub key: &'static str,
    /// Declared value type.
    pub value_type: ValueType,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, key: &'static str, value_type: ValueType) -> Self {
        Self { name, key, value_type }
    }
}

/// Indexed view over a record's field descriptors.
///
/// Preserves declaration order for iteration and offers lookups by attribute
/// name, by wire key, and by ASCII case-folded wire key.
#[derive(Debug)]
pub struct AttributeMap {
    model: &'static str,
    fields: &'static [FieldDescriptor],
    by_name: IndexMap<&'static str, usize>,
    by_key: HashMap<&'static str, usize>,
    by_folded_key: HashMap<String, usize>,
}

impl AttributeMap {
    pub fn new(model: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        let mut by_name = IndexMap::with_capacity(fields.len());
        let mut by_key = HashMap::with_capacity(fields.len());
        let mut by_folded_key = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            by_name.insert(field.name, index);
            by_key.insert(field.key, index);
            by_folded_key.insert(field.key.to_ascii_lowercase(), index);
        }
        Self {
            model,
            fields,
            by_name,
            by_key,
            by_folded_key,
        }
    }

    /// Name of the record type this map describes.
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Descriptors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'static, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn by_name(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.by_name.get(name).map(|&index| &self.fields[index])
    }

    pub fn by_key(&self, key: &str) -> Option<&'static FieldDescriptor> {
        self.by_key.get(key).map(|&index| &self.fields[index])
    }

    pub fn by_key_case_insensitive(&self, key: &str) -> Option<&'static FieldDescriptor> {
        self.by_folded_key
            .get(&key.to_ascii_lowercase())
            .map(|&index| &self.fields[index])
    }
}
