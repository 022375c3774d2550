use teamcloud_types::{AttributeMap, FieldDescriptor};

/// Chooses the output key for each attribute when encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyTransformer {
    /// Wire keys as the service expects them (`authCode`).
    #[default]
    Wire,
    /// Attribute names (`auth_code`).
    Attribute,
}

impl KeyTransformer {
    pub fn key_for(&self, field: &FieldDescriptor) -> &'static str {
        match self {
            KeyTransformer::Wire => field.key,
            KeyTransformer::Attribute => field.name,
        }
    }
}

/// Resolves input keys to attributes when decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyExtractor {
    /// Exact wire keys.
    #[default]
    Wire,
    /// Wire keys compared without regard to ASCII case.
    WireCaseInsensitive,
    /// Attribute names, for building records from named values.
    Attribute,
}

impl KeyExtractor {
    pub fn resolve(&self, map: &AttributeMap, key: &str) -> Option<&'static FieldDescriptor> {
        match self {
            KeyExtractor::Wire => map.by_key(key),
            KeyExtractor::WireCaseInsensitive => map.by_key(key).or_else(|| map.by_key_case_insensitive(key)),
            KeyExtractor::Attribute => map.by_name(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use teamcloud_types::{Model, Provider};

    use super::*;

    #[test]
    fn transformers_pick_key_or_name() {
        let field = Provider::attribute_map().by_name("principal_id").unwrap();
        assert_eq!(KeyTransformer::Wire.key_for(field), "principalId");
        assert_eq!(KeyTransformer::Attribute.key_for(field), "principal_id");
    }

    #[test]
    fn extractors_resolve_their_own_key_style() {
        let map = Provider::attribute_map();
        assert!(KeyExtractor::Wire.resolve(map, "authCode").is_some());
        assert!(KeyExtractor::Wire.resolve(map, "authcode").is_none());
        assert!(KeyExtractor::Wire.resolve(map, "auth_code").is_none());
        assert_eq!(
            KeyExtractor::WireCaseInsensitive.resolve(map, "AuthCode").map(|f| f.name),
            Some("auth_code")
        );
        assert_eq!(KeyExtractor::Attribute.resolve(map, "auth_code").map(|f| f.key), Some("authCode"));
        assert!(KeyExtractor::Attribute.resolve(map, "authCode").is_none());
    }
}
