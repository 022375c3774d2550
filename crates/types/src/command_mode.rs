use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How the orchestrator delivers commands to a provider.
///
/// The service documents `Simple` and `Extended` but the wire type is a plain
/// string, so anything else is kept verbatim in [`CommandMode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommandMode {
    Simple,
    Extended,
    /// Value outside the documented set, preserved as received.
    Other(String),
}

impl CommandMode {
    /// Returns true for the values the service documents.
    pub fn is_documented(&self) -> bool {
        !matches!(self, CommandMode::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            CommandMode::Simple => "Simple",
            CommandMode::Extended => "Extended",
            CommandMode::Other(value) => value,
        }
    }
}

impl FromStr for CommandMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for CommandMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Simple" => CommandMode::Simple,
            "Extended" => CommandMode::Extended,
            _ => CommandMode::Other(value),
        }
    }
}

impl From<&str> for CommandMode {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl fmt::Display for CommandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CommandMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CommandMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(CommandMode::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_values_map_to_variants() {
        assert_eq!(CommandMode::from("Simple"), CommandMode::Simple);
        assert_eq!(CommandMode::from("Extended"), CommandMode::Extended);
        assert!(CommandMode::Simple.is_documented());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mode: CommandMode = "simple".parse().unwrap();
        assert_eq!(mode, CommandMode::Other("simple".into()));
        assert!(!mode.is_documented());
        assert_eq!(mode.to_string(), "simple");
    }

    #[test]
    fn unknown_values_round_trip() {
        let mode: CommandMode = serde_json::from_str("\"Batched\"").unwrap();
        assert_eq!(mode, CommandMode::Other("Batched".into()));
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"Batched\"");
        assert_eq!(serde_json::to_string(&CommandMode::Extended).unwrap(), "\"Extended\"");
    }
}
