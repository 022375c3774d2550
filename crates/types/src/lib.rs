//! Model definitions for the TeamCloud client SDK.
//!
//! Records are plain structs with one `Option` per attribute. Each record also
//! implements [`Model`], publishing a static table that maps attribute names
//! to wire keys and value types so a generic codec can encode and decode it.

pub mod azure_resource_group;
pub mod command_mode;
pub mod model;
pub mod provider;
pub mod timestamp;

pub use azure_resource_group::AzureResourceGroup;
pub use command_mode::CommandMode;
pub use model::{AttributeMap, FieldDescriptor, Model, ModelRef, ValueType};
pub use provider::Provider;
pub use timestamp::{Timestamp, TimestampParseError};
