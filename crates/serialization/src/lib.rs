//! Generic JSON codec for TeamCloud SDK models.
//!
//! The codec never contains per-type code. It reads the static attribute map
//! every [`teamcloud_types::Model`] publishes, checks values against their
//! declared types, and renames keys between attribute names and wire keys.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use teamcloud_serialization::Codec;
//! use teamcloud_types::Provider;
//!
//! let codec = Codec::default();
//! let provider: Provider = codec.decode(&json!({"id": "p1", "authCode": "abc"})).unwrap();
//! assert_eq!(provider.auth_code.as_deref(), Some("abc"));
//! assert_eq!(codec.encode(&provider).unwrap(), json!({"id": "p1", "authCode": "abc"}));
//! ```

mod codec;
mod decode;
mod encode;
pub mod error;
pub mod keys;
pub mod options;

pub use codec::{Codec, ModelExt};
pub use error::CodecError;
pub use keys::{KeyExtractor, KeyTransformer};
pub use options::{CodecOptions, UnknownKeyPolicy};
