//! Request extractors shared by the API handlers.
//!
//! [`UuidPath`] parses `/{id}` segments into a [`uuid::Uuid`] and rejects
//! malformed ids with an enveloped 400. [`ValidatedJson`] deserializes a JSON
//! body and runs its `validator` rules before the handler sees it.

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
