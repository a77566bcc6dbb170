//! Typed records for Wistia API payloads.
//!
//! Every builder takes a decoded JSON object and returns `Some(record)` when
//! the required fields are there with the right types, `None` otherwise.
//! Optional fields that are missing or mistyped fall back to their defaults,
//! and malformed entries in nested lists are skipped. Nothing here does I/O.

pub mod account;
pub mod asset;
pub mod coerce;
pub mod color;
pub mod embed;
pub mod error;
pub mod media;
pub mod payload;
pub mod project;
pub mod resource;
pub mod status;
pub mod timestamp;
pub mod value;

/// A decoded JSON object, as handed over by the transport layer.
pub type Payload = serde_json::Map<String, serde_json::Value>;

pub use account::Account;
pub use asset::Asset;
pub use color::PlayerColor;
pub use embed::EmbedOptions;
pub use error::{DecodeError, RecordKind};
pub use media::{Media, MediaRef, Thumbnail};
pub use payload::Record;
pub use project::Project;
pub use resource::{Creatable, Listable, Showable};
pub use status::ObjectStatus;
