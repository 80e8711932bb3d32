//! The playable item itself.
//!
//! `model` holds [`AudioItem`], `metadata` the ingestion types,
//! `observe` the change-notification plumbing.

mod metadata;
mod model;
mod observe;

pub use metadata::{MetadataItem, MetadataKey, MetadataValue};
pub use model::AudioItem;
pub use observe::FieldChange;
