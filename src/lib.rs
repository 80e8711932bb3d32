//! Passive data model for a playable audio item.
//!
//! An [`AudioItem`] maps up to three quality tiers (high/medium/low) to
//! candidate source URLs, carries optional HTTP-style request headers,
//! and holds mutable descriptive metadata (artist, title, album, track
//! info, artwork). The crate does no playback, buffering or networking:
//! the model is consumed by an external player/presentation layer.
//!
//! The one nontrivial behavior is quality resolution with fallback:
//! [`AudioItem::highest_available`] and friends always return a usable
//! [`SourceUrl`] because construction guarantees at least one source.
//! Mutable fields can be observed through [`AudioItem::subscribe`].

mod error;
mod item;
mod quality;
mod source;
mod tags;

pub use error::{ItemError, Result};
pub use item::{AudioItem, FieldChange, MetadataItem, MetadataKey, MetadataValue};
pub use quality::AudioQuality;
pub use source::{Headers, SourceSet, SourceUrl};
pub use tags::items_from_tag;

/// Re-exported so downstream code can name URLs without depending on `url`.
pub use url::Url;
