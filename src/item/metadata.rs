//! Metadata ingestion types.
//!
//! A [`MetadataItem`] mirrors what a media-container parser emits: a
//! common-key discriminator plus a dynamically typed value. Keys the
//! model has no field for arrive as [`MetadataKey::Unknown`] and are
//! skipped during ingestion.

use serde::{Deserialize, Serialize};

/// Common-key discriminator of an extracted metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataKey {
    Title,
    Artist,
    Album,
    TrackNumber,
    /// Embedded artwork payload (raw encoded image bytes).
    Artwork,
    /// Any key the model does not track.
    Unknown(String),
}

/// Dynamically typed value attached to a metadata key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataValue {
    Text(String),
    Number(u32),
    Binary(Vec<u8>),
}

impl MetadataValue {
    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content; text that parses as an integer counts.
    pub(crate) fn as_number(&self) -> Option<u32> {
        match self {
            MetadataValue::Number(n) => Some(*n),
            MetadataValue::Text(s) => s.trim().parse().ok(),
            MetadataValue::Binary(_) => None,
        }
    }

    pub(crate) fn as_binary(&self) -> Option<&[u8]> {
        match self {
            MetadataValue::Binary(data) => Some(data),
            _ => None,
        }
    }
}

/// One key/value pair extracted from a media container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataItem {
    pub key: MetadataKey,
    pub value: MetadataValue,
}

impl MetadataItem {
    pub fn text(key: MetadataKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: MetadataValue::Text(value.into()),
        }
    }

    pub fn number(key: MetadataKey, value: u32) -> Self {
        Self {
            key,
            value: MetadataValue::Number(value),
        }
    }

    pub fn binary(key: MetadataKey, value: Vec<u8>) -> Self {
        Self {
            key,
            value: MetadataValue::Binary(value),
        }
    }
}
