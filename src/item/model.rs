//! The [`AudioItem`] entity: construction, quality resolution, metadata
//! ingestion and observable field mutation.

use std::sync::mpsc::Receiver;

use tracing::debug;
use url::Url;

use crate::error::ItemError;
use crate::item::metadata::{MetadataItem, MetadataKey};
use crate::item::observe::{FieldChange, Subscribers};
use crate::quality::AudioQuality;
use crate::source::{Headers, SourceSet, SourceUrl};

/// A playable audio item: candidate source URLs at up to three quality
/// tiers plus mutable descriptive metadata.
///
/// `sources` is fixed at construction and never empty, which makes the
/// resolution accessors total. Every other field may be assigned over
/// the item's lifetime — a container parser filling in tags, artwork
/// fetched after the item was queued — and each assignment is pushed to
/// subscribers registered through [`AudioItem::subscribe`].
///
/// The item has no internal synchronization; callers mutating it from
/// several threads must bring their own.
#[derive(Debug)]
pub struct AudioItem {
    sources: SourceSet,
    headers: Option<Headers>,
    artist: Option<String>,
    title: Option<String>,
    album: Option<String>,
    track_count: Option<u32>,
    track_number: Option<u32>,
    #[cfg(feature = "artwork")]
    artwork: Option<image::DynamicImage>,
    subscribers: Subscribers,
}

impl AudioItem {
    /// Build an item from a prepared source set.
    ///
    /// # Errors
    /// [`ItemError::EmptySources`] when no tier has a URL.
    pub fn new(sources: SourceSet, headers: Option<Headers>) -> crate::Result<Self> {
        if sources.is_empty() {
            return Err(ItemError::EmptySources);
        }
        Ok(Self {
            sources,
            headers,
            artist: None,
            title: None,
            album: None,
            track_count: None,
            track_number: None,
            #[cfg(feature = "artwork")]
            artwork: None,
            subscribers: Subscribers::default(),
        })
    }

    /// Convenience form: up to three per-tier URLs, absent tiers omitted.
    ///
    /// # Errors
    /// [`ItemError::EmptySources`] when all three are `None`.
    pub fn from_urls(
        high: Option<Url>,
        medium: Option<Url>,
        low: Option<Url>,
        headers: Option<Headers>,
    ) -> crate::Result<Self> {
        Self::new(SourceSet { high, medium, low }, headers)
    }

    pub fn sources(&self) -> &SourceSet {
        &self.sources
    }

    /// Best available source: High, else Medium, else Low.
    pub fn highest_available(&self) -> SourceUrl {
        self.resolve(AudioQuality::High)
    }

    /// Medium if present, else Low, else High.
    pub fn medium_available(&self) -> SourceUrl {
        self.resolve(AudioQuality::Medium)
    }

    /// Cheapest available source: Low, else Medium, else High.
    pub fn lowest_available(&self) -> SourceUrl {
        self.resolve(AudioQuality::Low)
    }

    fn resolve(&self, preferred: AudioQuality) -> SourceUrl {
        for quality in preferred.fallback_order() {
            if let Some(url) = self.sources.get(quality) {
                return SourceUrl {
                    quality,
                    url: url.clone(),
                    // Current headers, not a construction-time snapshot.
                    headers: self.headers.clone(),
                };
            }
        }
        unreachable!("sources are non-empty by construction")
    }

    /// Register a change subscriber.
    ///
    /// Every subsequent field assignment is sent before the setter
    /// returns; a dropped receiver is pruned on the next notification.
    pub fn subscribe(&mut self) -> Receiver<FieldChange> {
        self.subscribers.add()
    }

    pub fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    /// Replace the request headers shared by all derived [`SourceUrl`]s.
    pub fn set_headers(&mut self, headers: Option<Headers>) {
        self.headers = headers;
        self.notify(FieldChange::Headers(self.headers.clone()));
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn set_artist(&mut self, artist: Option<String>) {
        self.artist = artist;
        self.notify(FieldChange::Artist(self.artist.clone()));
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
        self.notify(FieldChange::Title(self.title.clone()));
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn set_album(&mut self, album: Option<String>) {
        self.album = album;
        self.notify(FieldChange::Album(self.album.clone()));
    }

    pub fn track_count(&self) -> Option<u32> {
        self.track_count
    }

    pub fn set_track_count(&mut self, track_count: Option<u32>) {
        self.track_count = track_count;
        self.notify(FieldChange::TrackCount(self.track_count));
    }

    pub fn track_number(&self) -> Option<u32> {
        self.track_number
    }

    pub fn set_track_number(&mut self, track_number: Option<u32>) {
        self.track_number = track_number;
        self.notify(FieldChange::TrackNumber(self.track_number));
    }

    #[cfg(feature = "artwork")]
    pub fn artwork(&self) -> Option<&image::DynamicImage> {
        self.artwork.as_ref()
    }

    #[cfg(feature = "artwork")]
    pub fn set_artwork(&mut self, artwork: Option<image::DynamicImage>) {
        self.artwork = artwork;
        self.notify(FieldChange::Artwork);
    }

    /// Fill unset metadata fields from extracted container metadata.
    ///
    /// Items are visited in input order and only ever write into fields
    /// that are still unset: the first writer wins, within one call and
    /// across repeated calls. Unknown keys and key/value type mismatches
    /// are skipped. Artwork that fails to decode is dropped — metadata
    /// enrichment is best-effort.
    pub fn apply_metadata(&mut self, items: impl IntoIterator<Item = MetadataItem>) {
        for item in items {
            match &item.key {
                MetadataKey::Title => {
                    if self.title.is_none() {
                        if let Some(v) = item.value.as_text() {
                            self.set_title(Some(v.to_string()));
                        }
                    }
                }
                MetadataKey::Artist => {
                    if self.artist.is_none() {
                        if let Some(v) = item.value.as_text() {
                            self.set_artist(Some(v.to_string()));
                        }
                    }
                }
                MetadataKey::Album => {
                    if self.album.is_none() {
                        if let Some(v) = item.value.as_text() {
                            self.set_album(Some(v.to_string()));
                        }
                    }
                }
                MetadataKey::TrackNumber => {
                    if self.track_number.is_none() {
                        if let Some(n) = item.value.as_number() {
                            self.set_track_number(Some(n));
                        }
                    }
                }
                MetadataKey::Artwork => self.apply_artwork(&item),
                MetadataKey::Unknown(key) => {
                    debug!(key, "ignoring metadata item with unknown key");
                }
            }
        }
    }

    #[cfg(feature = "artwork")]
    fn apply_artwork(&mut self, item: &MetadataItem) {
        if self.artwork.is_some() {
            return;
        }
        let Some(data) = item.value.as_binary() else {
            return;
        };
        match image::load_from_memory(data) {
            Ok(decoded) => self.set_artwork(Some(decoded)),
            Err(err) => tracing::warn!(%err, "dropping artwork that failed to decode"),
        }
    }

    #[cfg(not(feature = "artwork"))]
    fn apply_artwork(&mut self, _item: &MetadataItem) {}

    fn notify(&mut self, change: FieldChange) {
        self.subscribers.notify(&change);
    }
}
