//! Source URL storage: per-tier slots and the derived [`SourceUrl`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::quality::AudioQuality;

/// HTTP-style request headers forwarded to whatever fetches a source URL.
pub type Headers = HashMap<String, String>;

/// Candidate source URLs, one optional slot per quality tier.
///
/// Fixed slots rather than an open map: tier keys are unique by
/// construction and the "at least one present" invariant of
/// [`AudioItem`](crate::AudioItem) is a single [`SourceSet::is_empty`]
/// check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSet {
    pub high: Option<Url>,
    pub medium: Option<Url>,
    pub low: Option<Url>,
}

impl SourceSet {
    /// Set holding one URL at the given tier.
    pub fn single(quality: AudioQuality, url: Url) -> Self {
        let mut set = Self::default();
        set.insert(quality, url);
        set
    }

    /// Put `url` in the slot for `quality`, replacing any previous value.
    pub fn insert(&mut self, quality: AudioQuality, url: Url) {
        *self.slot_mut(quality) = Some(url);
    }

    /// Parse `url` into the slot for `quality`.
    ///
    /// # Errors
    /// [`ItemError::InvalidUrl`](crate::ItemError::InvalidUrl) when the
    /// string does not parse; an empty string never does.
    pub fn insert_str(&mut self, quality: AudioQuality, url: &str) -> crate::Result<()> {
        self.insert(quality, Url::parse(url)?);
        Ok(())
    }

    /// URL stored at exactly `quality`, without fallback.
    pub fn get(&self, quality: AudioQuality) -> Option<&Url> {
        match quality {
            AudioQuality::High => self.high.as_ref(),
            AudioQuality::Medium => self.medium.as_ref(),
            AudioQuality::Low => self.low.as_ref(),
        }
    }

    /// True when no tier has a URL.
    pub fn is_empty(&self) -> bool {
        self.high.is_none() && self.medium.is_none() && self.low.is_none()
    }

    fn slot_mut(&mut self, quality: AudioQuality) -> &mut Option<Url> {
        match quality {
            AudioQuality::High => &mut self.high,
            AudioQuality::Medium => &mut self.medium,
            AudioQuality::Low => &mut self.low,
        }
    }
}

/// A quality-tagged, header-annotated locator for playable audio content.
///
/// Produced by the resolution accessors on
/// [`AudioItem`](crate::AudioItem); `headers` is the item's value at the
/// time of derivation, not a construction-time snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUrl {
    pub quality: AudioQuality,
    pub url: Url,
    pub headers: Option<Headers>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItemError;

    #[test]
    fn single_fills_only_the_requested_slot() {
        let url = Url::parse("https://example.com/track.mp3").unwrap();
        let set = SourceSet::single(AudioQuality::Medium, url.clone());

        assert_eq!(set.get(AudioQuality::Medium), Some(&url));
        assert_eq!(set.get(AudioQuality::High), None);
        assert_eq!(set.get(AudioQuality::Low), None);
        assert!(!set.is_empty());
    }

    #[test]
    fn default_set_is_empty_until_inserted() {
        let mut set = SourceSet::default();
        assert!(set.is_empty());

        set.insert(
            AudioQuality::High,
            Url::parse("https://example.com/h.mp3").unwrap(),
        );
        assert!(!set.is_empty());
    }

    #[test]
    fn insert_str_rejects_empty_and_malformed_urls() {
        let mut set = SourceSet::default();

        let err = set.insert_str(AudioQuality::High, "").unwrap_err();
        assert!(matches!(err, ItemError::InvalidUrl(_)));

        let err = set.insert_str(AudioQuality::High, "not a url").unwrap_err();
        assert!(matches!(err, ItemError::InvalidUrl(_)));

        assert!(set.is_empty());

        set.insert_str(AudioQuality::High, "https://example.com/h.mp3")
            .unwrap();
        assert_eq!(
            set.get(AudioQuality::High).map(Url::as_str),
            Some("https://example.com/h.mp3")
        );
    }
}
