//! Quality tiers and their fallback ordering.

use serde::{Deserialize, Serialize};

/// Preferred resolution/bitrate tier of a source URL.
///
/// Variants are declared low-to-high so the derived ordering follows
/// quality: `Low < Medium < High`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AudioQuality {
    Low,
    Medium,
    High,
}

impl AudioQuality {
    /// Resolution order when this tier is requested.
    ///
    /// High degrades downward (Medium, then Low). Medium prefers the
    /// cheaper Low before High, and Low climbs upward only as a last
    /// resort, so asking for a modest tier never pulls the most
    /// expensive source while a cheaper one exists.
    pub const fn fallback_order(self) -> [AudioQuality; 3] {
        match self {
            AudioQuality::High => [AudioQuality::High, AudioQuality::Medium, AudioQuality::Low],
            AudioQuality::Medium => [AudioQuality::Medium, AudioQuality::Low, AudioQuality::High],
            AudioQuality::Low => [AudioQuality::Low, AudioQuality::Medium, AudioQuality::High],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AudioQuality::{High, Low, Medium};

    #[test]
    fn tiers_order_by_quality() {
        assert!(Low < Medium);
        assert!(Medium < High);
    }

    #[test]
    fn fallback_chains_match_documented_order() {
        assert_eq!(High.fallback_order(), [High, Medium, Low]);
        assert_eq!(Medium.fallback_order(), [Medium, Low, High]);
        assert_eq!(Low.fallback_order(), [Low, Medium, High]);
    }

    #[test]
    fn fallback_order_starts_at_self_and_covers_every_tier() {
        for quality in [Low, Medium, High] {
            let order = quality.fallback_order();
            assert_eq!(order[0], quality);
            for other in [Low, Medium, High] {
                assert!(order.contains(&other));
            }
        }
    }
}
