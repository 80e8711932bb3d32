//! Change notification for the mutable item fields.
//!
//! Subscribers hold an `mpsc::Receiver`; the item pushes a
//! [`FieldChange`] on every assignment, including assignment of a value
//! equal to the previous one (plain field-level observation semantics).

use std::sync::mpsc::{self, Receiver, Sender};

use crate::source::Headers;

/// Notification that a mutable field was assigned.
///
/// Carries the newly assigned value where cloning is cheap; artwork is a
/// bare marker, read the image back from the item.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Artist(Option<String>),
    Title(Option<String>),
    Album(Option<String>),
    TrackCount(Option<u32>),
    TrackNumber(Option<u32>),
    Headers(Option<Headers>),
    #[cfg(feature = "artwork")]
    Artwork,
}

/// Sender list behind [`AudioItem::subscribe`](crate::AudioItem::subscribe).
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<Sender<FieldChange>>,
}

impl Subscribers {
    pub(crate) fn add(&mut self) -> Receiver<FieldChange> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Push `change` to every live subscriber, pruning the gone ones.
    pub(crate) fn notify(&mut self, change: &FieldChange) {
        self.senders.retain(|tx| tx.send(change.clone()).is_ok());
    }
}
