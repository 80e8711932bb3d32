//! Bridge from parsed `lofty` tags to the crate's metadata items.
//!
//! The model only consumes plain [`MetadataItem`]s; this adapter is the
//! concrete producer for tags read out of a media container.

use lofty::tag::{ItemKey, Tag};

use crate::item::{AudioItem, MetadataItem, MetadataKey};

/// Translate a parsed tag into metadata items, in ingestion order.
///
/// Text fields are trimmed and dropped when empty — sloppy tags carry
/// whitespace-only values. Only the first embedded picture is forwarded.
pub fn items_from_tag(tag: &Tag) -> Vec<MetadataItem> {
    let mut items = Vec::new();

    let mut push_text = |key: MetadataKey, item_key: &ItemKey| {
        if let Some(v) = tag.get_string(item_key) {
            let v = v.trim();
            if !v.is_empty() {
                items.push(MetadataItem::text(key, v));
            }
        }
    };
    push_text(MetadataKey::Title, &ItemKey::TrackTitle);
    push_text(MetadataKey::Artist, &ItemKey::TrackArtist);
    push_text(MetadataKey::Album, &ItemKey::AlbumTitle);

    if let Some(v) = tag.get_string(&ItemKey::TrackNumber) {
        if let Ok(n) = v.trim().parse::<u32>() {
            items.push(MetadataItem::number(MetadataKey::TrackNumber, n));
        }
    }

    if let Some(picture) = tag.pictures().first() {
        items.push(MetadataItem::binary(
            MetadataKey::Artwork,
            picture.data().to_vec(),
        ));
    }

    items
}

impl AudioItem {
    /// Apply everything [`items_from_tag`] extracts from `tag`.
    pub fn apply_tag(&mut self, tag: &Tag) {
        self.apply_metadata(items_from_tag(tag));
    }
}

#[cfg(test)]
mod tests {
    use lofty::picture::{MimeType, Picture, PictureType};
    use lofty::tag::{ItemKey, Tag, TagType};
    use url::Url;

    use super::items_from_tag;
    use crate::item::{AudioItem, MetadataItem, MetadataKey};

    #[test]
    fn items_from_tag_trims_text_and_skips_empty_fields() {
        let mut tag = Tag::new(TagType::Id3v2);
        tag.insert_text(ItemKey::TrackTitle, "  Song  ".to_string());
        tag.insert_text(ItemKey::TrackArtist, "   ".to_string());
        tag.insert_text(ItemKey::TrackNumber, "7".to_string());

        let items = items_from_tag(&tag);
        assert_eq!(
            items,
            vec![
                MetadataItem::text(MetadataKey::Title, "Song"),
                MetadataItem::number(MetadataKey::TrackNumber, 7),
            ]
        );
    }

    #[test]
    fn non_numeric_track_numbers_are_dropped() {
        let mut tag = Tag::new(TagType::Id3v2);
        tag.insert_text(ItemKey::TrackNumber, "A1".to_string());

        assert!(items_from_tag(&tag).is_empty());
    }

    #[test]
    fn only_the_first_picture_becomes_an_artwork_item() {
        let mut tag = Tag::new(TagType::Id3v2);
        tag.push_picture(Picture::new_unchecked(
            PictureType::CoverFront,
            Some(MimeType::Png),
            None,
            vec![1, 2, 3],
        ));
        tag.push_picture(Picture::new_unchecked(
            PictureType::CoverBack,
            Some(MimeType::Png),
            None,
            vec![4, 5, 6],
        ));

        let items = items_from_tag(&tag);
        assert_eq!(
            items,
            vec![MetadataItem::binary(MetadataKey::Artwork, vec![1, 2, 3])]
        );
    }

    #[test]
    fn apply_tag_fills_unset_item_fields() {
        let mut tag = Tag::new(TagType::Id3v2);
        tag.insert_text(ItemKey::TrackTitle, "Song".to_string());
        tag.insert_text(ItemKey::TrackArtist, "Artist".to_string());
        tag.insert_text(ItemKey::AlbumTitle, "Album".to_string());
        tag.insert_text(ItemKey::TrackNumber, "3".to_string());

        let url = Url::parse("https://a/h.mp3").unwrap();
        let mut item = AudioItem::from_urls(Some(url), None, None, None).unwrap();
        item.set_artist(Some("Preset".to_string()));

        item.apply_tag(&tag);

        assert_eq!(item.title(), Some("Song"));
        // Tag data never overwrites a field something else already set.
        assert_eq!(item.artist(), Some("Preset"));
        assert_eq!(item.album(), Some("Album"));
        assert_eq!(item.track_number(), Some(3));
    }
}
