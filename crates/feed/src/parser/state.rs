//! Item assembly state machine.
//!
//! Two states: waiting for an `<item>`, or inside one with a record under
//! construction. Transitions are keyed by the tag name; child tags only
//! matter while an item is open.

use crate::extract::{extract_rate, extract_title};
use crate::models::{RateRecord, RateRecordBuilder};

/// Tag names the feed pipeline reacts to, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeedTag {
    Item,
    Title,
    Description,
    PubDate,
    Other,
}

impl FeedTag {
    pub(crate) fn from_name(name: &[u8]) -> Self {
        if name.eq_ignore_ascii_case(b"item") {
            Self::Item
        } else if name.eq_ignore_ascii_case(b"title") {
            Self::Title
        } else if name.eq_ignore_ascii_case(b"description") {
            Self::Description
        } else if name.eq_ignore_ascii_case(b"pubDate") {
            Self::PubDate
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Default)]
pub(crate) enum ItemState {
    #[default]
    AwaitingItem,
    InsideItem(RateRecordBuilder),
}

impl ItemState {
    /// An `<item>` start always opens a fresh record, discarding any unfinished one.
    pub(crate) fn on_start(self, tag: FeedTag) -> Self {
        match tag {
            FeedTag::Item => Self::InsideItem(RateRecord::builder()),
            _ => self,
        }
    }

    /// Applies an end tag, using the most recent text run as the element content.
    ///
    /// Returns the completed record when the end tag closes an item.
    pub(crate) fn on_end(self, tag: FeedTag, text: &str) -> (Self, Option<RateRecord>) {
        let builder = match self {
            Self::AwaitingItem => return (Self::AwaitingItem, None),
            Self::InsideItem(builder) => builder,
        };

        let builder = match tag {
            FeedTag::Item => return (Self::AwaitingItem, Some(builder.build())),
            FeedTag::Title => builder.raw_title(text).title_fields(extract_title(text)),
            FeedTag::Description => {
                let builder = builder.raw_description(text);
                match extract_rate(text) {
                    Some(rate) => builder.rate(rate),
                    None => builder,
                }
            }
            FeedTag::PubDate => builder.pub_date(text),
            FeedTag::Other => builder,
        };

        (Self::InsideItem(builder), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_are_case_insensitive() {
        assert_eq!(FeedTag::from_name(b"ITEM"), FeedTag::Item);
        assert_eq!(FeedTag::from_name(b"Title"), FeedTag::Title);
        assert_eq!(FeedTag::from_name(b"DESCRIPTION"), FeedTag::Description);
        assert_eq!(FeedTag::from_name(b"pubdate"), FeedTag::PubDate);
        assert_eq!(FeedTag::from_name(b"link"), FeedTag::Other);
    }

    #[test]
    fn test_end_tags_outside_item_are_ignored() {
        let (state, record) = ItemState::AwaitingItem.on_end(FeedTag::Title, "GBP/Euro (EUR)");
        assert!(matches!(state, ItemState::AwaitingItem));
        assert!(record.is_none());
    }

    #[test]
    fn test_item_lifecycle() {
        let state = ItemState::default().on_start(FeedTag::Item);
        let (state, _) = state.on_end(FeedTag::Title, "GBP/Euro (EUR)");
        let (state, _) = state.on_end(FeedTag::Description, "1 GBP = 1.1612 EUR");
        let (state, _) = state.on_end(FeedTag::PubDate, "Wed Aug 27 2025 2:00:45 UTC");
        let (state, record) = state.on_end(FeedTag::Item, "\n");

        assert!(matches!(state, ItemState::AwaitingItem));
        let record = record.unwrap();
        assert_eq!(record.target_code(), Some("EUR"));
        assert_eq!(record.currency_name(), Some("Euro"));
        assert!((record.rate() - 1.1612).abs() < 1e-9);
        assert_eq!(record.pub_date(), Some("Wed Aug 27 2025 2:00:45 UTC"));
        assert_eq!(record.raw_title(), Some("GBP/Euro (EUR)"));
        assert_eq!(record.raw_description(), Some("1 GBP = 1.1612 EUR"));
    }

    #[test]
    fn test_second_item_start_discards_unfinished_record() {
        let state = ItemState::default().on_start(FeedTag::Item);
        let (state, _) = state.on_end(FeedTag::Title, "GBP/Euro (EUR)");
        let state = state.on_start(FeedTag::Item);
        let (_, record) = state.on_end(FeedTag::Item, "");
        assert_eq!(record.unwrap().target_code(), None);
    }
}
