//! Forward-only tag-stream parser for the rate feed.

mod state;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::errors::ParseError;
use crate::models::RateRecord;
use crate::sanitize::sanitize_feed;

use state::{FeedTag, ItemState};

/// Sanitizes a downloaded body and parses it.
pub fn parse_feed(body: &str) -> Result<Vec<RateRecord>, ParseError> {
    parse_rates(sanitize_feed(body))
}

/// Parses a sanitized feed document into records, in document order.
///
/// Only the most recent run of text (consecutive text and CDATA content) is
/// kept; it becomes the content of whichever element closes next. Any
/// malformed structure fails the whole document and no records are returned.
pub fn parse_rates(xml: &str) -> Result<Vec<RateRecord>, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().expand_empty_elements = true;

    let mut records = Vec::new();
    let mut state = ItemState::default();
    let mut pending_text = String::new();
    let mut in_text_run = false;
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        let event = reader.read_event().map_err(|e| ParseError::Xml {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(e) => {
                depth += 1;
                saw_root = true;
                in_text_run = false;
                state = state.on_start(FeedTag::from_name(e.local_name().as_ref()));
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                in_text_run = false;
                let (next, completed) =
                    state.on_end(FeedTag::from_name(e.local_name().as_ref()), &pending_text);
                state = next;
                if let Some(record) = completed {
                    log::debug!("Parsed: {}", record);
                    records.push(record);
                }
            }
            Event::Text(e) => {
                let text = e.unescape().map_err(|e| ParseError::Xml {
                    position: reader.buffer_position() as u64,
                    message: e.to_string(),
                })?;
                push_text(&mut pending_text, &mut in_text_run, &text);
            }
            Event::CData(e) => {
                let text =
                    std::str::from_utf8(&e).map_err(|e| ParseError::Encoding(e.to_string()))?;
                push_text(&mut pending_text, &mut in_text_run, text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(ParseError::NoRootElement);
    }
    if depth > 0 {
        return Err(ParseError::Unterminated {
            open_elements: depth,
        });
    }

    Ok(records)
}

fn push_text(pending_text: &mut String, in_text_run: &mut bool, text: &str) {
    if !*in_text_run {
        pending_text.clear();
        *in_text_run = true;
    }
    pending_text.push_str(text);
}
