//! Error types for the feed crate.
//!
//! This module provides:
//! - [`FetchError`]: fatal failures of one fetch attempt
//! - [`ParseError`]: malformed XML reported by the tag-stream parser

use thiserror::Error;

/// Message shown to the user when the download fails.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error while downloading rates.";

/// Message shown to the user when the feed cannot be parsed.
pub const PARSE_ERROR_MESSAGE: &str = "Problem parsing the RSS feed.";

/// Errors that abort a whole fetch.
///
/// No partial record list is ever delivered alongside one of these.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The connection, the body read or the HTTP status failed.
    /// A non-success status is reported here, the body is never parsed.
    #[error("Network error fetching {url}: {message}")]
    Network {
        /// The feed URL that was requested
        url: String,
        /// Transport error description
        message: String,
    },

    /// The body was downloaded but is not well-formed XML.
    #[error("Failed to parse feed: {0}")]
    Parse(#[from] ParseError),
}

impl FetchError {
    pub(crate) fn network(url: &str, err: reqwest::Error) -> Self {
        Self::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn status(url: &str, status: reqwest::StatusCode) -> Self {
        Self::Network {
            url: url.to_string(),
            message: format!("HTTP status {}", status),
        }
    }

    /// Returns true for transport-level failures (connection, read, HTTP status).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Returns true when the document itself was rejected.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Generic, user-facing description of the failure.
    ///
    /// The raw cause is available through `Display` and is meant for logs only.
    pub fn user_message(&self) -> &'static str {
        if self.is_parse() {
            PARSE_ERROR_MESSAGE
        } else {
            NETWORK_ERROR_MESSAGE
        }
    }
}

/// Malformed-document failures from the tag-stream parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The XML reader rejected the input.
    #[error("XML error at byte {position}: {message}")]
    Xml {
        /// Byte offset the reader had reached
        position: u64,
        /// Reader error description
        message: String,
    },

    /// The document ended while elements were still open.
    #[error("Unexpected end of document with {open_elements} unclosed element(s)")]
    Unterminated {
        /// Number of start tags without a matching end tag
        open_elements: usize,
    },

    /// The document contains no element at all.
    #[error("Document has no root element")]
    NoRootElement,

    /// Text content could not be decoded.
    #[error("Invalid text encoding: {0}")]
    Encoding(String),
}
