// ABOUTME: Error types for news markup extraction.
// ABOUTME: Provides ExtractError with Parse, Structural, and LinkParse variants.

use std::fmt;
use thiserror::Error;

/// Errors that abort an extraction call.
///
/// Missing optional fields (headline, date, type) are not errors; they are
/// logged and left at their zero values.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The markup has no tag structure at all.
    #[error("failed to parse markup: {0}")]
    Parse(String),

    /// An expected node is present but unusable, or missing under the strict policy.
    #[error("unexpected markup structure: {0}")]
    Structural(String),

    /// A listing row links to something that is not a usable URL.
    #[error("invalid news link {href:?}: {reason}")]
    LinkParse { href: String, reason: String },
}

impl ExtractError {
    /// Creates a Parse error with a custom message.
    pub fn parse(msg: impl Into<String>) -> Self {
        ExtractError::Parse(msg.into())
    }

    /// Creates a Structural error with a custom message.
    pub fn structural(msg: impl Into<String>) -> Self {
        ExtractError::Structural(msg.into())
    }

    /// Creates a LinkParse error from the offending href and an underlying cause.
    pub fn link(href: impl Into<String>, reason: impl fmt::Display) -> Self {
        ExtractError::LinkParse {
            href: href.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ExtractError::Parse(_))
    }

    /// Returns true if this is a Structural error.
    pub fn is_structural(&self) -> bool {
        matches!(self, ExtractError::Structural(_))
    }

    /// Returns true if this is a LinkParse error.
    pub fn is_link_parse(&self) -> bool {
        matches!(self, ExtractError::LinkParse { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExtractError>;
