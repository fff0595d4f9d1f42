// ABOUTME: News type enumeration and headline-type text resolution.
// ABOUTME: Normalizes NBSP/whitespace and compares case-insensitively against known phrases.

use serde::{Deserialize, Serialize};

use crate::options::ApiGeneration;
use crate::text::normalize_spaces;

/// Headline phrase that marks a ticker entry.
pub const TICKER_SENTINEL: &str = "News Ticker";

/// Kind of news entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsType {
    /// Short untitled entry.
    Ticker,
    /// Featured article.
    Article,
    /// Regular news post.
    News,
    #[default]
    #[serde(rename = "", alias = "unknown")]
    Unknown,
}

impl NewsType {
    /// Name of the type in the given API generation's output.
    pub fn as_str(self, generation: ApiGeneration) -> &'static str {
        match self {
            NewsType::Ticker => "ticker",
            NewsType::Article => "article",
            NewsType::News => "news",
            NewsType::Unknown => match generation {
                ApiGeneration::Legacy => "unknown",
                ApiGeneration::Current => "",
            },
        }
    }

    pub fn is_ticker(self) -> bool {
        self == NewsType::Ticker
    }
}

const TYPE_PHRASES: &[(&str, NewsType)] = &[
    (TICKER_SENTINEL, NewsType::Ticker),
    ("Featured Article", NewsType::Article),
    ("News", NewsType::News),
];

/// Resolves a news type from headline-type text such as `News&#160;Ticker`.
pub fn resolve_news_type(text: &str) -> NewsType {
    let normalized = normalize_spaces(text);
    TYPE_PHRASES
        .iter()
        .find(|(phrase, _)| phrase.eq_ignore_ascii_case(&normalized))
        .map(|(_, news_type)| *news_type)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_phrases() {
        assert_eq!(resolve_news_type("News Ticker"), NewsType::Ticker);
        assert_eq!(resolve_news_type("Featured Article"), NewsType::Article);
        assert_eq!(resolve_news_type("News"), NewsType::News);
    }

    #[test]
    fn normalizes_before_matching() {
        assert_eq!(resolve_news_type("News\u{a0}Ticker"), NewsType::Ticker);
        assert_eq!(resolve_news_type("  featured&nbsp;&nbsp;ARTICLE "), NewsType::Article);
    }

    #[test]
    fn unrecognized_is_unknown() {
        assert_eq!(resolve_news_type(""), NewsType::Unknown);
        assert_eq!(resolve_news_type("Patch Notes"), NewsType::Unknown);
    }

    #[test]
    fn unknown_naming_depends_on_generation() {
        assert_eq!(NewsType::Unknown.as_str(ApiGeneration::Current), "");
        assert_eq!(NewsType::Unknown.as_str(ApiGeneration::Legacy), "unknown");
        assert_eq!(NewsType::Ticker.as_str(ApiGeneration::Current), "ticker");
    }
}
