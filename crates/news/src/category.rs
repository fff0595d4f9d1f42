// ABOUTME: News category enumeration and icon-based category resolution.
// ABOUTME: Matches newsicon_<name> fragments in icon references with a prebuilt automaton.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::options::ApiGeneration;

/// Category of a news entry, as shown by its headline icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Cipsoft,
    Community,
    Development,
    Support,
    Technical,
    #[default]
    #[serde(rename = "", alias = "unknown")]
    Unknown,
}

impl NewsCategory {
    /// Name of the category in the given API generation's output.
    pub fn as_str(self, generation: ApiGeneration) -> &'static str {
        match self {
            NewsCategory::Cipsoft => "cipsoft",
            NewsCategory::Community => "community",
            NewsCategory::Development => "development",
            NewsCategory::Support => "support",
            NewsCategory::Technical => "technical",
            NewsCategory::Unknown => match generation {
                ApiGeneration::Legacy => "unknown",
                ApiGeneration::Current => "",
            },
        }
    }
}

/// Icon filename fragments in priority order.
const ICON_FRAGMENTS: &[(&str, NewsCategory)] = &[
    ("newsicon_cipsoft", NewsCategory::Cipsoft),
    ("newsicon_community", NewsCategory::Community),
    ("newsicon_development", NewsCategory::Development),
    ("newsicon_support", NewsCategory::Support),
    ("newsicon_technical", NewsCategory::Technical),
];

static ICON_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostFirst)
        .build(ICON_FRAGMENTS.iter().map(|(fragment, _)| *fragment))
        .expect("icon fragments are valid literals")
});

/// Resolves a category from an icon source reference.
///
/// The leftmost known fragment wins; an unrecognized icon yields `Unknown`.
pub fn resolve_category(icon_src: &str) -> NewsCategory {
    match ICON_MATCHER.find(icon_src) {
        Some(m) => ICON_FRAGMENTS[m.pattern().as_usize()].1,
        None => {
            if !icon_src.trim().is_empty() {
                tracing::debug!(icon = icon_src, "unrecognized news icon");
            }
            NewsCategory::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_icons() {
        assert_eq!(
            resolve_category("https://static.tibia.com/images/global/content/newsicon_technical_big.gif"),
            NewsCategory::Technical
        );
        assert_eq!(
            resolve_category("https://static.tibia.com/images/global/content/newsicon_community_small.gif"),
            NewsCategory::Community
        );
        assert_eq!(resolve_category("newsicon_development_big.gif"), NewsCategory::Development);
        assert_eq!(resolve_category("/img/NEWSICON_SUPPORT_small.gif"), NewsCategory::Support);
        assert_eq!(resolve_category("newsicon_cipsoft_big.gif"), NewsCategory::Cipsoft);
    }

    #[test]
    fn unknown_icon_degrades() {
        assert_eq!(resolve_category(""), NewsCategory::Unknown);
        assert_eq!(resolve_category("https://example.com/logo.png"), NewsCategory::Unknown);
    }

    #[test]
    fn unknown_naming_depends_on_generation() {
        assert_eq!(NewsCategory::Unknown.as_str(ApiGeneration::Current), "");
        assert_eq!(NewsCategory::Unknown.as_str(ApiGeneration::Legacy), "unknown");
        assert_eq!(NewsCategory::Support.as_str(ApiGeneration::Legacy), "support");
    }

    #[test]
    fn serializes_current_names() {
        assert_eq!(serde_json::to_string(&NewsCategory::Technical).unwrap(), "\"technical\"");
        assert_eq!(serde_json::to_string(&NewsCategory::Unknown).unwrap(), "\"\"");
        let parsed: NewsCategory = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(parsed, NewsCategory::Unknown);
    }
}
