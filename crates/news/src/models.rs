// ABOUTME: Structured news records produced by the extractors.
// ABOUTME: NewsArticle for single article pages, NewsListItem for archive rows.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::NewsCategory;
use crate::news_type::NewsType;
use crate::options::ApiGeneration;

/// A single news article or ticker entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: u32,
    pub date: String,
    /// Empty for tickers.
    pub title: String,
    pub category: NewsCategory,
    #[serde(rename = "type")]
    pub news_type: NewsType,
    #[serde(rename = "url")]
    pub source_url: String,
    /// Plain text, markup stripped.
    pub content: String,
    /// Rich markup with letter glyphs repaired.
    pub content_html: String,
}

impl NewsArticle {
    /// Serializes the article using the given generation's enumeration names.
    pub fn to_value(&self, generation: ApiGeneration) -> serde_json::Result<Value> {
        let mut value = serde_json::to_value(self)?;
        relabel(&mut value, self.category, self.news_type, generation);
        Ok(value)
    }
}

/// One row of the news archive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsListItem {
    pub id: u32,
    pub date: String,
    /// Visible text of the row's link.
    pub news: String,
    pub category: NewsCategory,
    #[serde(rename = "type")]
    pub news_type: NewsType,
    /// Link to the article, cut right after its id.
    #[serde(rename = "url")]
    pub source_url: String,
    #[serde(rename = "url_api", default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl NewsListItem {
    /// Serializes the item using the given generation's enumeration names.
    pub fn to_value(&self, generation: ApiGeneration) -> serde_json::Result<Value> {
        let mut value = serde_json::to_value(self)?;
        relabel(&mut value, self.category, self.news_type, generation);
        Ok(value)
    }
}

fn relabel(value: &mut Value, category: NewsCategory, news_type: NewsType, generation: ApiGeneration) {
    if let Value::Object(map) = value {
        map.insert("category".to_string(), Value::from(category.as_str(generation)));
        map.insert("type".to_string(), Value::from(news_type.as_str(generation)));
    }
}
