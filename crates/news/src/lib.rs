// ABOUTME: News markup extraction library for tibia.com article and archive pages.
// ABOUTME: Re-exports the extractors, records, resolvers, options, and error types.

//! tibianews - structured records from tibia.com news markup.
//!
//! The crate turns an isolated article box or news archive table into
//! [`NewsArticle`] / [`NewsListItem`] records. Fetching the markup and
//! wrapping records in an API envelope are left to the caller.
//!
//! # Example
//!
//! ```
//! use tibianews::{extract_listing, ExtractOptions};
//!
//! let markup = r#"<table><tr class="Odd">
//!   <td>Oct&#160;17&#160;2023</td>
//!   <td><img src="newsicon_technical_small.gif"><div>News&#160;Ticker</div></td>
//!   <td><a href="https://www.tibia.com/news/?subtopic=newsarchive&amp;id=8123&amp;fbegind=1">Server save</a></td>
//! </tr></table>"#;
//!
//! let opts = ExtractOptions::builder().api_host("api.example.com").build();
//! let items = extract_listing(markup, &opts)?;
//! assert_eq!(items[0].id, 8123);
//! assert_eq!(items[0].date, "2023-10-17");
//! # Ok::<(), tibianews::ExtractError>(())
//! ```

pub mod article;
pub mod category;
pub mod date_parse;
pub mod document;
pub mod error;
pub mod listing;
pub mod models;
pub mod news_type;
pub mod options;
pub mod path;
pub mod repair;
pub mod text;

pub use article::{extract_article, extract_article_default};
pub use category::{resolve_category, NewsCategory};
pub use date_parse::{normalize_date, normalize_date_or_raw};
pub use document::load_document;
pub use error::{ExtractError, Result};
pub use listing::{extract_listing, extract_listing_default};
pub use models::{NewsArticle, NewsListItem};
pub use news_type::{resolve_news_type, NewsType, TICKER_SENTINEL};
pub use options::{ApiGeneration, ExtractOptions, ExtractOptionsBuilder, FailurePolicy};
pub use path::StructuralPath;
pub use repair::{repair_glyphs, RepairPass, RepairPipeline};
