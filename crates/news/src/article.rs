// ABOUTME: Single news article extraction from an article box fragment.
// ABOUTME: Reads the headline (icon, date, title or ticker sentinel) and the repaired content block.

//! Article extraction.
//!
//! An article box looks like:
//!
//! ```html
//! <div class="NewsHeadline">
//!   <div class="NewsHeadlineBackground">
//!     <img src=".../newsicon_technical_big.gif" class="NewsHeadlineIcon">
//!     <div class="NewsHeadlineDate">Oct 17 2023 - </div>
//!     <div class="NewsHeadlineText">News Ticker</div>
//!   </div>
//! </div>
//! <table><tr><td class="NewsTableContainer">...</td></tr></table>
//! ```
//!
//! Tickers carry the `News Ticker` sentinel instead of a title and
//! sometimes omit the `<p>` wrapper around their text.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use crate::category::resolve_category;
use crate::date_parse::normalize_date_or_raw;
use crate::document::{element_text, load_document, markup_to_text, select_first};
use crate::error::{ExtractError, Result};
use crate::models::NewsArticle;
use crate::news_type::{NewsType, TICKER_SENTINEL};
use crate::options::ExtractOptions;

static HEADLINE: Lazy<Selector> = Lazy::new(|| Selector::parse(".NewsHeadline").unwrap());
static HEADLINE_ICON: Lazy<Selector> = Lazy::new(|| Selector::parse("img[src]").unwrap());
static HEADLINE_DATE: Lazy<Selector> = Lazy::new(|| Selector::parse(".NewsHeadlineDate").unwrap());
static HEADLINE_TEXT: Lazy<Selector> = Lazy::new(|| Selector::parse(".NewsHeadlineText").unwrap());
static CONTENT_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".NewsTableContainer").unwrap());
static CONTENT_FALLBACK: Lazy<Selector> = Lazy::new(|| Selector::parse("table td").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Extracts one article from its article box markup.
///
/// `id` and `source_url` come from the caller; everything else is read from
/// the markup. Fails on markup without tag structure, and under the strict
/// policy on a missing or empty content block.
#[tracing::instrument(skip(markup, opts), fields(generation = %opts.generation))]
pub fn extract_article(
    id: u32,
    source_url: &str,
    markup: &str,
    opts: &ExtractOptions,
) -> Result<NewsArticle> {
    let doc = load_document(markup)?;
    let root = doc.root_element();

    let mut article = NewsArticle {
        id,
        source_url: source_url.to_string(),
        ..Default::default()
    };

    match root.select(&HEADLINE).next() {
        Some(headline) => read_headline(headline, &mut article),
        None => tracing::warn!(id, "article has no headline block"),
    }

    let block = match select_first(root, &[&*CONTENT_CONTAINER, &*CONTENT_FALLBACK]) {
        Some(block) => block,
        None if opts.policy.is_strict() => {
            return Err(ExtractError::structural(format!(
                "article {} has no content block",
                id
            )));
        }
        None => {
            tracing::warn!(id, "article has no content block");
            return Ok(article);
        }
    };

    if block.children().next().is_none() {
        if opts.policy.is_strict() {
            return Err(ExtractError::structural(format!(
                "article {} has an empty content block",
                id
            )));
        }
        tracing::warn!(id, "article content block is empty");
        return Ok(article);
    }

    let raw_html = if article.news_type.is_ticker() {
        ticker_markup(block)
    } else {
        block.inner_html()
    };

    article.content_html = opts.repairs.apply(raw_html.trim());
    article.content = markup_to_text(&article.content_html);

    tracing::debug!(
        id,
        news_type = ?article.news_type,
        text_len = article.content.len(),
        "extracted article"
    );
    Ok(article)
}

/// Fills category, date, and title/type from the headline block.
fn read_headline(headline: ElementRef, article: &mut NewsArticle) {
    if let Some(icon) = headline
        .select(&HEADLINE_ICON)
        .next()
        .and_then(|img| img.value().attr("src"))
    {
        article.category = resolve_category(icon);
    }

    match headline.select(&HEADLINE_DATE).next() {
        Some(date) => article.date = normalize_date_or_raw(&element_text(date)),
        None => tracing::warn!(id = article.id, "headline has no date"),
    }

    if let Some(text) = headline.select(&HEADLINE_TEXT).next() {
        let candidate = element_text(text);
        if candidate == TICKER_SENTINEL {
            article.news_type = NewsType::Ticker;
        } else {
            article.title = candidate;
        }
    }
}

/// Ticker body: the first non-empty paragraph, or the whole block when the
/// paragraph wrapper is missing.
fn ticker_markup(block: ElementRef) -> String {
    block
        .select(&PARAGRAPH)
        .find(|p| !element_text(*p).is_empty())
        .unwrap_or(block)
        .inner_html()
}

/// Extracts an article with default (current generation) options.
pub fn extract_article_default(id: u32, source_url: &str, markup: &str) -> Result<NewsArticle> {
    extract_article(id, source_url, markup, &ExtractOptions::default())
}
