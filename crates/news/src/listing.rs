// ABOUTME: News archive listing extraction into ordered NewsListItem records.
// ABOUTME: Reads icon, type and date cells by structural path and derives ids from row links.

//! Listing extraction.
//!
//! Archive rows look like:
//!
//! ```html
//! <tr class="Odd">
//!   <td>Oct&#160;17&#160;2023</td>
//!   <td><img src=".../newsicon_community_small.gif"><div>News&#160;Ticker</div></td>
//!   <td><a href="https://www.tibia.com/news/?subtopic=newsarchive&amp;id=8123&amp;fbegind=...">Title</a></td>
//! </tr>
//! ```
//!
//! The date and type cells have no class hook, so they are addressed by
//! [`StructuralPath`] from the row.

use std::num::IntErrorKind;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use url::Url;

use crate::category::resolve_category;
use crate::date_parse::normalize_date_or_raw;
use crate::document::{element_text, load_document};
use crate::error::{ExtractError, Result};
use crate::models::NewsListItem;
use crate::news_type::resolve_news_type;
use crate::options::ExtractOptions;
use crate::path::StructuralPath;

static ROWS: Lazy<Selector> = Lazy::new(|| Selector::parse("tr.Odd, tr.Even").unwrap());
static ROW_ICON: Lazy<Selector> = Lazy::new(|| Selector::parse("img[src]").unwrap());
static ROW_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Base for resolving relative archive links.
static SOURCE_BASE: Lazy<Url> = Lazy::new(|| Url::parse("https://www.tibia.com/").unwrap());

/// First cell: the date text.
const DATE_PATH: StructuralPath = StructuralPath(&[0]);
/// Second cell, element after the icon: the type text.
const TYPE_PATH: StructuralPath = StructuralPath(&[1, 1]);

/// Extracts every archive row, in document order.
///
/// Every matched row yields one item. A row link that is not a URL fails the
/// whole listing. Rows missing their date, type or link keep zero values for
/// those fields unless the policy is strict.
#[tracing::instrument(skip(markup, opts), fields(generation = %opts.generation))]
pub fn extract_listing(markup: &str, opts: &ExtractOptions) -> Result<Vec<NewsListItem>> {
    let doc = load_document(markup)?;

    let items = doc
        .select(&ROWS)
        .enumerate()
        .map(|(index, row)| extract_row(index, row, opts))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = items.len(), "extracted news listing");
    Ok(items)
}

/// Extracts a listing with default (current generation) options and the given API host.
pub fn extract_listing_default(markup: &str, api_host: &str) -> Result<Vec<NewsListItem>> {
    let opts = ExtractOptions::builder().api_host(api_host).build();
    extract_listing(markup, &opts)
}

fn extract_row(index: usize, row: ElementRef, opts: &ExtractOptions) -> Result<NewsListItem> {
    let mut item = NewsListItem::default();

    if let Some(icon) = row
        .select(&ROW_ICON)
        .next()
        .and_then(|img| img.value().attr("src"))
    {
        item.category = resolve_category(icon);
    }

    match TYPE_PATH.text(row) {
        Some(text) => item.news_type = resolve_news_type(&text),
        None => tracing::warn!(row = index, "listing row has no type text"),
    }

    match DATE_PATH.text(row) {
        Some(text) => item.date = normalize_date_or_raw(&text),
        None => tracing::warn!(row = index, "listing row has no date text"),
    }

    let Some(anchor) = row.select(&ROW_LINK).next() else {
        if opts.policy.is_strict() {
            return Err(ExtractError::structural(format!("listing row {} has no link", index)));
        }
        tracing::warn!(row = index, "listing row has no link");
        return Ok(item);
    };

    item.news = element_text(anchor);

    let href = anchor.value().attr("href").unwrap_or_default();
    let link = parse_link(href).map_err(|e| ExtractError::link(href, e))?;

    match news_id(&link) {
        Ok((raw, id)) => {
            item.id = id;
            item.source_url = canonical_source_url(href, &raw).unwrap_or_else(|| href.to_string());
            item.api_url = opts.api_url(id);
        }
        Err(reason) if opts.policy.is_strict() => {
            return Err(ExtractError::link(href, reason));
        }
        Err(reason) => {
            tracing::warn!(row = index, href, reason, "listing link has no usable id");
            item.source_url = href.to_string();
        }
    }

    Ok(item)
}

/// Parses an archive link, resolving relative links against the news site.
fn parse_link(href: &str) -> std::result::Result<Url, url::ParseError> {
    match Url::parse(href) {
        Err(url::ParseError::RelativeUrlWithoutBase) => SOURCE_BASE.join(href),
        other => other,
    }
}

/// The raw `id` query value and its numeric form, or why there is none.
fn news_id(link: &Url) -> std::result::Result<(String, u32), &'static str> {
    let raw = link
        .query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .ok_or("missing id parameter")?;
    match raw.trim().parse::<u32>() {
        Ok(id) => Ok((raw, id)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err("id parameter out of range"),
        Err(_) => Err("id parameter is not numeric"),
    }
}

/// Cuts `href` right after its `id=<raw>` parameter, dropping trailing query noise.
fn canonical_source_url(href: &str, raw_id: &str) -> Option<String> {
    let token = format!("id={}", raw_id);
    let bytes = href.as_bytes();
    let mut from = 0;

    while let Some(rel) = href[from..].find(&token) {
        let start = from + rel;
        let end = start + token.len();
        let starts_param = start > 0 && matches!(bytes[start - 1], b'?' | b'&' | b';');
        let ends_value = bytes.get(end).map_or(true, |b| !b.is_ascii_alphanumeric());
        if starts_param && ends_value {
            return Some(href[..end].to_string());
        }
        from = start + 1;
    }
    None
}
