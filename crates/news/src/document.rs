// ABOUTME: Document loading and text helpers on top of scraper's HTML tree.
// ABOUTME: Rejects markup without any tag structure and derives normalized plain text.

use ego_tree::iter::Edge;
use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{ExtractError, Result};
use crate::text::normalize_spaces;

/// Elements that separate words in the plain-text rendering.
const BLOCK_TAGS: &[&str] = &[
    "address", "blockquote", "br", "dd", "div", "dl", "dt", "h1", "h2", "h3", "h4", "h5",
    "h6", "hr", "li", "ol", "p", "pre", "table", "tbody", "td", "th", "thead", "tr", "ul",
];

fn is_block(tag: &str) -> bool {
    BLOCK_TAGS.iter().any(|b| b.eq_ignore_ascii_case(tag))
}

/// Parses a markup fragment.
///
/// The HTML parser itself never rejects input, so a fragment counts as
/// unparseable when it yields no element at all (empty input, bare text,
/// stray angle brackets).
pub fn load_document(markup: &str) -> Result<Html> {
    let doc = Html::parse_fragment(markup);
    let has_elements = doc
        .root_element()
        .descendants()
        .skip(1)
        .any(|node| node.value().is_element());

    if !has_elements {
        return Err(ExtractError::parse(format!(
            "no tag structure in {} bytes of markup",
            markup.len()
        )));
    }
    Ok(doc)
}

/// Returns the first element matching any of `selectors`, trying them in order.
pub fn select_first<'a>(scope: ElementRef<'a>, selectors: &[&Selector]) -> Option<ElementRef<'a>> {
    selectors
        .iter()
        .find_map(|selector| scope.select(selector).next())
}

/// Concatenated descendant text, whitespace-normalized.
pub fn element_text(el: ElementRef) -> String {
    normalize_spaces(&el.text().collect::<String>())
}

/// Plain-text rendering of an element: block boundaries become spaces,
/// inline markup is dropped, whitespace is normalized.
pub fn plain_text(el: ElementRef) -> String {
    let mut out = String::new();
    for edge in el.traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Text(text) => out.push_str(&**text),
                Node::Element(e) if is_block(e.name()) => out.push(' '),
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(e) = node.value() {
                    if is_block(e.name()) {
                        out.push(' ');
                    }
                }
            }
        }
    }
    normalize_spaces(&out)
}

/// Plain text of a markup fragment.
pub fn markup_to_text(markup: &str) -> String {
    plain_text(Html::parse_fragment(markup).root_element())
}

/// First non-blank text node directly under `el`, whitespace-normalized.
pub fn first_text(el: ElementRef) -> Option<String> {
    el.children()
        .filter_map(|child| child.value().as_text().map(|t| normalize_spaces(t)))
        .find(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_markup_without_tags() {
        assert!(load_document("").unwrap_err().is_parse());
        assert!(load_document("just some words").unwrap_err().is_parse());
        assert!(load_document("<<<>>>").unwrap_err().is_parse());
    }

    #[test]
    fn accepts_partial_markup() {
        let doc = load_document("<div class=\"NewsHeadline\"><span>unclosed").unwrap();
        let sel = Selector::parse(".NewsHeadline").unwrap();
        assert_eq!(doc.select(&sel).count(), 1);
    }

    #[test]
    fn select_first_respects_selector_order() {
        let doc = load_document("<div><p class=\"b\">B</p><p class=\"a\">A</p></div>").unwrap();
        let a = Selector::parse(".a").unwrap();
        let b = Selector::parse(".b").unwrap();
        let missing = Selector::parse(".missing").unwrap();

        let found = select_first(doc.root_element(), &[&missing, &a, &b]).unwrap();
        assert_eq!(element_text(found), "A");
        assert!(select_first(doc.root_element(), &[&missing]).is_none());
    }

    #[test]
    fn plain_text_separates_blocks() {
        assert_eq!(
            markup_to_text("<p>First&nbsp;line</p><p>Second <b>bold</b> line</p>"),
            "First line Second bold line"
        );
        assert_eq!(markup_to_text("one<br>two"), "one two");
    }

    #[test]
    fn first_text_skips_blank_nodes_and_descendants() {
        let doc = load_document("<div>\n  <span>nested</span> Oct&#160;17&#160;2023 </div>").unwrap();
        let sel = Selector::parse("div").unwrap();
        let div = doc.select(&sel).next().unwrap();
        assert_eq!(first_text(div).as_deref(), Some("Oct 17 2023"));
    }
}
