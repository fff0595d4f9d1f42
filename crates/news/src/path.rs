// ABOUTME: Structural field paths: element-child index chains from an anchor node.
// ABOUTME: Used for listing cells that carry no class or attribute hook.

use scraper::ElementRef;

use crate::document::first_text;

/// A chain of element-child indices, resolved from an anchor element.
///
/// Text and comment nodes are not counted, so whitespace between cells
/// never shifts the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralPath(pub &'static [usize]);

impl StructuralPath {
    /// Walks the path; `None` when any step is missing.
    pub fn resolve<'a>(&self, anchor: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.0.iter().try_fold(anchor, |current, &index| {
            current.children().filter_map(ElementRef::wrap).nth(index)
        })
    }

    /// First direct text of the element at the end of the path.
    pub fn text(&self, anchor: ElementRef) -> Option<String> {
        self.resolve(anchor).and_then(first_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    const ROW: &str = r#"<table><tr class="Odd">
        <td>Oct&#160;17&#160;2023</td>
        <td><img src="newsicon_technical_small.gif"> <div>News&#160;Ticker</div></td>
    </tr></table>"#;

    fn row(doc: &Html) -> ElementRef<'_> {
        let sel = Selector::parse("tr.Odd").unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn resolves_nested_cells() {
        let doc = Html::parse_fragment(ROW);
        let row = row(&doc);
        assert_eq!(StructuralPath(&[0]).text(row).as_deref(), Some("Oct 17 2023"));
        assert_eq!(StructuralPath(&[1, 1]).text(row).as_deref(), Some("News Ticker"));
    }

    #[test]
    fn empty_path_is_the_anchor() {
        let doc = Html::parse_fragment(ROW);
        let row = row(&doc);
        assert_eq!(StructuralPath(&[]).resolve(row), Some(row));
    }

    #[test]
    fn missing_step_yields_none() {
        let doc = Html::parse_fragment(ROW);
        let row = row(&doc);
        assert!(StructuralPath(&[5]).resolve(row).is_none());
        assert!(StructuralPath(&[1, 0]).text(row).is_none());
    }
}
