// ABOUTME: Rich-text repair passes applied to article markup before text derivation.
// ABOUTME: The default pipeline turns decorative letter_martel_<char> images back into letters.

//! Rich-text repair.
//!
//! Some older articles render their first letter (and occasionally whole
//! words) as per-letter images, e.g.
//! `<img src=".../letters/letter_martel_T.gif" alt="T">`. An image-only
//! text node has no text, so these are rewritten to the literal character
//! before the plain-text form is derived.
//!
//! Passes run once, in order. Each pass must be idempotent on its own
//! output so that re-running the pipeline is a no-op.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a whole letter glyph image element, capturing the letter.
static LETTER_GLYPH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img\b[^>]*?letter_martel_(.)\.(?:gif|png)[^>]*>"#).unwrap()
});

/// A single regex rewrite.
#[derive(Debug, Clone)]
pub struct RepairPass {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl RepairPass {
    /// Compiles a pass. `replacement` uses regex crate syntax (`$1`, `${name}`).
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// The built-in letter glyph pass.
    pub fn letter_glyphs() -> Self {
        Self {
            name: "letter_glyphs".to_string(),
            pattern: (*LETTER_GLYPH_RE).clone(),
            replacement: "$1".to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies the pass, borrowing the input when nothing matched.
    pub fn apply<'a>(&self, html: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(html, self.replacement.as_str())
    }
}

/// Ordered list of repair passes.
#[derive(Debug, Clone)]
pub struct RepairPipeline {
    passes: Vec<RepairPass>,
}

impl Default for RepairPipeline {
    fn default() -> Self {
        Self {
            passes: vec![RepairPass::letter_glyphs()],
        }
    }
}

impl RepairPipeline {
    /// A pipeline with no passes.
    pub fn empty() -> Self {
        Self { passes: Vec::new() }
    }

    /// Appends a pass; passes run in insertion order.
    pub fn with_pass(mut self, pass: RepairPass) -> Self {
        self.passes.push(pass);
        self
    }

    pub fn passes(&self) -> &[RepairPass] {
        &self.passes
    }

    /// Runs every pass once over `html`.
    pub fn apply(&self, html: &str) -> String {
        let mut current = html.to_string();
        for pass in &self.passes {
            let repaired = match pass.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(repaired) => repaired,
            };
            tracing::debug!(pass = pass.name(), "repaired rich text");
            current = repaired;
        }
        current
    }
}

/// Rewrites letter glyph images with the default pipeline.
pub fn repair_glyphs(html: &str) -> String {
    RepairPipeline::default().apply(html)
}
