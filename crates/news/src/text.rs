// ABOUTME: Text normalization helpers shared by the resolvers and extractors.
// ABOUTME: Folds non-breaking spaces and collapses whitespace runs.

/// Non-breaking space spellings seen in the news markup, decoded or not.
const NBSP_FORMS: &[&str] = &["\u{a0}", "&nbsp;", "&#160;", "&#xa0;", "&#xA0;"];

/// Replaces every non-breaking space form with an ordinary space.
pub fn fold_nbsp(s: &str) -> String {
    let mut result = s.to_string();
    for form in NBSP_FORMS {
        if result.contains(form) {
            result = result.replace(form, " ");
        }
    }
    result
}

/// Collapses multiple whitespace characters into single spaces and trims.
pub fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
        } else {
            result.push(c);
            last_was_space = false;
        }
    }

    result.trim().to_string()
}

/// Folds non-breaking spaces, then collapses whitespace.
pub fn normalize_spaces(s: &str) -> String {
    collapse_whitespace(&fold_nbsp(s))
}
