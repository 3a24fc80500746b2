// Text normalization for catalog descriptions.
//
// Three rewrites run in a fixed order: the furniture synonym collapse, tag
// stripping, then punctuation stripping. The pass repeats until the text
// stops changing, so the result is a fixed point and normalizing twice is
// the same as normalizing once.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex_lite::Regex;

/// Compound term collapsed to its base word before matching.
pub const COMPOUND_TERM: &str = "Диван-кровать";

/// Canonical replacement for [`COMPOUND_TERM`].
pub const CANONICAL_TERM: &str = "Диван";

/// Characters removed from every description.
pub const STRIPPED_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*', '(', ')'];

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<.*?>").expect("tag pattern is valid"))
}

/// Normalize free text for vectorization.
///
/// Empty input yields an empty string. Never fails.
pub fn normalize(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = normalize_once(&current);
        // Every effective rewrite shortens the text, so equal length means
        // nothing matched on this pass.
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}

/// A single (synonym, tags, punctuation) pass.
fn normalize_once(text: &str) -> String {
    let collapsed = collapse_synonyms(text);
    let untagged = strip_tags(&collapsed);
    strip_punctuation(&untagged)
}

fn collapse_synonyms(text: &str) -> Cow<'_, str> {
    if text.contains(COMPOUND_TERM) {
        Cow::Owned(text.replace(COMPOUND_TERM, CANONICAL_TERM))
    } else {
        Cow::Borrowed(text)
    }
}

fn strip_tags(text: &str) -> Cow<'_, str> {
    tag_pattern().replace_all(text, "")
}

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect()
}
