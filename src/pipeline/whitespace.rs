use std::sync::LazyLock;

use regex::Regex;

static NON_BREAKING_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&nbsp;|&#160;|&#xa0;").expect("invalid non-breaking space regex")
});

/// Two or more whitespace characters, or any single one that is not a plain space.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}|[^\S ]").expect("invalid whitespace regex"));

const TEXT_OPEN: &str = "<w:t>";
const PRESERVED_TEXT_OPEN: &str = "<w:t xml:space='preserve'>";

pub(crate) fn normalize_whitespace(markup: &str) -> String {
    let markup = NON_BREAKING_SPACE.replace_all(markup, " ");
    let markup = markup.replace(TEXT_OPEN, PRESERVED_TEXT_OPEN);
    WHITESPACE_RUN.replace_all(&markup, " ").into_owned()
}
