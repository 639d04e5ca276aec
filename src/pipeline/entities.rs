use std::sync::LazyLock;

use regex::{Captures, Regex};

// Private-use characters: nothing later stages scan for or collapse.
const LT_PLACEHOLDER: &str = "\u{E000}lt\u{E001}";
const GT_PLACEHOLDER: &str = "\u{E000}gt\u{E001}";

static ANGLE_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&(?:amp;)?(lt|gt);").expect("invalid angle bracket entity regex")
});

pub(crate) fn guard(input: &str) -> String {
    ANGLE_ENTITY
        .replace_all(input, |caps: &Captures| {
            if caps[1].eq_ignore_ascii_case("lt") {
                LT_PLACEHOLDER
            } else {
                GT_PLACEHOLDER
            }
        })
        .into_owned()
}

pub(crate) fn unguard(input: &str) -> String {
    input
        .replace(LT_PLACEHOLDER, "&lt;")
        .replace(GT_PLACEHOLDER, "&gt;")
}
