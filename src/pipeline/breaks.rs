use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::model::ConversionContext;
use crate::wml;

static PARAGRAPH_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p\s*>").expect("invalid paragraph close regex"));
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("invalid line break regex"));

/// Replace every `</p>` and `<br>` with a paragraph boundary whose new
/// paragraph carries the configured styling.
pub(crate) fn expand_breaks(markup: &str, ctx: &ConversionContext) -> String {
    let boundary = wml::close_and_open(ctx.styles);
    let markup = PARAGRAPH_CLOSE.replace_all(markup, NoExpand(&boundary));
    LINE_BREAK
        .replace_all(&markup, NoExpand(&boundary))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Styles;
    use pretty_assertions::assert_eq;

    fn expand(markup: &str, styles: &Styles) -> String {
        expand_breaks(markup, &ConversionContext::new(styles))
    }

    #[test]
    fn paragraphs_and_breaks_split() {
        let styles = Styles::default();
        assert_eq!(
            expand("a</p>b<br>c<BR/>d<br />e</P >", &styles),
            "a</w:t></w:r></w:p><w:p><w:r><w:t>b\
             </w:t></w:r></w:p><w:p><w:r><w:t>c\
             </w:t></w:r></w:p><w:p><w:r><w:t>d\
             </w:t></w:r></w:p><w:p><w:r><w:t>e\
             </w:t></w:r></w:p><w:p><w:r><w:t>"
        );
    }

    #[test]
    fn new_paragraph_is_styled() {
        let styles = Styles {
            run: Some("<w:b/>".into()),
            paragraph: Some("<w:jc w:val='center'/>".into()),
        };
        assert_eq!(
            expand("a<br/>b", &styles),
            "a</w:t></w:r></w:p><w:p><w:pPr><w:jc w:val='center'/></w:pPr>\
             <w:r><w:rPr><w:b/></w:rPr><w:t>b"
        );
    }

    #[test]
    fn style_fragments_are_inserted_literally() {
        let styles = Styles {
            run: Some("<w:t>$1</w:t>".into()),
            paragraph: None,
        };
        assert!(expand("a<br>b", &styles).contains("$1"));
    }

    #[test]
    fn wordprocessing_tags_are_untouched() {
        let markup = "<w:p><w:r><w:t>x</w:t></w:r></w:p>";
        assert_eq!(expand(markup, &Styles::default()), markup);
    }
}
