use crate::model::Styles;
use crate::wml;

const TEXT_OPEN: &str = "<w:t>";

pub(crate) fn trim_boundaries(markup: &str, styles: &Styles) -> String {
    // Only the openers the pipeline itself writes count as vacuous.
    let mut openers = vec![wml::OPEN_PARAGRAPH.to_owned()];
    let styled = wml::open_styled_paragraph(styles);
    if styled != wml::OPEN_PARAGRAPH {
        openers.push(styled);
    }
    // <w:p>…<w:t></w:t></w:r></w:p>
    let leading: Vec<String> = openers
        .iter()
        .map(|open| format!("{open}{}", wml::CLOSE_PARAGRAPH))
        .collect();
    // <w:t></w:t></w:r></w:p><w:p>…<w:t>, an empty text closed only to reopen
    let trailing: Vec<String> = openers
        .iter()
        .map(|open| format!("{TEXT_OPEN}{}{open}", wml::CLOSE_PARAGRAPH))
        .collect();

    let mut out = markup.to_owned();
    loop {
        let before = out.len();
        while let Some(prefix) = leading.iter().find(|p| out.starts_with(p.as_str())) {
            out.drain(..prefix.len());
        }
        while let Some(suffix) = trailing.iter().find(|s| out.ends_with(s.as_str())) {
            out.truncate(out.len() - suffix.len());
            out.push_str(TEXT_OPEN);
        }
        if out.len() == before {
            return out;
        }
    }
}
