use std::fmt::Write;

use crate::model::Styles;

pub(crate) const OPEN_PARAGRAPH: &str = "<w:p><w:r><w:t>";
pub(crate) const CLOSE_PARAGRAPH: &str = "</w:t></w:r></w:p>";

/// Deepest `w:ilvl` a numbering definition can describe.
pub(crate) const MAX_LIST_LEVEL: u32 = 8;

pub(crate) fn paragraph_properties(styles: &Styles) -> String {
    styles
        .paragraph()
        .map(|p| format!("<w:pPr>{p}</w:pPr>"))
        .unwrap_or_default()
}

pub(crate) fn run_properties(styles: &Styles) -> String {
    styles
        .run()
        .map(|r| format!("<w:rPr>{r}</w:rPr>"))
        .unwrap_or_default()
}

/// Opening of a paragraph carrying the configured paragraph and run styling.
pub(crate) fn open_styled_paragraph(styles: &Styles) -> String {
    format!(
        "<w:p>{}<w:r>{}<w:t>",
        paragraph_properties(styles),
        run_properties(styles)
    )
}

pub(crate) fn close_and_open(styles: &Styles) -> String {
    let mut xml = String::from(CLOSE_PARAGRAPH);
    xml.push_str(&open_styled_paragraph(styles));
    xml
}

/// Close the current paragraph and open a numbered list paragraph holding `text`.
pub(crate) fn list_item(level: u32, num_id: u32, styles: &Styles, text: &str) -> String {
    let run = run_properties(styles);
    let mut xml = String::from(CLOSE_PARAGRAPH);
    let _ = write!(
        xml,
        "<w:p><w:pPr><w:pStyle w:val='ListParagraph'/>\
         <w:numPr><w:ilvl w:val='{level}'/><w:numId w:val='{num_id}'/></w:numPr>\
         {}{run}</w:pPr><w:r>{run}<w:t xml:space='preserve'>{text}",
        styles.paragraph().unwrap_or_default(),
    );
    xml
}
