use std::collections::BTreeSet;
use std::iter::Peekable;

use crate::html::{TagKind, Token, Tokenizer};

/// Rewrites inline formatting left in the markup into run properties.
pub trait PropertyProcessor {
    fn process(&self, markup: &str) -> String;
}

impl<F> PropertyProcessor for F
where
    F: Fn(&str) -> String,
{
    fn process(&self, markup: &str) -> String {
        self(markup)
    }
}

/// Default processor: splits runs at `<b>`, `<i>`, `<u>`, `<s>`, `<sup>`,
/// `<sub>` (and their aliases) and removes every other HTML tag.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineFormatter;

// Declaration order is the order CT_RPr wants them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Format {
    Bold,
    Italic,
    Strike,
    Underline,
    Superscript,
    Subscript,
}

impl Format {
    fn from_tag(name: &str) -> Option<Format> {
        let format = match name.to_ascii_lowercase().as_str() {
            "b" | "strong" => Format::Bold,
            "i" | "em" => Format::Italic,
            "s" | "strike" | "del" => Format::Strike,
            "u" => Format::Underline,
            "sup" => Format::Superscript,
            "sub" => Format::Subscript,
            _ => return None,
        };
        Some(format)
    }

    fn xml(self) -> &'static str {
        match self {
            Format::Bold => "<w:b/>",
            Format::Italic => "<w:i/>",
            Format::Strike => "<w:strike/>",
            Format::Underline => "<w:u w:val='single'/>",
            Format::Superscript => "<w:vertAlign w:val='superscript'/>",
            Format::Subscript => "<w:vertAlign w:val='subscript'/>",
        }
    }

    fn is_vertical(self) -> bool {
        matches!(self, Format::Superscript | Format::Subscript)
    }
}

#[derive(Default)]
struct RunWriter {
    out: String,
    active: Vec<Format>,
    /// The current run's own `w:rPr` content, reapplied to every run split off it.
    base: String,
    run_start: Option<usize>,
    /// Output offset just past the current `w:t` opener while inside text.
    text_start: Option<usize>,
    /// The current run was started by a split after text, not by the markup.
    split: bool,
    /// Swallow the next `</w:r>`; its run was dropped.
    skip_run_close: bool,
}

impl RunWriter {
    fn properties(&self) -> String {
        // Only one vertAlign is allowed; the innermost wins.
        let vertical = self.active.iter().rev().copied().find(|f| f.is_vertical());
        let formats: BTreeSet<Format> = self
            .active
            .iter()
            .copied()
            .filter(|f| !f.is_vertical())
            .chain(vertical)
            .collect();
        let mut xml = self.base.clone();
        for format in formats {
            xml.push_str(format.xml());
        }
        xml
    }

    fn push_properties(&mut self) {
        let props = self.properties();
        if !props.is_empty() {
            self.out.push_str("<w:rPr>");
            self.out.push_str(&props);
            self.out.push_str("</w:rPr>");
        }
    }

    fn open_run<'a, I>(&mut self, raw: &str, tokens: &mut Peekable<I>)
    where
        I: Iterator<Item = Token<'a>>,
    {
        self.base.clear();
        let has_properties = matches!(tokens.peek(), Some(Token::Tag(tag)) if tag.opens("w:rPr"));
        if has_properties {
            tokens.next();
            for token in tokens.by_ref() {
                if let Token::Tag(tag) = token
                    && tag.closes("w:rPr")
                {
                    break;
                }
                self.base.push_str(token.raw());
            }
        }
        self.run_start = Some(self.out.len());
        self.split = false;
        self.out.push_str(raw);
        self.push_properties();
    }

    /// End the current run at this point and continue the text in a new run
    /// carrying the active formats. A run that received no text is dropped.
    fn split_run(&mut self) {
        let Some(text_start) = self.text_start else {
            return;
        };
        match self.run_start {
            Some(run_start) if self.out.len() == text_start => self.out.truncate(run_start),
            _ => {
                self.out.push_str("</w:t></w:r>");
                self.split = true;
            }
        }
        self.run_start = Some(self.out.len());
        self.out.push_str("<w:r>");
        self.push_properties();
        self.out.push_str("<w:t>");
        self.text_start = Some(self.out.len());
    }

    /// A split run that ends without text is removed together with its close.
    fn close_text(&mut self, raw: &str) {
        match self.run_start {
            Some(run_start) if self.split && self.text_start == Some(self.out.len()) => {
                self.out.truncate(run_start);
                self.skip_run_close = true;
            }
            _ => self.out.push_str(raw),
        }
        self.text_start = None;
    }
}

impl PropertyProcessor for InlineFormatter {
    fn process(&self, markup: &str) -> String {
        let mut writer = RunWriter {
            out: String::with_capacity(markup.len()),
            ..RunWriter::default()
        };
        let mut tokens = Tokenizer::new(markup).peekable();

        while let Some(token) = tokens.next() {
            let tag = match token {
                Token::Text(text) => {
                    writer.out.push_str(text);
                    continue;
                }
                Token::Markup(_) => continue,
                Token::Tag(tag) => tag,
            };

            if tag.name.starts_with("w:") {
                match (tag.kind, tag.name) {
                    (TagKind::Open, "w:r") => writer.open_run(tag.raw, &mut tokens),
                    (TagKind::Open, "w:t") => {
                        writer.out.push_str(tag.raw);
                        writer.text_start = Some(writer.out.len());
                    }
                    (TagKind::Close, "w:t") => writer.close_text(tag.raw),
                    (TagKind::Close, "w:r") => {
                        if !std::mem::take(&mut writer.skip_run_close) {
                            writer.out.push_str(tag.raw);
                        }
                        writer.run_start = None;
                    }
                    _ => writer.out.push_str(tag.raw),
                }
                continue;
            }

            let Some(format) = Format::from_tag(tag.name) else {
                log::trace!("Removing <{}> tag", tag.name);
                continue;
            };
            match tag.kind {
                TagKind::Open => {
                    writer.active.push(format);
                    writer.split_run();
                }
                TagKind::Close => match writer.active.iter().rposition(|f| *f == format) {
                    Some(i) => {
                        writer.active.remove(i);
                        writer.split_run();
                    }
                    None => log::debug!("Ignoring unmatched </{}>", tag.name),
                },
                TagKind::SelfClosing => {}
            }
        }

        writer.out
    }
}
