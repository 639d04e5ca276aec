mod clean;

pub use clean::{BasicCleaner, HtmlCleaner};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TagKind {
    Open,
    Close,
    SelfClosing,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Tag<'a> {
    pub(crate) kind: TagKind,
    pub(crate) name: &'a str,
    pub(crate) raw: &'a str,
    /// Byte offset of `<` in the tokenized source.
    pub(crate) start: usize,
    /// Byte offset just past `>`.
    pub(crate) end: usize,
}

impl Tag<'_> {
    pub(crate) fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub(crate) fn is_list(&self) -> bool {
        self.is("ul") || self.is("ol")
    }

    pub(crate) fn opens(&self, name: &str) -> bool {
        self.kind == TagKind::Open && self.is(name)
    }

    pub(crate) fn closes(&self, name: &str) -> bool {
        self.kind == TagKind::Close && self.is(name)
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Token<'a> {
    Text(&'a str),
    Tag(Tag<'a>),
    /// Comments, doctypes and processing instructions.
    Markup(&'a str),
}

impl<'a> Token<'a> {
    pub(crate) fn raw(&self) -> &'a str {
        match *self {
            Token::Text(s) | Token::Markup(s) => s,
            Token::Tag(tag) => tag.raw,
        }
    }
}

pub(crate) struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Tokenizer { src, pos: 0 }
    }

    fn text_until_next_tag(&mut self, from: usize) -> Token<'a> {
        let bytes = self.src.as_bytes();
        let mut end = from;
        while end < bytes.len() {
            if bytes[end] == b'<' && end > self.pos && starts_tag(&bytes[end..]) {
                break;
            }
            end += 1;
        }
        let text = &self.src[self.pos..end];
        self.pos = end;
        Token::Text(text)
    }
}

fn starts_tag(rest: &[u8]) -> bool {
    match rest.get(1) {
        Some(b'/') => rest.get(2).is_some_and(|c| c.is_ascii_alphabetic()),
        Some(b'!') | Some(b'?') => true,
        Some(c) => c.is_ascii_alphabetic(),
        None => false,
    }
}

/// Find the `>` closing a tag that starts at `start`, skipping quoted attribute values.
fn tag_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut quote = None;
    for (i, &b) in bytes.iter().enumerate().skip(start + 1) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(i + 1),
            None if b == b'<' => return None,
            None => {}
        }
    }
    None
}

fn parse_tag(raw: &str, start: usize) -> Tag<'_> {
    let inner = &raw[1..raw.len() - 1];
    let (kind, body) = match inner.strip_prefix('/') {
        Some(body) => (TagKind::Close, body),
        None if inner.trim_end().ends_with('/') => (TagKind::SelfClosing, inner),
        None => (TagKind::Open, inner),
    };
    let name_len = body
        .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .unwrap_or(body.len());
    Tag {
        kind,
        name: &body[..name_len],
        raw,
        start,
        end: start + raw.len(),
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let src = self.src;
        let bytes = src.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }
        if bytes[start] != b'<' || !starts_tag(&bytes[start..]) {
            return Some(self.text_until_next_tag(start));
        }

        let rest = &src[start..];
        if rest.starts_with("<!--") {
            let end = rest[4..]
                .find("-->")
                .map(|i| start + 4 + i + 3)
                .unwrap_or(bytes.len());
            self.pos = end;
            return Some(Token::Markup(&src[start..end]));
        }

        let Some(end) = tag_end(bytes, start) else {
            // A lone `<` that never closes is plain text.
            return Some(self.text_until_next_tag(start + 1));
        };
        self.pos = end;
        let raw = &src[start..end];
        if matches!(bytes[start + 1], b'!' | b'?') {
            return Some(Token::Markup(raw));
        }
        Some(Token::Tag(parse_tag(raw, start)))
    }
}
