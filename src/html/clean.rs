use super::{TagKind, Token, Tokenizer};

/// Reduces arbitrary HTML to the small tag vocabulary the converter understands.
pub trait HtmlCleaner {
    fn clean(&self, html: &str) -> String;
}

impl<F> HtmlCleaner for F
where
    F: Fn(&str) -> String,
{
    fn clean(&self, html: &str) -> String {
        self(html)
    }
}

/// Default cleaner: keeps paragraphs, breaks, lists and inline emphasis, drops
/// every attribute and every other tag (keeping its text).
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicCleaner;

fn kept_tag(name: &str) -> Option<&'static str> {
    let name = match name {
        "div" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "blockquote" | "pre" | "section"
        | "article" | "header" | "footer" => "p",
        "p" => "p",
        "br" => "br",
        "ul" => "ul",
        "ol" => "ol",
        "li" => "li",
        "b" => "b",
        "strong" => "strong",
        "i" => "i",
        "em" => "em",
        "u" => "u",
        "s" => "s",
        "strike" => "strike",
        "del" => "del",
        "sup" => "sup",
        "sub" => "sub",
        _ => return None,
    };
    Some(name)
}

fn skipped_element(name: &str) -> Option<&'static str> {
    match name {
        "script" => Some("script"),
        "style" => Some("style"),
        "head" => Some("head"),
        _ => None,
    }
}

/// Longest reference in the HTML5 table, `&CounterClockwiseContourIntegral;`.
const MAX_ENTITY_LEN: usize = 33;

/// The `&name;` or `&#num;` reference at the start of `s`, if there is one.
fn entity_at(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let end = bytes[1..]
        .iter()
        .take(MAX_ENTITY_LEN)
        .position(|&b| !(b.is_ascii_alphanumeric() || b == b'#'))?
        + 1;
    (bytes[end] == b';').then(|| &s[..=end])
}

/// References XML already understands, which pass through as written.
fn is_passthrough(entity: &str) -> bool {
    let body = &entity[1..entity.len() - 1];
    match body.strip_prefix('#') {
        Some(num) => match num.strip_prefix(['x', 'X']) {
            Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()),
        },
        None => matches!(body, "amp" | "lt" | "gt" | "quot" | "apos" | "nbsp"),
    }
}

fn push_text(out: &mut String, text: &str) {
    let mut rest = text;
    while let Some(i) = rest.find(['<', '>', '&']) {
        out.push_str(&rest[..i]);
        rest = &rest[i..];
        if rest.starts_with('<') {
            out.push_str("&lt;");
            rest = &rest[1..];
            continue;
        }
        if rest.starts_with('>') {
            out.push_str("&gt;");
            rest = &rest[1..];
            continue;
        }
        let Some(entity) = entity_at(rest) else {
            out.push_str("&amp;");
            rest = &rest[1..];
            continue;
        };
        if is_passthrough(entity) {
            out.push_str(entity);
        } else {
            let decoded = html_escape::decode_html_entities(entity);
            if decoded == entity {
                // Unknown to HTML too: keep it as literal text.
                out.push_str("&amp;");
                rest = &rest[1..];
                continue;
            }
            out.push_str(&html_escape::encode_text(&decoded));
        }
        rest = &rest[entity.len()..];
    }
    out.push_str(rest);
}

impl HtmlCleaner for BasicCleaner {
    fn clean(&self, html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut skipping: Option<&'static str> = None;

        for token in Tokenizer::new(html) {
            if let Some(name) = skipping {
                if let Token::Tag(tag) = token
                    && tag.closes(name)
                {
                    skipping = None;
                }
                continue;
            }
            let tag = match token {
                Token::Text(text) => {
                    push_text(&mut out, text);
                    continue;
                }
                Token::Markup(_) => continue,
                Token::Tag(tag) => tag,
            };

            let name = tag.name.to_ascii_lowercase();
            if tag.kind == TagKind::Open
                && let Some(skip) = skipped_element(&name)
            {
                skipping = Some(skip);
                continue;
            }
            let Some(kept) = kept_tag(&name) else {
                log::trace!("Dropping <{}> tag", tag.name);
                continue;
            };
            match (kept, tag.kind) {
                ("br", TagKind::Open | TagKind::SelfClosing) => out.push_str("<br/>"),
                ("br", TagKind::Close) => {}
                (_, TagKind::Open) => {
                    out.push('<');
                    out.push_str(kept);
                    out.push('>');
                }
                (_, TagKind::Close) => {
                    out.push_str("</");
                    out.push_str(kept);
                    out.push('>');
                }
                (_, TagKind::SelfClosing) => {}
            }
        }

        out
    }
}
