use crate::html::{Tag, TagKind, Token, Tokenizer};
use crate::model::ConversionContext;
use crate::wml;

enum Piece<'a> {
    /// Inline content of one item at the block's own level.
    Item(&'a str),
    /// A nested block, already resolved to paragraphs.
    Resolved(String),
    /// Anything the resolver could not match, copied through.
    Verbatim(&'a str),
}

/// Every `<ul>`, `<ol>` and `<li>` tag of the buffer, paired up in one pass.
struct Structure<'a> {
    tags: Vec<Tag<'a>>,
    /// Index of the tag closing each open tag, if it has one.
    partner: Vec<Option<usize>>,
}

impl<'a> Structure<'a> {
    fn scan(src: &'a str) -> Self {
        let tags: Vec<Tag<'a>> = Tokenizer::new(src)
            .filter_map(|token| match token {
                Token::Tag(tag) if tag.is_list() || tag.is("li") => Some(tag),
                _ => None,
            })
            .collect();
        let mut partner = vec![None; tags.len()];

        // Open lists, each with the items still open directly inside it.
        // The bottom frame holds items found outside any list.
        let mut lists: Vec<usize> = Vec::new();
        let mut items: Vec<Vec<usize>> = vec![Vec::new()];

        for (i, tag) in tags.iter().enumerate() {
            match (tag.kind, tag.is_list()) {
                (TagKind::Open, true) => {
                    lists.push(i);
                    items.push(Vec::new());
                }
                (TagKind::Close, true) => {
                    let Some(open) = lists.pop() else {
                        continue;
                    };
                    items.pop();
                    if tags[open].is(tag.name) {
                        partner[open] = Some(i);
                    }
                }
                (TagKind::Open, false) => {
                    if let Some(frame) = items.last_mut() {
                        frame.push(i);
                    }
                }
                (TagKind::Close, false) => {
                    if let Some(open) = items.last_mut().and_then(Vec::pop) {
                        partner[open] = Some(i);
                    }
                }
                (TagKind::SelfClosing, _) => {}
            }
        }

        Structure { tags, partner }
    }

    fn opens_list(&self, i: usize) -> bool {
        self.tags[i].kind == TagKind::Open && self.tags[i].is_list()
    }

    fn opens_item(&self, i: usize) -> bool {
        self.tags[i].kind == TagKind::Open && self.tags[i].is("li")
    }
}

pub(crate) fn resolve_lists(markup: &str, ctx: &mut ConversionContext) -> String {
    let markup = markup.replace('\n', " ");
    let structure = Structure::scan(&markup);
    let mut out = String::with_capacity(markup.len());
    let mut copied_to = 0;
    let mut i = 0;

    while i < structure.tags.len() {
        if !structure.opens_list(i) {
            i += 1;
            continue;
        }
        let open = structure.tags[i];
        let Some(close) = structure.partner[i] else {
            log::debug!("Unterminated <{}> at byte {} left in place", open.name, open.start);
            i += 1;
            continue;
        };
        out.push_str(&markup[copied_to..open.start]);
        out.push_str(&resolve_block(&markup, &structure, i, close, ctx));
        copied_to = structure.tags[close].end;
        i = close + 1;
    }

    out.push_str(&markup[copied_to..]);
    out
}

/// Turn the list block between tags `open` and `close` into paragraphs at
/// `ctx.list_level`. Nested blocks take their numbering id before this one.
fn resolve_block(
    src: &str,
    structure: &Structure,
    open: usize,
    close: usize,
    ctx: &mut ConversionContext,
) -> String {
    let tags = &structure.tags;
    let mut pieces = Vec::new();
    let mut pos = tags[open].end;
    let mut i = open + 1;

    while i < close {
        let tag = tags[i];
        let opens_list = structure.opens_list(i);
        if !opens_list && !structure.opens_item(i) {
            i += 1;
            continue;
        }
        push_gap(&mut pieces, &src[pos..tag.start]);
        let Some(end) = structure.partner[i] else {
            if !opens_list {
                log::debug!("Unterminated <li> at byte {} left in place", tag.start);
            }
            pieces.push(Piece::Verbatim(tag.raw));
            pos = tag.end;
            i += 1;
            continue;
        };
        if opens_list {
            pieces.push(Piece::Resolved(resolve_nested(src, structure, i, end, ctx)));
        } else {
            push_item(&mut pieces, src, structure, i, end, ctx);
        }
        pos = tags[end].end;
        i = end + 1;
    }
    push_gap(&mut pieces, &src[pos..tags[close].start]);

    let num_id = ctx.list_counter;
    let level = if ctx.list_level > wml::MAX_LIST_LEVEL {
        log::warn!(
            "List nested {} levels deep, rendering at level {}",
            ctx.list_level,
            wml::MAX_LIST_LEVEL
        );
        wml::MAX_LIST_LEVEL
    } else {
        ctx.list_level
    };

    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Item(text) => out.push_str(&wml::list_item(level, num_id, ctx.styles, text.trim())),
            Piece::Resolved(xml) => out.push_str(&xml),
            Piece::Verbatim(raw) => out.push_str(raw),
        }
    }
    ctx.list_counter += 1;

    // Blank line after a top-level list so following text is not glued to its last item.
    if ctx.list_level == 0 {
        out.push_str(&wml::close_and_open(ctx.styles));
    }
    out
}

fn resolve_nested(
    src: &str,
    structure: &Structure,
    open: usize,
    close: usize,
    ctx: &mut ConversionContext,
) -> String {
    ctx.list_level += 1;
    let xml = resolve_block(src, structure, open, close, ctx);
    ctx.list_level -= 1;
    xml
}

/// Split the content of the item between tags `open` and `close` around any
/// lists nested directly inside it.
fn push_item<'a>(
    pieces: &mut Vec<Piece<'a>>,
    src: &'a str,
    structure: &Structure,
    open: usize,
    close: usize,
    ctx: &mut ConversionContext,
) {
    let tags = &structure.tags;
    let content_end = tags[close].start;
    let mut pos = tags[open].end;
    let mut nested = false;
    let mut i = open + 1;

    while i < close {
        if !structure.opens_list(i) {
            i += 1;
            continue;
        }
        let Some(end) = structure.partner[i] else {
            break;
        };
        push_inline(pieces, &src[pos..tags[i].start]);
        pieces.push(Piece::Resolved(resolve_nested(src, structure, i, end, ctx)));
        nested = true;
        pos = tags[end].end;
        i = end + 1;
    }

    if nested {
        push_inline(pieces, &src[pos..content_end]);
    } else {
        pieces.push(Piece::Item(&src[tags[open].end..content_end]));
    }
}

/// Content before or after a nested list becomes its own item, unless it is blank.
fn push_inline<'a>(pieces: &mut Vec<Piece<'a>>, content: &'a str) {
    if !content.trim().is_empty() {
        pieces.push(Piece::Item(content));
    }
}

fn push_gap<'a>(pieces: &mut Vec<Piece<'a>>, gap: &'a str) {
    if !gap.trim().is_empty() {
        pieces.push(Piece::Verbatim(gap));
    }
}
