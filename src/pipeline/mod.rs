//! Each stage is a method that only exists on the stage before it:
//!
//! ```text
//! guard -> clean -> [wrap] -> resolve_lists -> expand_breaks
//!       -> apply_properties -> trim_boundaries -> normalize_whitespace -> unguard
//! ```
//!
//! Calling them out of order does not compile.

mod breaks;
mod entities;
mod lists;
mod trim;
mod whitespace;

use std::marker::PhantomData;

use crate::html::HtmlCleaner;
use crate::model::ConversionContext;
use crate::properties::PropertyProcessor;
use crate::wml;

pub mod stage {
    //! Marker types naming what has already been done to a [`Markup`](super::Markup).

    /// Literal `&lt;` / `&gt;` replaced by placeholders.
    #[derive(Debug)]
    pub struct Guarded;
    /// Reduced to the supported tag vocabulary, optionally wrapped in one paragraph.
    #[derive(Debug)]
    pub struct Cleaned;
    /// No `<ul>` / `<ol>` blocks left that have a matching close.
    #[derive(Debug)]
    pub struct ListsResolved;
    /// No `</p>` or `<br>` left.
    #[derive(Debug)]
    pub struct BreaksExpanded;
    /// Inline formatting turned into run properties; only `w:` tags remain.
    #[derive(Debug)]
    pub struct PropertiesApplied;
    /// No vacuous paragraphs at either end.
    #[derive(Debug)]
    pub struct Trimmed;
    /// Whitespace collapsed and every `w:t` marked as space-preserving.
    #[derive(Debug)]
    pub struct Normalized;
}

use stage::*;

#[derive(Debug)]
pub struct Markup<S> {
    text: String,
    stage: PhantomData<S>,
}

impl<S> Markup<S> {
    fn advance<T>(text: String) -> Markup<T> {
        Markup {
            text,
            stage: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Markup<Guarded> {
    pub fn guard(html: &str) -> Self {
        Self::advance(entities::guard(html))
    }

    pub fn clean(self, cleaner: &(impl HtmlCleaner + ?Sized)) -> Markup<Cleaned> {
        Self::advance(cleaner.clean(&self.text))
    }
}

impl Markup<Cleaned> {
    /// Put the whole fragment inside one paragraph shell carrying the configured styling.
    pub fn wrap(self, ctx: &ConversionContext) -> Self {
        let mut text = wml::open_styled_paragraph(ctx.styles);
        text.push_str(&self.text);
        text.push_str(wml::CLOSE_PARAGRAPH);
        Self::advance(text)
    }

    pub fn resolve_lists(self, ctx: &mut ConversionContext) -> Markup<ListsResolved> {
        Self::advance(lists::resolve_lists(&self.text, ctx))
    }
}

impl Markup<ListsResolved> {
    pub fn expand_breaks(self, ctx: &ConversionContext) -> Markup<BreaksExpanded> {
        Self::advance(breaks::expand_breaks(&self.text, ctx))
    }
}

impl Markup<BreaksExpanded> {
    pub fn apply_properties(
        self,
        processor: &(impl PropertyProcessor + ?Sized),
    ) -> Markup<PropertiesApplied> {
        Self::advance(processor.process(&self.text))
    }
}

impl Markup<PropertiesApplied> {
    pub fn trim_boundaries(self, ctx: &ConversionContext) -> Markup<Trimmed> {
        Self::advance(trim::trim_boundaries(&self.text, ctx.styles))
    }
}

impl Markup<Trimmed> {
    pub fn normalize_whitespace(self) -> Markup<Normalized> {
        Self::advance(whitespace::normalize_whitespace(&self.text))
    }
}

impl Markup<Normalized> {
    pub fn unguard(self) -> String {
        entities::unguard(&self.text)
    }
}
