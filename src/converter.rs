use crate::html::{BasicCleaner, HtmlCleaner};
use crate::model::{ConversionContext, Options};
use crate::pipeline::Markup;
use crate::pipeline::stage::Guarded;
use crate::properties::{InlineFormatter, PropertyProcessor};

/// A reusable conversion pipeline.
///
/// The converter itself holds no per-document state; every [`convert`](Self::convert)
/// call gets its own [`ConversionContext`], so one converter can serve many
/// threads at once.
pub struct Converter {
    cleaner: Box<dyn HtmlCleaner + Send + Sync>,
    properties: Box<dyn PropertyProcessor + Send + Sync>,
}

impl Default for Converter {
    fn default() -> Self {
        Converter {
            cleaner: Box::new(BasicCleaner),
            properties: Box::new(InlineFormatter),
        }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cleaner(mut self, cleaner: impl HtmlCleaner + Send + Sync + 'static) -> Self {
        self.cleaner = Box::new(cleaner);
        self
    }

    pub fn with_property_processor(
        mut self,
        processor: impl PropertyProcessor + Send + Sync + 'static,
    ) -> Self {
        self.properties = Box::new(processor);
        self
    }

    pub fn convert(&self, html: &str, options: &Options) -> String {
        let mut ctx = ConversionContext::new(&options.styles);

        let mut cleaned = Markup::<Guarded>::guard(html).clean(self.cleaner.as_ref());
        if options.wrap {
            cleaned = cleaned.wrap(&ctx);
        }
        let lists = cleaned.resolve_lists(&mut ctx);
        log::debug!("Resolved {} list block(s)", ctx.list_counter - 1);

        let xml = lists
            .expand_breaks(&ctx)
            .apply_properties(self.properties.as_ref())
            .trim_boundaries(&ctx)
            .normalize_whitespace()
            .unguard();

        log::debug!(
            "Converted {} bytes of HTML into {} bytes of WordprocessingML",
            html.len(),
            xml.len()
        );
        xml
    }
}
