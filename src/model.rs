/// Raw XML fragments injected into every property element the converter emits.
///
/// `run` lands inside each `<w:rPr>`, `paragraph` inside each `<w:pPr>`. Both
/// are inserted verbatim; nothing checks that they are well-formed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Styles {
    pub run: Option<String>,
    pub paragraph: Option<String>,
}

impl Styles {
    /// Build styles from loose key/value pairs. Only `run` and `paragraph` are
    /// recognised; anything else is ignored.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut styles = Styles::default();
        for (key, value) in entries {
            match key.as_ref() {
                "run" => styles.run = Some(value.into()),
                "paragraph" => styles.paragraph = Some(value.into()),
                other => log::debug!("Ignoring unknown style key {other:?}"),
            }
        }
        styles
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        serde_json::from_str(json).map_err(|e| crate::Error::InvalidStyles(e.to_string()))
    }

    pub(crate) fn run(&self) -> Option<&str> {
        self.run.as_deref().filter(|s| !s.is_empty())
    }

    pub(crate) fn paragraph(&self) -> Option<&str> {
        self.paragraph.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Wrap the cleaned input in a single paragraph shell before conversion.
    pub wrap: bool,
    pub styles: Styles,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            wrap: true,
            styles: Styles::default(),
        }
    }
}

impl Options {
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_run_style(mut self, run: impl Into<String>) -> Self {
        self.styles.run = Some(run.into());
        self
    }

    pub fn with_paragraph_style(mut self, paragraph: impl Into<String>) -> Self {
        self.styles.paragraph = Some(paragraph.into());
        self
    }
}

/// Per-conversion state. Created fresh for every top-level conversion and
/// dropped when it returns, so concurrent conversions never share counters.
#[derive(Debug)]
pub struct ConversionContext<'a> {
    /// Numbering id handed to the next list block that finishes resolving.
    pub list_counter: u32,
    /// Nesting depth of the list block currently being resolved (0 = top).
    pub list_level: u32,
    pub styles: &'a Styles,
}

impl<'a> ConversionContext<'a> {
    pub fn new(styles: &'a Styles) -> Self {
        ConversionContext {
            list_counter: 1,
            list_level: 0,
            styles,
        }
    }
}
