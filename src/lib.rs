//! Convert simplified HTML fragments into WordprocessingML paragraph markup.
//!
//! The output is a run of `<w:p>` elements meant to be spliced into a
//! document's `<w:body>`. Lists become `ListParagraph` paragraphs with
//! `w:numPr` numbering references, `</p>` and `<br>` become paragraph
//! boundaries and inline emphasis becomes run properties.
//!
//! ```
//! use html_wml::{Options, convert_html};
//!
//! let xml = convert_html("Hello", &Options::default());
//! assert_eq!(xml, "<w:p><w:r><w:t xml:space='preserve'>Hello</w:t></w:r></w:p>");
//! ```

mod converter;
mod error;
mod html;
mod model;
pub mod pipeline;
mod properties;
mod wml;

pub use converter::Converter;
pub use error::Error;
pub use html::{BasicCleaner, HtmlCleaner};
pub use model::{ConversionContext, Options, Styles};
pub use properties::{InlineFormatter, PropertyProcessor};

use std::path::Path;
use std::time::Instant;

/// Convert `html` with the default cleaner and inline formatter.
pub fn convert_html(html: &str, options: &Options) -> String {
    Converter::default().convert(html, options)
}

pub fn convert_html_file(input: &Path, output: &Path, options: &Options) -> Result<(), Error> {
    let t0 = Instant::now();

    let bytes = std::fs::read(input).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => Error::Io(
            std::io::Error::new(e.kind(), format!("{}: {}", e, input.display())),
        ),
        _ => Error::Io(e),
    })?;
    let html = String::from_utf8(bytes).map_err(|_| Error::InvalidInput {
        path: input.to_path_buf(),
    })?;
    let t_read = t0.elapsed();

    let xml = convert_html(&html, options);
    let t_convert = t0.elapsed();

    std::fs::write(output, &xml)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: read={:.1}ms, convert={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_read.as_secs_f64() * 1000.0,
        (t_convert - t_read).as_secs_f64() * 1000.0,
        (t_total - t_convert).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        xml.len(),
    );

    Ok(())
}
