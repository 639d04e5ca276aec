use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Parser;
use html_wml::{Error, Options, Styles, convert_html, convert_html_file};

/// Convert an HTML fragment into WordprocessingML paragraphs.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// HTML input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not wrap the input in a paragraph before converting
    #[arg(long)]
    no_wrap: bool,

    /// XML inserted into every <w:rPr>
    #[arg(long, value_name = "XML")]
    run_style: Option<String>,

    /// XML inserted into every <w:pPr>
    #[arg(long, value_name = "XML")]
    paragraph_style: Option<String>,

    /// JSON file with "run" and/or "paragraph" style fragments
    #[arg(long, value_name = "FILE")]
    styles: Option<PathBuf>,
}

fn options(cli: &Cli) -> Result<Options, Error> {
    let mut styles = match &cli.styles {
        Some(path) => Styles::from_json(&std::fs::read_to_string(path)?)?,
        None => Styles::default(),
    };
    if let Some(run) = &cli.run_style {
        styles.run = Some(run.clone());
    }
    if let Some(paragraph) = &cli.paragraph_style {
        styles.paragraph = Some(paragraph.clone());
    }
    Ok(Options::default().with_wrap(!cli.no_wrap).with_styles(styles))
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = options(cli)?;

    if let (Some(input), Some(output)) = (&cli.input, &cli.output) {
        return convert_html_file(input, output, &options);
    }

    let html = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut html = String::new();
            std::io::stdin().read_to_string(&mut html)?;
            html
        }
    };
    let xml = convert_html(&html, &options);

    match &cli.output {
        Some(path) => std::fs::write(path, xml)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(xml.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
