use chrono::{DateTime, Utc};
use clap::Parser;
use proposal_pdf::invoice::{download_filename, InvoiceConfig, InvoiceRenderer, Quote};
use proposal_pdf::PDFError;
use std::fs;
use std::path::PathBuf;

/// Render a quote record (JSON) into a PDF invoice
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The quote record to render
    quote: PathBuf,

    /// Directory the PDF is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// JSON file with presentation settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Image to use as the page header, overriding the config file
    #[arg(long)]
    header_image: Option<PathBuf>,

    /// Render time (RFC 3339) to use instead of the current time
    #[arg(long)]
    now: Option<DateTime<Utc>>,
}

fn main() -> Result<(), PDFError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("proposal_pdf=info"))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => InvoiceConfig::from_json_file(path)?,
        None => InvoiceConfig::default(),
    };
    if args.header_image.is_some() {
        config.header_image = args.header_image;
    }

    let quote: Quote = serde_json::from_str(&fs::read_to_string(&args.quote)?)?;
    let now = args.now.unwrap_or_else(Utc::now);

    let bytes = InvoiceRenderer::new(config).render(&quote, now)?;

    fs::create_dir_all(&args.output_dir)?;
    let output_path = args.output_dir.join(download_filename(quote.project_name()));
    fs::write(&output_path, bytes)?;

    println!("{}", output_path.display());
    Ok(())
}
