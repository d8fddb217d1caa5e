use super::blocks;
use super::config::InvoiceConfig;
use super::context::RenderContext;
use super::header::Header;
use super::quote::Quote;
use crate::document::Document;
use crate::info::Info;
use crate::PDFError;
use chrono::{DateTime, Utc};

/// Lays out quotes as paginated invoice documents.
///
/// A renderer holds only its configuration, so one instance can be shared
/// between threads and used for any number of renders. Each render owns its
/// own cursor and output buffer.
#[derive(Debug, Clone, Default)]
pub struct InvoiceRenderer {
    config: InvoiceConfig,
}

impl InvoiceRenderer {
    pub fn new(config: InvoiceConfig) -> InvoiceRenderer {
        InvoiceRenderer { config }
    }

    pub fn config(&self) -> &InvoiceConfig {
        &self.config
    }

    /// Lays out the whole document without serializing it. `now` is the render
    /// time shown in the title band and stored as the creation date, so the
    /// same quote and time always give the same document.
    pub fn layout(&self, quote: &Quote, now: DateTime<Utc>) -> Document {
        let config = &self.config;
        let mut doc = Document::default();
        let header = Header::load(&mut doc, config.header_image.as_deref());

        let mut info = Info::new();
        info.title(format!("Invoice - {}", quote.project_name()))
            .author(&config.branding.company_name)
            .subject("Invoice / Proposal")
            .creation_date(now.with_timezone(&config.timezone()));
        doc.set_info(info);

        let mut ctx = RenderContext::new(config, doc, header);
        ctx.draw_header();
        blocks::title_band(&mut ctx, quote, now);
        blocks::bill_to_band(&mut ctx, quote);
        blocks::sections(&mut ctx, quote);
        blocks::investment(&mut ctx, quote);
        blocks::footer(&mut ctx);

        let doc = ctx.finish();
        log::debug!(
            "laid out invoice for {:?} on {} page(s)",
            quote.project_name(),
            doc.page_count()
        );
        doc
    }

    /// Renders a quote to PDF bytes
    pub fn render(&self, quote: &Quote, now: DateTime<Utc>) -> Result<Vec<u8>, PDFError> {
        let mut bytes = Vec::new();
        self.layout(quote, now).write(&mut bytes)?;
        log::info!(
            "rendered invoice for {:?} ({} bytes)",
            quote.project_name(),
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Renders a quote with the default configuration
pub fn render(quote: &Quote, now: DateTime<Utc>) -> Result<Vec<u8>, PDFError> {
    InvoiceRenderer::default().render(quote, now)
}
