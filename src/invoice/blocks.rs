//! The blocks an invoice is made of, drawn top to bottom. Each function starts
//! at the context's cursor and leaves the cursor below what it drew.

use super::context::{RenderContext, TextStyle};
use super::format::{format_currency, format_date, format_timestamp};
use super::quote::{Quote, Section};
use crate::colour::Colour;
use crate::colours;
use crate::font::Font;
use crate::layout::{wrap_lines, wrap_to_width};
use crate::page::Stroke;
use crate::rect::Rect;
use crate::units::Pt;
use chrono::{DateTime, Utc};

/// Minimum cursor height before a section title bar
const SECTION_TITLE_MIN_Y: Pt = Pt(120.0);
/// Minimum cursor height before each line of section body text
const BODY_LINE_MIN_Y: Pt = Pt(90.0);
const INVESTMENT_MIN_Y: Pt = Pt(140.0);
const FOOTER_MIN_Y: Pt = Pt(120.0);

const BODY_LINE_HEIGHT: Pt = Pt(14.0);
/// Banded blocks extend this far past the margins on both sides
const BLEED: Pt = Pt(3.0);

const fn style(font: Font, size: f32, colour: Colour) -> TextStyle {
    TextStyle {
        font,
        size: Pt(size),
        colour,
    }
}

const LABEL: TextStyle = style(Font::HelveticaBold, 9.0, colours::LABEL);
const BODY: TextStyle = style(Font::Helvetica, 9.0, colours::LABEL);
const SECTION_TITLE: TextStyle = style(Font::HelveticaBold, 10.0, colours::SECTION_TITLE);
const PROJECT: TextStyle = style(Font::HelveticaBold, 11.0, colours::BLACK);

fn banded(ctx: &RenderContext, y: Pt, height: Pt) -> Rect {
    Rect::from_xywh(
        ctx.left() - BLEED,
        y,
        ctx.content_width() + BLEED * 2.0,
        height,
    )
}

/// The dark banner with the document title, status and dates
pub fn title_band(ctx: &mut RenderContext, quote: &Quote, now: DateTime<Utc>) {
    let config = ctx.config;
    let offset = config.timezone();
    let (left, y) = (ctx.left(), ctx.y);

    let band = banded(ctx, y - Pt(54.0), Pt(54.0));
    ctx.rect(band, Some(colours::TITLE_BAND), None);

    ctx.text(
        left + Pt(8.0),
        y - Pt(20.0),
        "INVOICE / PROPOSAL",
        style(Font::HelveticaBold, 24.0, colours::WHITE),
    );

    let details = style(Font::Helvetica, 8.5, colours::WHITE);
    let status = format!(
        "Status: {}  |  Generated: {}",
        quote.status(),
        format_timestamp(now, offset, &config.timezone_label)
    );
    ctx.text(left + Pt(8.0), y - Pt(36.0), &status, details);

    if let Some(created_at) = quote.created_at {
        let date = format!("Proposal Date: {}", format_date(created_at, offset));
        ctx.text(left + Pt(8.0), y - Pt(48.0), &date, details);
    }

    ctx.y -= Pt(66.0);
    ctx.y = ctx.separator(ctx.y, Pt(1.0), colours::RULE_STRONG);
}

/// Two side by side panels: who is billed, and for which project
pub fn bill_to_band(ctx: &mut RenderContext, quote: &Quote) {
    let (left, right) = (ctx.left(), ctx.right());
    let panel_width = ctx.content_width() / 2.0 - Pt(5.0);
    let panel_height = Pt(50.0);
    let box_y = ctx.y;
    let border = Some(Stroke {
        colour: colours::PANEL_BORDER,
        width: Pt(1.0),
    });

    let bill_to = Rect::from_xywh(left - BLEED, box_y - panel_height, panel_width, panel_height);
    ctx.rect(bill_to, Some(colours::BILL_TO_PANEL), border);
    ctx.text(left + Pt(3.0), box_y - Pt(14.0), "BILL TO", LABEL);
    ctx.text(
        left + Pt(3.0),
        box_y - Pt(30.0),
        quote.client_name(),
        style(Font::Helvetica, 10.0, colours::BLACK),
    );

    let project_x = left + ctx.content_width() / 2.0 + Pt(5.0);
    let project = Rect::from_xywh(project_x - BLEED, box_y - panel_height, panel_width, panel_height);
    ctx.rect(project, Some(colours::PROJECT_PANEL), border);
    ctx.text(project_x + Pt(3.0), box_y - Pt(14.0), "PROJECT", LABEL);

    let max_width = right - project_x - Pt(12.0);
    let lines = wrap_to_width(quote.project_name(), PROJECT.font, PROJECT.size, max_width);
    let mut y = box_y - Pt(30.0);
    // the panel only has room for two lines
    for line in lines.iter().take(2) {
        ctx.text(project_x + Pt(3.0), y, line, PROJECT);
        y -= Pt(12.0);
    }

    ctx.y = box_y - Pt(60.0);
    ctx.y = ctx.separator(ctx.y, Pt(1.0), colours::RULE_STRONG);
}

/// A titled section of free-form text. Sections are always drawn; a section
/// without text shows a placeholder line.
pub fn section(ctx: &mut RenderContext, title: &str, body: Option<&str>) {
    ctx.ensure_space(SECTION_TITLE_MIN_Y);

    let bar = banded(ctx, ctx.y - Pt(5.0), Pt(20.0));
    ctx.rect(bar, Some(colours::SECTION_BAR), None);
    let left = ctx.left();
    ctx.text(left + Pt(2.0), ctx.y, &title.to_uppercase(), SECTION_TITLE);
    ctx.y -= Pt(24.0);

    for line in wrap_lines(body, ctx.config.body_wrap_width) {
        ctx.ensure_space(BODY_LINE_MIN_Y);
        ctx.text(left + Pt(6.0), ctx.y, &line, BODY);
        ctx.y -= BODY_LINE_HEIGHT;
    }

    ctx.y = ctx.separator(ctx.y - Pt(3.0), Pt(0.5), colours::RULE);
}

/// All eight sections, in document order
pub fn sections(ctx: &mut RenderContext, quote: &Quote) {
    for section_kind in Section::ALL {
        section(ctx, section_kind.title(), quote.section_body(section_kind));
    }
}

/// The highlighted box with the quoted amount
pub fn investment(ctx: &mut RenderContext, quote: &Quote) {
    ctx.ensure_space(INVESTMENT_MIN_Y);

    let (left, y) = (ctx.left(), ctx.y);
    let frame = banded(ctx, y - Pt(54.0), Pt(64.0));
    ctx.rect(
        frame,
        Some(colours::SECTION_BAR),
        Some(Stroke {
            colour: colours::AMOUNT_BORDER,
            width: Pt(1.0),
        }),
    );
    ctx.text(
        left + Pt(8.0),
        y - Pt(14.0),
        "INVESTMENT AMOUNT",
        style(Font::HelveticaBold, 10.0, colours::SOFT),
    );

    let amount = format_currency(&quote.amount(), &ctx.config.currency_prefix);
    ctx.text(
        left + Pt(8.0),
        y - Pt(44.0),
        &amount,
        style(Font::HelveticaBold, 26.0, colours::AMOUNT),
    );

    ctx.y -= Pt(94.0);
}

/// Company details and the closing line, drawn once after everything else
pub fn footer(ctx: &mut RenderContext) {
    ctx.ensure_space(FOOTER_MIN_Y);
    ctx.y = ctx.separator(ctx.y, Pt(1.0), colours::RULE_STRONG);

    let config = ctx.config;
    let branding = &config.branding;
    let (left, y) = (ctx.left(), ctx.y);
    let x = left + Pt(8.0);

    let panel = banded(ctx, y - Pt(90.0), Pt(90.0));
    ctx.rect(panel, Some(colours::SECTION_BAR), None);

    ctx.text(
        x,
        y - Pt(16.0),
        &branding.company_name,
        style(Font::HelveticaBold, 11.0, colours::BLACK),
    );
    ctx.text(
        x,
        y - Pt(28.0),
        &branding.tagline,
        style(Font::HelveticaOblique, 8.0, colours::SUBTLE),
    );

    let contact = style(Font::Helvetica, 8.0, colours::SUBTLE);
    let lines = [
        format!("Email: {}  |  WhatsApp: {}", branding.email, branding.whatsapp),
        format!("LinkedIn: {}", branding.linkedin),
        format!("Fastwork Collaboration: {}", branding.fastwork),
    ];
    let mut line_y = y - Pt(44.0);
    for line in &lines {
        ctx.text(x, line_y, line, contact);
        line_y -= Pt(12.0);
    }

    ctx.text(
        x,
        y - Pt(84.0),
        &branding.closing_line,
        style(Font::HelveticaOblique, 7.5, colours::MUTED),
    );

    ctx.y -= Pt(90.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::invoice::header::Header;
    use crate::invoice::InvoiceConfig;
    use crate::page::PageContents;

    fn context(config: &InvoiceConfig) -> RenderContext<'_> {
        let mut ctx = RenderContext::new(config, Document::default(), Header::Text);
        ctx.draw_header();
        ctx
    }

    fn texts(doc: &Document) -> Vec<String> {
        doc.pages_in_order()
            .flat_map(|page| page.spans())
            .map(|span| span.text.clone())
            .collect()
    }

    #[test]
    fn empty_sections_show_a_placeholder() {
        let config = InvoiceConfig::default();
        let mut ctx = context(&config);
        let start = ctx.y;
        section(&mut ctx, "Timeline", None);
        // title, one body line, separator
        assert_eq!(ctx.y, start - Pt(24.0) - Pt(14.0) - Pt(3.0) - Pt(14.0));

        let texts = texts(&ctx.finish());
        let title = texts.iter().position(|t| t == "TIMELINE").expect("title drawn");
        assert_eq!(texts[title + 1], "-");
    }

    #[test]
    fn blank_lines_advance_without_drawing() {
        let config = InvoiceConfig::default();
        let mut ctx = context(&config);
        let start = ctx.y;
        section(&mut ctx, "Scope of Work", Some("Phase one\n\nPhase two"));
        let lines = start - Pt(24.0) - Pt(14.0) - Pt(14.0) - Pt(14.0);
        assert_eq!(ctx.y, lines - Pt(3.0) - Pt(14.0));

        let texts = texts(&ctx.finish());
        let title = texts.iter().position(|t| t == "SCOPE OF WORK").expect("title drawn");
        assert_eq!(texts[title + 1], "Phase one");
        assert_eq!(texts[title + 2], "Phase two");
    }

    #[test]
    fn long_project_names_stop_at_two_lines() {
        let config = InvoiceConfig::default();
        let mut ctx = context(&config);
        let quote = Quote {
            project_name: Some(
                "Enterprise Resource Planning Integration Platform With Real Time Inventory \
                 Analytics And Supplier Portal"
                    .to_string(),
            ),
            ..Quote::default()
        };
        let start = ctx.y;
        bill_to_band(&mut ctx, &quote);
        assert_eq!(ctx.y, start - Pt(60.0) - Pt(14.0));

        let doc = ctx.finish();
        let page = doc.pages_in_order().next().expect("one page");
        let project_lines = page
            .spans()
            .filter(|span| span.font.size == PROJECT.size && span.text != "PROJECT")
            .count();
        assert_eq!(project_lines, 2);
    }

    #[test]
    fn panels_start_just_left_of_their_labels() {
        let config = InvoiceConfig::default();
        let mut ctx = context(&config);
        let left = ctx.left();
        let project_x = left + ctx.content_width() / 2.0 + Pt(5.0);
        bill_to_band(&mut ctx, &Quote::default());

        let doc = ctx.finish();
        let page = doc.pages_in_order().next().expect("one page");
        let panels: Vec<Rect> = page
            .contents
            .iter()
            .filter_map(|content| match content {
                PageContents::Rect(rect) if rect.stroke.is_some() => Some(rect.rect),
                _ => None,
            })
            .collect();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].x1, left - BLEED);
        assert_eq!(panels[1].x1, project_x - BLEED);

        let label = |text: &str| {
            page.spans()
                .find(|span| span.text == text)
                .map(|span| span.coords.0)
                .expect("label drawn")
        };
        assert_eq!(label("BILL TO") - panels[0].x1, Pt(6.0));
        assert!((*(label("PROJECT") - panels[1].x1) - 6.0).abs() < 1e-3);
    }

    #[test]
    fn title_band_omits_a_missing_creation_date() {
        let config = InvoiceConfig::default();
        let mut ctx = context(&config);
        let now = DateTime::parse_from_rfc3339("2026-10-17T07:30:00Z")
            .expect("valid date")
            .with_timezone(&Utc);
        title_band(&mut ctx, &Quote::default(), now);

        let texts = texts(&ctx.finish());
        assert!(texts.contains(&"Status: PROPOSAL  |  Generated: 2026-10-17 14:30 WIB".to_string()));
        assert!(!texts.iter().any(|t| t.starts_with("Proposal Date")));
    }

    #[test]
    fn investment_box_breaks_onto_a_new_page_when_low() {
        let config = InvoiceConfig::default();
        let mut ctx = context(&config);
        ctx.y = Pt(139.0);
        investment(&mut ctx, &Quote::default());
        assert_eq!(ctx.page_num, 2);

        let doc = ctx.finish();
        let second = doc.pages_in_order().nth(1).expect("second page");
        assert!(second.spans().any(|span| span.text == "Rp 0"));
        assert!(second.contents.iter().any(|content| matches!(
            content,
            PageContents::Rect(rect) if rect.stroke.is_some() && (*rect.rect.height() - 64.0).abs() < 1e-3
        )));
    }

    #[test]
    fn footer_lists_the_contact_details() {
        let config = InvoiceConfig::default();
        let mut ctx = context(&config);
        footer(&mut ctx);
        let texts = texts(&ctx.finish());
        assert!(texts.contains(&"Email: primetroyxs@gmail.com  |  WhatsApp: +6289524257778".to_string()));
        assert!(texts.contains(&"Fastwork Collaboration: fastwork.id/user/glh_prima".to_string()));
        assert!(texts.contains(&"Thank you for your trust in our services.".to_string()));
    }

    fn page_stamps(doc: &Document) -> Vec<String> {
        doc.pages_in_order()
            .flat_map(|page| page.spans())
            .filter(|span| span.font.size == Pt(8.0) && span.text.starts_with("Page "))
            .map(|span| span.text.clone())
            .collect()
    }

    #[test]
    fn footer_breaks_onto_a_new_page_when_low() {
        let config = InvoiceConfig::default();
        let mut ctx = context(&config);
        ctx.y = Pt(119.0);
        footer(&mut ctx);
        assert_eq!(ctx.page_num, 2);

        let doc = ctx.finish();
        assert_eq!(doc.page_count(), 2);
        let footer_name = |page: &crate::page::Page| {
            page.spans().any(|span| {
                span.text == config.branding.company_name && span.font.size == Pt(11.0)
            })
        };
        let mut pages = doc.pages_in_order();
        let (first, second) = (pages.next().expect("first page"), pages.next().expect("second page"));
        assert!(!footer_name(first));
        assert!(footer_name(second));
        assert_eq!(page_stamps(&doc), vec!["Page 1", "Page 2"]);
    }

    #[test]
    fn section_titles_break_onto_a_new_page_when_low() {
        let config = InvoiceConfig::default();
        let mut ctx = context(&config);
        ctx.y = Pt(119.0);
        section(&mut ctx, "Deliverables", Some("Source code"));
        assert_eq!(ctx.page_num, 2);

        let doc = ctx.finish();
        let mut pages = doc.pages_in_order();
        let (first, second) = (pages.next().expect("first page"), pages.next().expect("second page"));
        assert!(!first.spans().any(|span| span.text == "DELIVERABLES"));
        let title = second
            .spans()
            .position(|span| span.text == "DELIVERABLES")
            .expect("title on the second page");
        assert_eq!(
            second.spans().nth(title + 1).map(|span| span.text.as_str()),
            Some("Source code")
        );
        assert_eq!(page_stamps(&doc), vec!["Page 1", "Page 2"]);
    }
}
