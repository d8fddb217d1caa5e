use super::config::InvoiceConfig;
use super::header::{self, Header};
use crate::colour::Colour;
use crate::document::Document;
use crate::font::Font;
use crate::layout::{width_of_text, Margins};
use crate::page::{LineLayout, Page, RectLayout, SpanFont, SpanLayout, Stroke};
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;

/// Baseline of the page number stamp
const PAGE_NUMBER_Y: Pt = Pt(20.0);
/// Gap left under a separator rule
const SEPARATOR_GAP: Pt = Pt(14.0);

/// How a piece of text is drawn
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: Pt,
    pub colour: Colour,
}

/// Fonts registered with the document, in registration order
struct Fonts {
    regular: Id<Font>,
    bold: Id<Font>,
    oblique: Id<Font>,
}

/// Everything a single render owns while it lays out the document: the
/// vertical cursor, the page number, the page being drawn and the document
/// collecting finished pages.
///
/// The cursor `y` is measured in points from the bottom of the page and only
/// moves down, except when a page break resets it below the new header.
pub struct RenderContext<'c> {
    pub config: &'c InvoiceConfig,
    pub y: Pt,
    pub page_num: usize,
    page: Page,
    doc: Document,
    fonts: Fonts,
    header: Header,
}

impl<'c> RenderContext<'c> {
    /// Starts page 1 with the cursor at the top offset. The header is not drawn
    /// yet; call [`RenderContext::draw_header`] first.
    pub fn new(config: &'c InvoiceConfig, mut doc: Document, header: Header) -> RenderContext<'c> {
        let fonts = Fonts {
            regular: doc.add_font(Font::Helvetica),
            bold: doc.add_font(Font::HelveticaBold),
            oblique: doc.add_font(Font::HelveticaOblique),
        };
        let page = new_page(config);
        let y = page.height() - config.top_offset;

        RenderContext {
            config,
            y,
            page_num: 1,
            page,
            doc,
            fonts,
            header,
        }
    }

    pub fn left(&self) -> Pt {
        self.page.content_box.x1
    }

    pub fn right(&self) -> Pt {
        self.page.content_box.x2
    }

    pub fn content_width(&self) -> Pt {
        self.page.content_box.width()
    }

    /// Makes sure the next block can start at the cursor: if the cursor has
    /// dropped below `min_y`, the current page is numbered and finished, and
    /// the cursor moves to just below the header of a fresh page.
    pub fn ensure_space(&mut self, min_y: Pt) {
        if self.y >= min_y {
            return;
        }

        log::debug!(
            "page {} is full (y = {}, block needs {}), breaking",
            self.page_num,
            self.y,
            min_y
        );
        self.stamp_page_number();
        let finished = std::mem::replace(&mut self.page, new_page(self.config));
        self.doc.add_page(finished);
        self.page_num += 1;
        self.draw_header();
    }

    /// Draws the header at the top of the current page and puts the cursor below it
    pub fn draw_header(&mut self) {
        let top = self.page.height() - self.config.top_offset;
        self.y = header::draw(self, top);
    }

    pub(super) fn header(&self) -> &Header {
        &self.header
    }

    /// Numbers the last page and hands back the finished document
    pub fn finish(mut self) -> Document {
        self.stamp_page_number();
        let RenderContext { page, mut doc, .. } = self;
        doc.add_page(page);
        doc
    }

    fn stamp_page_number(&mut self) {
        let style = TextStyle {
            font: Font::Helvetica,
            size: Pt(8.0),
            colour: crate::colours::MUTED,
        };
        let label = format!("Page {}", self.page_num);
        let right = self.right();
        self.text_right(right, PAGE_NUMBER_Y, &label, style);
    }

    fn font_id(&self, font: Font) -> Id<Font> {
        match font {
            Font::Helvetica => self.fonts.regular,
            Font::HelveticaBold => self.fonts.bold,
            Font::HelveticaOblique => self.fonts.oblique,
        }
    }

    /// Draws text with its baseline starting at `(x, y)`. Empty text draws nothing.
    pub fn text(&mut self, x: Pt, y: Pt, text: &str, style: TextStyle) {
        if text.is_empty() {
            return;
        }
        let font = SpanFont {
            id: self.font_id(style.font),
            size: style.size,
        };
        self.page.add_span(SpanLayout {
            text: text.to_string(),
            font,
            colour: style.colour,
            coords: (x, y),
        });
    }

    /// Draws text so that it ends at `right`
    pub fn text_right(&mut self, right: Pt, y: Pt, text: &str, style: TextStyle) {
        let width = width_of_text(text, style.font, style.size);
        self.text(right - width, y, text, style);
    }

    pub fn rect(&mut self, rect: Rect, fill: Option<Colour>, stroke: Option<Stroke>) {
        self.page.add_rect(RectLayout { rect, fill, stroke });
    }

    pub fn image(&mut self, image: crate::page::ImageLayout) {
        self.page.add_image(image);
    }

    /// Draws a rule across the content width at `y` and returns the cursor position
    /// below it
    pub fn separator(&mut self, y: Pt, width: Pt, colour: Colour) -> Pt {
        let (left, right) = (self.left(), self.right());
        self.page.add_line(LineLayout {
            from: (left, y),
            to: (right, y),
            stroke: Stroke { colour, width },
        });
        y - SEPARATOR_GAP
    }
}

fn new_page(config: &InvoiceConfig) -> Page {
    let margins = Margins::trbl(config.top_offset, config.margin, Pt(0.0), config.margin);
    Page::new(config.page_size.size(), Some(margins))
}
