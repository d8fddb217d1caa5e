use super::context::{RenderContext, TextStyle};
use crate::colours;
use crate::document::Document;
use crate::font::Font;
use crate::image::Image;
use crate::page::ImageLayout;
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;
use std::path::Path;

/// Height of the band reserved for the header
const BAND_HEIGHT: Pt = Pt(70.0);
/// The separator under the header sits this far below its top
const SEPARATOR_DROP: Pt = Pt(78.0);
/// Body content starts this far below the top of the header
const HEADER_HEIGHT: Pt = Pt(88.0);
/// Width of the contact column in the text header
const CONTACT_COLUMN: Pt = Pt(165.0);

/// What is drawn at the top of every page
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Header {
    /// A branding image stored once in the document, with its width over height
    Image { id: Id<Image>, aspect: f32 },
    /// Company name, tagline and contact details set as text
    Text,
}

impl Header {
    /// Loads the header image into the document. Without a path, or when the
    /// image can't be read or decoded, the text header is used instead; a
    /// broken header never fails the render.
    pub fn load(doc: &mut Document, path: Option<&Path>) -> Header {
        let Some(path) = path else {
            log::debug!("no header image configured, using the text header");
            return Header::Text;
        };

        match Image::new_from_disk(path) {
            Ok(image) if image.width > 0.0 && image.height > 0.0 => {
                let aspect = image.aspect_ratio();
                let id = doc.add_image(image);
                Header::Image { id, aspect }
            }
            Ok(_) => {
                log::warn!("header image {} is empty, using the text header", path.display());
                Header::Text
            }
            Err(e) => {
                log::warn!(
                    "can't use header image {}, using the text header: {e}",
                    path.display()
                );
                Header::Text
            }
        }
    }
}

/// Draws the page header with its top edge at `top`, returning where the body
/// should start
pub(super) fn draw(ctx: &mut RenderContext, top: Pt) -> Pt {
    match *ctx.header() {
        Header::Image { id, aspect } => draw_image(ctx, top, id, aspect),
        Header::Text => draw_text(ctx, top),
    }

    ctx.separator(top - SEPARATOR_DROP, Pt(0.5), colours::PANEL_BORDER);
    top - HEADER_HEIGHT
}

fn draw_image(ctx: &mut RenderContext, top: Pt, id: Id<Image>, aspect: f32) {
    let max_width = ctx.content_width();
    let (width, height) = if max_width / BAND_HEIGHT > aspect {
        (BAND_HEIGHT * aspect, BAND_HEIGHT)
    } else {
        (max_width, max_width / aspect)
    };

    let x = ctx.left() + (max_width - width) / 2.0;
    let y = top - BAND_HEIGHT + (BAND_HEIGHT - height) / 2.0;
    ctx.image(ImageLayout {
        image_id: id,
        position: Rect::from_xywh(x, y, width, height),
    });
}

fn draw_text(ctx: &mut RenderContext, top: Pt) {
    let config = ctx.config;
    let branding = &config.branding;
    let left = ctx.left();

    let name = TextStyle {
        font: Font::HelveticaBold,
        size: Pt(26.0),
        colour: colours::BLACK,
    };
    ctx.text(left, top - Pt(24.0), &branding.company_name, name);

    let tagline = TextStyle {
        font: Font::HelveticaOblique,
        size: Pt(9.0),
        colour: colours::SUBTLE,
    };
    ctx.text(left, top - Pt(42.0), &branding.tagline, tagline);

    let contact = TextStyle {
        font: Font::Helvetica,
        size: Pt(7.5),
        colour: colours::SOFT,
    };
    let x = ctx.right() - CONTACT_COLUMN;
    let lines = [
        format!("WhatsApp: {}", branding.whatsapp),
        format!("Email: {}", branding.email),
        format!("LinkedIn: {}", branding.linkedin),
        format!("Fastwork: {}", branding.fastwork),
    ];
    let mut y = top - Pt(14.0);
    for line in &lines {
        ctx.text(x, y, line, contact);
        y -= Pt(12.0);
    }
}
