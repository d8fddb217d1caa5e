use crate::{
    refs::{ObjectReferences, RefType},
    Pt,
};
use id_arena::Id;
use pdf_writer::{Name, Pdf};

/// One of the standard Type 1 fonts every PDF viewer ships with. Standard fonts
/// are referenced by name and never embedded, so documents stay small and
/// rendering needs no font files on disk.
///
/// Text is encoded with `WinAnsiEncoding`; characters outside that encoding
/// are drawn as `?`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

/// Units per em of the AFM metrics below
const UNITS_PER_EM: f32 = 1000.0;
/// Used for characters without a metric entry
const DEFAULT_WIDTH: u16 = 556;

/// Advance widths for the printable ASCII range (0x20..=0x7E) of Helvetica
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Advance widths for the printable ASCII range (0x20..=0x7E) of Helvetica-Bold
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

impl Font {
    /// The PostScript name the font is referenced by
    pub fn base_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            Font::Helvetica | Font::HelveticaOblique => &HELVETICA_WIDTHS,
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Horizontal advance of a single character at the given size
    pub fn width_of_char(&self, ch: char, size: Pt) -> Pt {
        let units = match encode_char(ch) {
            code @ 0x20..=0x7e => self.widths()[(code - 0x20) as usize],
            _ => DEFAULT_WIDTH,
        };
        size * (units as f32 / UNITS_PER_EM)
    }

    /// Encode text into the single-byte `WinAnsiEncoding` the font is declared with
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars().map(encode_char).collect()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(id.index()));
        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.base_name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// Map a character to its `WinAnsiEncoding` code. Latin-1 maps onto itself above 0xA0;
/// the 0x80..0x9F block holds typographic punctuation.
fn encode_char(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '\t' => b' ',
        '€' => 0x80,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_the_afm_metrics() {
        assert_eq!(Font::Helvetica.width_of_char(' ', Pt(1000.0)), Pt(278.0));
        assert_eq!(Font::Helvetica.width_of_char('W', Pt(1000.0)), Pt(944.0));
        assert_eq!(Font::Helvetica.width_of_char('i', Pt(1000.0)), Pt(222.0));
        assert_eq!(Font::HelveticaBold.width_of_char('i', Pt(1000.0)), Pt(278.0));
        assert_eq!(Font::HelveticaBold.width_of_char('~', Pt(1000.0)), Pt(584.0));
        assert_eq!(
            Font::HelveticaOblique.width_of_char('m', Pt(10.0)),
            Font::Helvetica.width_of_char('m', Pt(10.0))
        );
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let text = "Sistem Informasi Manajemen";
        let regular: Pt = text
            .chars()
            .map(|ch| Font::Helvetica.width_of_char(ch, Pt(11.0)))
            .sum();
        let bold: Pt = text
            .chars()
            .map(|ch| Font::HelveticaBold.width_of_char(ch, Pt(11.0)))
            .sum();
        assert!(bold > regular);
    }

    #[test]
    fn encodes_into_win_ansi() {
        assert_eq!(Font::Helvetica.encode("Rp 1.000"), b"Rp 1.000".to_vec());
        assert_eq!(Font::Helvetica.encode("café"), vec![b'c', b'a', b'f', 0xe9]);
        assert_eq!(Font::Helvetica.encode("a—b"), vec![b'a', 0x97, b'b']);
        assert_eq!(Font::Helvetica.encode("日本"), b"??".to_vec());
    }
}
