/// A colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub const fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub const fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

/// The palette used by the invoice renderer
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };

    /// page numbers and the closing line
    pub const MUTED: Colour = Colour::new_grey(0.5);
    /// taglines
    pub const SUBTLE: Colour = Colour::new_grey(0.4);
    /// contact lines and small labels
    pub const SOFT: Colour = Colour::new_grey(0.3);
    pub const LABEL: Colour = Colour::new_grey(0.2);
    pub const SECTION_TITLE: Colour = Colour::new_grey(0.15);
    pub const AMOUNT: Colour = Colour::new_grey(0.1);

    /// the dark banner behind the document title
    pub const TITLE_BAND: Colour = Colour::new_rgb(0.08, 0.08, 0.15);
    pub const SECTION_BAR: Colour = Colour::new_grey(0.98);
    pub const BILL_TO_PANEL: Colour = Colour::new_grey(0.99);
    pub const PROJECT_PANEL: Colour = Colour::new_rgb(0.97, 0.99, 1.0);

    pub const PANEL_BORDER: Colour = Colour::new_grey(0.85);
    pub const AMOUNT_BORDER: Colour = Colour::new_grey(0.75);
    pub const RULE: Colour = Colour::new_grey(0.9);
    pub const RULE_STRONG: Colour = Colour::new_grey(0.8);
}
