use crate::units::Pt;

/// Margins are guidelines for layout; nothing stops content from being drawn
/// outside them. They also set the `ArtBox` of each [`Page`](crate::Page) in the
/// generated PDF.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::trbl(Pt(0.0), Pt(0.0), Pt(0.0), Pt(0.0))
    }
}
