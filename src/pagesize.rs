//! Page sizes supported by the invoice renderer.
//!
//! Sizes are portrait (width, height) in points.

use crate::units::*;
use serde::Deserialize;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));

// converted from mm to points
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));

/// Named paper formats, as they appear in configuration files
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
}

impl PageFormat {
    pub fn size(self) -> PageSize {
        match self {
            PageFormat::A4 => A4,
            PageFormat::Letter => LETTER,
        }
    }
}
