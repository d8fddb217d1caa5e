//! Text measurement and wrapping utilities.
//!
//! Two wrapping strategies are available:
//!
//! - [`wrap_lines`](crate::layout::wrap_lines) - paragraph-aware wrapping to a fixed number
//!   of characters per line, used for long free-form text
//! - [`wrap_to_width`](crate::layout::wrap_to_width) - word wrapping by the rendered width
//!   of the text in a given font, used where text must fit a box exactly
//!
//! # Example
//!
//! ```
//! use proposal_pdf::{Font, Pt};
//! use proposal_pdf::layout::{wrap_lines, wrap_to_width};
//!
//! let lines = wrap_lines(Some("Design\n\nBuild and ship"), 10);
//! assert_eq!(lines, vec!["Design", "", "Build and", "ship"]);
//!
//! let lines = wrap_to_width("Inventory Management System", Font::HelveticaBold, Pt(11.0), Pt(120.0));
//! assert_eq!(lines.len(), 2);
//! ```

mod margins;
mod text;

pub use margins::*;
pub use text::*;
