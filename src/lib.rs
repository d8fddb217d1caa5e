//! Paginated PDF invoices and proposals.
//!
//! The crate has two layers. The canvas layer ([`Document`], [`Page`], [`Font`],
//! [`Image`] and friends) describes fixed-position content in points and writes
//! it out with `pdf-writer`. The [`invoice`] module lays a quote record out on
//! that canvas, breaking pages as it goes.

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Invoice layout and rendering
pub mod invoice;

/// Utility functions and structures to layout objects (most text) on pages
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
