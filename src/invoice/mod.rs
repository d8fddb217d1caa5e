//! Invoice and proposal documents.
//!
//! A [`Quote`] is laid out top to bottom: the branding header, a title band,
//! the bill-to and project panels, eight text sections, the investment amount
//! and a closing footer. Pages break automatically whenever the next block
//! would run into the bottom of the page; every page gets the header and a
//! page number.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use proposal_pdf::invoice::{download_filename, render, Quote};
//!
//! let quote = Quote {
//!     client_name: Some("PT Sinar Jaya".to_string()),
//!     project_name: Some("Warehouse Dashboard".to_string()),
//!     amount: Some(12_500_000.0.into()),
//!     ..Quote::default()
//! };
//! let now = Utc.with_ymd_and_hms(2026, 3, 1, 2, 30, 0).unwrap();
//! let pdf = render(&quote, now).unwrap();
//! assert!(pdf.starts_with(b"%PDF-"));
//! assert_eq!(download_filename(quote.project_name()), "Invoice-Warehouse Dashboard.pdf");
//! ```

mod blocks;
mod config;
mod context;
mod format;
mod header;
mod quote;
mod render;

pub use config::*;
pub use context::{RenderContext, TextStyle};
pub use format::*;
pub use header::Header;
pub use quote::*;
pub use render::*;
