use crate::pagesize::PageFormat;
use crate::units::Pt;
use crate::PDFError;
use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Presentation settings for rendered invoices. Every field has a default, so a
/// configuration file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InvoiceConfig {
    pub page_size: PageFormat,
    /// Left and right page margin
    pub margin: Pt,
    /// Distance from the top of the page to the header
    pub top_offset: Pt,
    /// Image drawn as the page header. When unset, or when the file can't be
    /// read, a text header built from [`Branding`] is drawn instead.
    pub header_image: Option<PathBuf>,
    pub branding: Branding,
    pub currency_prefix: String,
    /// Maximum characters per line of section body text
    pub body_wrap_width: usize,
    /// Offset from UTC of the times shown in the document
    pub timezone_offset_hours: i32,
    pub timezone_label: String,
}

/// Company details repeated in the header and footer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub company_name: String,
    pub tagline: String,
    pub whatsapp: String,
    pub email: String,
    pub linkedin: String,
    pub fastwork: String,
    pub closing_line: String,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        InvoiceConfig {
            page_size: PageFormat::A4,
            margin: Pt(45.0),
            top_offset: Pt(40.0),
            header_image: None,
            branding: Branding::default(),
            currency_prefix: "Rp".to_string(),
            body_wrap_width: 100,
            timezone_offset_hours: 7,
            timezone_label: "WIB".to_string(),
        }
    }
}

impl Default for Branding {
    fn default() -> Self {
        Branding {
            company_name: "Prime Projectx".to_string(),
            tagline: "Engineering & System Development Solutions".to_string(),
            whatsapp: "+6289524257778".to_string(),
            email: "primetroyxs@gmail.com".to_string(),
            linkedin: "linkedin.com/in/galihprime".to_string(),
            fastwork: "fastwork.id/user/glh_prima".to_string(),
            closing_line: "Thank you for your trust in our services.".to_string(),
        }
    }
}

impl InvoiceConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<InvoiceConfig, PDFError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// The fixed offset displayed times are converted to. Offsets outside ±23 hours
    /// fall back to UTC.
    pub fn timezone(&self) -> FixedOffset {
        self.timezone_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                log::warn!(
                    "ignoring out of range timezone offset of {} hours",
                    self.timezone_offset_hours
                );
                Utc.fix()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: InvoiceConfig = serde_json::from_str(
            r#"{ "page_size": "letter", "branding": { "company_name": "Acme" } }"#,
        )
        .expect("valid config");
        assert_eq!(config.page_size, PageFormat::Letter);
        assert_eq!(config.branding.company_name, "Acme");
        assert_eq!(config.branding.email, Branding::default().email);
        assert_eq!(config.margin, Pt(45.0));
        assert_eq!(config.body_wrap_width, 100);
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().expect("can create temp file");
        write!(file, r#"{{ "margin": 36, "timezone_offset_hours": 9, "timezone_label": "JST" }}"#)
            .expect("can write config");
        let config = InvoiceConfig::from_json_file(file.path()).expect("valid config");
        assert_eq!(config.margin, Pt(36.0));
        assert_eq!(config.timezone().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn rejects_malformed_files() {
        let mut file = tempfile::NamedTempFile::new().expect("can create temp file");
        write!(file, "{{ not json").expect("can write");
        assert!(matches!(
            InvoiceConfig::from_json_file(file.path()),
            Err(PDFError::Json(_))
        ));
    }

    #[test]
    fn out_of_range_offsets_fall_back_to_utc() {
        let config = InvoiceConfig {
            timezone_offset_hours: 48,
            ..InvoiceConfig::default()
        };
        assert_eq!(config.timezone().local_minus_utc(), 0);
    }
}
