use super::quote::Amount;
use chrono::{DateTime, FixedOffset, Utc};

/// Content type the rendered document should be served with
pub const CONTENT_TYPE: &str = "application/pdf";

/// Formats an amount as whole currency units with `.` grouping thousands,
/// e.g. `Rp 12.500.000`. Amounts that are not numbers become `Rp -`.
pub fn format_currency(amount: &Amount, prefix: &str) -> String {
    let Some(value) = amount.value() else {
        return format!("{prefix} -");
    };

    let rounded = value.round_ties_even();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{prefix} {sign}{}", group_thousands(&digits))
}

/// [`format_currency`] in Indonesian rupiah
pub fn rupiah(amount: &Amount) -> String {
    format_currency(amount, "Rp")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// The filename the document should be downloaded as: `Invoice-{project}.pdf`, keeping
/// only ASCII letters, digits, spaces, underscores and hyphens from the project name
pub fn download_filename(project_name: &str) -> String {
    let safe: String = project_name
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '_' | '-'))
        .collect();
    let safe = if safe.is_empty() { "proposal" } else { &safe };
    format!("Invoice-{safe}.pdf")
}

/// `2026-10-17 14:05 WIB`
pub fn format_timestamp(at: DateTime<Utc>, offset: FixedOffset, label: &str) -> String {
    format!("{} {label}", at.with_timezone(&offset).format("%Y-%m-%d %H:%M"))
}

/// `2026-10-17`, the calendar date in the given offset
pub fn format_date(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%Y-%m-%d").to_string()
}
