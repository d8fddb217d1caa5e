use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A priced proposal, as stored by the web layer. Every field is optional;
/// the renderer substitutes defaults or placeholders for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub client_name: Option<String>,
    pub project_name: Option<String>,
    pub scope: Option<String>,
    pub technical_approach: Option<String>,
    pub tech_stack: Option<String>,
    pub deliverables: Option<String>,
    pub timeline: Option<String>,
    pub team_structure: Option<String>,
    pub assumptions: Option<String>,
    pub payment_terms: Option<String>,
    pub amount: Option<Amount>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// The quoted price. Records written by hand or by older clients sometimes carry
/// something other than a number here, which is kept so it can be shown as a
/// placeholder instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Other(serde_json::Value),
}

impl Amount {
    /// The numeric value, if there is a usable one
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

/// The body sections of the document, in the order they are drawn
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    ScopeOfWork,
    TechnicalApproach,
    TechnologyStack,
    Deliverables,
    Timeline,
    TeamStructure,
    Assumptions,
    PaymentTerms,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::ScopeOfWork,
        Section::TechnicalApproach,
        Section::TechnologyStack,
        Section::Deliverables,
        Section::Timeline,
        Section::TeamStructure,
        Section::Assumptions,
        Section::PaymentTerms,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::ScopeOfWork => "Scope of Work",
            Section::TechnicalApproach => "Technical Approach",
            Section::TechnologyStack => "Technology Stack",
            Section::Deliverables => "Deliverables",
            Section::Timeline => "Timeline",
            Section::TeamStructure => "Team Structure",
            Section::Assumptions => "Assumptions & Dependencies",
            Section::PaymentTerms => "Payment Terms",
        }
    }
}

/// Blank strings count as missing
fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl Quote {
    pub fn client_name(&self) -> &str {
        non_blank(&self.client_name).unwrap_or("Client")
    }

    pub fn project_name(&self) -> &str {
        non_blank(&self.project_name).unwrap_or("proposal")
    }

    pub fn status(&self) -> &str {
        non_blank(&self.status).unwrap_or("PROPOSAL")
    }

    /// The quoted amount; a missing amount counts as zero
    pub fn amount(&self) -> Amount {
        self.amount.clone().unwrap_or(Amount::Number(0.0))
    }

    /// Body text of a section, if the quote has any
    pub fn section_body(&self, section: Section) -> Option<&str> {
        let body = match section {
            Section::ScopeOfWork => &self.scope,
            Section::TechnicalApproach => &self.technical_approach,
            Section::TechnologyStack => &self.tech_stack,
            Section::Deliverables => &self.deliverables,
            Section::Timeline => &self.timeline,
            Section::TeamStructure => &self.team_structure,
            Section::Assumptions => &self.assumptions,
            Section::PaymentTerms => &self.payment_terms,
        };
        body.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_a_stored_record() {
        let quote: Quote = serde_json::from_value(json!({
            "id": "abc123",
            "token": "Zq3vT9xk1A",
            "client_name": "PT Sinar Jaya",
            "project_name": "Warehouse Dashboard",
            "scope": "Build the dashboard",
            "tech_stack": "Rust, PostgreSQL",
            "amount": 12500000,
            "status": "Sent",
            "created_at": "2026-03-01T02:30:00Z"
        }))
        .expect("valid record");

        assert_eq!(quote.client_name(), "PT Sinar Jaya");
        assert_eq!(quote.amount(), Amount::Number(12_500_000.0));
        assert_eq!(quote.section_body(Section::TechnologyStack), Some("Rust, PostgreSQL"));
        assert_eq!(quote.section_body(Section::Timeline), None);
        assert!(quote.created_at.is_some());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let quote: Quote = serde_json::from_str("{}").expect("empty record");
        assert_eq!(quote.client_name(), "Client");
        assert_eq!(quote.project_name(), "proposal");
        assert_eq!(quote.status(), "PROPOSAL");
        assert_eq!(quote.amount(), Amount::Number(0.0));

        let quote: Quote =
            serde_json::from_value(json!({ "client_name": "   ", "status": "" })).expect("valid record");
        assert_eq!(quote.client_name(), "Client");
        assert_eq!(quote.status(), "PROPOSAL");
    }

    #[test]
    fn non_numeric_amounts_are_kept() {
        let quote: Quote =
            serde_json::from_value(json!({ "amount": "twelve million" })).expect("valid record");
        let amount = quote.amount();
        assert!(matches!(amount, Amount::Other(_)));
        assert_eq!(amount.value(), None);

        let quote: Quote = serde_json::from_value(json!({ "amount": null })).expect("valid record");
        assert_eq!(quote.amount(), Amount::Number(0.0));
    }

    #[test]
    fn sections_are_in_document_order() {
        let titles: Vec<_> = Section::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(titles.first(), Some(&"Scope of Work"));
        assert_eq!(titles.last(), Some(&"Payment Terms"));
        assert_eq!(titles.len(), 8);
    }
}
