//! PagSeguro XML response types.
//!
//! Only the fields the gateway reads are modelled; anything else in the
//! document is ignored.

use serde::Deserialize;

/// Successful registration: `<checkout><code/><date/></checkout>`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutResponse {
    /// Checkout code identifying the payment page.
    pub code: String,

    /// Registration timestamp (RFC 3339).
    #[serde(default)]
    pub date: Option<String>,
}

/// Rejected registration: `<errors><error>...</error></errors>`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorsResponse {
    #[serde(rename = "error", default)]
    pub errors: Vec<ProviderErrorEntry>,
}

/// One `<error>` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorEntry {
    pub code: String,
    pub message: String,
}

impl CheckoutResponse {
    pub fn from_xml(body: &str) -> Result<Self, quick_xml::de::DeError> {
        quick_xml::de::from_str(body)
    }
}

impl ErrorsResponse {
    pub fn from_xml(body: &str) -> Result<Self, quick_xml::de::DeError> {
        quick_xml::de::from_str(body)
    }

    /// `code: message` pairs joined with `; `.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.code, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_checkout_response() {
        let xml = r#"<?xml version="1.0" encoding="ISO-8859-1" standalone="yes"?>
            <checkout>
                <code>8CF4BE7DCECEF0F004A6DFA0A8243412</code>
                <date>2010-12-02T10:11:28.000-02:00</date>
            </checkout>"#;

        let response = CheckoutResponse::from_xml(xml).unwrap();

        assert_eq!(response.code, "8CF4BE7DCECEF0F004A6DFA0A8243412");
        assert_eq!(
            response.date.as_deref(),
            Some("2010-12-02T10:11:28.000-02:00")
        );
    }

    #[test]
    fn checkout_date_is_optional() {
        let response = CheckoutResponse::from_xml("<checkout><code>ABC</code></checkout>").unwrap();
        assert_eq!(response.code, "ABC");
        assert!(response.date.is_none());
    }

    #[test]
    fn parses_multiple_errors() {
        let xml = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
            <errors>
                <error><code>11004</code><message>Currency is required.</message></error>
                <error><code>11005</code><message>Currency invalid value: 100</message></error>
            </errors>"#;

        let response = ErrorsResponse::from_xml(xml).unwrap();

        assert_eq!(response.errors.len(), 2);
        assert_eq!(response.errors[0].code, "11004");
        assert_eq!(
            response.summary(),
            "11004: Currency is required.; 11005: Currency invalid value: 100"
        );
    }

    #[test]
    fn error_document_is_not_a_checkout() {
        let xml = "<errors><error><code>11004</code><message>Currency is required.</message></error></errors>";
        assert!(CheckoutResponse::from_xml(xml).is_err());
    }
}
