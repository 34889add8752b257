//! Data models for a scraped product page.

use serde::{Deserialize, Serialize};

/// Display value used wherever a field could not be located.
pub const NOT_AVAILABLE: &str = "N/A";

/// Outcome of looking up a single scalar field on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum Field {
    /// The selector matched; holds the trimmed element text.
    Found(String),
    /// The selector matched nothing.
    Missing,
}

impl Field {
    /// Builds a field from an optional lookup result.
    pub fn from_option(text: Option<String>) -> Self {
        match text {
            Some(text) => Field::Found(text),
            None => Field::Missing,
        }
    }

    /// Returns the text to show to a user ("N/A" when missing).
    pub fn display(&self) -> &str {
        match self {
            Field::Found(text) => text,
            Field::Missing => NOT_AVAILABLE,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}

/// Everything extracted from one product page.
///
/// Rating and price stay as the raw text shown on the page; nothing here is
/// parsed into numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product title
    pub title: Field,
    /// Star rating text, e.g. "4.5 out of 5 stars"
    pub rating: Field,
    /// Whole part of the price, e.g. "29."
    pub price: Field,
    /// Review bodies in page order
    pub reviews: Vec<String>,
}

impl ProductRecord {
    /// Returns true when nothing at all was found on the page.
    ///
    /// This usually means the selectors no longer match the markup, or the
    /// page is a bot-check interstitial rather than a product page.
    pub fn looks_stale(&self) -> bool {
        self.title.is_missing()
            && self.rating.is_missing()
            && self.price.is_missing()
            && self.reviews.is_empty()
    }

    /// Names of the scalar fields that were not found.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [("title", &self.title), ("rating", &self.rating), ("price", &self.price)]
            .into_iter()
            .filter(|(_, field)| field.is_missing())
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_record() -> ProductRecord {
        ProductRecord {
            title: Field::Found("Widget".to_string()),
            rating: Field::Missing,
            price: Field::Found("29.".to_string()),
            reviews: vec!["Great!".to_string()],
        }
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Found("Widget".to_string()).display(), "Widget");
        assert_eq!(Field::Missing.display(), "N/A");
        assert_eq!(Field::Missing.to_string(), NOT_AVAILABLE);
    }

    #[test]
    fn test_field_from_option() {
        assert_eq!(Field::from_option(Some("x".to_string())), Field::Found("x".to_string()));
        assert_eq!(Field::from_option(None), Field::Missing);
    }

    #[test]
    fn test_found_na_is_not_missing() {
        // A page that literally says "N/A" is still a match
        let field = Field::Found("N/A".to_string());
        assert!(!field.is_missing());
        assert_eq!(field.display(), "N/A");
        assert_ne!(field, Field::Missing);
    }

    #[test]
    fn test_missing_fields() {
        let record = make_test_record();
        assert_eq!(record.missing_fields(), vec!["rating"]);
        assert!(!record.looks_stale());
    }

    #[test]
    fn test_looks_stale() {
        let record = ProductRecord {
            title: Field::Missing,
            rating: Field::Missing,
            price: Field::Missing,
            reviews: Vec::new(),
        };
        assert!(record.looks_stale());
        assert_eq!(record.missing_fields(), vec!["title", "rating", "price"]);

        let mut with_review = record.clone();
        with_review.reviews.push("Fine".to_string());
        assert!(!with_review.looks_stale());
    }

    #[test]
    fn test_field_serde() {
        let json = serde_json::to_string(&Field::Found("Widget".to_string())).unwrap();
        assert_eq!(json, r#"{"status":"found","text":"Widget"}"#);

        let json = serde_json::to_string(&Field::Missing).unwrap();
        assert_eq!(json, r#"{"status":"missing"}"#);

        let parsed: Field = serde_json::from_str(r#"{"status":"missing"}"#).unwrap();
        assert_eq!(parsed, Field::Missing);
    }

    #[test]
    fn test_record_serde() {
        let record = make_test_record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("Widget"));
        assert!(json.contains("Great!"));

        let parsed: ProductRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
