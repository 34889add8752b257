//! HTML rendering for the web UI.

use crate::commands::FETCH_FAILED_MESSAGE;
use crate::report::{Report, SentimentSummary};
use anyhow::{Context, Result};
use minijinja::{context, Environment};
use serde::{Deserialize, Serialize};

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Amazon Product Analysis</title>
<style>
  body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #262730; }
  form { display: flex; gap: .5rem; margin-bottom: 1rem; }
  input[name=url] { flex: 1; padding: .5rem; }
  button { padding: .5rem 1rem; }
  .error { background: #ffe8e8; color: #7d1a1a; padding: .75rem 1rem; border-radius: .25rem; }
  .warning { background: #fff7e0; color: #6b4a00; padding: .75rem 1rem; border-radius: .25rem; }
  #busy { margin: 1rem 0; }
  table { border-collapse: collapse; width: 100%; }
  th, td { border: 1px solid #ddd; padding: .4rem .6rem; text-align: left; vertical-align: top; }
  td.score { text-align: right; font-variant-numeric: tabular-nums; white-space: nowrap; }
</style>
</head>
<body>
<h1>Amazon Product Analysis</h1>
<form action="/analyze" method="get" onsubmit="document.getElementById('busy').hidden = false">
  <input type="text" name="url" value="{{ session.url }}" placeholder="Enter Amazon Product URL:" aria-label="Enter Amazon Product URL:">
  <button type="submit">Analyze</button>
</form>
<div id="busy" hidden>Fetching product data...</div>
{% if error %}
<p class="error">{{ error }}</p>
{% elif results %}
<h2>Product Details</h2>
<p><strong>Title:</strong> {{ results.title }}</p>
<p><strong>Rating:</strong> {{ results.rating }}</p>
<p><strong>Price:</strong> {{ results.price }}</p>
{% if results.stale %}
<p class="warning">No product details or reviews were found on this page. It may not be a product page, or its layout has changed.</p>
{% endif %}
<h2>Sentiment Analysis of Reviews</h2>
<figure>{{ results.chart | safe }}</figure>
<p>{{ results.rows | length }} reviews, mean polarity {{ results.mean }}
  ({{ results.summary.positive }} positive, {{ results.summary.negative }} negative, {{ results.summary.neutral }} neutral).
  <a href="{{ results.json_link }}">JSON</a></p>
<table>
  <thead><tr><th>Review</th><th>Sentiment</th></tr></thead>
  <tbody>
  {% for row in results.rows %}
    <tr><td>{{ row.review }}</td><td class="score">{{ row.sentiment }}</td></tr>
  {% endfor %}
  </tbody>
</table>
{% endif %}
</body>
</html>
"#;

/// Values the UI remembers between interactions.
///
/// The page is re-rendered from scratch on every request; this is the only
/// state carried from one interaction to the next (through the query string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Last submitted product URL
    #[serde(default)]
    pub url: String,
}

impl Session {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The submitted URL, trimmed, or `None` when nothing was entered.
    pub fn target(&self) -> Option<&str> {
        let url = self.url.trim();
        (!url.is_empty()).then_some(url)
    }
}

/// Display-ready view of a report.
#[derive(Debug, Serialize)]
struct ResultsView {
    title: String,
    rating: String,
    price: String,
    stale: bool,
    chart: String,
    mean: String,
    summary: SentimentSummary,
    rows: Vec<RowView>,
    json_link: String,
}

#[derive(Debug, Serialize)]
struct RowView {
    review: String,
    sentiment: String,
}

impl ResultsView {
    fn new(report: &Report) -> Self {
        Self {
            title: report.product.title.display().to_string(),
            rating: report.product.rating.display().to_string(),
            price: report.product.price.display().to_string(),
            stale: report.stale_selectors,
            chart: report.histogram.to_svg(),
            mean: format!("{:+.3}", report.summary.mean),
            summary: report.summary.clone(),
            rows: report
                .table
                .rows
                .iter()
                .map(|row| RowView {
                    review: row.review.clone(),
                    sentiment: format!("{:.6}", row.sentiment),
                })
                .collect(),
            json_link: format!("/api/analyze?url={}", urlencoding::encode(&report.url)),
        }
    }
}

/// Renders the single UI page in its three states.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    /// Loads the page template.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("page.html", PAGE_TEMPLATE).context("Failed to load page template")?;
        Ok(Self { env })
    }

    /// The input form alone.
    pub fn form(&self, session: &Session) -> Result<String> {
        self.render(context! { session => session })
    }

    /// The form followed by the fetch failure message.
    pub fn failure(&self, session: &Session) -> Result<String> {
        self.render(context! { session => session, error => FETCH_FAILED_MESSAGE })
    }

    /// The form followed by the analysis results.
    pub fn results(&self, session: &Session, report: &Report) -> Result<String> {
        let results = ResultsView::new(report);
        self.render(context! { session => session, results => results })
    }

    fn render(&self, ctx: minijinja::Value) -> Result<String> {
        let template = self.env.get_template("page.html")?;
        template.render(ctx).context("Failed to render page")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amazon::models::{Field, ProductRecord};

    fn make_report(reviews: &[&str], sentiments: Vec<f64>) -> Report {
        let product = ProductRecord {
            title: Field::Found("Widget".to_string()),
            rating: Field::Missing,
            price: Field::Found("19.".to_string()),
            reviews: reviews.iter().map(|r| r.to_string()).collect(),
        };
        Report::new("https://www.amazon.com/dp/B0TEST", product, sentiments, 20)
    }

    #[test]
    fn test_session_target() {
        assert_eq!(Session::default().target(), None);
        assert_eq!(Session::new("   ").target(), None);
        assert_eq!(Session::new(" https://a.b/ ").target(), Some("https://a.b/"));
    }

    #[test]
    fn test_form_page() {
        let html = Pages::new().unwrap().form(&Session::default()).unwrap();
        assert!(html.contains("<h1>Amazon Product Analysis</h1>"));
        assert!(html.contains("Enter Amazon Product URL:"));
        assert!(html.contains(">Analyze</button>"));
        assert!(html.contains("Fetching product data..."));
        assert!(!html.contains("Product Details"));
    }

    #[test]
    fn test_form_keeps_session_url() {
        let session = Session::new("amazon.com?asin=B0TEST");
        let html = Pages::new().unwrap().form(&session).unwrap();
        assert!(html.contains(r#"value="amazon.com?asin=B0TEST""#));
    }

    #[test]
    fn test_failure_page() {
        let html = Pages::new().unwrap().failure(&Session::new("bad")).unwrap();
        assert!(html.contains(FETCH_FAILED_MESSAGE));
        assert!(!html.contains("Product Details"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_results_page() {
        let report = make_report(&["Great!", "Terrible"], vec![0.8, -1.0]);
        let html = Pages::new().unwrap().results(&Session::new(&report.url), &report).unwrap();

        assert!(html.contains("<h2>Product Details</h2>"));
        assert!(html.contains("<strong>Title:</strong> Widget"));
        assert!(html.contains("<strong>Rating:</strong> N/A"));
        assert!(html.contains("<strong>Price:</strong> 19."));
        assert!(html.contains("<h2>Sentiment Analysis of Reviews</h2>"));
        // Chart is embedded unescaped
        assert!(html.contains("<svg"));
        assert!(html.contains("<tr><th>Review</th><th>Sentiment</th></tr>"));
        assert!(html.contains("<tr><td>Great!</td><td class=\"score\">0.800000</td></tr>"));
        assert!(html.contains("<td>Great!</td>"));
        assert!(html.contains("0.800000"));
        assert!(html.contains("-1.000000"));
        assert!(!html.contains(FETCH_FAILED_MESSAGE));
        assert!(!html.contains("class=\"warning\""));
    }

    #[test]
    fn test_results_rows_in_order() {
        let report = make_report(&["first", "second", "third"], vec![0.0, 0.0, 0.0]);
        let html = Pages::new().unwrap().results(&Session::default(), &report).unwrap();
        let first = html.find("<td>first</td>").unwrap();
        let second = html.find("<td>second</td>").unwrap();
        let third = html.find("<td>third</td>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_results_empty_reviews() {
        let report = make_report(&[], Vec::new());
        let html = Pages::new().unwrap().results(&Session::default(), &report).unwrap();
        assert!(html.contains("<svg"));
        assert!(html.contains("0 reviews"));
    }

    #[test]
    fn test_review_text_is_escaped() {
        let report = make_report(&["<script>alert(1)</script>"], vec![0.0]);
        let html = Pages::new().unwrap().results(&Session::default(), &report).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_stale_notice() {
        let product = ProductRecord {
            title: Field::Missing,
            rating: Field::Missing,
            price: Field::Missing,
            reviews: Vec::new(),
        };
        let report = Report::new("u", product, Vec::new(), 20);
        let html = Pages::new().unwrap().results(&Session::default(), &report).unwrap();
        assert!(html.contains("class=\"warning\""));
        assert!(html.contains("<strong>Title:</strong> N/A"));
    }

    #[test]
    fn test_json_link_encodes_url() {
        let report = make_report(&[], Vec::new());
        let view = ResultsView::new(&report);
        assert_eq!(view.json_link, "/api/analyze?url=https%3A%2F%2Fwww.amazon.com%2Fdp%2FB0TEST");
    }
}
