//! Integration tests for extraction and scoring using fixture files.

use amz_sentiment::amazon::parser::Parser;
use amz_sentiment::amazon::Field;
use amz_sentiment::report::Report;
use amz_sentiment::sentiment::SentimentAnalyzer;

const PRODUCT_FIXTURE: &str = include_str!("fixtures/product_page.html");

#[test]
fn test_parse_product_page() {
    let product = Parser::new().extract(PRODUCT_FIXTURE);

    assert_eq!(product.title, Field::Found("Acme Wireless Mouse, Silent Click, 2.4G".to_string()));
    // First star widget on the page is the product's, not a review's
    assert_eq!(product.rating, Field::Found("4.5 out of 5 stars".to_string()));
    // Whole part only, decimal separator included
    assert_eq!(product.price, Field::Found("24.".to_string()));

    assert_eq!(product.reviews.len(), 4);
    assert_eq!(product.reviews[0], "Great mouse, very comfortable and the battery lasts forever.");
    assert_eq!(product.reviews[3], "Not bad for the price.");
    assert!(!product.looks_stale());
}

#[test]
fn test_score_product_reviews() {
    let product = Parser::new().extract(PRODUCT_FIXTURE);
    let sentiments = SentimentAnalyzer::new().score(&product.reviews);

    assert_eq!(sentiments.len(), product.reviews.len());
    assert!(sentiments[0] > 0.0);
    assert!(sentiments[1] < 0.0);
    assert_eq!(sentiments[2], 0.0);
    // Negated negative reads as mildly positive
    assert!(sentiments[3] > 0.0);
    assert!(sentiments.iter().all(|s| (-1.0..=1.0).contains(s)));
}

#[test]
fn test_report_from_fixture() {
    let product = Parser::new().extract(PRODUCT_FIXTURE);
    let sentiments = SentimentAnalyzer::new().score(&product.reviews);
    let report = Report::new("https://www.amazon.com/dp/B0FIXTURE", product, sentiments, 20);

    assert_eq!(report.table.len(), 4);
    assert_eq!(report.table.rows[1].review, "Terrible scroll wheel. It broke after a week.");
    assert_eq!(report.histogram.bins(), 20);
    assert_eq!(report.histogram.total(), 4);
    assert_eq!(report.summary.positive, 2);
    assert_eq!(report.summary.negative, 1);
    assert_eq!(report.summary.neutral, 1);
}

#[test]
fn test_parse_non_product_page() {
    let html = r#"
        <html>
        <body>
            <h1>Sorry! Something went wrong!</h1>
            <a href="/">Go to the Amazon.com homepage</a>
        </body>
        </html>
    "#;

    let product = Parser::new().extract(html);
    assert_eq!(product.title.display(), "N/A");
    assert_eq!(product.rating.display(), "N/A");
    assert_eq!(product.price.display(), "N/A");
    assert!(product.reviews.is_empty());
    assert!(product.looks_stale());
}
