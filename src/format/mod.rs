//! Output formatting for analysis reports (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::report::Report;

/// Width of the longest bar in the text histogram.
const BAR_WIDTH: usize = 40;

/// Longest review shown in a table row before truncation.
const REVIEW_WIDTH: usize = 70;

/// Formats reports for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a report.
    pub fn format_report(&self, report: &Report) -> String {
        match self.format {
            OutputFormat::Json => self.json(report),
            OutputFormat::Table => self.table(report),
            OutputFormat::Markdown => self.markdown(report),
            OutputFormat::Csv => self.csv(report),
        }
    }

    // JSON formatting

    fn json(&self, report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    // Table formatting

    fn table(&self, report: &Report) -> String {
        let product = &report.product;
        let summary = &report.summary;
        let mut lines = Vec::new();

        lines.push(format!("Title:   {}", product.title));
        lines.push(format!("Rating:  {}", product.rating));
        lines.push(format!("Price:   {}", product.price));
        lines.push(format!(
            "Reviews: {} (mean {:+.2}; {} positive, {} negative, {} neutral)",
            report.table.len(),
            summary.mean,
            summary.positive,
            summary.negative,
            summary.neutral
        ));

        if report.stale_selectors {
            lines.push(String::new());
            lines.push("Warning: nothing was found on this page. It may not be a product page, or the layout has changed.".to_string());
        }

        if report.table.is_empty() {
            return lines.join("\n");
        }

        // Histogram
        lines.push(String::new());
        let max = report.histogram.max_count().max(1);
        for (i, count) in report.histogram.counts.iter().enumerate() {
            let bar = "#".repeat(count * BAR_WIDTH / max);
            lines.push(format!(
                "{:>+6.2} .. {:>+6.2} | {:<BAR_WIDTH$} {}",
                report.histogram.edges[i],
                report.histogram.edges[i + 1],
                bar,
                count
            ));
        }

        // Review table
        lines.push(String::new());
        lines.push(format!("{:>9}  {}", "Sentiment", "Review"));
        lines.push(format!("{:->9}  {:-<REVIEW_WIDTH$}", "", ""));
        for row in &report.table.rows {
            lines.push(format!("{:>+9.3}  {}", row.sentiment, truncate(&row.review, REVIEW_WIDTH)));
        }

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown(&self, report: &Report) -> String {
        let product = &report.product;
        let mut lines = Vec::new();

        lines.push("## Product Details".to_string());
        lines.push(String::new());
        lines.push(format!("- **Title:** {}", product.title));
        lines.push(format!("- **Rating:** {}", product.rating));
        lines.push(format!("- **Price:** {}", product.price));
        lines.push(format!("- **URL:** <{}>", report.url));
        lines.push(String::new());

        lines.push("## Sentiment Analysis of Reviews".to_string());
        lines.push(String::new());
        lines.push(format!(
            "Mean polarity **{:+.2}** across {} reviews.",
            report.summary.mean,
            report.table.len()
        ));
        lines.push(String::new());

        lines.push("| Review | Sentiment |".to_string());
        lines.push("|--------|-----------|".to_string());
        for row in &report.table.rows {
            let review = row.review.replace('|', "\\|").replace('\n', " ");
            lines.push(format!("| {} | {:.3} |", review, row.sentiment));
        }

        lines.join("\n")
    }

    // CSV formatting

    fn csv(&self, report: &Report) -> String {
        let mut lines = vec!["Review,Sentiment".to_string()];
        for row in &report.table.rows {
            lines.push(format!("{},{}", csv_escape(&row.review), row.sentiment));
        }
        lines.join("\n")
    }
}

/// Shortens `text` to at most `max` characters, marking the cut with "...".
fn truncate(text: &str, max: usize) -> String {
    let text = text.replace('\n', " ");
    if text.chars().count() <= max {
        return text;
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

/// Quotes a CSV field when it contains a delimiter, quote or newline.
fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amazon::models::{Field, ProductRecord};

    fn make_test_report() -> Report {
        let product = ProductRecord {
            title: Field::Found("Test Widget".to_string()),
            rating: Field::Found("4.5 out of 5 stars".to_string()),
            price: Field::Missing,
            reviews: vec!["Great, really".to_string(), "Terrible".to_string()],
        };
        Report::new("https://www.amazon.com/dp/B08N5WRWNW", product, vec![0.8, -1.0], 20)
    }

    #[test]
    fn test_table_format() {
        let output = Formatter::new(OutputFormat::Table).format_report(&make_test_report());
        assert!(output.contains("Title:   Test Widget"));
        assert!(output.contains("Rating:  4.5 out of 5 stars"));
        assert!(output.contains("Price:   N/A"));
        assert!(output.contains("Sentiment  Review"));
        assert!(output.contains("+0.800  Great, really"));
        assert!(output.contains("-1.000  Terrible"));
        assert!(output.contains('#'));
    }

    #[test]
    fn test_table_no_reviews() {
        let mut report = make_test_report();
        report.product.reviews.clear();
        let report = Report::new(report.url, report.product, Vec::new(), 20);

        let output = Formatter::new(OutputFormat::Table).format_report(&report);
        assert!(output.contains("Reviews: 0"));
        assert!(!output.contains("Sentiment  Review"));
    }

    #[test]
    fn test_table_stale_warning() {
        let product = ProductRecord {
            title: Field::Missing,
            rating: Field::Missing,
            price: Field::Missing,
            reviews: Vec::new(),
        };
        let report = Report::new("u", product, Vec::new(), 20);
        let output = Formatter::new(OutputFormat::Table).format_report(&report);
        assert!(output.contains("Warning"));
    }

    #[test]
    fn test_json_format() {
        let output = Formatter::new(OutputFormat::Json).format_report(&make_test_report());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["product"]["title"]["text"], "Test Widget");
        assert_eq!(value["sentiments"][1], -1.0);
    }

    #[test]
    fn test_markdown_format() {
        let output = Formatter::new(OutputFormat::Markdown).format_report(&make_test_report());
        assert!(output.contains("## Product Details"));
        assert!(output.contains("- **Title:** Test Widget"));
        assert!(output.contains("- **Price:** N/A"));
        assert!(output.contains("| Review | Sentiment |"));
        assert!(output.contains("| Terrible | -1.000 |"));
    }

    #[test]
    fn test_csv_format() {
        let output = Formatter::new(OutputFormat::Csv).format_report(&make_test_report());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Review,Sentiment");
        assert_eq!(lines[1], "\"Great, really\",0.8");
        assert_eq!(lines[2], "Terrible,-1");
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
        // Multi-byte characters are not split
        assert_eq!(truncate("ééééééééé", 6), "ééé...");
    }
}
