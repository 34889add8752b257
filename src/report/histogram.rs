//! Fixed-width histogram of sentiment scores and its SVG rendering.

use serde::{Deserialize, Serialize};

/// Chart size in inches.
pub const FIGURE_SIZE: (f64, f64) = (6.0, 4.0);

/// Pixels per inch used when rendering.
const DPI: f64 = 100.0;

// Plot margins in pixels: left, right, top, bottom
const MARGIN: (f64, f64, f64, f64) = (60.0, 20.0, 40.0, 50.0);

const BAR_COLOR: &str = "#1f77b4";
const BAR_OPACITY: f64 = 0.7;

/// Score counts over equally wide bins spanning the observed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges; `edges.len() == counts.len() + 1`
    pub edges: Vec<f64>,
    /// Number of scores per bin
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins `scores` into `bins` equal-width bins.
    ///
    /// The range is `[min, max]` of the scores. With no scores it is
    /// `[0, 1]`; when every score is the same value `v` it is
    /// `[v - 0.5, v + 0.5]`. The last bin includes its right edge.
    /// Non-finite scores are ignored.
    pub fn new(scores: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let finite: Vec<f64> = scores.iter().copied().filter(|s| s.is_finite()).collect();

        let (lo, hi) = match finite.iter().copied().fold(None, |acc: Option<(f64, f64)>, s| {
            Some(acc.map_or((s, s), |(lo, hi)| (lo.min(s), hi.max(s))))
        }) {
            None => (0.0, 1.0),
            Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
            Some(range) => range,
        };

        let width = (hi - lo) / bins as f64;
        let edges = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0; bins];
        for score in finite {
            let index = (((score - lo) / width).floor() as usize).min(bins - 1);
            counts[index] += 1;
        }

        Self { edges, counts }
    }

    /// Lower and upper edge of the whole histogram.
    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Total number of binned scores.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Renders the histogram as a standalone SVG chart.
    pub fn to_svg(&self) -> String {
        let width = FIGURE_SIZE.0 * DPI;
        let height = FIGURE_SIZE.1 * DPI;
        let (left, right, top, bottom) = MARGIN;
        let plot_w = width - left - right;
        let plot_h = height - top - bottom;
        let base_y = top + plot_h;

        // Keep at least one unit of headroom so an empty chart still has an axis
        let y_max = self.max_count().max(1) as f64;
        let bar_w = plot_w / self.bins() as f64;
        let (lo, hi) = self.range();

        let mut svg = Vec::new();
        svg.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
            w = width,
            h = height
        ));
        svg.push(format!(r#"<rect width="{}" height="{}" fill="white"/>"#, width, height));
        svg.push(format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">Sentiment Analysis of Reviews</text>"#,
            left + plot_w / 2.0,
            top / 2.0 + 5.0
        ));

        for (i, count) in self.counts.iter().enumerate() {
            if *count == 0 {
                continue;
            }
            let bar_h = *count as f64 / y_max * plot_h;
            svg.push(format!(
                r#"<rect class="bar" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="{}" stroke="black" stroke-width="1"><title>{:.2} to {:.2}: {}</title></rect>"#,
                left + bar_w * i as f64,
                base_y - bar_h,
                bar_w,
                bar_h,
                BAR_COLOR,
                BAR_OPACITY,
                self.edges[i],
                self.edges[i + 1],
                count
            ));
        }

        // Axes
        svg.push(format!(
            r#"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/>"#,
            l = left,
            r = left + plot_w,
            b = base_y
        ));
        svg.push(format!(
            r#"<line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="black"/>"#,
            l = left,
            t = top,
            b = base_y
        ));

        // X ticks at five evenly spaced positions
        for i in 0..=4 {
            let value = lo + (hi - lo) * i as f64 / 4.0;
            let x = left + plot_w * i as f64 / 4.0;
            svg.push(format!(
                r#"<line x1="{x:.2}" y1="{b}" x2="{x:.2}" y2="{t}" stroke="black"/><text x="{x:.2}" y="{ty}" text-anchor="middle">{v:.2}</text>"#,
                x = x,
                b = base_y,
                t = base_y + 5.0,
                ty = base_y + 18.0,
                v = value
            ));
        }

        // Y ticks on whole counts
        let step = (y_max / 5.0).ceil().max(1.0);
        let mut tick = 0.0;
        while tick <= y_max {
            let y = base_y - tick / y_max * plot_h;
            svg.push(format!(
                r#"<line x1="{l}" y1="{y:.2}" x2="{lt}" y2="{y:.2}" stroke="black"/><text x="{tx}" y="{ty:.2}" text-anchor="end">{v}</text>"#,
                l = left,
                lt = left - 5.0,
                y = y,
                tx = left - 8.0,
                ty = y + 4.0,
                v = tick as usize
            ));
            tick += step;
        }

        svg.push(format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">Sentiment Polarity</text>"#,
            left + plot_w / 2.0,
            height - 12.0
        ));
        svg.push(format!(
            r#"<text x="15" y="{y:.1}" text-anchor="middle" transform="rotate(-90 15 {y:.1})">Frequency</text>"#,
            y = top + plot_h / 2.0
        ));
        svg.push("</svg>".to_string());

        svg.join("\n")
    }
}
