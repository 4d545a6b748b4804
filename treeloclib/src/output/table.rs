//! Table-ready data structures for report output.
//!
//! The data flow is:
//! 1. Raw data (AnalysisResult)
//! 2. Report (totals, sorted breakdown, rankings)
//! 3. ReportTable (formatted strings for display)

use serde::{Deserialize, Serialize};

use crate::report::summary::Report;

/// A single row in a table section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (bucket name, extension, "Total Files", ...)
    pub label: String,
    /// Values for each column (as strings, ready for display)
    pub values: Vec<String>,
}

impl TableRow {
    fn new(label: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Table-ready report.
///
/// Renderers iterate over the sections and apply styling - no computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Title line, naming the analyzed root
    pub title: String,
    /// Overall totals, one row per counter
    pub totals: Vec<TableRow>,
    /// Percentage rows; empty when there were no lines
    pub percentages: Vec<TableRow>,
    /// Breakdown headers: ["Directory", "Files", "Lines", "Code", "Comments", "Blank"]
    pub headers: Vec<String>,
    /// One row per bucket, in report order
    pub rows: Vec<TableRow>,
    /// Top file types: label is the extension, single value is the file count
    pub file_types: Vec<TableRow>,
}

impl ReportTable {
    /// Format a report.
    pub fn from_report(report: &Report) -> Self {
        let t = &report.totals;
        let totals = vec![
            TableRow::new("Total Files", vec![format_count(t.files)]),
            TableRow::new("Total Lines", vec![format_count(t.lines)]),
            TableRow::new("Code Lines", vec![format_count(t.code_lines)]),
            TableRow::new("Comment Lines", vec![format_count(t.comment_lines)]),
            TableRow::new("Blank Lines", vec![format_count(t.blank_lines)]),
        ];

        let percentages = match &report.percentages {
            Some(p) => vec![
                TableRow::new("Code", vec![format_percent(p.code)]),
                TableRow::new("Comments", vec![format_percent(p.comment)]),
                TableRow::new("Blank", vec![format_percent(p.blank)]),
            ],
            None => Vec::new(),
        };

        let headers = ["Directory", "Files", "Lines", "Code", "Comments", "Blank"]
            .iter()
            .map(|h| h.to_string())
            .collect();

        let rows = report
            .buckets
            .iter()
            .map(|b| {
                TableRow::new(
                    b.name.clone(),
                    vec![
                        format_count(b.totals.files),
                        format_count(b.totals.lines),
                        format_count(b.totals.code_lines),
                        format_count(b.totals.comment_lines),
                        format_count(b.totals.blank_lines),
                    ],
                )
            })
            .collect();

        let file_types = report
            .top_extensions
            .iter()
            .map(|e| TableRow::new(e.extension.clone(), vec![format_count(e.files)]))
            .collect();

        ReportTable {
            title: format!("Codebase analysis: {}", report.root.display()),
            totals,
            percentages,
            headers,
            rows,
            file_types,
        }
    }
}

/// Format a count with `,` thousands separators (`1234567` → `"1,234,567"`).
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a percentage with one decimal (`12.345` → `"12.3%"`).
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregator::Aggregator;
    use crate::data::stats::{AnalysisResult, BucketKey, FileClassification};
    use std::path::PathBuf;

    fn sample_report() -> Report {
        let mut agg = Aggregator::new();
        agg.record(
            BucketKey::directory("src"),
            FileClassification {
                total: 1500,
                blank: 200,
                comment: 300,
                code: 1000,
            },
            ".rs",
        );
        agg.record(
            BucketKey::Root,
            FileClassification {
                total: 4,
                blank: 1,
                comment: 0,
                code: 3,
            },
            ".toml",
        );
        Report::from_result(&agg.finalize(PathBuf::from("/work/app")), 10)
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(123456), "123,456");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(66.666), "66.7%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn test_table_from_report() {
        let table = ReportTable::from_report(&sample_report());

        assert_eq!(table.headers.len(), 6);
        assert_eq!(table.headers[0], "Directory");
        assert_eq!(table.totals[0].values, vec!["2"]);
        assert_eq!(table.totals[1].values, vec!["1,504"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].label, "src");
        assert_eq!(
            table.rows[0].values,
            vec!["1", "1,500", "1,000", "300", "200"]
        );
        assert_eq!(table.rows[1].label, "root");
        assert_eq!(table.percentages.len(), 3);
        assert_eq!(table.file_types.len(), 2);
        assert!(table.title.contains("/work/app"));
    }

    #[test]
    fn test_table_without_lines_has_no_percentages() {
        let report = Report::from_result(&AnalysisResult::new(PathBuf::from("/p")), 10);
        let table = ReportTable::from_report(&report);

        assert!(table.percentages.is_empty());
        assert!(table.rows.is_empty());
        assert_eq!(table.totals[0].values, vec!["0"]);
    }
}
