//! Console rendering for report tables

use console::Style;
use treeloclib::ReportTable;

/// Width of the name column in the breakdown
const NAME_WIDTH: usize = 20;

/// Widths of the numeric breakdown columns: Files, Lines, Code, Comments, Blank
const VALUE_WIDTHS: [usize; 5] = [8, 10, 10, 10, 8];

const RULE_WIDTH: usize = 80;

struct Theme {
    title: Style,
    heading: Style,
    header: Style,
    label: Style,
}

fn create_theme() -> Theme {
    Theme {
        title: Style::new().bold().cyan(),
        heading: Style::new().bold(),
        header: Style::new().bold().underlined(),
        label: Style::new().green(),
    }
}

/// Truncate a name to fit within max_len, adding ".." prefix if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    let count = name.chars().count();
    if count > max_len {
        let tail: String = name.chars().skip(count - max_len + 2).collect();
        format!("..{}", tail)
    } else {
        name.to_string()
    }
}

fn column_width(index: usize) -> usize {
    VALUE_WIDTHS.get(index).copied().unwrap_or(10)
}

/// Render a report table as styled text.
pub fn render_table(table: &ReportTable) -> String {
    let theme = create_theme();
    let rule = "=".repeat(RULE_WIDTH);
    let thin_rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!("{}\n", theme.title.apply_to(&table.title)));
    out.push_str(&format!("{}\n", rule));

    out.push_str(&format!("\n{}\n", theme.heading.apply_to("OVERALL TOTALS")));
    for row in &table.totals {
        let value = row.values.first().map(String::as_str).unwrap_or("");
        out.push_str(&format!("   {:<15} {:>12}\n", format!("{}:", row.label), value));
    }

    if !table.percentages.is_empty() {
        out.push_str(&format!("\n{}\n", theme.heading.apply_to("PERCENTAGES")));
        for row in &table.percentages {
            let value = row.values.first().map(String::as_str).unwrap_or("");
            out.push_str(&format!("   {:<15} {:>7}\n", format!("{}:", row.label), value));
        }
    }

    out.push_str(&format!(
        "\n{}\n",
        theme.heading.apply_to("BREAKDOWN BY DIRECTORY")
    ));
    out.push_str(&format!("{}\n", thin_rule));

    let mut header_line = String::new();
    if let Some((name, values)) = table.headers.split_first() {
        header_line.push_str(&format!("{:<width$}", name, width = NAME_WIDTH));
        for (i, h) in values.iter().enumerate() {
            header_line.push_str(&format!(" {:>width$}", h, width = column_width(i)));
        }
    }
    out.push_str(&format!("{}\n", theme.header.apply_to(header_line)));

    for row in &table.rows {
        let name = format!(
            "{:<width$}",
            truncate_name(&row.label, NAME_WIDTH),
            width = NAME_WIDTH
        );
        out.push_str(&theme.label.apply_to(name).to_string());
        for (i, v) in row.values.iter().enumerate() {
            out.push_str(&format!(" {:>width$}", v, width = column_width(i)));
        }
        out.push('\n');
    }

    if !table.file_types.is_empty() {
        out.push_str(&format!("\n{}\n", theme.heading.apply_to("TOP FILE TYPES")));
        out.push_str(&format!("{}\n", "-".repeat(40)));
        for row in &table.file_types {
            let value = row.values.first().map(String::as_str).unwrap_or("");
            out.push_str(&format!("   {:<12} {:>8} files\n", row.label, value));
        }
    }

    out.push_str(&format!("\n{}\n", rule));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use treeloclib::{Aggregator, BucketKey, FileClassification, Report};

    fn sample_table() -> ReportTable {
        let mut agg = Aggregator::new();
        agg.record(
            BucketKey::directory("a-very-long-directory-name-indeed"),
            FileClassification {
                total: 10,
                blank: 2,
                comment: 3,
                code: 5,
            },
            ".py",
        );
        let report = Report::from_result(&agg.finalize(PathBuf::from("/p")), 10);
        ReportTable::from_report(&report)
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("lib", 20), "lib");
        assert_eq!(truncate_name("abcdefghij", 6), "..ghij");
    }

    #[test]
    fn test_render_sections() {
        console::set_colors_enabled(false);
        let text = render_table(&sample_table());

        assert!(text.contains("OVERALL TOTALS"));
        assert!(text.contains("PERCENTAGES"));
        assert!(text.contains("BREAKDOWN BY DIRECTORY"));
        assert!(text.contains("TOP FILE TYPES"));
        assert!(text.contains("..ectory-name-indeed"));
        assert!(text.contains(".py"));
        assert!(text.contains("50.0%"));
    }
}
