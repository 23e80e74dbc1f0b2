//! Report exporters - console table, CSV, JSON, Markdown
//!
//! Every report is a title, a grid of pre-formatted cells and a list of
//! summary pairs. Exporters only lay the cells out.

use std::borrow::Cow;

/// Renders a [`ReportData`] into one output format
pub trait ReportExporter {
    fn export(&self, report: &dyn ReportData) -> String;
}

/// Tabular content shared by all listings
pub trait ReportData {
    fn title(&self) -> &str;

    fn headers(&self) -> Vec<String>;

    /// One inner vector per row, cells already formatted
    fn rows(&self) -> Vec<Vec<String>>;

    /// Totals and metadata shown under (or above) the rows
    fn summary(&self) -> Vec<(String, String)>;

    /// Column widths for fixed-width output, padding included.
    ///
    /// Defaults to the widest cell of each column plus two spaces.
    fn column_widths(&self) -> Vec<usize> {
        let rows = self.rows();
        self.headers()
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
                    + 2
            })
            .collect()
    }

    /// Fixed console heading: header text and length of the `=` rule.
    ///
    /// `None` lays the headers out on the column widths instead.
    fn table_heading(&self) -> Option<(String, usize)> {
        None
    }

    /// Indexes of columns holding amounts or counts
    fn numeric_columns(&self) -> Vec<usize> {
        Vec::new()
    }
}

// ============================================================================
// Table Exporter
// ============================================================================

/// Column-aligned console table
#[derive(Default)]
pub struct TableExporter {
    summary: bool,
}

impl TableExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(mut self) -> Self {
        self.summary = true;
        self
    }

    fn format_line(cells: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(0);
            line.push_str(&format!("{:<width$}", cell, width = width));
        }
        line.trim_end().to_string()
    }
}

impl ReportExporter for TableExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let mut output = String::new();
        let widths = report.column_widths();

        let (heading, rule) = report.table_heading().unwrap_or_else(|| {
            (
                Self::format_line(&report.headers(), &widths),
                widths.iter().sum(),
            )
        });
        output.push_str(&heading);
        output.push('\n');
        output.push_str(&"=".repeat(rule));
        output.push('\n');

        for row in report.rows() {
            output.push_str(&Self::format_line(&row, &widths));
            output.push('\n');
        }

        if self.summary {
            output.push('\n');
            for (key, value) in report.summary() {
                output.push_str(&format!("{}: {}\n", key, value));
            }
        }

        output
    }
}


// ============================================================================
// CSV Exporter
// ============================================================================

/// Comma separated values with a header record, quoted where needed
#[derive(Default)]
pub struct CsvExporter;

impl CsvExporter {
    const DELIMITER: char = ',';

    pub fn new() -> Self {
        Self
    }

    fn quote(cell: &str) -> Cow<'_, str> {
        let needs_quotes = cell
            .chars()
            .any(|c| c == Self::DELIMITER || c == '"' || c == '\n' || c == '\r');
        if needs_quotes {
            Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(cell)
        }
    }

    fn write_record(output: &mut String, cells: &[String]) {
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                output.push(Self::DELIMITER);
            }
            output.push_str(&Self::quote(cell));
        }
        output.push('\n');
    }
}

impl ReportExporter for CsvExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let mut output = String::new();
        Self::write_record(&mut output, &report.headers());
        for row in report.rows() {
            Self::write_record(&mut output, &row);
        }
        output
    }
}

// ============================================================================
// JSON Exporter
// ============================================================================

/// Pretty-printed JSON document with `columns`, `rows` (arrays of cells)
/// and `summary`
#[derive(Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportExporter for JsonExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let summary: serde_json::Map<String, serde_json::Value> = report
            .summary()
            .into_iter()
            .map(|(key, value)| (key, serde_json::Value::from(value)))
            .collect();

        let document = serde_json::json!({
            "title": report.title(),
            "columns": report.headers(),
            "rows": report.rows(),
            "summary": summary,
        });

        // Serializing a Value built from strings cannot fail
        serde_json::to_string_pretty(&document).unwrap_or_default()
    }
}

// ============================================================================
// Markdown Exporter
// ============================================================================

/// Markdown table, numeric columns right-aligned
pub struct MarkdownExporter {
    summary: bool,
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self { summary: true }
    }
}

impl MarkdownExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_summary(mut self) -> Self {
        self.summary = false;
        self
    }

    fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
        let cells: Vec<String> = cells
            .iter()
            .map(|cell| cell.as_ref().replace('|', "\\|"))
            .collect();
        format!("| {} |\n", cells.join(" | "))
    }
}

impl ReportExporter for MarkdownExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let mut output = format!("# {}\n\n", report.title());

        let headers = report.headers();
        if !headers.is_empty() {
            let numeric = report.numeric_columns();
            let alignment: Vec<&str> = (0..headers.len())
                .map(|i| if numeric.contains(&i) { "---:" } else { "---" })
                .collect();

            output.push_str(&Self::table_row(&headers));
            output.push_str(&format!("| {} |\n", alignment.join(" | ")));
            for row in report.rows() {
                output.push_str(&Self::table_row(&row));
            }
        }

        if self.summary {
            output.push('\n');
            for (key, value) in report.summary() {
                output.push_str(&format!("- **{}**: {}\n", key, value));
            }
        }

        output
    }
}
