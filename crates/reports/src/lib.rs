//! # Loanbank Reports
//!
//! Report generation for the customer and loan registries.
//!
//! ## Exporters
//!
//! - [`TableExporter`] - column-aligned console table
//! - [`CsvExporter`] - CSV format with proper escaping
//! - [`JsonExporter`] - pretty-printed JSON
//! - [`MarkdownExporter`] - Markdown tables for documentation
//!
//! ## Reports
//!
//! - [`CustomerReport`] - all customers
//! - [`LoanReport`] - all loans with annual rate and term in years
//! - [`ScheduleReport`] - month-by-month amortization of one loan
//!
//! ## Example
//!
//! ```rust,ignore
//! use loanbank_reports::{CustomerReport, ReportExporter, TableExporter};
//!
//! let report = CustomerReport::from_bank(&bank);
//! println!("{}", TableExporter::new().export(&report));
//! ```

pub mod exporters;
pub mod portfolio;

pub use exporters::{
    CsvExporter,
    JsonExporter,
    MarkdownExporter,
    ReportData,
    ReportExporter,
    TableExporter,
};

pub use portfolio::{CustomerReport, LoanReport, ScheduleReport};
