//! Output formatting: present reports as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting a [`Report`](crate::report::Report) for display. It provides:
//!
//! - **ReportTable**: table-ready strings for every section of the report
//! - **TableRow**: individual row with label and formatted values
//!
//! ReportTable is a pure presentation layer - it only formats data into strings.
//! All aggregation and sorting happens in the report stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use treeloclib::output::ReportTable;
//!
//! let table = ReportTable::from_report(&report);
//! // table.headers: ["Directory", "Files", "Lines", "Code", "Comments", "Blank"]
//! // table.rows: [TableRow { label: "lib", values: ["12", "1,204", ...] }]
//! ```

pub mod table;

pub use table::{format_count, format_percent, ReportTable, TableRow};
