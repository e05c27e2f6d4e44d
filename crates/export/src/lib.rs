//! `imprint-export` — presentation-only serializers for report output.
//!
//! Pure functions from aggregated report rows to delimiter-escaped CSV text
//! and print-oriented HTML. No business logic lives here, and no sensitive
//! field (raw or encrypted tax identifiers) ever reaches an export path.

pub mod csv;
pub mod print;
pub mod reports;

pub use csv::{CsvBuilder, escape_field, parse_csv};
pub use print::{escape_html, render_table};
pub use reports::{aging_csv, aging_html, contacts_csv, liability_csv, sales_csv};
