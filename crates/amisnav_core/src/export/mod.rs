//! Identity-card export entry points.
//!
//! # Responsibility
//! - Render the single-row CSV export for one identity card.
//! - Keep the export wire shape (columns, quoting, file name) inside core.

pub mod identity_csv;

pub use identity_csv::{
    identity_csv_file_name, parse_identity_csv, render_identity_csv, save_identity_csv,
    ExportError, IdentityCsvRow, IDENTITY_CSV_HEADER,
};
