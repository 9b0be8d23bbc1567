//! `ta-export` — writes the precomputed route table to CSV.
//!
//! One file, `route_table.csv`, with one row per directional table entry.
//! Useful for eyeballing the generated data and for feeding the samples to
//! external analysis tools.

pub mod csv_writer;
pub mod error;
pub mod row;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv_writer::{TableCsvWriter, export_table_csv};
pub use error::{ExportError, ExportResult};
pub use row::RouteSampleRow;
