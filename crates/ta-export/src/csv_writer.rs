//! CSV output backend.
//!
//! Creates one file in the configured output directory: `route_table.csv`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use ta_core::LocationRegistry;
use ta_engine::RouteTable;

use crate::ExportResult;
use crate::row::RouteSampleRow;

/// Writes route-table rows to `route_table.csv`.
pub struct TableCsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl TableCsvWriter {
    /// Open (or create) `route_table.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> ExportResult<Self> {
        let mut rows = Writer::from_path(dir.join("route_table.csv"))?;
        rows.write_record([
            "source",
            "destination",
            "distance_km",
            "hour",
            "base_time_min",
            "congestion_level",
            "travel_time_min",
            "speed_kmh",
            "traffic_status",
        ])?;

        Ok(Self { rows, finished: false })
    }

    /// Write a batch of rows.
    pub fn write_rows(&mut self, rows: &[RouteSampleRow]) -> ExportResult<()> {
        for row in rows {
            self.rows.write_record(&[
                row.source.clone(),
                row.destination.clone(),
                row.distance_km.to_string(),
                row.hour.to_string(),
                row.base_time_min.to_string(),
                row.congestion_level.to_string(),
                row.travel_time_min.to_string(),
                row.speed_kmh.to_string(),
                row.traffic_status.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Flush and close the underlying file handle.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> ExportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}

/// Export every entry of `table` to `dir/route_table.csv`, sorted by
/// `(source, destination, hour)` for stable diffs.
///
/// Returns the number of rows written.
pub fn export_table_csv(
    table:    &RouteTable,
    registry: &LocationRegistry,
    dir:      &Path,
) -> ExportResult<usize> {
    let mut rows: Vec<RouteSampleRow> = table
        .iter()
        .map(|s| RouteSampleRow::from_sample(s, registry))
        .collect();
    rows.sort_by(|a, b| {
        (a.source.as_str(), a.destination.as_str(), a.hour)
            .cmp(&(b.source.as_str(), b.destination.as_str(), b.hour))
    });

    let mut writer = TableCsvWriter::new(dir)?;
    writer.write_rows(&rows)?;
    writer.finish()?;
    Ok(rows.len())
}
