//! Occupation export cleanup: the ESCO occupation dump repeats rows per URI.

use std::collections::HashSet;
use std::io::{Read, Write};

use serde::Serialize;
use tracing::info;

use super::CatalogError;

/// Column order of the headerless occupations export.
pub const OCCUPATION_COLUMNS: [&str; 7] = [
    "occupation",
    "uri",
    "description",
    "essential_skills",
    "essential_knowledge",
    "optional_skills",
    "optional_knowledge",
];

const URI_COLUMN: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DedupSummary {
    pub rows_read: usize,
    pub duplicates_removed: usize,
}

impl DedupSummary {
    pub fn unique_rows(&self) -> usize {
        self.rows_read - self.duplicates_removed
    }
}

/// Copy a headerless occupations CSV to `writer`, keeping the first row per URI
/// and prefixing the named header row.
pub fn dedup_occupations<R: Read, W: Write>(
    reader: R,
    writer: W,
) -> Result<DedupSummary, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(OCCUPATION_COLUMNS)?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut rows_read = 0;
    let mut duplicates_removed = 0;

    for record in csv_reader.records() {
        let record = record?;
        rows_read += 1;

        let uri = record.get(URI_COLUMN).unwrap_or_default().to_string();
        if !seen.insert(uri) {
            duplicates_removed += 1;
            continue;
        }

        let padded: Vec<&str> = (0..OCCUPATION_COLUMNS.len())
            .map(|index| record.get(index).unwrap_or_default())
            .collect();
        csv_writer.write_record(&padded)?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;

    let summary = DedupSummary {
        rows_read,
        duplicates_removed,
    };
    info!(
        rows_read,
        duplicates_removed,
        unique_rows = summary.unique_rows(),
        "occupations deduplicated"
    );
    Ok(summary)
}
