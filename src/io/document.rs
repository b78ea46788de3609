//! Pattern document rendering and parsing
//!
//! The document is a JSON array of `{ "id", "tablero" }` objects. Rendering
//! uses a fixed layout with every grid row on its own line so the file stays
//! readable; parsing accepts any JSON whitespace.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithm::batch::PatternRecord;
use crate::io::configuration::DOCUMENT_INDENT;
use crate::io::error::{PatternError, Result, WithPath};
use crate::spatial::Grid;

/// Serialized shape of one pattern record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Sequential identifier
    pub id: usize,
    /// Grid rows as cell markers
    pub tablero: Vec<Vec<String>>,
}

impl From<&PatternRecord> for DocumentEntry {
    fn from(record: &PatternRecord) -> Self {
        Self {
            id: record.id,
            tablero: record
                .grid
                .to_markers()
                .into_iter()
                .map(|row| row.into_iter().map(str::to_owned).collect())
                .collect(),
        }
    }
}

impl TryFrom<DocumentEntry> for PatternRecord {
    type Error = PatternError;

    fn try_from(entry: DocumentEntry) -> Result<Self> {
        let grid = Grid::from_rows(&entry.tablero).map_err(|err| match err {
            PatternError::MalformedDocument { reason } => PatternError::MalformedDocument {
                reason: format!("pattern {}: {reason}", entry.id),
            },
            other => other,
        })?;

        Ok(Self { id: entry.id, grid })
    }
}

fn render_row(row: &[String]) -> Result<String> {
    let cells = row
        .iter()
        .map(serde_json::to_string)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(format!("[{}]", cells.join(", ")))
}

/// Render records in the fixed one-row-per-line layout
///
/// # Errors
///
/// Returns `Serialization` if a cell marker cannot be encoded as JSON
pub fn render_document(records: &[PatternRecord]) -> Result<String> {
    let indent = |depth: usize| DOCUMENT_INDENT.repeat(depth);
    let mut lines = vec![String::from("[")];

    for (index, record) in records.iter().enumerate() {
        let entry = DocumentEntry::from(record);
        lines.push(format!("{}{{", indent(1)));
        lines.push(format!("{}\"id\": {},", indent(2), entry.id));
        lines.push(format!("{}\"tablero\": [", indent(2)));

        for (row_index, row) in entry.tablero.iter().enumerate() {
            let separator = if row_index + 1 < entry.tablero.len() { "," } else { "" };
            lines.push(format!("{}{}{separator}", indent(3), render_row(row)?));
        }

        lines.push(format!("{}]", indent(2)));
        let separator = if index + 1 < records.len() { "," } else { "" };
        lines.push(format!("{}}}{separator}", indent(1)));
    }

    lines.push(String::from("]"));
    Ok(lines.join("\n"))
}

/// Parse a document back into pattern records
///
/// # Errors
///
/// Returns `Serialization` for invalid JSON and `MalformedDocument` when a
/// grid is not square or holds an unknown marker
pub fn parse_document(text: &str) -> Result<Vec<PatternRecord>> {
    let entries: Vec<DocumentEntry> = serde_json::from_str(text)?;
    entries.into_iter().map(PatternRecord::try_from).collect()
}

/// Render records and save them to `path`, creating parent directories
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written
pub fn write_document(path: &Path, records: &[PatternRecord]) -> Result<()> {
    let text = render_document(records)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    fs::write(path, text).with_path(path, "write document")
}

/// Load pattern records from a saved document
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn read_document(path: &Path) -> Result<Vec<PatternRecord>> {
    let text = fs::read_to_string(path).with_path(path, "read document")?;
    parse_document(&text)
}
