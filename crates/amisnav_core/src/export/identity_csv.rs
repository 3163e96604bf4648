//! Single-row CSV export for identity cards.
//!
//! # Responsibility
//! - Render `UNIT_ID,LINKAGE,CLAN,COORDS,TIMESTAMP` with RFC-4180 quoting.
//! - Parse the same shape back, so exports can be verified round-trip.
//!
//! # Invariants
//! - `COORDS` is `"{lat}, {lon}"`; it contains a comma and is therefore
//!   always emitted quoted.
//! - The timestamp is captured by the caller at export time (injected for
//!   testability) and serialized as ISO-8601.

use crate::model::identity::IdentityCard;
use chrono::{DateTime, Utc};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Header row of the export, fixed column order.
pub const IDENTITY_CSV_HEADER: &str = "UNIT_ID,LINKAGE,CLAN,COORDS,TIMESTAMP";

pub type ExportResult<T> = Result<T, ExportError>;

/// Export-layer error for rendering, parsing and file output.
#[derive(Debug)]
pub enum ExportError {
    /// Filesystem failure while writing the export file.
    Io(std::io::Error),
    /// Input text does not match the expected single-row CSV shape.
    Malformed(String),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Malformed(message) => write!(f, "malformed identity csv: {message}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(_) => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// One parsed data row of an identity export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityCsvRow {
    pub unit_id: String,
    pub linkage: String,
    pub clan: String,
    pub coords: String,
    pub timestamp: String,
}

/// File name pattern for one card's export.
pub fn identity_csv_file_name(card: &IdentityCard) -> String {
    format!("AMIS_ID_{}.csv", card.unit_name)
}

/// Renders the header plus one data row as UTF-8 CSV text.
pub fn render_identity_csv(card: &IdentityCard, exported_at: DateTime<Utc>) -> String {
    let coords = card.coords_display();
    let timestamp = exported_at.to_rfc3339();
    let fields = [
        card.unit_name.as_str(),
        card.linkage_name.as_str(),
        card.clan.name.as_str(),
        coords.as_str(),
        timestamp.as_str(),
    ];
    let row = fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",");

    format!("{IDENTITY_CSV_HEADER}\n{row}\n")
}

/// Writes the rendered export into `dir` and returns the file path.
pub fn save_identity_csv(
    dir: &Path,
    card: &IdentityCard,
    exported_at: DateTime<Utc>,
) -> ExportResult<PathBuf> {
    let path = dir.join(identity_csv_file_name(card));
    std::fs::write(&path, render_identity_csv(card, exported_at))?;
    info!(
        "event=identity_export module=export status=ok clan={} path={}",
        card.clan.id,
        path.display()
    );
    Ok(path)
}

/// Parses export text back into its single data row.
///
/// Accepts exactly one header line and one data line; used to verify the
/// export round-trip, not as a general CSV reader.
pub fn parse_identity_csv(text: &str) -> ExportResult<IdentityCsvRow> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| ExportError::Malformed("missing header row".to_string()))?;
    if header != IDENTITY_CSV_HEADER {
        return Err(ExportError::Malformed(format!(
            "unexpected header `{header}`"
        )));
    }

    let row = lines
        .next()
        .ok_or_else(|| ExportError::Malformed("missing data row".to_string()))?;
    if lines.any(|line| !line.trim().is_empty()) {
        return Err(ExportError::Malformed(
            "expected exactly one data row".to_string(),
        ));
    }

    let fields = split_row(row)?;
    if fields.len() != 5 {
        return Err(ExportError::Malformed(format!(
            "expected 5 fields, found {}",
            fields.len()
        )));
    }

    let mut fields = fields.into_iter();
    Ok(IdentityCsvRow {
        unit_id: fields.next().unwrap_or_default(),
        linkage: fields.next().unwrap_or_default(),
        clan: fields.next().unwrap_or_default(),
        coords: fields.next().unwrap_or_default(),
        timestamp: fields.next().unwrap_or_default(),
    })
}

/// Quotes a field when it contains a separator, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn split_row(row: &str) -> ExportResult<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            other => current.push(other),
        }
    }

    if in_quotes {
        return Err(ExportError::Malformed(
            "unterminated quoted field".to_string(),
        ));
    }

    fields.push(current);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::{escape_field, split_row};

    #[test]
    fn escape_field_quotes_separators_and_doubles_quotes() {
        assert_eq!(escape_field("Panay"), "Panay");
        assert_eq!(escape_field("23.931, 121.535"), "\"23.931, 121.535\"");
        assert_eq!(escape_field("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn split_row_handles_quoted_fields() {
        let fields = split_row("a,\"b, c\",\"d\"\"e\"").unwrap();
        assert_eq!(fields, vec!["a", "b, c", "d\"e"]);
    }

    #[test]
    fn split_row_rejects_unterminated_quote() {
        assert!(split_row("a,\"open").is_err());
    }
}
