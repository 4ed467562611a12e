//! Rendering of lookup results.
//!
//! This module turns a batch of results into text, JSON, CSV or YAML with an
//! optional field allow-list. Empty result slots (failed lookups) are skipped.

mod row;
mod types;

pub use row::{FieldValue, Row};
pub use types::{Field, FormatError, OutputFormat};

use strum::IntoEnumIterator;

use crate::geoip::LookupRecord;

const TEXT_RECORD_SEPARATOR: &str = "\n---\n\n";

/// Parses a comma-separated field list.
///
/// Names are trimmed and matched case-insensitively; repeats are dropped. `None`
/// or a list with no names selects every field in default order.
pub fn parse_fields(list: Option<&str>) -> Result<Vec<Field>, FormatError> {
    let mut fields = Vec::new();
    for name in list.unwrap_or_default().split(',') {
        if name.trim().is_empty() {
            continue;
        }
        let field: Field = name.parse()?;
        if !fields.contains(&field) {
            fields.push(field);
        }
    }
    if fields.is_empty() {
        fields = Field::iter().collect();
    }
    Ok(fields)
}

/// Renders `records` in `format`, restricted to `fields`.
///
/// # Errors
///
/// Returns [`FormatError::UnknownField`] for an unrecognized field name and
/// [`FormatError::Serialize`] if a serializer fails.
pub fn render(
    records: &[Option<LookupRecord>],
    format: OutputFormat,
    fields: Option<&str>,
) -> Result<String, FormatError> {
    let fields = parse_fields(fields)?;
    let rows: Vec<Row<'_>> = records
        .iter()
        .flatten()
        .map(|record| Row {
            record,
            fields: &fields,
        })
        .collect();

    match format {
        OutputFormat::Text => Ok(render_text(&rows)),
        OutputFormat::Json => serde_json::to_string_pretty(&rows)
            .map_err(|e| FormatError::Serialize(e.to_string())),
        OutputFormat::Csv => render_csv(&rows, &fields),
        OutputFormat::Yaml => {
            serde_yaml::to_string(&rows).map_err(|e| FormatError::Serialize(e.to_string()))
        }
    }
}

fn render_text(rows: &[Row<'_>]) -> String {
    rows.iter()
        .map(|row| {
            row.values()
                .map(|(field, value)| format!("{}: {}\n", field.label(), value))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(TEXT_RECORD_SEPARATOR)
}

fn render_csv(rows: &[Row<'_>], fields: &[Field]) -> Result<String, FormatError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(fields.iter().map(Field::name))
        .map_err(|e| FormatError::Serialize(e.to_string()))?;
    for row in rows {
        writer
            .write_record(row.values().map(|(_, value)| value.to_string()))
            .map_err(|e| FormatError::Serialize(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| FormatError::Serialize(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FormatError::Serialize(e.to_string()))
}
