//! Output format and field selection types.

use std::fmt;
use std::str::FromStr;

use strum_macros::EnumIter;
use thiserror::Error;

/// Rendering format for lookup results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Label: value` lines, one block per record
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
    /// Header row plus one row per record
    Csv,
    /// YAML sequence of mappings
    Yaml,
}

impl OutputFormat {
    /// Lowercase name accepted by `--format`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    /// Case-insensitive; an empty name means text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// A selectable output column. Iteration order is the default column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
#[allow(missing_docs)] // each variant is the record field of the same name
pub enum Field {
    Ip,
    Country,
    Region,
    City,
    Latitude,
    Longitude,
    Timezone,
    Isp,
    Postal,
    Asn,
    IsMobile,
    IsProxy,
    IsHosting,
    Org,
    Continent,
}

impl Field {
    /// Key used in JSON, YAML and CSV headers.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Ip => "ip",
            Field::Country => "country",
            Field::Region => "region",
            Field::City => "city",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Timezone => "timezone",
            Field::Isp => "isp",
            Field::Postal => "postal",
            Field::Asn => "asn",
            Field::IsMobile => "is_mobile",
            Field::IsProxy => "is_proxy",
            Field::IsHosting => "is_hosting",
            Field::Org => "org",
            Field::Continent => "continent",
        }
    }

    /// Text-format label: the key with its first letter capitalized.
    pub fn label(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl FromStr for Field {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use strum::IntoEnumIterator;

        let wanted = s.trim().to_ascii_lowercase();
        Field::iter()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| FormatError::UnknownField(s.trim().to_string()))
    }
}

/// Errors raised while rendering results.
#[derive(Error, Debug)]
pub enum FormatError {
    /// `--format` named something other than text, json, csv or yaml.
    #[error("unsupported format: {0}")]
    UnknownFormat(String),

    /// `--fields` named a field that does not exist.
    #[error("invalid field specified: {0}")]
    UnknownField(String),

    /// The JSON, YAML or CSV writer failed.
    #[error("failed to serialize output: {0}")]
    Serialize(String),
}
