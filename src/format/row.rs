//! Field projection of a `LookupRecord`.
//!
//! A [`Row`] pairs a record with the selected fields and serializes as a map in
//! exactly that order, so JSON and YAML keys follow the `--fields` order.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::geoip::LookupRecord;

use super::types::Field;

/// One cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Written as-is
    Text(&'a str),
    /// Coordinates
    Number(f64),
    /// Rendered as `Yes` or `No` in every format
    Flag(bool),
}

impl<'a> FieldValue<'a> {
    /// Reads `field` out of `record`.
    pub fn of(record: &'a LookupRecord, field: Field) -> Self {
        match field {
            Field::Ip => FieldValue::Text(&record.ip),
            Field::Country => FieldValue::Text(&record.country),
            Field::Region => FieldValue::Text(&record.region),
            Field::City => FieldValue::Text(&record.city),
            Field::Latitude => FieldValue::Number(record.latitude),
            Field::Longitude => FieldValue::Number(record.longitude),
            Field::Timezone => FieldValue::Text(&record.timezone),
            Field::Isp => FieldValue::Text(&record.isp),
            Field::Postal => FieldValue::Text(&record.postal),
            Field::Asn => FieldValue::Text(&record.asn),
            Field::IsMobile => FieldValue::Flag(record.is_mobile),
            Field::IsProxy => FieldValue::Flag(record.is_proxy),
            Field::IsHosting => FieldValue::Flag(record.is_hosting),
            Field::Org => FieldValue::Text(&record.org),
            Field::Continent => FieldValue::Text(&record.continent),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Flag(b) => f.write_str(yes_no(*b)),
        }
    }
}

impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Flag(b) => serializer.serialize_str(yes_no(*b)),
        }
    }
}

/// A record restricted to a list of fields.
pub struct Row<'a> {
    /// The projected record
    pub record: &'a LookupRecord,
    /// Columns in output order
    pub fields: &'a [Field],
}

impl<'a> Row<'a> {
    /// Selected fields paired with their values, in column order.
    pub fn values(&self) -> impl Iterator<Item = (Field, FieldValue<'a>)> + '_ {
        self.fields
            .iter()
            .map(move |&field| (field, FieldValue::of(self.record, field)))
    }
}

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in self.values() {
            map.serialize_entry(field.name(), &value)?;
        }
        map.end()
    }
}
