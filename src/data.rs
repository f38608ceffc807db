//! # Data Rows
//!
//! One [`DataRow`] per label instance: a mapping from field name to display
//! value. Rows arrive from an external data source (CSV import, editor
//! defaults) and are read-only to the engine.
//!
//! Values are opaque text. Numeric and date formatting happens upstream,
//! before a row crosses this boundary; deserialization coerces JSON
//! primitives to their display form so callers don't have to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One record of field name → display value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DataRow {
    fields: HashMap<String, String>,
}

impl DataRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from (field, value) pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The value for `field`, if the row has one.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Set (or replace) a field value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Whether the row has a value for `field`. Field names are
    /// case-sensitive.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The underlying field map.
    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }
}

impl From<HashMap<String, String>> for DataRow {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

/// Any JSON primitive, rendered as display text on arrival.
///
/// `{"precio": 19.99}` and `{"precio": "19.99"}` both bind the same way.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Null => String::new(),
        }
    }
}

impl<'de> Deserialize<'de> for DataRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: HashMap<String, FieldValue> = HashMap::deserialize(deserializer)?;
        Ok(Self {
            fields: raw.into_iter().map(|(k, v)| (k, v.into_text())).collect(),
        })
    }
}

/// The demo dataset a fresh editor session starts with.
pub fn sample_rows() -> Vec<DataRow> {
    [
        ("Producto A", "Descripción del producto A", "$19.99", "PA001", "Electrónicos"),
        ("Producto B", "Descripción del producto B", "$29.99", "PB002", "Hogar"),
        ("Producto C", "Descripción del producto C", "$39.99", "PC003", "Deportes"),
    ]
    .into_iter()
    .map(|(nombre, descripcion, precio, codigo, categoria)| {
        DataRow::from_pairs([
            ("nombre", nombre),
            ("descripcion", descripcion),
            ("precio", precio),
            ("codigo", codigo),
            ("categoria", categoria),
        ])
    })
    .collect()
}
