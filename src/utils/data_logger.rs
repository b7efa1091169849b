use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fs::File;
use std::io::Write;

use crate::models::snapshot_model::PriceSnapshot;

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Ordered set of fields, serialized as a JSON object in insertion order.
#[derive(Default)]
pub struct LogEntry {
    fields: Vec<(String, FieldValue)>,
}

impl LogEntry {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn add_field<T: Into<FieldValue>>(&mut self, key: &str, value: T) {
        self.fields.push((key.to_string(), value.into()));
    }
}

impl Serialize for LogEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            match value {
                FieldValue::String(s) => map.serialize_entry(key, s)?,
                FieldValue::Integer(i) => map.serialize_entry(key, i)?,
                FieldValue::Float(f) => map.serialize_entry(key, f)?,
            }
        }
        map.end()
    }
}

#[derive(Default)]
pub struct DataLogger {
    entries: Vec<LogEntry>,
}

impl DataLogger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn log(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    pub fn export_to_json(&self, filename: &str) -> std::io::Result<()> {
        let json_string = self.to_json()?;
        let mut file = File::create(filename)?;
        file.write_all(json_string.as_bytes())?;
        Ok(())
    }

    pub fn log_estimate(&mut self, snapshot: &PriceSnapshot) {
        let mut entry = LogEntry::new();
        entry.add_field("action", "Estimate".to_string());
        entry.add_field("price", snapshot.price);
        entry.add_field("tick", snapshot.tick as i64);
        entry.add_field("supply", snapshot.supply);
        entry.add_field("market_cap", snapshot.market_cap);
        self.log(entry);
    }

    pub fn log_rejected_price(&mut self, price: f64, reason: String) {
        let mut entry = LogEntry::new();
        entry.add_field("action", "Rejected".to_string());
        entry.add_field("price", price);
        entry.add_field("reason", reason);
        self.log(entry);
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}
