use chrono::{DateTime, Utc};
use serde::Serialize;

/// One shipment row of the sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "AWB")]
    pub awb: String,
    #[serde(rename = "Recipient Name")]
    pub recipient_name: String,
    #[serde(rename = "Recipient Phone")]
    pub recipient_phone: String,
    #[serde(rename = "Route")]
    pub route: String,
    #[serde(rename = "Status")]
    pub status: String,
    /// Station code, always trimmed.
    #[serde(rename = "Current DC")]
    pub current_dc: String,
    /// Days outstanding; finite and non-negative.
    #[serde(rename = "Pending")]
    pub pending: f64,
    #[serde(rename = "COD")]
    pub cod: f64,
}

/// A whole sheet snapshot, rows in source order.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Record>,
    fetched_at: DateTime<Utc>,
}

impl Table {
    pub fn new(headers: Vec<String>, records: Vec<Record>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            headers,
            records,
            fetched_at,
        }
    }

    /// Build a table from already-typed rows, stamped now.
    #[cfg(test)]
    pub fn from_records(records: Vec<Record>) -> Self {
        Self::new(
            super::columns::REQUIRED_COLUMNS.iter().map(|s| s.to_string()).collect(),
            records,
            Utc::now(),
        )
    }

    /// Headers exactly as the source spelled them, extras included.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
