// src/process/mod.rs
use chrono::Utc;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{PortalError, Result};
use crate::fetch::SheetSource;

pub mod columns;
pub mod convert;
pub mod record;
pub mod utils;

pub use columns::{ColumnMap, REQUIRED_COLUMNS};
pub use convert::Coercions;
pub use record::{Record, Table};

/// Fetch the sheet from `source` and parse it into a `Table`.
#[tracing::instrument(level = "info", skip(source), fields(origin = %source.origin()))]
pub async fn load<S: SheetSource + ?Sized>(source: &S) -> Result<Table> {
    let body = source.fetch().await?;
    parse_table(&body, source.origin())
}

/// Parse a CSV body (header row first) into a `Table`.
///
/// - Bytes that are not valid UTF-8 fail the whole load.
/// - Required headers are checked before any row is read.
/// - `Pending` and `COD` cells that are not numbers become 0.
/// - `Current DC` is trimmed.
///
/// `origin` only labels errors and logs.
pub fn parse_table(data: impl AsRef<[u8]>, origin: &str) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // short rows read as empty cells
        .trim(Trim::None)
        .from_reader(data.as_ref());

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| PortalError::unavailable(origin, e))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(PortalError::unavailable(origin, "no header row"));
    }
    let map = ColumnMap::from_headers(&headers)?;

    let mut coercions = Coercions::default();
    let mut records = Vec::new();
    let mut row = StringRecord::new();
    loop {
        let more = rdr.read_record(&mut row).map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or_default();
            PortalError::unavailable(origin, format!("CSV parse error at line {}: {}", line, e))
        })?;
        if !more {
            break;
        }
        records.push(map.record(&row, &mut coercions));
    }

    if coercions != Coercions::default() {
        debug!(
            pending = coercions.pending,
            cod = coercions.cod,
            "coerced non-numeric cells to 0"
        );
    }
    info!(rows = records.len(), columns = headers.len(), "sheet parsed");

    Ok(Table::new(headers, records, Utc::now()))
}
