use csv::StringRecord;

use super::convert::Coercions;
use super::record::Record;
use super::utils::normalize_station;
use crate::error::{PortalError, Result};

pub const AWB: &str = "AWB";
pub const RECIPIENT_NAME: &str = "Recipient Name";
pub const RECIPIENT_PHONE: &str = "Recipient Phone";
pub const ROUTE: &str = "Route";
pub const STATUS: &str = "Status";
pub const CURRENT_DC: &str = "Current DC";
pub const PENDING: &str = "Pending";
pub const COD: &str = "COD";

pub const REQUIRED_COLUMNS: [&str; 8] = [
    AWB,
    RECIPIENT_NAME,
    RECIPIENT_PHONE,
    ROUTE,
    STATUS,
    CURRENT_DC,
    PENDING,
    COD,
];

/// Header position of every field a `Record` needs, resolved once per load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    awb: usize,
    recipient_name: usize,
    recipient_phone: usize,
    route: usize,
    status: usize,
    current_dc: usize,
    pending: usize,
    cod: usize,
}

impl ColumnMap {
    /// Fails with `MissingColumn` on the first required header not found.
    /// When a header repeats, the first occurrence wins.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.as_ref().trim() == name)
                .ok_or_else(|| PortalError::MissingColumn {
                    column: name.to_string(),
                })
        };

        Ok(Self {
            awb: find(AWB)?,
            recipient_name: find(RECIPIENT_NAME)?,
            recipient_phone: find(RECIPIENT_PHONE)?,
            route: find(ROUTE)?,
            status: find(STATUS)?,
            current_dc: find(CURRENT_DC)?,
            pending: find(PENDING)?,
            cod: find(COD)?,
        })
    }

    /// Build a typed row. Short rows read missing cells as empty.
    pub fn record(&self, row: &StringRecord, coercions: &mut Coercions) -> Record {
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        Record {
            awb: cell(self.awb).to_string(),
            recipient_name: cell(self.recipient_name).to_string(),
            recipient_phone: cell(self.recipient_phone).to_string(),
            route: cell(self.route).to_string(),
            status: cell(self.status).to_string(),
            current_dc: normalize_station(cell(self.current_dc)),
            pending: coercions.pending_or_zero(cell(self.pending)),
            cod: coercions.cod_or_zero(cell(self.cod)),
        }
    }
}
