//! Station dashboard core: load a published delivery sheet, cache it for a
//! TTL, and answer per-station views with summary metrics.

pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod process;
pub mod view;

pub use cache::SheetCache;
pub use config::Config;
pub use dashboard::{Dashboard, DisplayRow, Portal};
pub use error::PortalError;
pub use fetch::{HttpSheetSource, SheetSource};
pub use process::{load, parse_table, Record, Table};
pub use view::{
    compute_metrics, gate_station, known_stations, search_within, select_by_station, Metrics,
    StationLookup, ALL_STATIONS, SLA_BREACH_DAYS,
};
