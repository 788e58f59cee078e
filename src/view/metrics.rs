// src/view/metrics.rs
use serde::Serialize;

use crate::process::Record;

/// Days pending after which a shipment counts as an SLA breach (strictly greater).
pub const SLA_BREACH_DAYS: f64 = 2.0;

/// Summary numbers for a selection of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub count: usize,
    pub breach_count: usize,
    pub total_cod: f64,
}

pub fn is_breach(record: &Record) -> bool {
    record.pending > SLA_BREACH_DAYS
}

/// Display emphasis only; `highlight_days` comes from configuration and has
/// no bearing on `breach_count`.
pub fn is_overdue(record: &Record, highlight_days: f64) -> bool {
    record.pending > highlight_days
}

pub fn compute_metrics<'a, I>(records: I) -> Metrics
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().fold(Metrics::default(), |mut m, r| {
        m.count += 1;
        if is_breach(r) {
            m.breach_count += 1;
        }
        m.total_cod += r.cod;
        m
    })
}
