// src/dashboard.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::cache::SheetCache;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::{HttpSheetSource, SheetSource};
use crate::process::Record;
use crate::view::{
    compute_metrics, gate_station, is_overdue, search_within, select_by_station, Metrics,
    StationLookup, ALL_STATIONS,
};

/// One table row as the station list shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
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
    #[serde(rename = "Pending")]
    pub pending: f64,
    #[serde(rename = "COD")]
    pub cod: f64,
    pub overdue: bool,
}

impl DisplayRow {
    fn new(r: &Record, highlight_days: f64) -> Self {
        Self {
            awb: r.awb.clone(),
            recipient_name: r.recipient_name.clone(),
            recipient_phone: r.recipient_phone.clone(),
            route: r.route.clone(),
            status: r.status.clone(),
            pending: r.pending,
            cod: r.cod,
            overdue: is_overdue(r, highlight_days),
        }
    }
}

/// What a caller renders for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum Dashboard {
    /// No station code entered; the sheet was not loaded.
    Welcome,
    NotFound {
        code: String,
    },
    #[serde(rename_all = "camelCase")]
    Station {
        code: String,
        fetched_at: DateTime<Utc>,
        /// Computed over the whole station, before any search.
        metrics: Metrics,
        rows: Vec<DisplayRow>,
    },
}

/// Composition root: the cache plus view settings.
pub struct Portal<S> {
    cache: SheetCache<S>,
    highlight_days: f64,
}

impl Portal<HttpSheetSource> {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        cfg.validate()?;
        let source = HttpSheetSource::new(cfg.sheet_url()?, cfg.http_timeout())?;
        Ok(Self::new(
            SheetCache::new(source, cfg.cache_ttl()),
            cfg.highlight_days,
        ))
    }
}

impl<S: SheetSource> Portal<S> {
    pub fn new(cache: SheetCache<S>, highlight_days: f64) -> Self {
        Self {
            cache,
            highlight_days,
        }
    }

    pub fn cache(&self) -> &SheetCache<S> {
        &self.cache
    }

    /// Gated per-station view. An empty code short-circuits to `Welcome`
    /// without touching the source.
    pub async fn station(&self, code: &str, query: &str) -> Result<Dashboard> {
        if code.trim().is_empty() {
            return Ok(Dashboard::Welcome);
        }

        let table = self.cache.get().await?;
        match gate_station(&table, code) {
            StationLookup::NoCode => Ok(Dashboard::Welcome),
            StationLookup::NotFound { code } => {
                info!(code = %code, "station not found");
                Ok(Dashboard::NotFound { code })
            }
            StationLookup::Found { code, records } => {
                info!(code = %code, rows = records.len(), "station view");
                Ok(self.render(code, table.fetched_at(), &records, query))
            }
        }
    }

    /// Ungated view across every station.
    pub async fn overview(&self, query: &str) -> Result<Dashboard> {
        let table = self.cache.get().await?;
        let records = select_by_station(&table, ALL_STATIONS);
        Ok(self.render(ALL_STATIONS.to_string(), table.fetched_at(), &records, query))
    }

    /// Station codes present in the current sheet.
    pub async fn stations(&self) -> Result<Vec<String>> {
        let table = self.cache.get().await?;
        Ok(crate::view::known_stations(&table)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn render(
        &self,
        code: String,
        fetched_at: DateTime<Utc>,
        records: &[&Record],
        query: &str,
    ) -> Dashboard {
        let metrics = compute_metrics(records.iter().copied());
        let rows = search_within(records, query)
            .into_iter()
            .map(|r| DisplayRow::new(r, self.highlight_days))
            .collect();
        Dashboard::Station {
            code,
            fetched_at,
            metrics,
            rows,
        }
    }
}
