// src/fetch/mod.rs
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

use crate::error::{PortalError, Result};

/// Where the sheet CSV comes from.
///
/// Implementations report every failure as `SourceUnavailable` and never retry.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch the whole CSV body, undecoded.
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// Label used in logs and errors, usually the URL.
    fn origin(&self) -> &str;
}

/// A published sheet fetched over HTTP(S) with a plain GET.
#[derive(Debug, Clone)]
pub struct HttpSheetSource {
    client: Client,
    url: Url,
}

impl HttpSheetSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PortalError::Config(format!("building HTTP client: {}", e)))?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let start = Instant::now();
        let unavailable = |e: reqwest::Error| PortalError::unavailable(self.url.as_str(), e);

        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?;
        debug!(status = %resp.status(), "sheet response");

        // raw bytes: decoding is left to the CSV reader so bad UTF-8 is an error
        let body = resp.bytes().await.map_err(unavailable)?;
        info!(bytes = body.len(), elapsed = ?start.elapsed(), "fetched sheet");
        Ok(body.to_vec())
    }

    fn origin(&self) -> &str {
        self.url.as_str()
    }
}
