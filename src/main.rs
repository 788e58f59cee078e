use anyhow::{Context, Result};
use dcportal::{Config, Dashboard, Portal};
use std::env;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// `dcportal [DC_CODE] [SEARCH...]`
///
/// No code prints the station list; `All DCs` prints the ungated overview.
#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::load().context("loading configuration")?;

    // ─── logging to stderr, stdout carries the JSON ────────────────
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(cfg.log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();

    let mut args = env::args().skip(1);
    let code = args.next().unwrap_or_default();
    let query = args.collect::<Vec<_>>().join(" ");

    info!(url = %cfg.sheet_url, ttl = ?cfg.cache_ttl(), "starting");
    let portal = Portal::from_config(&cfg).context("building portal")?;

    let out = if code.trim().is_empty() {
        serde_json::to_string_pretty(&portal.stations().await?)?
    } else {
        let view = if code.trim() == dcportal::ALL_STATIONS {
            portal.overview(&query).await
        } else {
            portal.station(&code, &query).await
        };
        match view {
            Ok(Dashboard::NotFound { code }) => {
                error!("DC code '{}' not found; check the code for stray spaces", code);
                serde_json::to_string_pretty(&Dashboard::NotFound { code })?
            }
            Ok(d) => serde_json::to_string_pretty(&d)?,
            Err(e) => return Err(e).context("loading station view"),
        }
    };

    println!("{}", out);
    Ok(())
}
