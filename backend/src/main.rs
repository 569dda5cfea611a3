//! Service entry-point: loads settings, prepares the record store, and runs
//! the HTTP server.

mod server;

use std::time::Duration;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use user_product_backend::inbound::http::health::HealthState;
use user_product_backend::outbound::persistence::{DbPool, PoolConfig};
use user_product_backend::settings::ServiceSettings;

const DB_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);

/// Probe the database once and log the outcome; the server runs either way.
fn report_database_status(pool: DbPool, url: String) {
    actix_web::rt::spawn(async move {
        match pool.ping().await {
            Ok(()) => info!(database_url = %url, "connected to database"),
            Err(err) => error!(database_url = %url, error = %err, "database connection failed"),
        }
    });
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Option<PrometheusMetrics> {
    match PrometheusMetricsBuilder::new("user_product")
        .endpoint("/metrics")
        .build()
    {
        Ok(metrics) => Some(metrics),
        Err(err) => {
            warn!(error = %err, "Prometheus metrics disabled");
            None
        }
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let mut config = ServerConfig::new(bind_addr);
    if settings.in_memory {
        info!("in-memory record store selected");
    } else {
        let pool = DbPool::new(
            PoolConfig::new(settings.database_url())
                .with_max_size(settings.pool_max_size())
                .with_connection_timeout(DB_CHECKOUT_TIMEOUT),
        );
        report_database_status(pool.clone(), settings.database_url().to_owned());
        config = config.with_db_pool(pool);
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(make_metrics());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "server listening");
    server.await
}
