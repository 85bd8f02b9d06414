//! Ingest service entry point.
//!
//! Fetches synthetic user records from the randomuser API on a fixed
//! cadence, normalizes them, and publishes them to NATS for a bounded
//! duration. Intended to be invoked once per scheduled run by an
//! external workflow scheduler.

use anyhow::Result;
use external_services::randomuser::RandomUserClient;
use ingest_service::{IngestConfig, IngestService, JobConfig};
use metrics_exporter_prometheus::PrometheusBuilder;
use nats_client::{NatsClient, StreamConfig};
use normalizer::{AdapterConfig, RandomUserAdapter};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ingest service...");

    let config = IngestConfig::from_env();
    let job = JobConfig::from_env();
    info!(
        "Job '{}' (owner: {}, schedule: {}, start date: {}, catchup: {})",
        job.name, job.owner, job.schedule, job.start_date, job.catchup
    );

    // Initialize Prometheus metrics
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], config.metrics_port))
        .install()?;

    info!(
        "Prometheus metrics available at http://0.0.0.0:{}/metrics",
        config.metrics_port
    );

    let adapter_config = AdapterConfig {
        output_subject: config.subject.clone(),
        dest_stream: config.stream.clone(),
    };

    // Connect to NATS and make sure the destination stream exists
    let nats_client = NatsClient::connect(&config.nats_url)
        .await?
        .with_publish_timeout(config.publish_timeout);

    nats_client
        .ensure_stream(&StreamConfig::for_subject(
            adapter_config.dest_stream.as_str(),
            adapter_config.output_subject.as_str(),
        ))
        .await?;

    let source = RandomUserClient::with_base_url(config.api_url.as_str());
    let adapter = RandomUserAdapter::new();

    // Forward Ctrl+C into the service loop
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
        let _ = shutdown_tx.send(()).await;
    });

    let service = IngestService::new(
        adapter,
        source,
        nats_client,
        adapter_config,
        config.poll_interval,
        config.duration_limit,
        shutdown_rx,
    );

    service.run().await?;

    info!("Ingest service stopped");
    Ok(())
}
