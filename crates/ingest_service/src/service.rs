//! Generic ingest loop that works with any provider adapter.
//!
//! Runs fetch -> normalize -> publish on a fixed cadence, bounded by a
//! wall-clock deadline. An explicit ticker and deadline timer replace
//! manual time comparisons; iteration failures never escape the loop.

use crate::error::IterationError;
use crate::traits::{RecordSink, RecordSource};
use anyhow::Result;
use bytes::Bytes;
use metrics::counter;
use normalizer::{AdapterConfig, SourceAdapter};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Generic bounded-duration ingest service.
///
/// The service is parameterized by a `SourceAdapter` which defines how to
/// normalize records for a specific provider, plus a `RecordSource` and a
/// `RecordSink` for the fetch and publish sides.
pub struct IngestService<A: SourceAdapter, S: RecordSource, K: RecordSink> {
    adapter: A,
    source: S,
    sink: K,
    config: AdapterConfig,
    poll_interval: Duration,
    duration_limit: Duration,
    shutdown_rx: mpsc::Receiver<()>,
}

impl<A: SourceAdapter, S: RecordSource, K: RecordSink> IngestService<A, S, K> {
    /// Create a new ingest service.
    pub fn new(
        adapter: A,
        source: S,
        sink: K,
        config: AdapterConfig,
        poll_interval: Duration,
        duration_limit: Duration,
        shutdown_rx: mpsc::Receiver<()>,
    ) -> Self {
        Self {
            adapter,
            source,
            sink,
            config,
            poll_interval,
            duration_limit,
            shutdown_rx,
        }
    }

    /// Create a new ingest service with the adapter's default configuration.
    pub fn with_defaults(
        adapter: A,
        source: S,
        sink: K,
        poll_interval: Duration,
        duration_limit: Duration,
        shutdown_rx: mpsc::Receiver<()>,
    ) -> Self {
        let config = A::default_config();
        Self::new(
            adapter,
            source,
            sink,
            config,
            poll_interval,
            duration_limit,
            shutdown_rx,
        )
    }

    /// Run the ingest loop until the deadline elapses or shutdown is signaled.
    ///
    /// Returns `Ok(())` in both cases; individual iteration failures are
    /// logged and counted, never propagated.
    pub async fn run(mut self) -> Result<()> {
        info!(
            "Starting {} ingest: publishing to '{}' every {:?} for {:?}",
            A::NAME,
            self.config.output_subject,
            self.poll_interval,
            self.duration_limit
        );

        let deadline_sleep = time::sleep(self.duration_limit);
        tokio::pin!(deadline_sleep);

        let mut ticker = time::interval(self.poll_interval);
        // Keep at least one full interval between iterations even when an
        // iteration outlasts the tick period.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;  // Deadline and shutdown win over a pending tick

                _ = self.shutdown_rx.recv() => {
                    info!("{} ingest received shutdown signal", A::NAME);
                    break;
                }

                _ = &mut deadline_sleep => {
                    info!("{} ingest deadline reached", A::NAME);
                    break;
                }

                _ = ticker.tick() => {
                    match self.process_iteration().await {
                        Ok(id) => {
                            counter!(
                                "ingest_records_published_total",
                                "source" => A::NAME
                            )
                            .increment(1);
                            debug!("[{}] published user {}", A::NAME, id);
                        }
                        Err(e) => {
                            counter!(
                                "ingest_errors_total",
                                "source" => A::NAME,
                                "stage" => e.stage()
                            )
                            .increment(1);
                            warn!("[{}] iteration abandoned: {}", A::NAME, e);
                        }
                    }
                }
            }
        }

        // Hand any buffered records to the broker before returning.
        if let Err(e) = self.sink.flush().await {
            warn!("[{}] failed to flush sink on exit: {:?}", A::NAME, e);
        }

        info!("{} ingest stopped", A::NAME);
        Ok(())
    }

    /// Run one fetch -> normalize -> publish cycle.
    async fn process_iteration(&self) -> Result<Uuid, IterationError> {
        let raw = self.source.fetch().await?;
        let user = self.adapter.normalize(&raw)?;
        let payload = serde_json::to_vec(&user)?;
        let subject = self.adapter.output_subject(&self.config);
        self.sink.publish(&subject, Bytes::from(payload)).await?;
        Ok(user.id)
    }
}

// ============================================================================
// Tests
// ============================================================================
