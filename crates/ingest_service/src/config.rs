//! Environment-driven configuration for the ingest service.

use chrono::NaiveDate;
use std::time::Duration;

/// Default fetch endpoint for raw user records.
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// Runtime configuration for one ingest run.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Fetch endpoint for raw user records.
    pub api_url: String,
    /// Broker address.
    pub nats_url: String,
    /// Subject normalized records are published to.
    pub subject: String,
    /// JetStream stream capturing the subject.
    pub stream: String,
    /// Wall-clock bound on the whole run.
    pub duration_limit: Duration,
    /// Delay between successive fetch attempts.
    pub poll_interval: Duration,
    /// Ceiling on a single publish attempt.
    pub publish_timeout: Duration,
    /// Prometheus exporter port.
    pub metrics_port: u16,
}

impl IngestConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            api_url: env_or("RANDOMUSER_API_URL", DEFAULT_API_URL),
            nats_url: env_or("NATS_URL", "nats://localhost:4222"),
            subject: env_or("USERS_SUBJECT", "users_created"),
            stream: env_or("USERS_STREAM", "USERS_CREATED"),
            duration_limit: Duration::from_secs(env_parsed("DURATION_LIMIT_SECS", 60)),
            poll_interval: Duration::from_secs(env_parsed("POLL_INTERVAL_SECS", 5)),
            publish_timeout: Duration::from_millis(env_parsed("PUBLISH_TIMEOUT_MS", 5_000)),
            metrics_port: env_parsed("METRICS_PORT", 9093),
        }
    }
}

/// Identity of the enclosing scheduled job.
///
/// The scheduler acting on this (invoking the service once per scheduled
/// run) is an external collaborator; this struct is the explicit
/// configuration surface handed to that integration, logged at startup.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub name: String,
    pub owner: String,
    /// First date the job is eligible to run.
    pub start_date: NaiveDate,
    /// Recurrence of the job, e.g. "daily".
    pub schedule: String,
    /// Whether the scheduler replays missed runs.
    pub catchup: bool,
}

impl JobConfig {
    /// Load job identity from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            name: env_or("INGEST_JOB_NAME", "user_ingest"),
            owner: env_or("INGEST_JOB_OWNER", "data-platform"),
            start_date: std::env::var("INGEST_JOB_START_DATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()),
            schedule: env_or("INGEST_JOB_SCHEDULE", "daily"),
            catchup: env_parsed("INGEST_JOB_CATCHUP", false),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
