use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::Instant;
use tracing::{Instrument, info_span};

const LOG_INTERVAL: Duration = Duration::from_secs(60);

/// Counter of the requests sent to the Riot API, retries included.
///
/// Every transport call counts, so a 503 answered by a 200 after the
/// automatic retry accounts for two requests.
#[derive(Debug)]
pub struct RequestMetrics {
    since: Instant,
    sent: AtomicU64,
    region: &'static str,
}

impl RequestMetrics {
    pub fn new(region: &'static str) -> Arc<Self> {
        Arc::new(Self {
            since: Instant::now(),
            sent: AtomicU64::new(0),
            region,
        })
    }

    pub(crate) fn inc(&self) {
        self.sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    /// Average amount of requests per minute since the client was built.
    pub fn per_minute(&self) -> f64 {
        let minutes = self.since.elapsed().as_secs_f64() / 60.0;
        if minutes > 0.0 {
            self.count() as f64 / minutes
        } else {
            0.0
        }
    }

    fn summary(&self) -> String {
        format!(
            "{} requests sent to {} (avg {:.2} req/min)",
            self.count(),
            self.region,
            self.per_minute()
        )
    }

    /// Log a summary every minute, forever.
    pub async fn log_loop(self: Arc<Self>) {
        let span = info_span!("riot api metrics", region = self.region);
        async move {
            let mut interval = tokio::time::interval(LOG_INTERVAL);
            // First tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                tracing::info!("{}", self.summary());
            }
        }
        .instrument(span)
        .await
    }
}
