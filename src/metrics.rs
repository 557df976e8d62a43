//! In-process request metrics.
//!
//! Accumulates request count, error count, and latency percentiles for
//! the `/metrics` endpoint. The collector is process-wide state owned by
//! [`crate::state::AppState`] and fed by the metrics middleware; the
//! core service layer has no dependency on it.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;

/// Number of most-recent latency samples retained for percentiles.
const LATENCY_WINDOW: usize = 1000;

#[derive(Default)]
struct Inner {
    request_count: u64,
    error_count: u64,
    latencies_ms: VecDeque<f64>,
}

/// Aggregated view of collected metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub request_count: u64,
    pub error_count: u64,
    pub success_count: u64,
    pub average_latency_ms: f64,
    pub p95_latency_ms: f64,
    pub p99_latency_ms: f64,
}

/// Collector for request count, error count, and latency percentiles.
///
/// Latencies are kept in a bounded window so memory stays constant under
/// sustained load. Counters reset only at process restart or via
/// [`MetricsCollector::reset`] (tests).
#[derive(Default)]
pub struct MetricsCollector {
    inner: Mutex<Inner>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed request with its latency and error flag.
    pub fn record_request(&self, latency: Duration, is_error: bool) {
        let mut inner = self.inner.lock().expect("metrics lock poisoned");

        inner.request_count += 1;
        if is_error {
            inner.error_count += 1;
        }

        if inner.latencies_ms.len() == LATENCY_WINDOW {
            inner.latencies_ms.pop_front();
        }
        inner.latencies_ms.push_back(latency.as_secs_f64() * 1000.0);
    }

    /// Returns the current aggregated metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let inner = self.inner.lock().expect("metrics lock poisoned");

        let latencies: Vec<f64> = inner.latencies_ms.iter().copied().collect();
        let average = if latencies.is_empty() {
            0.0
        } else {
            latencies.iter().sum::<f64>() / latencies.len() as f64
        };

        MetricsSnapshot {
            request_count: inner.request_count,
            error_count: inner.error_count,
            success_count: inner.request_count - inner.error_count,
            average_latency_ms: round2(average),
            p95_latency_ms: round2(percentile(&latencies, 95.0)),
            p99_latency_ms: round2(percentile(&latencies, 99.0)),
        }
    }

    /// Renders the collected metrics in Prometheus text exposition format.
    pub fn render_prometheus(&self) -> String {
        let snapshot = self.snapshot();

        format!(
            "# HELP http_requests_total Total number of HTTP requests\n\
             # TYPE http_requests_total counter\n\
             http_requests_total {}\n\
             \n\
             # HELP http_errors_total Total number of HTTP errors\n\
             # TYPE http_errors_total counter\n\
             http_errors_total {}\n\
             \n\
             # HELP http_request_duration_ms Average request latency in milliseconds\n\
             # TYPE http_request_duration_ms gauge\n\
             http_request_duration_ms {}\n\
             \n\
             # HELP http_request_duration_p95_ms 95th percentile request latency in milliseconds\n\
             # TYPE http_request_duration_p95_ms gauge\n\
             http_request_duration_p95_ms {}\n\
             \n\
             # HELP http_request_duration_p99_ms 99th percentile request latency in milliseconds\n\
             # TYPE http_request_duration_p99_ms gauge\n\
             http_request_duration_p99_ms {}\n",
            snapshot.request_count,
            snapshot.error_count,
            snapshot.average_latency_ms,
            snapshot.p95_latency_ms,
            snapshot.p99_latency_ms,
        )
    }

    /// Clears all counters and samples. Intended for tests.
    pub fn reset(&self) {
        let mut inner = self.inner.lock().expect("metrics lock poisoned");
        *inner = Inner::default();
    }
}

/// Nearest-rank percentile over unsorted samples.
fn percentile(values: &[f64], pct: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (sorted.len() as f64 * pct / 100.0).ceil() as usize;
    sorted[rank.saturating_sub(1)]
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
