use lazy_static::lazy_static;
use prometheus::{
    Counter, Encoder, Histogram, HistogramOpts, IntGauge, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref ULR_SENT_TOTAL: Counter = Counter::with_opts(
        Opts::new("ulr_sent_total", "Total Update-Location-Requests sent")
    ).unwrap();

    pub static ref ULA_SUCCESS_TOTAL: Counter = Counter::with_opts(
        Opts::new("ula_success_total", "Update-Location-Answers with result code 2001")
    ).unwrap();

    pub static ref ULA_ERROR_TOTAL: Counter = Counter::with_opts(
        Opts::new("ula_error_total", "Update-Location-Answers with an error result code")
    ).unwrap();

    pub static ref TIMEOUTS_TOTAL: Counter = Counter::with_opts(
        Opts::new("timeouts_total", "Requests that expired without an answer")
    ).unwrap();

    pub static ref EXCHANGE_LATENCY_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new("exchange_latency_seconds", "ULR/ULA exchange latency in seconds")
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0])
    ).unwrap();

    pub static ref ACTIVE_SESSIONS: IntGauge = IntGauge::with_opts(
        Opts::new("active_sessions", "Number of live sessions")
    ).unwrap();
}

/// Register all metrics with the global registry
pub fn register_metrics() {
    REGISTRY.register(Box::new(ULR_SENT_TOTAL.clone())).unwrap();
    REGISTRY.register(Box::new(ULA_SUCCESS_TOTAL.clone())).unwrap();
    REGISTRY.register(Box::new(ULA_ERROR_TOTAL.clone())).unwrap();
    REGISTRY.register(Box::new(TIMEOUTS_TOTAL.clone())).unwrap();
    REGISTRY
        .register(Box::new(EXCHANGE_LATENCY_SECONDS.clone()))
        .unwrap();
    REGISTRY.register(Box::new(ACTIVE_SESSIONS.clone())).unwrap();
}

/// Gather metrics in Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        register_metrics();

        ULR_SENT_TOTAL.inc();
        ULA_SUCCESS_TOTAL.inc();
        TIMEOUTS_TOTAL.inc();
        ACTIVE_SESSIONS.set(1);
        EXCHANGE_LATENCY_SECONDS.observe(0.02);

        let metrics = gather_metrics();
        assert!(metrics.contains("ulr_sent_total"));
        assert!(metrics.contains("exchange_latency_seconds"));
        assert!(metrics.contains("active_sessions"));
    }
}
