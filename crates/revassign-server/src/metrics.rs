use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::IntCounter;

lazy_static! {
    pub static ref PULL_REQUESTS_CREATED: IntCounter =
        IntCounter::new("pull_requests_created", "Pull requests created").unwrap();
    pub static ref PULL_REQUESTS_MERGED: IntCounter =
        IntCounter::new("pull_requests_merged", "Pull requests merged").unwrap();
    pub static ref REVIEWERS_REASSIGNED: IntCounter =
        IntCounter::new("reviewers_reassigned", "Reviewers reassigned").unwrap();
}

pub(crate) fn build_metrics_handler() -> PrometheusMetrics {
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .unwrap();

    setup_process_metrics(&prometheus);

    for counter in [
        &*PULL_REQUESTS_CREATED,
        &*PULL_REQUESTS_MERGED,
        &*REVIEWERS_REASSIGNED,
    ] {
        prometheus
            .registry
            .register(Box::new(counter.clone()))
            .unwrap();
    }

    prometheus
}

#[cfg(unix)]
fn setup_process_metrics(metrics: &PrometheusMetrics) {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))
        .unwrap();
}

#[cfg(not(unix))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) {
    tracing::warn!(message = "Process metrics are only supported on Unix");
}
