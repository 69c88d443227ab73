use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all hub metrics
const PREFIX: &str = "hub";

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    pub static ref CATALOG_PROJECTS_TOTAL: Gauge = Gauge::new(
        format!("{PREFIX}_catalog_projects_total"),
        "Number of projects in the catalog"
    ).expect("Failed to create catalog_projects_total metric");

    pub static ref ERRORS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_errors_total"), "Errors returned to callers"),
        &["error_type"]
    ).expect("Failed to create errors_total metric");
}

/// Registers all metrics, errors from repeated registration are ignored (tests).
pub fn init_metrics() {
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(CATALOG_PROJECTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(ERRORS_TOTAL.clone()));

    tracing::info!("Metrics system initialized successfully");
}

pub fn init_catalog_metrics(num_projects: usize) {
    CATALOG_PROJECTS_TOTAL.set(num_projects as f64);
}

pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

/// Collapses request paths into a bounded set of labels.
pub fn categorize_endpoint(path: &str) -> &'static str {
    match path {
        "/" => "/",
        "/api/projects" => "/api/projects",
        "/api/health" => "/api/health",
        "/api/stats" => "/api/stats",
        p => match p.strip_prefix("/api/projects/") {
            Some(id) if !id.is_empty() && !id.contains('/') => "/api/projects/{id}",
            _ => "unmatched",
        },
    }
}

pub fn record_error(error_type: &str) {
    ERRORS_TOTAL.with_label_values(&[error_type]).inc();
}

pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_default();
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorizes_endpoints() {
        assert_eq!(categorize_endpoint("/"), "/");
        assert_eq!(categorize_endpoint("/api/projects"), "/api/projects");
        assert_eq!(categorize_endpoint("/api/projects/eaib"), "/api/projects/{id}");
        assert_eq!(categorize_endpoint("/api/projects/eaib/x"), "unmatched");
        assert_eq!(categorize_endpoint("/api/unknown"), "unmatched");
    }

    #[test]
    fn recorded_requests_show_up_in_registry() {
        init_metrics();
        record_http_request("GET", "/api/projects", 200, Duration::from_millis(3));

        let families = REGISTRY.gather();
        let requests = families
            .iter()
            .find(|f| f.get_name() == "hub_http_requests_total")
            .expect("requests counter not registered");
        assert!(!requests.get_metric().is_empty());
    }
}
