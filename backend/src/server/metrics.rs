//! Prometheus request metrics, compiled with the `metrics` feature.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use prometheus::Registry;

const NAMESPACE: &str = "campus_print";
const ENDPOINT: &str = "/metrics";

/// Build the middleware recording per-route request counts and latencies
/// and serving them at `/metrics`.
///
/// Each call owns a fresh [`Registry`], so building twice in one process
/// does not trip duplicate-collector registration.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the default collectors cannot be
/// registered.
pub(crate) fn build_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(NAMESPACE)
        .registry(Registry::new())
        .endpoint(ENDPOINT)
        .build()
        .map_err(|err| std::io::Error::other(format!("metrics registration failed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    #[rstest]
    #[actix_web::test]
    async fn exposes_request_counters() {
        let metrics = build_metrics().expect("metrics build");
        let app = test::init_service(
            App::new()
                .wrap(metrics)
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        test::call_service(&app, test::TestRequest::get().uri("/ping").to_request()).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(ENDPOINT).to_request())
            .await;
        let body = test::read_body(res).await;
        let text = String::from_utf8(body.to_vec()).expect("utf8");

        assert!(text.contains("campus_print_http_requests_total"));
    }
}
