//! Request timing middleware.
//!
//! Emits one log line per request with its wall-clock duration. The request
//! and response pass through untouched.

use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::http::uri::PathAndQuery;
use axum::middleware::Next;
use axum::response::Response;

/// Log `Request <METHOD> <PATH?QUERY> took <ms> ms` once the inner stack has answered.
///
/// Must sit outside the panic catcher so a panicking handler still produces
/// exactly one line.
pub async fn log_request_time(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request
        .uri()
        .path_and_query()
        .map_or("/", PathAndQuery::as_str)
        .to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = format_elapsed(start.elapsed());
    tracing::info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        elapsed_ms = %elapsed,
        "Request {method} {uri} took {elapsed} ms"
    );

    response
}

/// Milliseconds with two decimals, e.g. `12.35`.
fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{middleware, Router};
    use axum_test::TestServer;
    use tower_http::catch_panic::CatchPanicLayer;

    use super::*;
    use crate::test_support::LogCapture;

    /// The `N.NN` between `took ` and ` ms` of a timing line.
    fn elapsed_of(line: &str) -> &str {
        let start = line.find("took ").unwrap() + "took ".len();
        let end = start + line[start..].find(" ms").unwrap();
        &line[start..end]
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_elapsed(Duration::from_micros(12_345)), "12.35");
        assert_eq!(format_elapsed(Duration::ZERO), "0.00");
        assert_eq!(format_elapsed(Duration::from_secs(2)), "2000.00");
    }

    #[tokio::test]
    async fn passes_response_through() {
        let app = Router::new()
            .route("/teapot", get(|| async { (StatusCode::IM_A_TEAPOT, "short and stout") }))
            .layer(middleware::from_fn(log_request_time));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/teapot").await;
        response.assert_status(StatusCode::IM_A_TEAPOT);
        response.assert_text("short and stout");
    }

    #[tokio::test]
    async fn logs_one_line_per_request() {
        let logs = LogCapture::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let app = Router::new()
            .route("/:post_id/comments", get(|| async { "[]" }))
            .layer(middleware::from_fn(log_request_time));
        let server = TestServer::new(app).unwrap();

        server
            .get("/5/comments?x=1")
            .await
            .assert_status(StatusCode::OK);

        let lines = logs.lines_containing("Request GET /5/comments?x=1 took ");
        assert_eq!(lines.len(), 1, "{lines:?}");

        let elapsed = elapsed_of(&lines[0]);
        assert!(elapsed.parse::<f64>().is_ok(), "{elapsed}");
        assert_eq!(elapsed.split('.').nth(1).map(str::len), Some(2), "{elapsed}");
    }

    #[tokio::test]
    async fn panicking_handler_still_answers_and_logs_once() {
        async fn explode() -> &'static str {
            panic!("handler failure")
        }

        let logs = LogCapture::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let app = Router::new()
            .route("/explode", get(explode))
            .layer(CatchPanicLayer::new())
            .layer(middleware::from_fn(log_request_time));
        let server = TestServer::new(app).unwrap();

        server
            .get("/explode")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let lines = logs.lines_containing("Request GET /explode took ");
        assert_eq!(lines.len(), 1, "{lines:?}");
    }
}
