//! Access log for the employee API.
//!
//! Each request yields one event on the `access_log` target carrying the
//! matched route and, for item routes, the employee id taken from the path.

use axum::{
    extract::{MatchedPath, Request},
    http::Method,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use std::time::Instant;
use tracing::{info, warn};

use crate::resource::employee::EMPLOYEES_PATH;

/// Request facts captured before the handler runs
#[derive(Debug)]
struct AccessRecord {
    received_at: DateTime<Utc>,
    method: Method,
    route: String,
    employee_id: Option<i64>,
    client: String,
}

impl AccessRecord {
    fn from_request(request: &Request) -> Self {
        let path = request.uri().path();
        // Unmatched requests fall back to the raw path
        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map(|matched| matched.as_str().to_string())
            .unwrap_or_else(|| path.to_string());
        let client = ["x-forwarded-for", "x-real-ip"]
            .iter()
            .find_map(|name| request.headers().get(*name)?.to_str().ok())
            .unwrap_or("-")
            .to_string();

        Self {
            received_at: Utc::now(),
            method: request.method().clone(),
            route,
            employee_id: employee_id_from_path(path),
            client,
        }
    }
}

/// Employee id of an item route such as `/api/employees/7/`
fn employee_id_from_path(path: &str) -> Option<i64> {
    let rest = path.strip_prefix(EMPLOYEES_PATH)?.strip_prefix('/')?;
    rest.trim_end_matches('/').parse().ok()
}

/// Emit one access-log event per request
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let record = AccessRecord::from_request(&request);
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;
    let at = record.received_at.format("%Y-%m-%dT%H:%M:%S%.3fZ");

    if response.status().is_server_error() {
        warn!(
            target: "access_log",
            %at,
            method = %record.method,
            route = %record.route,
            employee_id = ?record.employee_id,
            client = %record.client,
            status,
            latency_ms,
            "employee request failed"
        );
    } else {
        info!(
            target: "access_log",
            %at,
            method = %record.method,
            route = %record.route,
            employee_id = ?record.employee_id,
            client = %record.client,
            status,
            latency_ms,
            "employee request"
        );
    }

    response
}
