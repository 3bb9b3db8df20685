//! Response logging.
//!
//! Every response other than `200 OK` is logged at WARN so that rejected
//! chirps, auth failures and missing assets show up at the default level.
//! Method, path and request ID come from the enclosing request span.

use std::time::Duration;

use axum::http::{Response, StatusCode};
use tower_http::trace::OnResponse;
use tracing::Span;

/// `TraceLayer` response hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNonOkResponse;

impl<B> OnResponse<B> for LogNonOkResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        let status = response.status();
        let latency_ms = latency.as_millis() as u64;
        if is_non_ok(status) {
            tracing::warn!(status = status.as_u16(), latency_ms, "Non-OK response");
        } else {
            tracing::debug!(status = status.as_u16(), latency_ms, "Response sent");
        }
    }
}

pub fn is_non_ok(status: StatusCode) -> bool {
    status != StatusCode::OK
}

#[cfg(test)]
pub(crate) mod capture {
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory log sink for asserting on emitted events.
    #[derive(Clone, Default)]
    pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }

        pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
            let sink = self.clone();
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_max_level(tracing::Level::DEBUG)
                .with_writer(move || sink.clone())
                .finish()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::capture::CapturedLogs;
    use super::*;

    fn respond(status: StatusCode) -> String {
        let logs = CapturedLogs::default();
        let response = Response::builder().status(status).body(()).unwrap();
        tracing::subscriber::with_default(logs.subscriber(), || {
            LogNonOkResponse.on_response(&response, Duration::from_millis(3), &Span::none());
        });
        logs.contents()
    }

    #[test]
    fn test_only_200_is_ok() {
        assert!(!is_non_ok(StatusCode::OK));
        for status in [
            StatusCode::CREATED,
            StatusCode::NOT_MODIFIED,
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert!(is_non_ok(status), "{status}");
        }
    }

    #[test]
    fn test_non_ok_is_logged_at_warn() {
        let out = respond(StatusCode::BAD_REQUEST);
        assert!(out.contains("WARN"), "{out}");
        assert!(out.contains("Non-OK response"), "{out}");
        assert!(out.contains("status=400"), "{out}");
    }

    #[test]
    fn test_ok_is_logged_at_debug() {
        let out = respond(StatusCode::OK);
        assert!(!out.contains("WARN"), "{out}");
        assert!(out.contains("Response sent"), "{out}");
    }
}
