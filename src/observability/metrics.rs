//! Fileserver hit counter.
//!
//! # Metrics
//! - fileserver hits (counter): requests served under `/app`, resettable
//!
//! The counter lives in `AppState` rather than a global so each server
//! instance (and each test) owns its own.

use std::sync::atomic::{AtomicU64, Ordering};

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::http::server::AppState;

/// Process-lifetime count of static-asset requests.
#[derive(Debug, Default)]
pub struct FileserverHits {
    hits: AtomicU64,
}

impl FileserverHits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one hit.
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Current hit count.
    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Set the count back to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}

/// Middleware counting every request that reaches the static fileserver.
pub async fn count_fileserver_hit(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    state.hits.increment();
    tracing::trace!(path = %request.uri().path(), hits = state.hits.read(), "Fileserver hit");
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_increment_read_reset() {
        let hits = FileserverHits::new();
        assert_eq!(hits.read(), 0);

        hits.increment();
        hits.increment();
        hits.increment();
        assert_eq!(hits.read(), 3);

        hits.reset();
        assert_eq!(hits.read(), 0);

        hits.increment();
        assert_eq!(hits.read(), 1);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let hits = Arc::new(FileserverHits::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let hits = hits.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        hits.increment();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(hits.read(), 8000);
    }
}
