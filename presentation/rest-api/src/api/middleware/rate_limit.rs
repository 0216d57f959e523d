use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use poem::http::StatusCode;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use business::domain::response::status;

use crate::api::envelope::envelope_json;
use crate::config::rate_limit_config::RateLimitConfig;

/// Upper bound on tracked client keys. Past it, expired windows are swept
/// before counting the next hit.
const MAX_TRACKED_CLIENTS: usize = 10_000;

/// Fixed-window throttle keyed by client address. Rejections answer with
/// the uniform envelope and a 429 status.
pub struct RateLimit {
    limiter: Arc<RateLimiter>,
}

impl RateLimit {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::new(config.max_requests, config.window())),
        }
    }
}

impl<E: Endpoint> Middleware<E> for RateLimit {
    type Output = RateLimitEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RateLimitEndpoint {
            ep,
            limiter: self.limiter.clone(),
        }
    }
}

struct Window {
    started_at: Instant,
    count: u64,
}

struct RateLimiter {
    max_requests: u64,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    fn new(max_requests: u64, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Counts a hit for `key` and reports whether it stays within the limit.
    fn try_acquire(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);

        if windows.len() > MAX_TRACKED_CLIENTS {
            windows.retain(|_, w| now.duration_since(w.started_at) < self.window);
        }

        let window = windows.entry(key.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });
        if now.duration_since(window.started_at) >= self.window {
            window.started_at = now;
            window.count = 0;
        }
        window.count += 1;
        window.count <= self.max_requests
    }
}

pub struct RateLimitEndpoint<E> {
    ep: E,
    limiter: Arc<RateLimiter>,
}

impl<E: Endpoint> Endpoint for RateLimitEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let key = req.remote_addr().to_string();
        if !self.limiter.try_acquire(&key) {
            return Ok(Response::builder()
                .status(StatusCode::TOO_MANY_REQUESTS)
                .content_type("application/json; charset=utf-8")
                .body(envelope_json(
                    "Too many requests, please try again later.",
                    status::TOO_MANY_REQUESTS,
                )));
        }

        self.ep.call(req).await.map(IntoResponse::into_response)
    }
}
