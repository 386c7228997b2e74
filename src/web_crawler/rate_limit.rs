//! Per-host politeness spacing for the crawler.
//!
//! All requests to the same host must be at least `min_gap` apart. The
//! limiter reserves the next permitted slot under the lock and sleeps outside
//! it, so callers waiting on one host never block requests to another host.

use std::collections::HashMap;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Duration, Instant};

pub struct HostRateLimiter {
    min_gap: Duration,
    next_slot: Mutex<HashMap<String, Instant>>,
}

impl HostRateLimiter {
    pub fn new(min_gap: Duration) -> Self {
        Self {
            min_gap,
            next_slot: Mutex::new(HashMap::new()),
        }
    }

    /// Waits until a request to `host` is permitted. The first request to a
    /// host goes through immediately; later ones are spaced by `min_gap`.
    pub async fn acquire(&self, host: &str) {
        let ready = {
            let mut slots = self.next_slot.lock().await;
            let now = Instant::now();
            let ready = match slots.get(host) {
                Some(prev) => (*prev + self.min_gap).max(now),
                None => now,
            };
            slots.insert(host.to_string(), ready);
            ready
        };
        sleep_until(ready).await;
    }
}
