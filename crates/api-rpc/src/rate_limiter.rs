//! Rate Limiter (Token Bucket)
//!
//! Caps how fast mutating methods may be called. One bucket per server;
//! read-only methods bypass it.

use std::time::Instant;
use tokio::sync::Mutex;

/// Token bucket: `max_tokens` burst capacity, refilled continuously at
/// `refill_rate` tokens per second.
pub struct RateLimiter {
    state: Mutex<Bucket>,
    max_tokens: u32,
    refill_rate: u32,
}

struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    pub fn new(max_tokens: u32, refill_rate: u32) -> Self {
        Self {
            state: Mutex::new(Bucket {
                tokens: max_tokens as f64,
                last_refill: Instant::now(),
            }),
            max_tokens,
            refill_rate,
        }
    }

    /// Consume one token. Returns false when the bucket is dry.
    pub async fn check(&self) -> bool {
        let mut bucket = self.state.lock().await;

        let now = Instant::now();
        let elapsed = now.duration_since(bucket.last_refill);
        bucket.last_refill = now;

        bucket.tokens = (bucket.tokens + elapsed.as_secs_f64() * self.refill_rate as f64)
            .min(self.max_tokens as f64);

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}
