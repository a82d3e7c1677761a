//! Token bucket rate limiter for chain API calls.
//!
//! The public API enforces per-key quotas, so the client keeps one bucket per
//! endpoint family (`holders`, `metadata`, `contract`, ...). Buckets are created
//! lazily from the shared configuration.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};

/// Default rate limit: 50 requests per minute (anonymous API quota).
const DEFAULT_REQUESTS_PER_MINUTE: u32 = 50;

/// Default bucket capacity (allows bursting).
const DEFAULT_BUCKET_CAPACITY: f64 = 10.0;

#[derive(Debug)]
struct TokenBucket {
    tokens: f64,
    last_update: Instant,
    /// Tokens per second.
    rate: f64,
    capacity: f64,
}

impl TokenBucket {
    fn new(config: &RateLimitConfig) -> Self {
        Self {
            tokens: config.burst_capacity,
            last_update: Instant::now(),
            rate: config.requests_per_minute as f64 / 60.0,
            capacity: config.burst_capacity,
        }
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update).as_secs_f64();
        self.tokens = (self.tokens + elapsed * self.rate).min(self.capacity);
        self.last_update = now;
    }

    fn try_acquire(&mut self) -> bool {
        self.refill();
        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    fn time_until_available(&mut self) -> Duration {
        self.refill();
        if self.tokens >= 1.0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64((1.0 - self.tokens) / self.rate)
        }
    }
}

/// Rate limit settings applied to every endpoint family.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub requests_per_minute: u32,
    pub burst_capacity: f64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_minute: DEFAULT_REQUESTS_PER_MINUTE,
            burst_capacity: DEFAULT_BUCKET_CAPACITY,
        }
    }
}

impl RateLimitConfig {
    /// Keyed API access gets a larger quota.
    pub fn with_api_key() -> Self {
        Self {
            requests_per_minute: 500,
            burst_capacity: 50.0,
        }
    }
}

/// Thread-safe token bucket limiter with one bucket per endpoint family.
pub struct RateLimiter {
    config: RateLimitConfig,
    buckets: Mutex<HashMap<String, TokenBucket>>,
}

impl RateLimiter {
    /// Builds a limiter. A zero rate or a bucket smaller than one request
    /// would never hand out a token, so both are raised to the minimum.
    pub fn new(mut config: RateLimitConfig) -> Self {
        if config.requests_per_minute == 0
            || config.burst_capacity.is_nan()
            || config.burst_capacity < 1.0
        {
            warn!(
                "Rate limit config {:?} can never admit a request, using the minimum",
                config
            );
            config.requests_per_minute = config.requests_per_minute.max(1);
            config.burst_capacity = config.burst_capacity.max(1.0);
        }
        Self {
            config,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    // A poisoned lock only means a slightly wrong token count.
    fn lock_buckets(&self) -> MutexGuard<'_, HashMap<String, TokenBucket>> {
        self.buckets.lock().unwrap_or_else(|poisoned| {
            warn!("Rate limiter buckets mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Waits until a token is available for `family`.
    pub async fn acquire(&self, family: &str) {
        loop {
            let wait_time = {
                let mut buckets = self.lock_buckets();
                let bucket = buckets
                    .entry(family.to_string())
                    .or_insert_with(|| TokenBucket::new(&self.config));

                if bucket.try_acquire() {
                    return;
                }
                bucket.time_until_available()
            };

            if wait_time > Duration::ZERO {
                debug!("Rate limiter: waiting {:?} for '{}'", wait_time, family);
                tokio::time::sleep(wait_time).await;
            }
        }
    }

    /// Takes a token without waiting. Returns false when rate limited.
    pub fn try_acquire(&self, family: &str) -> bool {
        let mut buckets = self.lock_buckets();
        buckets
            .entry(family.to_string())
            .or_insert_with(|| TokenBucket::new(&self.config))
            .try_acquire()
    }

    pub fn reset(&self, family: &str) {
        self.lock_buckets().remove(family);
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
