//! Async request pacing for crawl-heavy operations.
//!
//! The comment locator can issue hundreds of page fetches back to back, so
//! every outgoing request waits out a configurable cooldown first.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::time::sleep;

/// Enforces a minimum interval between consecutive API requests.
#[derive(Clone, Debug)]
pub struct RequestPacer {
    cooldown: Duration,
    previous: Arc<Mutex<Option<Instant>>>,
}

impl RequestPacer {
    /// Creates a pacer with the given minimum delay between requests.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            previous: Arc::new(Mutex::new(None)),
        }
    }

    /// Waits until the cooldown since the previous request has elapsed,
    /// then records the current request. A zero cooldown never sleeps.
    pub async fn pace(&self) {
        if self.cooldown.is_zero() {
            return;
        }
        let mut previous = self.previous.lock().await;
        if let Some(last) = *previous {
            let elapsed = last.elapsed();
            if elapsed < self.cooldown {
                sleep(self.cooldown - elapsed).await;
            }
        }
        *previous = Some(Instant::now());
    }

    /// Returns the configured cooldown interval.
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}

#[cfg(test)]
mod tests {
    use super::RequestPacer;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn second_request_waits_for_cooldown() {
        let pacer = RequestPacer::new(Duration::from_millis(40));

        pacer.pace().await;
        let start = Instant::now();
        pacer.pace().await;

        assert!(start.elapsed() >= Duration::from_millis(35));
    }

    #[tokio::test]
    async fn zero_cooldown_does_not_sleep() {
        let pacer = RequestPacer::new(Duration::ZERO);

        let start = Instant::now();
        pacer.pace().await;
        pacer.pace().await;

        assert!(start.elapsed() < Duration::from_millis(10));
        assert_eq!(pacer.cooldown(), Duration::ZERO);
    }
}
