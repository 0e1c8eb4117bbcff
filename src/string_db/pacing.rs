// Fixed courtesy delay after each STRING request.
//
// STRING asks API users to wait about one second between calls. Requests
// here are strictly sequential, so a plain sleep after every call is enough;
// there is no token bucket and nothing to cancel.

use tokio::time::Duration;

/// Delay STRING asks for between consecutive requests.
pub const STRING_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Sleeps for a fixed duration after each request.
#[derive(Debug, Clone, Copy)]
pub struct CourtesyDelay {
    delay: Duration,
}

impl Default for CourtesyDelay {
    fn default() -> Self {
        Self::new(STRING_REQUEST_DELAY)
    }
}

impl CourtesyDelay {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Call once after a request has completed.
    pub async fn after_request(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_default_is_one_second() {
        assert_eq!(CourtesyDelay::default().delay, Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_after_request_waits_full_delay() {
        let pacer = CourtesyDelay::new(Duration::from_millis(200));
        let start = Instant::now();
        pacer.after_request().await;
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_millis(190),
            "Expected ~200ms delay, got {:?}",
            elapsed
        );
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let pacer = CourtesyDelay::new(Duration::ZERO);
        let start = Instant::now();
        pacer.after_request().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
