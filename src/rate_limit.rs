use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Instant;

const WINDOW_SECS: u64 = 60;

/// Per-IP sliding window limiter for the create endpoint.
#[derive(Clone)]
pub struct RateLimiter {
    max_per_window: usize,
    requests: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
}

impl RateLimiter {
    pub fn new(max_per_window: usize) -> Self {
        Self {
            max_per_window,
            requests: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Count this request against the IP's window. Returns false when the
    /// IP is over its budget; the request is only recorded when admitted.
    /// Also lazily cleans up stale entries for the checked IP.
    pub fn try_acquire(&self, ip: IpAddr) -> bool {
        let mut map = self.requests.lock().unwrap_or_else(|e| e.into_inner());
        // None when the monotonic clock is younger than the window; every
        // recorded timestamp is still inside it then.
        let cutoff = Instant::now().checked_sub(std::time::Duration::from_secs(WINDOW_SECS));

        let timestamps = map.entry(ip).or_default();
        if let Some(cutoff) = cutoff {
            timestamps.retain(|t| *t > cutoff);
        }
        if timestamps.len() >= self.max_per_window {
            return false;
        }
        timestamps.push(Instant::now());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn admits_up_to_the_budget_then_blocks() {
        let limiter = RateLimiter::new(3);
        let ip = IpAddr::V4(Ipv4Addr::LOCALHOST);
        assert!(limiter.try_acquire(ip));
        assert!(limiter.try_acquire(ip));
        assert!(limiter.try_acquire(ip));
        assert!(!limiter.try_acquire(ip));
    }

    #[test]
    fn budgets_are_per_ip() {
        let limiter = RateLimiter::new(1);
        let a = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        let b = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2));
        assert!(limiter.try_acquire(a));
        assert!(!limiter.try_acquire(a));
        assert!(limiter.try_acquire(b));
    }
}
