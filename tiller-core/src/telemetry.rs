//! Fixed-interval emission cadence
//!
//! One `Cadence` per periodic output: telemetry, heartbeat, and the
//! loop-rate measurement window. Timestamps are a wrapping millisecond
//! counter compared against the current tick time.

/// Tracks when a fixed interval has elapsed
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    interval_ms: u32,
    last_ms: u32,
}

impl Cadence {
    /// Create a cadence whose first firing is `interval_ms` after `now_ms`
    pub fn new(interval_ms: u32, now_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: now_ms,
        }
    }

    /// True once per elapsed interval; restarts the interval when it fires
    pub fn ready(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_ms) >= self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_interval() {
        let mut cadence = Cadence::new(20, 0);
        assert!(!cadence.ready(10));
        assert!(!cadence.ready(19));
        assert!(cadence.ready(20));
    }

    #[test]
    fn test_restarts_after_firing() {
        let mut cadence = Cadence::new(20, 0);
        assert!(cadence.ready(25));
        assert!(!cadence.ready(40));
        assert!(cadence.ready(45));
    }

    #[test]
    fn test_fires_across_wraparound() {
        let mut cadence = Cadence::new(500, u32::MAX - 100);
        assert!(!cadence.ready(u32::MAX));
        assert!(cadence.ready(400)); // 501 ms elapsed across the wrap
    }
}
