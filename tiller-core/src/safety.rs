//! Link-timeout safety monitoring
//!
//! Tracks the timestamp of the last checksum-valid inbound frame. If
//! actuation is enabled and the link goes quiet past the configured timeout,
//! the controller performs the disable transition: enable off, actuator
//! relaxed, fault latched, one Fault frame emitted. The trip is
//! edge-triggered by construction — the check requires `enabled`, which the
//! transition itself clears — and re-arming only happens through an explicit
//! SetEnable command after fresh activity.

/// Watches elapsed time since the last valid inbound frame
#[derive(Debug, Clone, Copy)]
pub struct LinkMonitor {
    timeout_ms: u32,
    last_activity_ms: u32,
}

impl LinkMonitor {
    /// Create a monitor with its activity clock starting at `now_ms`
    pub fn new(timeout_ms: u32, now_ms: u32) -> Self {
        Self {
            timeout_ms,
            last_activity_ms: now_ms,
        }
    }

    /// Record inbound link activity
    ///
    /// Called for every checksum-valid frame, including heartbeats,
    /// unrecognized ids, and malformed-but-valid frames.
    pub fn record_activity(&mut self, now_ms: u32) {
        self.last_activity_ms = now_ms;
    }

    /// Check whether the link has timed out
    ///
    /// Only an enabled actuator can time out; once tripped and disabled, the
    /// monitor stays quiet until something re-enables. Wrapping arithmetic
    /// keeps the comparison valid across millisecond-counter rollover.
    pub fn timed_out(&self, now_ms: u32, enabled: bool) -> bool {
        enabled && now_ms.wrapping_sub(self.last_activity_ms) > self.timeout_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_link_within_timeout() {
        let monitor = LinkMonitor::new(1000, 0);
        assert!(!monitor.timed_out(999, true));
        assert!(!monitor.timed_out(1000, true)); // boundary: strictly greater
    }

    #[test]
    fn test_quiet_link_past_timeout() {
        let monitor = LinkMonitor::new(1000, 0);
        assert!(monitor.timed_out(1001, true));
    }

    #[test]
    fn test_disabled_never_times_out() {
        let monitor = LinkMonitor::new(1000, 0);
        assert!(!monitor.timed_out(5000, false));
    }

    #[test]
    fn test_activity_resets_clock() {
        let mut monitor = LinkMonitor::new(1000, 0);
        monitor.record_activity(900);
        assert!(!monitor.timed_out(1500, true));
        assert!(monitor.timed_out(1901, true));
    }

    #[test]
    fn test_counter_wraparound() {
        let mut monitor = LinkMonitor::new(1000, u32::MAX - 100);
        monitor.record_activity(u32::MAX - 100);
        assert!(!monitor.timed_out(500, true)); // 601 ms elapsed across wrap
        assert!(monitor.timed_out(1000, true)); // 1101 ms elapsed
    }
}
