//! Controller configuration types
//!
//! All timing and output-range constants live here rather than scattered
//! through the loop body.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Controller configuration
///
/// Defaults match a hobby-servo class actuator on a 115200-baud link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// Target control loop frequency (hobby servos cap near 50 Hz)
    pub loop_hz: u16,
    /// Disable actuation after this long without a valid inbound frame
    pub link_timeout_ms: u32,
    /// Telemetry emission interval
    pub telemetry_interval_ms: u32,
    /// Outbound heartbeat interval
    pub heartbeat_interval_ms: u32,
    /// Gain percentage at startup (0-100)
    pub default_gain: u8,
    /// Actuator pulse width at full negative deflection
    pub pulse_min_us: u16,
    /// Actuator pulse width at full positive deflection
    pub pulse_max_us: u16,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            loop_hz: 50,
            link_timeout_ms: 1000,
            telemetry_interval_ms: 20,
            heartbeat_interval_ms: 500,
            default_gain: 50,
            pulse_min_us: 500,
            pulse_max_us: 2500,
        }
    }
}

impl ControllerConfig {
    /// Control loop period in milliseconds
    pub fn loop_period_ms(&self) -> u32 {
        1000 / u32::from(self.loop_hz.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_period() {
        assert_eq!(ControllerConfig::default().loop_period_ms(), 20);
    }

    #[test]
    fn test_zero_rate_does_not_divide_by_zero() {
        let config = ControllerConfig {
            loop_hz: 0,
            ..Default::default()
        };
        assert_eq!(config.loop_period_ms(), 1000);
    }
}
