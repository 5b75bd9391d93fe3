//! Shared control state
//!
//! One record owned by the [`Controller`](crate::controller::Controller) and
//! passed explicitly to the components that mutate it: the dispatcher
//! (commanded position, gain, enable), the link monitor (enable off, fault),
//! and the loop body (feedback sample, measured loop rate). It is initialized
//! once at startup and lives for the process lifetime — reset, never
//! destroyed.

use tiller_protocol::FaultCode;

/// Process-wide actuator control state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    /// Actuation armed; false forces the actuator to its relaxed state
    pub enabled: bool,
    /// Target position from the host, full signed 16-bit range
    pub commanded_position: i16,
    /// Deflection gain percentage (0-100)
    pub gain: u8,
    /// Latest raw feedback sample
    pub feedback_angle: i16,
    /// Measured loop iterations over the last one-second window
    pub loop_rate_hz: u16,
    /// Latched fault code, reported over the link when it trips
    pub fault: FaultCode,
}

impl ControlState {
    /// Initial state: disabled, centered, no fault
    pub fn new(default_gain: u8) -> Self {
        Self {
            enabled: false,
            commanded_position: 0,
            gain: default_gain,
            feedback_angle: 0,
            loop_rate_hz: 0,
            fault: FaultCode::None,
        }
    }
}
