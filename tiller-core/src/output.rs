//! Command-to-output mapping
//!
//! Scales the commanded position by the gain percentage, then linearly maps
//! the full signed 16-bit range onto the actuator's pulse-width range. All
//! math is truncating integer arithmetic.

use tiller_protocol::messages::MAX_GAIN;

/// Map a commanded position to an actuator pulse width
///
/// Gain scales the deflection from center: gain 0 pins the output at the
/// range midpoint regardless of position, gain 100 uses the full range.
pub fn position_to_pulse_us(position: i16, gain: u8, min_us: u16, max_us: u16) -> u16 {
    let gain = i32::from(gain.min(MAX_GAIN));
    let deflection = i32::from(position) * gain / 100;

    // -32768..32767 -> min_us..max_us, truncating
    let span = i64::from(max_us) - i64::from(min_us);
    let us = (i64::from(deflection) + 32768) * span / 65535 + i64::from(min_us);
    us.clamp(i64::from(min_us), i64::from(max_us)) as u16
}
