//! Position actuator boundary

/// Pulse-width driven position actuator (hobby-servo class)
pub trait Actuator {
    /// Drive the actuator with the given pulse width
    ///
    /// Implementations clamp to their physical minimum/maximum range.
    fn set_pulse_width_us(&mut self, us: u16);

    /// Stop output entirely
    ///
    /// No pulses leaves the actuator slack. This is the safe idle state,
    /// applied whenever actuation is disabled.
    fn relax(&mut self);
}
