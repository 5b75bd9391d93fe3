//! Angle feedback boundary

/// Analog angle-feedback sensor on the actuator output shaft
pub trait AngleSensor {
    /// Take one raw sample
    ///
    /// Units are implementation-defined (typically a raw ADC count); the
    /// controller reports the value over telemetry without interpreting it.
    fn read_angle(&mut self) -> i16;
}
