//! Byte transport boundary

/// Non-blocking byte-serial transport
///
/// The control loop must never block on I/O: `read` drains only what has
/// already arrived, and `write` is best effort (a saturated link drops
/// telemetry rather than stalling the loop).
pub trait Transport {
    /// Copy already-available bytes into `buf`, returning how many
    ///
    /// Returns 0 immediately when nothing is pending.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Queue bytes for transmission
    fn write(&mut self, bytes: &[u8]);
}
