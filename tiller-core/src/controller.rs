//! The fixed-period control loop
//!
//! [`Controller`] owns the shared state, the frame decoder, the link
//! monitor, the emission cadences, and the three hardware boundaries. One
//! [`tick`](Controller::tick) runs per fixed period; pacing (the end-of-tick
//! sleep) lives outside so a test harness can drive the loop with synthetic
//! timestamps.
//!
//! Per-tick order of operations:
//! 1. drain available transport bytes into the decoder
//! 2. decode frames and dispatch commands
//! 3. link-timeout check
//! 4. sample angle feedback
//! 5. drive the actuator (or keep it relaxed while disabled)
//! 6. telemetry and heartbeat emission on their own cadences
//! 7. loop-rate measurement

use tiller_protocol::frame::MAX_FRAME_SIZE;
use tiller_protocol::{DeviceMessage, FaultCode, FrameDecoder, HostCommand};

use crate::config::ControllerConfig;
use crate::dispatch;
use crate::output::position_to_pulse_us;
use crate::safety::LinkMonitor;
use crate::state::ControlState;
use crate::telemetry::Cadence;
use crate::traits::{Actuator, AngleSensor, Transport};

/// Loop-rate measurement window
const RATE_WINDOW_MS: u32 = 1000;

/// Transport drain chunk size per read call
const READ_CHUNK: usize = 32;

/// Single-threaded control loop over the hardware boundaries
pub struct Controller<A, S, T> {
    config: ControllerConfig,
    state: ControlState,
    decoder: FrameDecoder,
    link: LinkMonitor,
    telemetry: Cadence,
    heartbeat: Cadence,
    rate_window: Cadence,
    tick_count: u32,
    actuator: A,
    sensor: S,
    transport: T,
}

impl<A, S, T> Controller<A, S, T>
where
    A: Actuator,
    S: AngleSensor,
    T: Transport,
{
    /// Create a controller in the safe startup state (disabled, centered)
    pub fn new(config: ControllerConfig, now_ms: u32, actuator: A, sensor: S, transport: T) -> Self {
        Self {
            state: ControlState::new(config.default_gain),
            decoder: FrameDecoder::new(),
            link: LinkMonitor::new(config.link_timeout_ms, now_ms),
            telemetry: Cadence::new(config.telemetry_interval_ms, now_ms),
            heartbeat: Cadence::new(config.heartbeat_interval_ms, now_ms),
            rate_window: Cadence::new(RATE_WINDOW_MS, now_ms),
            tick_count: 0,
            config,
            actuator,
            sensor,
            transport,
        }
    }

    /// Current control state
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Controller configuration
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Access the actuator boundary
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Access the transport boundary
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Run one control loop iteration at the given monotonic time
    ///
    /// Never blocks: transport reads drain only what has already arrived,
    /// and all emission is best effort.
    pub fn tick(&mut self, now_ms: u32) {
        self.drain_transport();
        self.process_frames(now_ms);
        self.check_link(now_ms);

        self.state.feedback_angle = self.sensor.read_angle();

        if self.state.enabled {
            let us = position_to_pulse_us(
                self.state.commanded_position,
                self.state.gain,
                self.config.pulse_min_us,
                self.config.pulse_max_us,
            );
            self.actuator.set_pulse_width_us(us);
        } else {
            self.actuator.relax();
        }

        if self.telemetry.ready(now_ms) {
            self.send(DeviceMessage::Telemetry {
                angle: self.state.feedback_angle,
                rate_hz: self.state.loop_rate_hz,
            });
        }
        // Heartbeat is unconditional: it signals liveness, not armed state
        if self.heartbeat.ready(now_ms) {
            self.send(DeviceMessage::Heartbeat);
        }

        self.tick_count += 1;
        if self.rate_window.ready(now_ms) {
            self.state.loop_rate_hz = self.tick_count.min(u32::from(u16::MAX)) as u16;
            self.tick_count = 0;
        }
    }

    /// Pull whatever the transport already has into the receive buffer
    fn drain_transport(&mut self) {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            let n = self.transport.read(&mut chunk);
            if n == 0 {
                break;
            }
            self.decoder.extend(&chunk[..n]);
        }
    }

    /// Decode and dispatch every complete frame in the receive buffer
    fn process_frames(&mut self, now_ms: u32) {
        while let Some(frame) = self.decoder.poll() {
            // Any checksum-valid frame counts as link activity, recognized
            // or not, well-formed or not
            self.link.record_activity(now_ms);

            if let Some(cmd) = HostCommand::from_frame(&frame) {
                let was_enabled = self.state.enabled;
                dispatch::apply(&mut self.state, cmd);
                if was_enabled && !self.state.enabled {
                    self.actuator.relax();
                }
            }
        }
    }

    /// Disable into the safe state when the link goes quiet
    ///
    /// The trip fires once: it clears `enabled`, which gates the check.
    /// Re-arming requires an explicit SetEnable after fresh activity.
    fn check_link(&mut self, now_ms: u32) {
        if self.link.timed_out(now_ms, self.state.enabled) {
            self.state.enabled = false;
            self.state.fault = FaultCode::LinkTimeout;
            self.actuator.relax();
            self.send(DeviceMessage::Fault(FaultCode::LinkTimeout));
        }
    }

    /// Encode and transmit one device message
    fn send(&mut self, msg: DeviceMessage) {
        let mut buf = [0u8; MAX_FRAME_SIZE];
        // Device message payloads are fixed-size and always fit
        if let Ok(frame) = msg.to_frame() {
            if let Ok(len) = frame.encode(&mut buf) {
                self.transport.write(&buf[..len]);
            }
        }
    }
}
