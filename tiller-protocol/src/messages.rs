//! Typed messages layered over raw frames.
//!
//! Message ids are divided by direction:
//! - Host → device: steering, gain, and enable commands
//! - Device → host: telemetry and fault reports
//! - Bidirectional: heartbeat (link liveness, empty payload)
//!
//! All multi-byte payload fields are little-endian.

use crate::frame::{Frame, FrameError};

// Command ids: host → device
pub const CMD_SET_STEERING: u8 = 0x01;
pub const CMD_SET_GAIN: u8 = 0x02;
pub const CMD_SET_ENABLE: u8 = 0x03;

// Command ids: device → host
pub const CMD_TELEMETRY: u8 = 0x10;
pub const CMD_FAULT: u8 = 0x11;

// Command ids: bidirectional
pub const CMD_HEARTBEAT: u8 = 0xF0;

/// Gain is a percentage; dispatch clamps anything above this
pub const MAX_GAIN: u8 = 100;

/// Fault codes reported in a Fault message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultCode {
    /// No fault
    #[default]
    None,
    /// No valid inbound frame within the link timeout
    LinkTimeout,
    /// Actuator hardware fault
    ActuatorError,
    /// Feedback sensor fault
    SensorError,
}

impl FaultCode {
    /// Wire encoding of this fault code
    pub fn to_byte(self) -> u8 {
        match self {
            FaultCode::None => 0x00,
            FaultCode::LinkTimeout => 0x01,
            FaultCode::ActuatorError => 0x02,
            FaultCode::SensorError => 0x03,
        }
    }

    /// Decode a fault code from its wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(FaultCode::None),
            0x01 => Some(FaultCode::LinkTimeout),
            0x02 => Some(FaultCode::ActuatorError),
            0x03 => Some(FaultCode::SensorError),
            _ => None,
        }
    }
}

/// Commands from the host PC to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostCommand {
    /// Target position across the full signed 16-bit range
    SetSteering(i16),
    /// Deflection gain percentage (clamped to 100 at dispatch)
    SetGain(u8),
    /// Arm or disarm the actuator
    SetEnable(bool),
    /// Link liveness only, no state change
    Heartbeat,
}

impl HostCommand {
    /// Parse a command from a checksum-valid frame
    ///
    /// Returns `None` for an unrecognized id or a recognized id with a short
    /// payload. Either way the frame still counts as link activity — that is
    /// the caller's concern, not this parser's.
    pub fn from_frame(frame: &Frame) -> Option<Self> {
        match frame.command {
            CMD_SET_STEERING => {
                let bytes = frame.payload.get(..2)?;
                Some(HostCommand::SetSteering(i16::from_le_bytes([
                    bytes[0], bytes[1],
                ])))
            }
            CMD_SET_GAIN => frame.payload.first().map(|&g| HostCommand::SetGain(g)),
            CMD_SET_ENABLE => frame
                .payload
                .first()
                .map(|&b| HostCommand::SetEnable(b != 0)),
            CMD_HEARTBEAT => Some(HostCommand::Heartbeat),
            _ => None,
        }
    }

    /// Encode this command into a frame (for the host side or tests)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            HostCommand::SetSteering(pos) => Frame::new(CMD_SET_STEERING, &pos.to_le_bytes()),
            HostCommand::SetGain(gain) => Frame::new(CMD_SET_GAIN, &[*gain]),
            HostCommand::SetEnable(on) => Frame::new(CMD_SET_ENABLE, &[u8::from(*on)]),
            HostCommand::Heartbeat => Ok(Frame::empty(CMD_HEARTBEAT)),
        }
    }
}

/// Messages from the controller to the host PC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceMessage {
    /// Periodic feedback sample and measured loop rate
    Telemetry { angle: i16, rate_hz: u16 },
    /// Fault notification (sent once per trip)
    Fault(FaultCode),
    /// Outbound link liveness, sent whether or not the actuator is enabled
    Heartbeat,
}

impl DeviceMessage {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            DeviceMessage::Telemetry { angle, rate_hz } => {
                let a = angle.to_le_bytes();
                let r = rate_hz.to_le_bytes();
                Frame::new(CMD_TELEMETRY, &[a[0], a[1], r[0], r[1]])
            }
            DeviceMessage::Fault(code) => Frame::new(CMD_FAULT, &[code.to_byte()]),
            DeviceMessage::Heartbeat => Ok(Frame::empty(CMD_HEARTBEAT)),
        }
    }

    /// Parse a message from a frame (for the host side or tests)
    pub fn from_frame(frame: &Frame) -> Option<Self> {
        match frame.command {
            CMD_TELEMETRY => {
                let bytes = frame.payload.get(..4)?;
                Some(DeviceMessage::Telemetry {
                    angle: i16::from_le_bytes([bytes[0], bytes[1]]),
                    rate_hz: u16::from_le_bytes([bytes[2], bytes[3]]),
                })
            }
            CMD_FAULT => FaultCode::from_byte(*frame.payload.first()?).map(DeviceMessage::Fault),
            CMD_HEARTBEAT => Some(DeviceMessage::Heartbeat),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_steering_little_endian() {
        let frame = Frame::new(CMD_SET_STEERING, &[0x00, 0x80]).unwrap();
        assert_eq!(
            HostCommand::from_frame(&frame),
            Some(HostCommand::SetSteering(-32768))
        );
    }

    #[test]
    fn test_set_enable_nonzero_is_true() {
        let frame = Frame::new(CMD_SET_ENABLE, &[0x02]).unwrap();
        assert_eq!(
            HostCommand::from_frame(&frame),
            Some(HostCommand::SetEnable(true))
        );
    }

    #[test]
    fn test_heartbeat_has_no_payload() {
        let frame = HostCommand::Heartbeat.to_frame().unwrap();
        assert_eq!(frame.command, CMD_HEARTBEAT);
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn test_short_payload_is_none() {
        // One byte where SetSteering needs two: malformed but checksum-valid,
        // parsed as nothing
        let frame = Frame::new(CMD_SET_STEERING, &[0x7F]).unwrap();
        assert_eq!(HostCommand::from_frame(&frame), None);

        let frame = Frame::empty(CMD_SET_GAIN);
        assert_eq!(HostCommand::from_frame(&frame), None);
    }

    #[test]
    fn test_unrecognized_id_is_none() {
        let frame = Frame::new(0x7E, &[1, 2, 3]).unwrap();
        assert_eq!(HostCommand::from_frame(&frame), None);
    }

    #[test]
    fn test_host_command_roundtrip() {
        for cmd in [
            HostCommand::SetSteering(-32768),
            HostCommand::SetSteering(32767),
            HostCommand::SetGain(100),
            HostCommand::SetEnable(false),
            HostCommand::Heartbeat,
        ] {
            let frame = cmd.to_frame().unwrap();
            assert_eq!(HostCommand::from_frame(&frame), Some(cmd));
        }
    }

    #[test]
    fn test_telemetry_layout() {
        let msg = DeviceMessage::Telemetry {
            angle: -2,
            rate_hz: 50,
        };
        let frame = msg.to_frame().unwrap();
        assert_eq!(frame.command, CMD_TELEMETRY);
        assert_eq!(&frame.payload[..], &[0xFE, 0xFF, 50, 0]);
        assert_eq!(DeviceMessage::from_frame(&frame), Some(msg));
    }

    #[test]
    fn test_fault_code_bytes() {
        let frame = DeviceMessage::Fault(FaultCode::LinkTimeout)
            .to_frame()
            .unwrap();
        assert_eq!(frame.command, CMD_FAULT);
        assert_eq!(&frame.payload[..], &[0x01]);

        assert_eq!(FaultCode::from_byte(0x03), Some(FaultCode::SensorError));
        assert_eq!(FaultCode::from_byte(0x04), None);
    }
}
