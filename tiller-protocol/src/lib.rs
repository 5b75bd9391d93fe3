//! Serial Link Protocol
//!
//! This crate defines the byte-serial protocol between the host PC and the
//! Tiller actuator controller. The link is assumed physically trusted but
//! electrically noisy, so the protocol is self-framing and integrity-checked.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌────────┬────────┬──────┬─────────────┬──────┐
//! │ HEADER │ CMD    │ LEN  │ PAYLOAD     │ CRC8 │
//! │ AA 55  │ 1B     │ 1B   │ 0–16B       │ 1B   │
//! └────────┴────────┴──────┴─────────────┴──────┘
//! ```
//!
//! The CRC-8 covers CMD, LEN, and PAYLOAD. Corrupted frames are dropped, not
//! retransmitted — the link is best effort and the receiver resynchronizes on
//! the next header.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod crc;
pub mod frame;
pub mod messages;

pub use crc::crc8;
pub use frame::{Frame, FrameDecoder, FrameError, FRAME_HEADER, MAX_PAYLOAD_SIZE};
pub use messages::{DeviceMessage, FaultCode, HostCommand};
