//! Frame encoding and decoding for the serial link.
//!
//! Frame format:
//! - HEADER (2 bytes): 0xAA 0x55 synchronization signature
//! - CMD (1 byte): command identifier
//! - LEN (1 byte): payload length (0-16)
//! - PAYLOAD (0-16 bytes): command-specific data
//! - CRC8 (1 byte): CRC-8 of CMD, LEN, and all PAYLOAD bytes
//!
//! Decoding works on a bounded receive buffer that the transport appends to
//! between ticks. The stream is self-framing: after corruption the decoder
//! resynchronizes by scanning byte-at-a-time for the next header signature.

use heapless::Vec;

use crate::crc::crc8;

/// Two-byte frame synchronization signature
pub const FRAME_HEADER: [u8; 2] = [0xAA, 0x55];

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 16;

/// Bytes of framing around the payload (header + cmd + len + crc)
pub const FRAME_OVERHEAD: usize = 5;

/// Maximum complete frame size
pub const MAX_FRAME_SIZE: usize = FRAME_OVERHEAD + MAX_PAYLOAD_SIZE;

/// Receive buffer capacity. Partial frames persist across ticks; on overflow
/// the buffer is reset to empty and framing resynchronizes on the next header.
pub const RX_BUFFER_SIZE: usize = 64;

/// Errors that can occur during frame construction or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A decoded or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Command identifier
    pub command: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a new frame with the given command and payload
    pub fn new(command: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let mut payload_vec = Vec::new();
        payload_vec
            .extend_from_slice(payload)
            .map_err(|_| FrameError::PayloadTooLarge)?;

        Ok(Self {
            command,
            payload: payload_vec,
        })
    }

    /// Create a frame with no payload
    pub fn empty(command: u8) -> Self {
        Self {
            command,
            payload: Vec::new(),
        }
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = FRAME_OVERHEAD + self.payload.len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[0] = FRAME_HEADER[0];
        buffer[1] = FRAME_HEADER[1];
        buffer[2] = self.command;
        buffer[3] = self.payload.len() as u8;
        buffer[4..4 + self.payload.len()].copy_from_slice(&self.payload);
        buffer[4 + self.payload.len()] = crc8(&buffer[2..4 + self.payload.len()]);

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }
}

/// Decoder for the inbound byte stream
///
/// Owns the bounded receive buffer. The transport appends whatever bytes are
/// available with [`extend`](Self::extend); the control loop then calls
/// [`poll`](Self::poll) until it returns `None`. Frames that fail the CRC
/// check are consumed and dropped silently (best-effort link, no
/// retransmission), counted only for observability.
#[derive(Debug, Clone, Default)]
pub struct FrameDecoder {
    buf: Vec<u8, RX_BUFFER_SIZE>,
    crc_failures: u32,
}

impl FrameDecoder {
    /// Create a new decoder with an empty receive buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append received bytes to the buffer
    ///
    /// Overflow policy: if a byte does not fit, the whole buffer is dropped
    /// and filling restarts. Framing recovers on the next header signature.
    pub fn extend(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if self.buf.push(byte).is_err() {
                self.buf.clear();
                // Cannot fail on an empty buffer
                let _ = self.buf.push(byte);
            }
        }
    }

    /// Extract the next checksum-valid frame from the buffer
    ///
    /// Scans forward for the header signature, advancing one byte at a time
    /// past anything that does not match. A frame whose tail has not arrived
    /// yet is left in place for the next tick. Consumed bytes (garbage,
    /// corrupt frames, returned frames) are compacted out before returning.
    pub fn poll(&mut self) -> Option<Frame> {
        let mut search = 0;
        let mut decoded = None;

        while decoded.is_none() && self.buf.len() - search >= FRAME_OVERHEAD {
            if self.buf[search] != FRAME_HEADER[0] || self.buf[search + 1] != FRAME_HEADER[1] {
                search += 1;
                continue;
            }

            let command = self.buf[search + 2];
            let len = self.buf[search + 3] as usize;
            if len > MAX_PAYLOAD_SIZE {
                // Corrupted length byte: treat as a false header and resync
                search += 1;
                continue;
            }

            let total = FRAME_OVERHEAD + len;
            if self.buf.len() - search < total {
                break; // Incomplete frame, wait for more bytes
            }

            let expected = crc8(&self.buf[search + 2..search + 4 + len]);
            let actual = self.buf[search + 4 + len];
            if expected == actual {
                let mut payload = Vec::new();
                // Cannot fail: len <= MAX_PAYLOAD_SIZE was checked above
                let _ = payload.extend_from_slice(&self.buf[search + 4..search + 4 + len]);
                decoded = Some(Frame { command, payload });
            } else {
                self.crc_failures = self.crc_failures.wrapping_add(1);
            }

            // Advance past the frame whether the checksum matched or not
            search += total;
        }

        self.compact(search);
        decoded
    }

    /// Number of frames dropped for checksum mismatch since startup
    pub fn crc_failures(&self) -> u32 {
        self.crc_failures
    }

    /// Number of bytes currently buffered
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Drop consumed bytes and move the remainder to the buffer start
    fn compact(&mut self, consumed: usize) {
        if consumed == 0 {
            return;
        }
        let remaining = self.buf.len() - consumed;
        self.buf.copy_within(consumed.., 0);
        self.buf.truncate(remaining);
    }
}
