//! CRC-8 integrity checksum.
//!
//! Polynomial 0x07, initial value 0x00, no input or output reflection,
//! MSB-first. This is the CRC-8/SMBUS variant (check value 0xF4 over
//! `"123456789"`).

/// Compute the CRC-8 of `data`.
///
/// Bitwise implementation, no lookup table. For each byte: XOR into the
/// running value, then eight shift-left iterations XORing in the polynomial
/// whenever the pre-shift high bit is set.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0x00;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ 0x07
            } else {
                crc << 1
            };
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(crc8(&[]), 0x00);
    }

    #[test]
    fn test_single_byte() {
        // 0x01 shifts up to 0x80 after seven iterations, then folds in 0x07
        assert_eq!(crc8(&[0x01]), 0x07);
        assert_eq!(crc8(&[0x00]), 0x00);
    }

    #[test]
    fn test_check_value() {
        // Standard CRC-8/SMBUS check value
        assert_eq!(crc8(b"123456789"), 0xF4);
    }

    #[test]
    fn test_corruption_detected() {
        let clean = crc8(&[0x01, 0x02, 0x00, 0x80]);
        let corrupt = crc8(&[0x01, 0x02, 0x00, 0x81]);
        assert_ne!(clean, corrupt);
    }
}
