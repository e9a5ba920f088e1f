//! Raw gamescope LUT record format.
//!
//! Both table kinds are flat sequences of 8-byte records with no header and
//! no trailing metadata. Each record holds four little-endian `u16` fields
//! (R, G, B, pad); the pad word is always zero.
//!
//! - 1-D shaper: 4096 records = 32768 bytes
//! - 3-D cube: 17^3 = 4913 records = 39304 bytes

/// Entries in the 1-D shaper table.
pub const LUT1D_SIZE: usize = 4096;

/// Grid points per axis of the 3-D cube.
pub const LUT3D_SIZE: usize = 17;

/// Bytes per record: four little-endian `u16` fields.
pub const ENTRY_BYTES: usize = 8;

/// Maps a unit-range value to the nearest 16-bit code: `round(unit * 65535)`.
///
/// Inputs are expected in `[0, 1]`; the saturating cast covers anything that
/// strays outside.
///
/// ```rust
/// use scopedim_lut::quantize;
///
/// assert_eq!(quantize(0.0), 0);
/// assert_eq!(quantize(1.0), 65535);
/// assert_eq!(quantize(0.5), 32768);
/// ```
#[inline]
pub fn quantize(unit: f64) -> u16 {
    (unit * 65535.0).round() as u16
}

/// One 8-byte RGBX record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Red code
    pub r: u16,
    /// Green code
    pub g: u16,
    /// Blue code
    pub b: u16,
}

impl Entry {
    /// Packs the record as little-endian bytes; the pad word stays zero.
    #[inline]
    pub fn to_bytes(self) -> [u8; ENTRY_BYTES] {
        let mut bytes = [0u8; ENTRY_BYTES];
        bytes[0..2].copy_from_slice(&self.r.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.g.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.b.to_le_bytes());
        bytes
    }

    /// Reads a record back from its byte form.
    pub(crate) fn from_bytes(bytes: &[u8; ENTRY_BYTES]) -> Self {
        Self {
            r: u16::from_le_bytes([bytes[0], bytes[1]]),
            g: u16::from_le_bytes([bytes[2], bytes[3]]),
            b: u16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_endpoints() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 65535);
        // round(32767.5) rounds away from zero
        assert_eq!(quantize(0.5), 32768);
    }

    #[test]
    fn test_quantize_saturates() {
        assert_eq!(quantize(1.5), 65535);
        assert_eq!(quantize(-0.5), 0);
    }

    #[test]
    fn test_entry_packing() {
        let entry = Entry {
            r: 0x1234,
            g: 0x5678,
            b: 0x9abc,
        };
        let bytes = entry.to_bytes();
        assert_eq!(bytes, [0x34, 0x12, 0x78, 0x56, 0xbc, 0x9a, 0x00, 0x00]);
        assert_eq!(Entry::from_bytes(&bytes), entry);
    }
}
