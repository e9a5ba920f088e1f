//! 1-D shaper table generation.
//!
//! The shaper is the per-channel curve gamescope applies before the 3-D
//! cube. It carries both adjustments scopedim makes: uniform brightness
//! attenuation and white-point correction from the temperature model.

use std::path::Path;

use crate::format::{ENTRY_BYTES, Entry, LUT1D_SIZE, quantize};
use crate::temperature::{self, MAX_KELVIN, MIN_KELVIN};
use crate::write::write_atomic;
use crate::{LutError, LutResult};

/// Encodes the 4096-entry shaper table for the given brightness and white
/// point.
///
/// Entry `x` maps input intensity `x / 4095` to
/// `intensity * brightness * multiplier` per channel, quantized to 16 bits.
/// Each channel is monotonically non-decreasing across the table, strictly
/// so while `brightness * multiplier` is nonzero.
///
/// Fails with [`LutError::InvalidParameter`] if `brightness` is outside
/// `0.0..=1.0` or `kelvin` outside `1000.0..=15000.0`.
pub fn encode_lut1d(brightness: f64, kelvin: f64) -> LutResult<Vec<u8>> {
    LutError::check_range("brightness", brightness, 0.0, 1.0)?;
    LutError::check_range("temperature", kelvin, MIN_KELVIN, MAX_KELVIN)?;

    let [r_mult, g_mult, b_mult] = temperature::multipliers(kelvin);

    let mut bytes = Vec::with_capacity(LUT1D_SIZE * ENTRY_BYTES);
    for x in 0..LUT1D_SIZE {
        let unit = x as f64 / (LUT1D_SIZE - 1) as f64 * brightness;
        let entry = Entry {
            r: quantize(unit * r_mult),
            g: quantize(unit * g_mult),
            b: quantize(unit * b_mult),
        };
        bytes.extend_from_slice(&entry.to_bytes());
    }
    Ok(bytes)
}

/// Encodes the shaper table and writes it to `path` atomically.
///
/// Validation happens before any I/O: an invalid parameter leaves the file
/// untouched, and a failed write never leaves a partial table behind.
pub fn generate_lut1d<P: AsRef<Path>>(path: P, brightness: f64, kelvin: f64) -> LutResult<()> {
    let bytes = encode_lut1d(brightness, kelvin)?;
    write_atomic(path.as_ref(), &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temperature::NEUTRAL_KELVIN;
    use tempfile::tempdir;

    fn entries(bytes: &[u8]) -> Vec<Entry> {
        bytes
            .chunks_exact(ENTRY_BYTES)
            .map(|chunk| Entry::from_bytes(chunk.try_into().unwrap()))
            .collect()
    }

    #[test]
    fn test_record_count_and_length() {
        let bytes = encode_lut1d(1.0, NEUTRAL_KELVIN).unwrap();
        assert_eq!(bytes.len(), LUT1D_SIZE * ENTRY_BYTES);
        assert_eq!(bytes.len(), 32768);
    }

    #[test]
    fn test_zero_brightness_is_all_black() {
        let bytes = encode_lut1d(0.0, NEUTRAL_KELVIN).unwrap();
        for entry in entries(&bytes) {
            assert_eq!(entry, Entry { r: 0, g: 0, b: 0 });
        }
    }

    #[test]
    fn test_full_brightness_neutral_is_strictly_increasing() {
        let bytes = encode_lut1d(1.0, NEUTRAL_KELVIN).unwrap();
        let entries = entries(&bytes);

        for pair in entries.windows(2) {
            assert!(pair[1].r > pair[0].r);
            assert!(pair[1].g > pair[0].g);
            assert!(pair[1].b > pair[0].b);
        }

        let last = entries.last().unwrap();
        assert!(last.r >= 65534 && last.g >= 65534 && last.b >= 65534);
    }

    #[test]
    fn test_warm_white_point_scales_channels() {
        let bytes = encode_lut1d(1.0, 2700.0).unwrap();
        let last = *entries(&bytes).last().unwrap();

        // Red is the brightest channel at a warm white point.
        assert_eq!(last.r, 65535);
        assert!(last.g < last.r);
        assert!(last.b < last.g);

        // Monotonicity holds for attenuated channels too.
        for pair in entries(&bytes).windows(2).map(|w| [w[0], w[1]]) {
            assert!(pair[1].g >= pair[0].g);
            assert!(pair[1].b >= pair[0].b);
        }
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(matches!(
            encode_lut1d(1.5, NEUTRAL_KELVIN),
            Err(LutError::InvalidParameter {
                param: "brightness",
                ..
            })
        ));
        assert!(matches!(
            encode_lut1d(-0.1, NEUTRAL_KELVIN),
            Err(LutError::InvalidParameter {
                param: "brightness",
                ..
            })
        ));
        assert!(matches!(
            encode_lut1d(0.5, 20000.0),
            Err(LutError::InvalidParameter {
                param: "temperature",
                ..
            })
        ));
        assert!(matches!(
            encode_lut1d(0.5, 500.0),
            Err(LutError::InvalidParameter {
                param: "temperature",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_parameters_write_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dim.lut1d");

        generate_lut1d(&path, 1.5, NEUTRAL_KELVIN).unwrap_err();
        assert!(!path.exists());

        generate_lut1d(&path, 0.5, NEUTRAL_KELVIN).unwrap();
        let before = std::fs::read(&path).unwrap();

        generate_lut1d(&path, 0.5, 20000.0).unwrap_err();
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_generate_writes_encoded_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dim.lut1d");

        generate_lut1d(&path, 0.75, 5000.0).unwrap();
        assert_eq!(
            std::fs::read(&path).unwrap(),
            encode_lut1d(0.75, 5000.0).unwrap()
        );
    }
}
