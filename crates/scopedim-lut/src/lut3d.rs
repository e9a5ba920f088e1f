//! 3-D color cube generation.
//!
//! The cube samples a full RGB -> RGB transform on a 17x17x17 grid that
//! gamescope interpolates at render time. Iteration order is part of the
//! wire format: blue varies slowest, then green, then red.
//!
//! The cube is brightness-only. White-point correction is staged entirely
//! in the cheaper 1-D shaper, so temperature changes never touch the cube
//! (see the session crate, which generates it once at activation).

use std::path::Path;

use crate::format::{ENTRY_BYTES, Entry, LUT3D_SIZE, quantize};
use crate::write::write_atomic;
use crate::{LutError, LutResult};

/// Encodes the 17^3-entry cube for the given brightness.
///
/// Grid axis `i` maps to `i / 16 * brightness`; entries are emitted with
/// blue outermost and red innermost (fastest-varying).
///
/// Fails with [`LutError::InvalidParameter`] if `brightness` is outside
/// `0.0..=1.0`.
pub fn encode_lut3d(brightness: f64) -> LutResult<Vec<u8>> {
    LutError::check_range("brightness", brightness, 0.0, 1.0)?;

    let axis = |i: usize| i as f64 / (LUT3D_SIZE - 1) as f64 * brightness;

    let mut bytes = Vec::with_capacity(LUT3D_SIZE.pow(3) * ENTRY_BYTES);
    for b in 0..LUT3D_SIZE {
        for g in 0..LUT3D_SIZE {
            for r in 0..LUT3D_SIZE {
                let entry = Entry {
                    r: quantize(axis(r)),
                    g: quantize(axis(g)),
                    b: quantize(axis(b)),
                };
                bytes.extend_from_slice(&entry.to_bytes());
            }
        }
    }
    Ok(bytes)
}

/// Encodes the cube and writes it to `path` atomically.
pub fn generate_lut3d<P: AsRef<Path>>(path: P, brightness: f64) -> LutResult<()> {
    let bytes = encode_lut3d(brightness)?;
    write_atomic(path.as_ref(), &bytes)
}
