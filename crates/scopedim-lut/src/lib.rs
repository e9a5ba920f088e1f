//! # scopedim-lut
//!
//! Binary LUT generation for gamescope's color-correction pipeline.
//!
//! Gamescope accepts two override tables, both headerless sequences of
//! 8-byte records (four little-endian `u16` fields: R, G, B, pad):
//!
//! - a **1-D shaper** of 4096 entries — the per-channel curve that carries
//!   brightness attenuation and white-point (color temperature) correction
//! - a **3-D cube** of 17x17x17 entries — the full-gamut grid, generated at
//!   full brightness and left untouched by temperature changes
//!
//! # Usage
//!
//! ```rust
//! use scopedim_lut::{encode_lut1d, LUT1D_SIZE, ENTRY_BYTES};
//!
//! // Half brightness, warm white point
//! let bytes = encode_lut1d(0.5, 4500.0).unwrap();
//! assert_eq!(bytes.len(), LUT1D_SIZE * ENTRY_BYTES);
//! ```
//!
//! File-writing entry points ([`generate_lut1d`], [`generate_lut3d`])
//! validate their parameters before any I/O and write atomically, so a
//! concurrent reader never observes a partially written table.
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tempfile`] - Temp-file-then-rename writes
//!
//! # Used By
//!
//! - `scopedim-session` - Lifecycle orchestration
//! - `scopedim-cli` - Standalone table generation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod format;
mod lut1d;
mod lut3d;
pub mod temperature;
mod write;

pub use error::{LutError, LutResult};
pub use format::{Entry, ENTRY_BYTES, LUT1D_SIZE, LUT3D_SIZE, quantize};
pub use lut1d::{encode_lut1d, generate_lut1d};
pub use lut3d::{encode_lut3d, generate_lut3d};
