//! # scopedim-session
//!
//! Lifecycle orchestration for scopedim: owns the display list and the LUT
//! runtime directory, and sequences generation and property propagation.
//!
//! A session goes through three phases:
//!
//! 1. [`Session::activate`] - generate the 3-D cube once, at full
//!    brightness. Temperature changes never regenerate it; white-point
//!    correction is staged entirely in the 1-D shaper.
//! 2. [`Session::set_brightness`] - regenerate the shaper and republish the
//!    gamescope override properties on every display.
//! 3. [`Session::reset`] / [`Session::shutdown`] - remove the overrides.
//!
//! # Dependencies
//!
//! - [`scopedim_lut`] - Table generation
//! - [`scopedim_display`] - Property propagation seam
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Structured logging

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use scopedim_display::{PropertyError, PropertySink, PropertyValue};
use scopedim_lut::{LutError, generate_lut1d, generate_lut3d};

/// Property forcing gamescope to composite (required for LUT overrides to
/// take effect).
pub const COMPOSITE_FORCE: &str = "GAMESCOPE_COMPOSITE_FORCE";

/// Property carrying the 3-D cube file path.
pub const COLOR_3DLUT_OVERRIDE: &str = "GAMESCOPE_COLOR_3DLUT_OVERRIDE";

/// Property carrying the 1-D shaper file path.
pub const COLOR_SHAPERLUT_OVERRIDE: &str = "GAMESCOPE_COLOR_SHAPERLUT_OVERRIDE";

/// Cube file name inside the runtime directory.
pub const LUT3D_FILE: &str = "dim.lut3d";

/// Shaper file name inside the runtime directory.
pub const LUT1D_FILE: &str = "dim.lut1d";

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// LUT generation or its file write failed.
    #[error("LUT generation failed: {0}")]
    Lut(#[from] LutError),

    /// A property could not be published or removed.
    #[error("property propagation failed: {0}")]
    Property(#[from] PropertyError),

    /// The runtime directory could not be created.
    #[error("runtime directory error: {0}")]
    RuntimeDir(#[from] std::io::Error),
}

/// One activation of the color-appearance overrides.
///
/// Generic over the [`PropertySink`] so tests can substitute a recording
/// fake for the xprop transport.
pub struct Session<S> {
    sink: S,
    displays: Vec<String>,
    runtime_dir: PathBuf,
    adjusted: bool,
}

impl<S: PropertySink> Session<S> {
    /// Creates a session over the given displays; LUT files live under
    /// `runtime_dir`.
    pub fn new(sink: S, displays: Vec<String>, runtime_dir: PathBuf) -> Self {
        Self {
            sink,
            displays,
            runtime_dir,
            adjusted: false,
        }
    }

    /// The displays this session publishes to.
    pub fn displays(&self) -> &[String] {
        &self.displays
    }

    /// Path of the 3-D cube file.
    pub fn lut3d_path(&self) -> PathBuf {
        self.runtime_dir.join(LUT3D_FILE)
    }

    /// Path of the 1-D shaper file.
    pub fn lut1d_path(&self) -> PathBuf {
        self.runtime_dir.join(LUT1D_FILE)
    }

    /// Creates the runtime directory and generates the cube, once, at full
    /// brightness.
    pub fn activate(&self) -> SessionResult<()> {
        std::fs::create_dir_all(&self.runtime_dir)?;
        generate_lut3d(self.lut3d_path(), 1.0)?;
        info!(
            displays = self.displays.len(),
            dir = %self.runtime_dir.display(),
            "session activated"
        );
        Ok(())
    }

    /// Regenerates the shaper for the given brightness and white point and
    /// republishes the override properties on every display.
    pub fn set_brightness(&mut self, brightness: f64, kelvin: f64) -> SessionResult<()> {
        info!(brightness, kelvin, "applying adjustment");
        generate_lut1d(self.lut1d_path(), brightness, kelvin)?;

        let lut3d = path_argument(&self.lut3d_path());
        let lut1d = path_argument(&self.lut1d_path());
        for display in &self.displays {
            self.sink
                .set(display, COMPOSITE_FORCE, &PropertyValue::Bool(true))?;
            self.sink.set(
                display,
                COLOR_3DLUT_OVERRIDE,
                &PropertyValue::Str(lut3d.clone()),
            )?;
            self.sink.set(
                display,
                COLOR_SHAPERLUT_OVERRIDE,
                &PropertyValue::Str(lut1d.clone()),
            )?;
        }

        self.adjusted = true;
        Ok(())
    }

    /// Removes the override properties from every display.
    pub fn reset(&mut self) -> SessionResult<()> {
        info!("resetting");
        for display in &self.displays {
            self.sink.remove(display, COMPOSITE_FORCE)?;
            self.sink.remove(display, COLOR_SHAPERLUT_OVERRIDE)?;
            self.sink.remove(display, COLOR_3DLUT_OVERRIDE)?;
        }
        self.adjusted = false;
        Ok(())
    }

    /// Resets only if an adjustment was ever applied, so tearing down an
    /// untouched session does not disturb properties set by others.
    pub fn shutdown(&mut self) -> SessionResult<()> {
        if self.adjusted { self.reset() } else { Ok(()) }
    }
}

fn path_argument(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
