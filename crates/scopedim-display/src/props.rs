//! Root-window property propagation.
//!
//! Gamescope picks up its color-pipeline overrides from properties on the X
//! root window. [`PropertySink`] is the seam callers program against;
//! [`XpropSink`] is the production implementation, shelling out to the
//! `xprop` binary:
//!
//! ```text
//! xprop -root -d <display> -f <name> <format> -set <name> <value>
//! xprop -root -d <display> -remove <name>
//! ```

use std::process::Command;

use tracing::{debug, error};

use crate::{PropertyError, PropertyResult};

/// A typed root-window property value.
///
/// Each variant carries its own xprop format code and serialization, rather
/// than stringifying everything through one untyped call.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Flag, published as an 8-bit cardinal (`8c`), `1` or `0`.
    Bool(bool),
    /// Unsigned integer, published as a 32-bit cardinal (`32c`).
    Card(u32),
    /// UTF-8 string (`8u`); used for LUT file paths.
    Str(String),
    /// Float, published as its shortest round-trip decimal under `8u`
    /// (gamescope parses float-valued properties from UTF-8 strings).
    Float(f64),
}

impl PropertyValue {
    /// The xprop `-f` format code for this variant.
    pub fn format_code(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "8c",
            PropertyValue::Card(_) => "32c",
            PropertyValue::Str(_) | PropertyValue::Float(_) => "8u",
        }
    }

    /// The serialized `-set` argument for this variant.
    pub fn argument(&self) -> String {
        match self {
            PropertyValue::Bool(true) => "1".to_owned(),
            PropertyValue::Bool(false) => "0".to_owned(),
            PropertyValue::Card(v) => v.to_string(),
            PropertyValue::Str(s) => s.clone(),
            PropertyValue::Float(f) => f.to_string(),
        }
    }
}

/// Publishes named properties on the root window of a display.
pub trait PropertySink {
    /// Sets `name` to `value` on the root window of `display`.
    fn set(&self, display: &str, name: &str, value: &PropertyValue) -> PropertyResult<()>;

    /// Removes `name` from the root window of `display`.
    fn remove(&self, display: &str, name: &str) -> PropertyResult<()>;
}

/// [`PropertySink`] backed by the `xprop` binary.
pub struct XpropSink;

/// Argument vector for a set invocation.
fn set_args(display: &str, name: &str, value: &PropertyValue) -> Vec<String> {
    vec![
        "-root".to_owned(),
        "-d".to_owned(),
        display.to_owned(),
        "-f".to_owned(),
        name.to_owned(),
        value.format_code().to_owned(),
        "-set".to_owned(),
        name.to_owned(),
        value.argument(),
    ]
}

/// Argument vector for a remove invocation.
fn remove_args(display: &str, name: &str) -> Vec<String> {
    vec![
        "-root".to_owned(),
        "-d".to_owned(),
        display.to_owned(),
        "-remove".to_owned(),
        name.to_owned(),
    ]
}

impl XpropSink {
    fn run(&self, name: &str, args: Vec<String>) -> PropertyResult<()> {
        let status = Command::new("xprop")
            .args(&args)
            .status()
            .map_err(PropertyError::Spawn)?;
        if status.success() {
            Ok(())
        } else {
            error!(name, %status, "xprop failed");
            Err(PropertyError::CommandFailed {
                name: name.to_owned(),
                status,
            })
        }
    }
}

impl PropertySink for XpropSink {
    // Parameters are named `disp` here: the tracing macros shadow an
    // identifier named `display` in value position (`tracing::field::display`).
    fn set(&self, disp: &str, name: &str, value: &PropertyValue) -> PropertyResult<()> {
        debug!(display = disp, name, value = %value.argument(), "setting xprop");
        self.run(name, set_args(disp, name, value))
    }

    fn remove(&self, disp: &str, name: &str) -> PropertyResult<()> {
        debug!(display = disp, name, "removing xprop");
        self.run(name, remove_args(disp, name))
    }
}
