//! Command implementations.

pub mod apply;
pub mod displays;
pub mod generate;
pub mod reset;

use anyhow::{Result, bail};

use crate::config::Config;

/// Picks the target displays: explicit flags, then the defaults file, then
/// auto-detection from running steam processes.
fn resolve_displays(flags: Vec<String>, config: &Config) -> Result<Vec<String>> {
    let displays = if !flags.is_empty() {
        flags
    } else if let Some(configured) = &config.displays {
        configured.clone()
    } else {
        scopedim_display::steam_displays()
    };

    if displays.is_empty() {
        bail!("no steam displays found; pass --display to target one explicitly");
    }
    Ok(displays)
}
