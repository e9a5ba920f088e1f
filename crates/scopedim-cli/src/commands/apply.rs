//! Apply command: generate tables and publish the overrides.

use anyhow::{Context, Result};
use tracing::info;

use scopedim_display::XpropSink;
use scopedim_lut::temperature::NEUTRAL_KELVIN;
use scopedim_session::Session;

use crate::ApplyArgs;
use crate::config::{Config, resolve_runtime_dir};

pub fn run(args: ApplyArgs) -> Result<()> {
    let config = Config::load()?;

    let brightness = args.brightness.or(config.brightness).unwrap_or(1.0);
    let kelvin = args
        .temperature
        .or(config.temperature)
        .unwrap_or(NEUTRAL_KELVIN);
    let runtime_dir = resolve_runtime_dir(args.runtime_dir, &config);
    let displays = super::resolve_displays(args.display, &config)?;

    let mut session = Session::new(XpropSink, displays, runtime_dir);
    session.activate().context("activating session")?;
    session
        .set_brightness(brightness, kelvin)
        .context("applying adjustment")?;

    info!(brightness, kelvin, "overrides applied");
    Ok(())
}
