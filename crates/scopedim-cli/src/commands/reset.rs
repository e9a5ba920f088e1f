//! Reset command: remove the overrides.

use anyhow::{Context, Result};
use tracing::info;

use scopedim_display::XpropSink;
use scopedim_session::Session;

use crate::ResetArgs;
use crate::config::{Config, resolve_runtime_dir};

pub fn run(args: ResetArgs) -> Result<()> {
    let config = Config::load()?;
    let displays = super::resolve_displays(args.display, &config)?;
    let runtime_dir = resolve_runtime_dir(None, &config);

    let mut session = Session::new(XpropSink, displays, runtime_dir);
    session.reset().context("removing overrides")?;

    info!("overrides removed");
    Ok(())
}
