//! Standalone table generation commands.

use anyhow::{Context, Result};

use crate::{GenerateLut1dArgs, GenerateLut3dArgs};

pub fn run_lut1d(args: GenerateLut1dArgs) -> Result<()> {
    scopedim_lut::generate_lut1d(&args.output, args.brightness, args.temperature)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!(
        "Wrote {} ({} records)",
        args.output.display(),
        scopedim_lut::LUT1D_SIZE
    );
    Ok(())
}

pub fn run_lut3d(args: GenerateLut3dArgs) -> Result<()> {
    scopedim_lut::generate_lut3d(&args.output, args.brightness)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!(
        "Wrote {} ({} records)",
        args.output.display(),
        scopedim_lut::LUT3D_SIZE.pow(3)
    );
    Ok(())
}
