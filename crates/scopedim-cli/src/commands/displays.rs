//! Displays command: list detected steam displays.

use anyhow::Result;

pub fn run() -> Result<()> {
    let displays = scopedim_display::steam_displays();
    if displays.is_empty() {
        println!("No steam displays found.");
    } else {
        for display in displays {
            println!("{display}");
        }
    }
    Ok(())
}
