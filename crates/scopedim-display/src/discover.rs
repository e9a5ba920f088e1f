//! Steam display discovery.
//!
//! Gamescope sessions are located by scanning the proc filesystem for
//! processes whose executable name ends with `steam` and collecting the
//! `DISPLAY` values from their environments.

use std::path::Path;

use tracing::debug;

/// Returns the X displays of running steam processes, in first-seen order
/// with duplicates removed.
///
/// Processes that vanish mid-scan or whose entries cannot be read are
/// skipped silently; the scan itself never fails. An empty result means no
/// steam session was found.
pub fn steam_displays() -> Vec<String> {
    displays_from_proc(Path::new("/proc"))
}

/// [`steam_displays`] against an arbitrary proc root.
pub fn displays_from_proc(proc_root: &Path) -> Vec<String> {
    let mut displays = Vec::new();
    let Ok(entries) = std::fs::read_dir(proc_root) else {
        return displays;
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(pid) = name.to_str() else { continue };
        if pid.is_empty() || !pid.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }

        // The tracing macros shadow an identifier named `display` in value
        // position (`tracing::field::display`), so the local gets a
        // different name.
        for disp in steam_process_displays(&entry.path()) {
            if !displays.contains(&disp) {
                debug!(pid, display = %disp, "found steam display");
                displays.push(disp);
            }
        }
    }

    displays
}

/// Reads the `DISPLAY` values of one process, or nothing if it is not a
/// steam process.
fn steam_process_displays(proc_dir: &Path) -> Vec<String> {
    let Ok(cmdline) = std::fs::read(proc_dir.join("cmdline")) else {
        return Vec::new();
    };
    let argv0 = cmdline.split(|&b| b == 0).next().unwrap_or(&[]);
    if !argv0.ends_with(b"steam") {
        return Vec::new();
    }

    let Ok(environ) = std::fs::read(proc_dir.join("environ")) else {
        return Vec::new();
    };
    environ
        .split(|&b| b == 0)
        .filter_map(|line| line.strip_prefix(b"DISPLAY="))
        .filter_map(|value| std::str::from_utf8(value).ok())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fake_process(root: &Path, pid: &str, cmdline: &[u8], environ: &[u8]) {
        let dir = root.join(pid);
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("cmdline"), cmdline).unwrap();
        std::fs::write(dir.join("environ"), environ).unwrap();
    }

    #[test]
    fn test_finds_steam_display() {
        let root = tempdir().unwrap();
        fake_process(
            root.path(),
            "100",
            b"/usr/bin/steam\0-silent\0",
            b"HOME=/home/deck\0DISPLAY=:1\0LANG=C\0",
        );

        assert_eq!(displays_from_proc(root.path()), vec![":1"]);
    }

    #[test]
    fn test_ignores_other_processes() {
        let root = tempdir().unwrap();
        fake_process(root.path(), "100", b"/usr/bin/bash\0", b"DISPLAY=:0\0");
        // Executable name must end with "steam": a steamwebhelper does not.
        fake_process(
            root.path(),
            "101",
            b"/usr/bin/steamwebhelper\0",
            b"DISPLAY=:2\0",
        );

        assert!(displays_from_proc(root.path()).is_empty());
    }

    #[test]
    fn test_ignores_non_pid_entries() {
        let root = tempdir().unwrap();
        fake_process(root.path(), "self", b"/usr/bin/steam\0", b"DISPLAY=:1\0");

        assert!(displays_from_proc(root.path()).is_empty());
    }

    #[test]
    fn test_deduplicates_across_processes() {
        let root = tempdir().unwrap();
        fake_process(root.path(), "100", b"/usr/bin/steam\0", b"DISPLAY=:1\0");
        fake_process(root.path(), "200", b"/usr/bin/steam\0", b"DISPLAY=:1\0");
        fake_process(root.path(), "300", b"/usr/bin/steam\0", b"DISPLAY=:2\0");

        let mut found = displays_from_proc(root.path());
        found.sort();
        assert_eq!(found, vec![":1", ":2"]);
    }

    #[test]
    fn test_skips_unreadable_process() {
        let root = tempdir().unwrap();
        // cmdline present, environ missing: process vanished mid-scan.
        let dir = root.path().join("100");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("cmdline"), b"/usr/bin/steam\0").unwrap();

        assert!(displays_from_proc(root.path()).is_empty());
    }

    #[test]
    fn test_missing_proc_root_is_empty() {
        assert!(displays_from_proc(Path::new("/nonexistent/proc")).is_empty());
    }
}
