//! Atomic table writes.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{LutError, LutResult};

/// Writes `bytes` to `path` through a temporary file in the destination
/// directory plus a rename, so a concurrent reader never observes a
/// partially written table.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> LutResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| LutError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_overwrites_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.bin");

        write_atomic(&path, &[1, 2, 3]).unwrap();
        write_atomic(&path, &[4, 5]).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("table.bin");

        let err = write_atomic(&path, &[0]).unwrap_err();
        assert!(matches!(err, LutError::Io(_)));
    }
}
