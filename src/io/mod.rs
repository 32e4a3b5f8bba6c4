use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::Result;

/// Writes `eds` as a single line to `path`.
///
/// The content goes to a temporary file next to the destination first and
/// is renamed over it once fully written, so an interrupted run never leaves
/// a truncated EDS behind.
pub fn write_eds<P: AsRef<Path>>(path: P, eds: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(eds.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;
    debug!("persisting {} bytes to {}", eds.len() + 1, path.display());
    file.persist(path)?;
    Ok(())
}
