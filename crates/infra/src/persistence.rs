// crates/infra/src/persistence.rs
use std::{
    fs,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use media_split_shared_kernel::{InfraResult, InfrastructureError};

/// Read a whole CSS unit into memory.
pub fn read_unit(path: &Path) -> InfraResult<String> {
    fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Atomically write `data` to `path` via a temp file and rename.
/// Best-effort fsync is attempted where available to reduce corruption on crash.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;

    // Unique temp name in the same directory so the rename stays atomic.
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

    let file = File::create(&tmp)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(data)?;
    writer.flush()?;
    let _ = writer.get_ref().sync_all();

    fs::rename(&tmp, path)?;

    // Attempt to sync parent directory to make the rename durable on Unix.
    #[cfg(unix)]
    {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

/// `atomic_write` with the workspace error type attached.
pub fn write_unit(path: &Path, data: &[u8]) -> InfraResult<()> {
    atomic_write(path, data).map_err(|source| InfrastructureError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
