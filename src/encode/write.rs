use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write as _},
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::encode::format::{EncodedImage, OutputFormat};
use crate::foundation::error::{StitchError, StitchResult};

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> StitchResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            StitchError::write(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Write encoded bytes to `path`.
///
/// With `overwrite == false` an existing file is left untouched and the call fails.
pub fn write_encoded(path: &Path, encoded: &EncodedImage, overwrite: bool) -> StitchResult<()> {
    ensure_parent_dir(path)?;

    let mut opts = OpenOptions::new();
    opts.write(true);
    if overwrite {
        opts.create(true).truncate(true);
    } else {
        // Fails atomically if something already sits at `path`.
        opts.create_new(true);
    }
    let mut file = opts.open(path).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            StitchError::write(format!("output file '{}' already exists", path.display()))
        } else {
            StitchError::write(format!("failed to open '{}': {e}", path.display()))
        }
    })?;
    file.write_all(&encoded.bytes)
        .and_then(|()| file.flush())
        .map_err(|e| StitchError::write(format!("failed to write '{}': {e}", path.display())))?;

    tracing::info!(
        path = %path.display(),
        format = %encoded.format,
        bytes = encoded.bytes.len(),
        "wrote stitched image"
    );
    Ok(())
}

/// Default file name for a stitched image: `stitched_<unix-seconds>.<ext>`.
pub fn default_output_name(format: OutputFormat) -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("stitched_{secs}.{}", format.extension()))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/write.rs"]
mod tests;
