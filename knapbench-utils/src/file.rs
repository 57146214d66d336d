use anyhow::{anyhow, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};
use tempfile::NamedTempFile;

/// Writes `path` all-or-nothing. `write_fn` fills a temporary file in the same directory,
/// which replaces `path` only if `write_fn` and the flush both succeed. On failure the
/// temporary file is removed and any existing file at `path` is left untouched.
pub fn write_atomic<F>(path: &Path, write_fn: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        write_fn(&mut writer)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .map_err(|e| anyhow!("Failed to persist {}: {}", path.display(), e.error))?;
    Ok(())
}

/// Reads `input` as a literal, or from disk when it names a file with `extension`.
pub fn read_inline_or_file(input: &str, extension: &str) -> Result<String> {
    if input.ends_with(extension) {
        fs::read_to_string(input).map_err(|e| anyhow!("Failed to read file {}: {}", input, e))
    } else {
        Ok(input.to_string())
    }
}
