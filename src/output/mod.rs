use std::fs::Permissions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::data::StatsRecord;

/// Mode of a newly created stats file, world readable like a plain `open`.
#[cfg(unix)]
pub const OUTPUT_FILE_MODE: u32 = 0o644;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize stats")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write stats file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Pretty JSON with sorted keys and a trailing newline.
pub fn render(record: &StatsRecord) -> Result<String, serde_json::Error> {
    // `Value` objects are ordered maps, so going through one sorts the keys.
    let value = serde_json::to_value(record)?;
    let mut rendered = serde_json::to_string_pretty(&value)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Replaces `path` with the rendered record. The document is written to a
/// temporary file next to the target and renamed over it, so readers see
/// either the previous file or the complete new one.
pub fn persist(record: &StatsRecord, path: &Path) -> Result<(), PersistError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|source| PersistError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })?;

    let rendered = render(record)?;
    let write_err = |source: io::Error| PersistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(parent).map_err(write_err)?;
    file.write_all(rendered.as_bytes()).map_err(write_err)?;
    // Temp files are owner-only; the site has to be able to read the result.
    let permissions = std::fs::metadata(path)
        .map(|existing| existing.permissions())
        .ok()
        .or_else(fresh_file_permissions);
    if let Some(permissions) = permissions {
        file.as_file()
            .set_permissions(permissions)
            .map_err(write_err)?;
    }
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;

    debug!("wrote {} bytes to {}", rendered.len(), path.display());
    Ok(())
}

#[cfg(unix)]
fn fresh_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(OUTPUT_FILE_MODE))
}

#[cfg(not(unix))]
fn fresh_file_permissions() -> Option<Permissions> {
    None
}

/// `path` relative to the working directory when it lies beneath it.
pub fn display_path(path: &Path) -> PathBuf {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
}
