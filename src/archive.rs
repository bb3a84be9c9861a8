use std::env;
use std::fs;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

use crate::constants::{COMPRESSED_EXTENSIONS, DEFAULT_COMPRESSION_LEVEL, FAST_COMPRESSION_LEVEL};
use crate::errors::{BackupError, Result};

/// Pick zip options for one file: already-compressed formats get the
/// cheapest deflate level, everything else the default.
fn compression_options(path: &Path) -> FileOptions {
    let already_compressed = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => COMPRESSED_EXTENSIONS.contains(&ext),
        None => false,
    };

    let level = if already_compressed {
        FAST_COMPRESSION_LEVEL
    } else {
        DEFAULT_COMPRESSION_LEVEL
    };

    FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(level))
        .unix_permissions(0o644)
}

/// Entry name inside the archive: the path relative to `root`, with forward
/// slashes regardless of platform. Fails when `path` is not under `root`.
fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        BackupError::filesystem(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "entry is outside the source root"),
        )
    })?;

    let name = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    if name.is_empty() {
        return Err(BackupError::filesystem(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "entry equals the source root"),
        ));
    }

    Ok(name)
}

fn zip_error(path: &Path, err: zip::result::ZipError) -> BackupError {
    BackupError::filesystem(path, io::Error::new(io::ErrorKind::Other, err))
}

/// Build one in-memory zip archive for a source root.
///
/// Every entry is read fully into memory and keyed by its root-relative
/// path. A file that disappears or becomes unreadable between enumeration
/// and read fails the whole build; no partial archive is salvaged.
pub fn build_archive(root: &Path, entries: &[PathBuf]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    for path in entries {
        let name = entry_name(root, path)?;
        let data = fs::read(path).map_err(|e| BackupError::filesystem(path, e))?;

        debug!("Archiving {}", name);

        zip.start_file(name, compression_options(path))
            .map_err(|e| zip_error(path, e))?;
        zip.write_all(&data)
            .map_err(|e| BackupError::filesystem(path, e))?;
    }

    let cursor = zip.finish().map_err(|e| zip_error(root, e))?;
    Ok(cursor.into_inner())
}

/// Write finished archive bytes to `<system-temp>/<basename(root)>.zip`.
///
/// Staged archives are not cleaned up after upload; config validation
/// guarantees the basename is unique among configured sources.
pub fn stage_archive(root: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let basename = root.file_name().ok_or_else(|| {
        BackupError::filesystem(
            root,
            io::Error::new(io::ErrorKind::InvalidInput, "source root has no basename"),
        )
    })?;

    let zip_path = env::temp_dir().join(format!("{}.zip", basename.to_string_lossy()));
    fs::write(&zip_path, bytes).map_err(|e| BackupError::filesystem(&zip_path, e))?;

    info!(
        "Staged archive for {} at {}",
        root.display(),
        zip_path.display()
    );
    Ok(zip_path)
}
