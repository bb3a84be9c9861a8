//! Global constants for the minio-backup application.

/// Name of the per-user configuration file, placed in the home directory.
pub const CONFIG_FILE_NAME: &str = ".backup.json";

/// Deflate level for regular files.
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 6;

/// Deflate level for files that are already compressed.
pub const FAST_COMPRESSION_LEVEL: i32 = 1;

/// Extensions that compress poorly; stored with minimal effort.
pub const COMPRESSED_EXTENSIONS: &[&str] = &[
    "zip", "gz", "xz", "bz2", "7z", "rar", "jpg", "jpeg", "png", "gif", "mp3", "mp4", "avi", "mov",
    "mpg", "mpeg",
];
