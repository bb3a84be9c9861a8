use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::errors::Result;

/// Enumerate every regular file reachable from `root`, recursively.
///
/// Symlinks are followed, so a symlink to a directory is descended into and
/// a symlink to anything else is reported as a file, the same outcome as a
/// plain `stat`-based check. A symlink loop surfaces as a filesystem error
/// instead of unbounded traversal. The whole tree is materialized before the
/// caller reads any file; ordering is the filesystem's directory order and
/// carries no contractual meaning.
pub fn enumerate_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        files.push(entry.path().to_path_buf());
    }

    debug!("Enumerated {} files under {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BackupError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_enumerate_nested_tree() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();

        fs::create_dir_all(base.join("dir1/subdir1")).unwrap();
        fs::create_dir_all(base.join("dir2")).unwrap();
        fs::write(base.join("file1.txt"), b"one").unwrap();
        fs::write(base.join("dir1/file2.txt"), b"two").unwrap();
        fs::write(base.join("dir1/subdir1/file3.txt"), b"three").unwrap();
        fs::write(base.join("dir2/file4.log"), b"four").unwrap();

        let mut files = enumerate_files(base).unwrap();
        files.sort();

        let mut expected = vec![
            base.join("file1.txt"),
            base.join("dir1/file2.txt"),
            base.join("dir1/subdir1/file3.txt"),
            base.join("dir2/file4.log"),
        ];
        expected.sort();

        assert_eq!(files, expected);
    }

    #[test]
    fn test_enumerate_returns_no_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();

        fs::create_dir_all(base.join("only/dirs/here")).unwrap();
        fs::write(base.join("only/dirs/here/leaf.txt"), b"leaf").unwrap();

        let files = enumerate_files(base).unwrap();
        assert_eq!(files, vec![base.join("only/dirs/here/leaf.txt")]);
    }

    #[test]
    fn test_enumerate_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files = enumerate_files(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_enumerate_missing_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = enumerate_files(&missing).unwrap_err();
        assert!(
            matches!(err, BackupError::Filesystem { .. }),
            "got: {:?}",
            err
        );
    }

    #[test]
    fn test_enumerate_has_no_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();

        fs::create_dir_all(base.join("a/b")).unwrap();
        for i in 0..10 {
            fs::write(base.join(format!("a/b/file{}.txt", i)), b"x").unwrap();
        }

        let files = enumerate_files(base).unwrap();
        let unique: std::collections::HashSet<_> = files.iter().collect();
        assert_eq!(unique.len(), files.len());
        assert_eq!(files.len(), 10);
    }

    #[cfg(unix)]
    #[test]
    fn test_enumerate_follows_symlinked_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();

        fs::create_dir_all(base.join("real")).unwrap();
        fs::write(base.join("real/inner.txt"), b"inner").unwrap();
        fs::create_dir_all(base.join("tree")).unwrap();
        std::os::unix::fs::symlink(base.join("real"), base.join("tree/link")).unwrap();

        let files = enumerate_files(&base.join("tree")).unwrap();
        assert_eq!(files, vec![base.join("tree/link/inner.txt")]);
    }
}
