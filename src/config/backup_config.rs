use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE_NAME;
use crate::errors::{BackupError, Result};

/// Object-storage connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinioConfig {
    /// Hostname of the S3-compatible endpoint.
    pub endpoint: String,
    /// Retained for config-file compatibility; uploads always use TLS on 443.
    pub port: u16,
    #[serde(rename = "accessKey")]
    pub access_key: String,
    #[serde(rename = "securityKey")]
    pub security_key: String,
    pub bucket: String,
}

/// The full backup configuration, read once at startup and passed by
/// reference into every component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    pub minio: MinioConfig,
    /// Ordered list of absolute directory roots to back up.
    pub files: Vec<PathBuf>,
}

/// Outcome of resolving configuration at startup.
#[derive(Debug)]
pub enum LoadOutcome {
    /// A fresh template was written; the operator has to edit it first.
    TemplateCreated(PathBuf),
    /// A complete configuration is ready to run with.
    Ready(BackupConfig),
}

impl Default for BackupConfig {
    fn default() -> Self {
        BackupConfig {
            minio: MinioConfig {
                endpoint: "localhost".to_string(),
                port: 9000,
                access_key: "minio".to_string(),
                security_key: "minio123".to_string(),
                bucket: "backups".to_string(),
            },
            files: vec![PathBuf::from("/home/user")],
        }
    }
}

impl BackupConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BackupError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config: BackupConfig = serde_json::from_str(&content).map_err(|e| {
            BackupError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a pretty-printed JSON file.
    pub fn save_to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BackupError::Config(format!("failed to serialize config: {}", e)))?;

        fs::write(path, json).map_err(|e| {
            BackupError::Config(format!("failed to write {}: {}", path.display(), e))
        })?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Check that every required field is usable.
    ///
    /// Besides non-empty connection fields, source roots must have pairwise
    /// distinct basenames: staged archives are named `<basename>.zip` in the
    /// shared temp directory, so a duplicate would silently overwrite the
    /// earlier source's archive.
    pub fn validate(&self) -> Result<()> {
        for (value, field) in [
            (&self.minio.endpoint, "minio.endpoint"),
            (&self.minio.access_key, "minio.accessKey"),
            (&self.minio.security_key, "minio.securityKey"),
            (&self.minio.bucket, "minio.bucket"),
        ] {
            if value.trim().is_empty() {
                return Err(BackupError::Config(format!("{} must not be empty", field)));
            }
        }

        let mut seen = HashSet::new();
        for root in &self.files {
            let basename = root.file_name().ok_or_else(|| {
                BackupError::Config(format!(
                    "source {} has no usable basename",
                    root.display()
                ))
            })?;

            if !seen.insert(basename.to_os_string()) {
                return Err(BackupError::Config(format!(
                    "duplicate source basename {:?}: staged archives would overwrite each other",
                    basename
                )));
            }
        }

        Ok(())
    }
}

/// Per-user default config location (`~/.backup.json`).
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE_NAME)
}

/// Resolve configuration at startup.
///
/// When no file exists at `path` (or the default per-user location), a
/// default template is written and [`LoadOutcome::TemplateCreated`] returned
/// so the caller can instruct the operator and exit. Otherwise the file is
/// loaded and validated.
pub fn load_or_init_config(path: Option<&Path>) -> Result<LoadOutcome> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    if !path.exists() {
        BackupConfig::default().save_to_json_file(&path)?;
        return Ok(LoadOutcome::TemplateCreated(path));
    }

    let config = BackupConfig::from_json_file(&path)?;
    config.validate()?;
    Ok(LoadOutcome::Ready(config))
}
