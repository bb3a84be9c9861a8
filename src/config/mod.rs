// Re-export all items from the submodules
mod backup_config;

pub use backup_config::{
    default_config_path, load_or_init_config, BackupConfig, LoadOutcome, MinioConfig,
};
