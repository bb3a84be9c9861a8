use chrono::Local;
use log::{debug, info};

use crate::archive::{build_archive, stage_archive};
use crate::cloud::s3::ObjectStore;
use crate::config::BackupConfig;
use crate::errors::Result;
use crate::keys::{destination_key, partition_prefix};
use crate::walker::enumerate_files;

/// Run the whole backup.
///
/// Each configured source goes through walk -> build -> stage -> upload
/// before the next one starts, all on one sequential task. The first
/// failure stops the run: sources uploaded before it stay uploaded, later
/// sources are never walked. With `skip_upload` the archives are still
/// built and staged but nothing leaves the machine.
pub async fn run_backup(config: &BackupConfig, skip_upload: bool) -> Result<()> {
    let store = if skip_upload {
        None
    } else {
        Some(ObjectStore::from_config(&config.minio)?)
    };

    // One snapshot per run so every partition segment agrees even when the
    // clock rolls over mid-run.
    let prefix = partition_prefix(&Local::now());
    debug!("Destination prefix: {}", prefix);

    for source in &config.files {
        info!("Backing up {}", source.display());

        let entries = enumerate_files(source)?;
        let archive = build_archive(source, &entries)?;
        let staged = stage_archive(source, &archive)?;

        match &store {
            Some(store) => {
                let key = destination_key(&prefix, &staged);
                store.put_object(&key, &staged).await?;
            }
            None => info!("Upload skipped for {}", staged.display()),
        }
    }

    info!("Backup done");
    Ok(())
}
