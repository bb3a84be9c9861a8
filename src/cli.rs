use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the backup tool.
///
/// The tool normally runs without arguments: it loads the per-user
/// configuration file and backs up every configured source. The options here
/// cover config overrides, dry runs and template creation.
#[derive(Parser, Debug)]
#[clap(
    name = "minio-backup",
    about = "Backs up configured directory trees to an S3-compatible bucket"
)]
pub struct Args {
    /// Path to the JSON configuration file (default: ~/.backup.json)
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Build and stage archives without uploading them
    #[clap(long)]
    pub skip_upload: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration template and exit
    InitConfig {
        /// Destination path for the template (default: ~/.backup.json)
        #[clap(short, long)]
        path: Option<PathBuf>,
    },
}
