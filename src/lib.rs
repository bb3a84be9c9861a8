//! # minio-backup
//!
//! Backs up a configured set of local directory trees to an S3-compatible
//! object-storage bucket.
//!
//! ## Overview
//!
//! Each configured source directory is walked recursively, packaged into a
//! single zip archive whose entry names are relative to the source root,
//! staged in the system temporary directory and uploaded under a
//! time-partitioned key (`year/month-name/day/hour/minute/<basename>.zip`).
//! Sources are processed strictly in configured order; the first failure
//! stops the run, leaving already-uploaded sources in place.
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`config`]: JSON configuration loading, bootstrap and validation
//! - [`walker`]: Recursive enumeration of regular files under a source root
//! - [`archive`]: Zip archive construction and local staging
//! - [`keys`]: Time-partitioned destination key derivation
//! - [`cloud`]: Object storage upload
//! - [`coordinator`]: The end-to-end per-source backup pipeline
//! - [`errors`]: Failure taxonomy for the whole run
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// JSON configuration loading, bootstrap and validation
pub mod config;

/// Recursive enumeration of regular files under a source root
pub mod walker;

/// Zip archive construction and local staging
pub mod archive;

/// Time-partitioned destination key derivation
pub mod keys;

/// Object storage upload
pub mod cloud;

/// The end-to-end per-source backup pipeline
pub mod coordinator;

/// Failure taxonomy for the whole run
pub mod errors;

/// Application-wide constants
pub mod constants;
