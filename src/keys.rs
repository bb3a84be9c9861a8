use std::fmt;
use std::path::Path;

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Time-partition prefix for one backup run:
/// `<year>/<month-name>/<day>/<hour>/<minute>/`.
///
/// Month names are chrono's fixed English names and the hour is on a
/// 12-hour clock without a leading zero, e.g. 2024-03-05T14:07 maps to
/// `2024/March/5/2/7/`. Every segment derives from the single `now`
/// snapshot the caller took, so the prefix cannot straddle a date or
/// minute boundary mid-computation.
pub fn partition_prefix<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let (_, hour12) = now.hour12();
    format!(
        "{}/{}/{}/{}/{}/",
        now.year(),
        now.format("%B"),
        now.day(),
        hour12,
        now.minute()
    )
}

/// Full destination key: partition prefix plus the archive's base filename.
pub fn destination_key(prefix: &str, archive_path: &Path) -> String {
    let basename = archive_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    format!("{}{}", prefix, basename)
}
