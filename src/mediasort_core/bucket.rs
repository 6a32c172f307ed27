use crate::mediasort_core::error::{MediasortError, Result};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

/// Month directory names, indexed by `month - 1`.
const MONTH_BUCKETS: [&str; 12] = [
    "01-January",
    "02-February",
    "03-March",
    "04-April",
    "05-May",
    "06-June",
    "07-July",
    "08-August",
    "09-September",
    "10-October",
    "11-November",
    "12-December",
];

/// Map a 1-based month number to its directory name, e.g. `1 -> "01-January"`.
pub fn month_bucket(month: u8) -> Result<&'static str> {
    match month {
        1..=12 => Ok(MONTH_BUCKETS[usize::from(month - 1)]),
        _ => Err(MediasortError::InvalidMonth(month)),
    }
}

/// Directory under `dest_root` that a file modified at `modified_at` belongs
/// in: `<dest_root>/<YYYY>/<MM>-<MonthName>`. Does not touch the filesystem.
pub fn bucket_for(dest_root: &Path, modified_at: OffsetDateTime) -> Result<PathBuf> {
    let month = month_bucket(u8::from(modified_at.month()))?;
    Ok(dest_root
        .join(format!("{:04}", modified_at.year()))
        .join(month))
}
