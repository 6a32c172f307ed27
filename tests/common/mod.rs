use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use filetime::FileTime;
use time::{Duration, OffsetDateTime};

/// The binary under test, pinned to UTC so buckets don't depend on the host zone.
pub fn mediasort_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mediasort").unwrap();
    cmd.env("TZ", "UTC");
    cmd
}

/// Noon UTC, `days` days before today.
pub fn days_ago(days: i64) -> OffsetDateTime {
    let today_noon = OffsetDateTime::now_utc()
        .replace_time(time::macros::time!(12:00));
    today_noon - Duration::days(days)
}

/// Create a file with the given modification time.
pub fn media_file(dir: &TempDir, name: &str, modified_at: OffsetDateTime) -> ChildPath {
    let file = dir.child(name);
    file.write_str(name).unwrap();
    filetime::set_file_mtime(
        file.path(),
        FileTime::from_unix_time(modified_at.unix_timestamp(), 0),
    )
    .unwrap();
    file
}

/// Relative bucket directory for a date, e.g. `2023/11-November`.
pub fn bucket(date: OffsetDateTime) -> String {
    format!("{}/{:02}-{}", date.year(), u8::from(date.month()), date.month())
}
