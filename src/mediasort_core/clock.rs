use std::time::SystemTime;
use time::{OffsetDateTime, UtcOffset};

/// Get the current local time, falling back to UTC if local time cannot be determined.
pub fn get_current_time() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| {
        log::error!("Failed to get local time, using UTC instead.");
        OffsetDateTime::now_utc()
    })
}

/// Convert a filesystem timestamp to a date in the given offset.
pub fn to_offset_date(timestamp: SystemTime, offset: UtcOffset) -> OffsetDateTime {
    OffsetDateTime::from(timestamp).to_offset(offset)
}
