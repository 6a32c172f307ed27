use crate::mediasort_core::error::MediasortError;
use std::str::FromStr;
use time::OffsetDateTime;

/// Minimum age a file must reach before it is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeThreshold {
    /// Only files at least this many whole days old pass.
    Days(u64),
    /// Every file passes.
    Unlimited,
}

impl Default for AgeThreshold {
    fn default() -> Self {
        AgeThreshold::Days(90)
    }
}

impl FromStr for AgeThreshold {
    type Err = MediasortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(AgeThreshold::Unlimited);
        }
        s.parse::<u64>()
            .map(AgeThreshold::Days)
            .map_err(|_| MediasortError::InvalidDays(s.to_string()))
    }
}

impl std::fmt::Display for AgeThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeThreshold::Days(days) => write!(f, "{}", days),
            AgeThreshold::Unlimited => write!(f, "all"),
        }
    }
}

/// Age of a file in whole days. A modification time in the future counts as
/// age zero.
pub fn age_in_days(modified_at: OffsetDateTime, now: OffsetDateTime) -> u64 {
    let delta = now - modified_at;
    if delta.is_negative() {
        0
    } else {
        delta.whole_days() as u64
    }
}

/// Decide whether a file modified at `modified_at` is old enough to copy.
/// The bound is inclusive: a file exactly `days` days old passes.
pub fn passes_filter(
    modified_at: OffsetDateTime,
    now: OffsetDateTime,
    threshold: AgeThreshold,
) -> bool {
    match threshold {
        AgeThreshold::Unlimited => true,
        AgeThreshold::Days(days) => age_in_days(modified_at, now) >= days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;
    use time::macros::datetime;

    #[test]
    fn test_parse_threshold() {
        assert_eq!("90".parse::<AgeThreshold>().unwrap(), AgeThreshold::Days(90));
        assert_eq!("0".parse::<AgeThreshold>().unwrap(), AgeThreshold::Days(0));
        assert_eq!("all".parse::<AgeThreshold>().unwrap(), AgeThreshold::Unlimited);
        assert_eq!("ALL".parse::<AgeThreshold>().unwrap(), AgeThreshold::Unlimited);
        assert_eq!("All".parse::<AgeThreshold>().unwrap(), AgeThreshold::Unlimited);
    }

    #[test]
    fn test_parse_threshold_rejects_bad_input() {
        assert!("-1".parse::<AgeThreshold>().is_err());
        assert!("ninety".parse::<AgeThreshold>().is_err());
        assert!("1.5".parse::<AgeThreshold>().is_err());
        assert!("".parse::<AgeThreshold>().is_err());

        let err = "-5".parse::<AgeThreshold>().unwrap_err();
        assert!(err.to_string().contains("non-negative integer or 'all'"));
    }

    #[test]
    fn test_threshold_display() {
        assert_eq!(AgeThreshold::Days(30).to_string(), "30");
        assert_eq!(AgeThreshold::Unlimited.to_string(), "all");
        assert_eq!(AgeThreshold::default(), AgeThreshold::Days(90));
    }

    #[test]
    fn test_age_boundary_is_inclusive() {
        let now = datetime!(2024-06-01 00:00 UTC);

        // exactly 90 days earlier
        let ninety = datetime!(2024-03-03 00:00 UTC);
        assert_eq!(age_in_days(ninety, now), 90);
        assert!(passes_filter(ninety, now, AgeThreshold::Days(90)));

        // one day later, 89 days old
        let eighty_nine = datetime!(2024-03-04 00:00 UTC);
        assert_eq!(age_in_days(eighty_nine, now), 89);
        assert!(!passes_filter(eighty_nine, now, AgeThreshold::Days(90)));
    }

    #[test]
    fn test_partial_days_are_truncated() {
        let now = datetime!(2024-06-01 12:00 UTC);
        let almost_two_days = now - Duration::hours(47);
        assert_eq!(age_in_days(almost_two_days, now), 1);
        assert!(!passes_filter(almost_two_days, now, AgeThreshold::Days(2)));
    }

    #[test]
    fn test_future_timestamp_counts_as_age_zero() {
        let now = datetime!(2024-06-01 00:00 UTC);
        let future = datetime!(2025-01-01 00:00 UTC);
        assert_eq!(age_in_days(future, now), 0);
        assert!(passes_filter(future, now, AgeThreshold::Days(0)));
        assert!(!passes_filter(future, now, AgeThreshold::Days(1)));
    }

    #[test]
    fn test_unlimited_passes_everything() {
        let now = datetime!(2024-06-01 00:00 UTC);
        let seconds_ago = now - Duration::seconds(3);
        assert!(passes_filter(seconds_ago, now, AgeThreshold::Unlimited));
        assert!(!passes_filter(seconds_ago, now, AgeThreshold::Days(1)));
        assert!(passes_filter(datetime!(2030-01-01 00:00 UTC), now, AgeThreshold::Unlimited));
    }

    #[test]
    fn test_age_across_offsets() {
        // one hour earlier, though already June 1st in +09:00
        let now = datetime!(2024-06-01 00:00 UTC);
        let modified = datetime!(2024-06-01 08:00 +09:00);
        assert_eq!(age_in_days(modified, now), 0);
    }
}
