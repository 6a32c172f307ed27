pub mod bucket;
pub mod cli;
pub mod clock;
pub mod copy;
pub mod discover;
pub mod error;
pub mod filter;
pub mod media;
pub mod organize;

pub use bucket::{bucket_for, month_bucket};
pub use cli::Cli;
pub use clock::get_current_time;
pub use copy::{resolve_target, safe_copy};
pub use discover::{CandidateFile, discover};
pub use error::MediasortError;
pub use filter::{AgeThreshold, passes_filter};
pub use media::{MediaKind, is_supported};
pub use organize::{OrganizeStats, Organizer};
