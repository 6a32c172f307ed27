use crate::mediasort_core::clock::to_offset_date;
use crate::mediasort_core::error::{MediasortError, Result};
use crate::mediasort_core::media::{MediaKind, media_kind};
use std::fs;
use std::path::{Path, PathBuf};
use time::{OffsetDateTime, UtcOffset};
use walkdir::WalkDir;

/// A supported media file found under the source directory.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    /// Absolute path with symlinks resolved.
    pub path: PathBuf,
    pub kind: MediaKind,
    /// Last modification time, in the offset passed to [`discover`].
    pub modified_at: OffsetDateTime,
}

/// Lazily walk `source_dir` and yield every file with a supported extension.
///
/// Directory symlinks are not followed. A symlink to a regular file is
/// yielded with its target's path and modification time. Entries that
/// cannot be read (vanished, permission denied) come out as `Err` items so
/// the caller can skip them and keep going.
pub fn discover(
    source_dir: &Path,
    offset: UtcOffset,
) -> impl Iterator<Item = Result<CandidateFile>> {
    WalkDir::new(source_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(MediasortError::Walkdir(e))),
            };

            let file_type = entry.file_type();
            if !(file_type.is_file() || file_type.is_symlink()) {
                return None;
            }

            let kind = media_kind(entry.path())?;
            stat_candidate(entry.path(), kind, offset).transpose()
        })
}

/// Resolve and stat a discovered path. Returns `Ok(None)` for a symlink that
/// points at something other than a regular file.
fn stat_candidate(
    path: &Path,
    kind: MediaKind,
    offset: UtcOffset,
) -> Result<Option<CandidateFile>> {
    let metadata_error = |source: std::io::Error| MediasortError::Metadata {
        path: path.to_path_buf(),
        source,
    };

    let resolved = fs::canonicalize(path).map_err(metadata_error)?;
    let metadata = fs::metadata(&resolved).map_err(metadata_error)?;

    if !metadata.is_file() {
        log::debug!("Skipping non-file target {}", resolved.display());
        return Ok(None);
    }

    let modified = metadata.modified().map_err(metadata_error)?;

    Ok(Some(CandidateFile {
        path: resolved,
        kind,
        modified_at: to_offset_date(modified, offset),
    }))
}
