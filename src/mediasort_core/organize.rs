use crate::mediasort_core::bucket::bucket_for;
use crate::mediasort_core::clock::get_current_time;
use crate::mediasort_core::copy::{resolve_target_with, safe_copy};
use crate::mediasort_core::discover::{CandidateFile, discover};
use crate::mediasort_core::error::{CopyFailures, MediasortError, Result};
use crate::mediasort_core::filter::{AgeThreshold, age_in_days, passes_filter};
use crate::mediasort_core::media::MediaKind;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

/// Copies media from a source tree into `<dest>/<YYYY>/<MM>-<MonthName>/`.
#[derive(Debug)]
pub struct Organizer {
    source: PathBuf,
    destination: PathBuf,
    threshold: AgeThreshold,
    now: OffsetDateTime,
    dry_run: bool,
}

impl Organizer {
    /// Set up a run. Both directories must already exist. The current local
    /// time is captured here and used for every age comparison of the run.
    pub fn new(source: &Path, destination: &Path, threshold: AgeThreshold) -> Result<Self> {
        if !source.is_dir() {
            return Err(MediasortError::NotADirectory(source.to_path_buf()));
        }
        if !destination.is_dir() {
            return Err(MediasortError::NotADirectory(destination.to_path_buf()));
        }

        Ok(Organizer {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            threshold,
            now: get_current_time(),
            dry_run: false,
        })
    }

    /// Report planned copies without touching the destination.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Override the reference time. Buckets are computed in its offset.
    pub fn with_now(mut self, now: OffsetDateTime) -> Self {
        self.now = now;
        self
    }

    /// Walk the source tree and copy every old-enough media file into its
    /// bucket.
    ///
    /// Unreadable source entries are logged and skipped. Failures to create a
    /// bucket or copy a file are collected in [`OrganizeStats::failures`] and
    /// the run moves on to the next file. An out-of-range month aborts.
    pub fn run(&self) -> Result<OrganizeStats> {
        log::info!(
            "Organizing {} -> {} (days: {}, now: {})",
            self.source.display(),
            self.destination.display(),
            self.threshold,
            self.now
        );

        let mut stats = OrganizeStats::default();
        // names handed out during a dry run, so later files see them as taken
        let mut planned: HashSet<PathBuf> = HashSet::new();

        let spinner = ProgressBar::new_spinner().with_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} files {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Sorting media");

        for item in discover(&self.source, self.now.offset()) {
            spinner.inc(1);

            let candidate = match item {
                Ok(candidate) => candidate,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    stats.unreadable += 1;
                    continue;
                }
            };
            stats.discovered += 1;

            if !passes_filter(candidate.modified_at, self.now, self.threshold) {
                log::debug!(
                    "Skipping {} ({} days old)",
                    candidate.path.display(),
                    age_in_days(candidate.modified_at, self.now)
                );
                stats.too_recent += 1;
                continue;
            }

            let bucket = bucket_for(&self.destination, candidate.modified_at)?;

            if self.dry_run {
                let target = self.plan(&candidate, &bucket, &mut planned)?;
                spinner.suspend(|| {
                    println!("[DRY RUN] {} -> {}", candidate.path.display(), target.display())
                });
                stats.record_copy(candidate.kind);
                continue;
            }

            match place(&candidate, &bucket) {
                Ok(target) => {
                    log::debug!("{} -> {}", candidate.path.display(), target.display());
                    stats.record_copy(candidate.kind);
                }
                Err(e) => {
                    log::error!("Failed to copy {}: {}", candidate.path.display(), e);
                    stats.failures.add(candidate.path.clone(), bucket, e);
                }
            }
        }

        spinner.finish_and_clear();
        log::info!("Organize complete: {}", stats);

        Ok(stats)
    }

    /// Work out where a dry run would put `candidate`.
    fn plan(
        &self,
        candidate: &CandidateFile,
        bucket: &Path,
        planned: &mut HashSet<PathBuf>,
    ) -> Result<PathBuf> {
        let name = candidate
            .path
            .file_name()
            .ok_or_else(|| MediasortError::NoFileName(candidate.path.clone()))?;

        let target = resolve_target_with(bucket, name, |path| {
            fs::symlink_metadata(path).is_ok() || planned.contains(path)
        });
        planned.insert(target.clone());
        Ok(target)
    }
}

/// Create the bucket if needed and copy the file into it.
fn place(candidate: &CandidateFile, bucket: &Path) -> Result<PathBuf> {
    fs::create_dir_all(bucket)?;
    safe_copy(&candidate.path, bucket, None)
}

/// Statistics from an organize run.
#[derive(Debug, Default)]
pub struct OrganizeStats {
    /// Supported media files found in the source tree.
    pub discovered: usize,
    pub images_copied: usize,
    pub videos_copied: usize,
    pub too_recent: usize,
    /// Entries that could not be read while scanning.
    pub unreadable: usize,
    pub failures: CopyFailures,
}

impl OrganizeStats {
    fn record_copy(&mut self, kind: MediaKind) {
        match kind {
            MediaKind::Image => self.images_copied += 1,
            MediaKind::Video => self.videos_copied += 1,
        }
    }

    pub fn copied(&self) -> usize {
        self.images_copied + self.videos_copied
    }
}

impl std::fmt::Display for OrganizeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} found, {} images, {} videos copied ({} too recent, {} unreadable, {} failed)",
            self.discovered,
            self.images_copied,
            self.videos_copied,
            self.too_recent,
            self.unreadable,
            self.failures.len()
        )
    }
}
