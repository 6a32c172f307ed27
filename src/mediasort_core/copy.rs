use crate::mediasort_core::error::{MediasortError, Result};
use filetime::FileTime;
use std::ffi::{OsStr, OsString};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Whether anything, including a dangling symlink, occupies `path`.
fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Pick a path in `out_dir` for a file called `name` that does not exist yet.
///
/// If `out_dir/name` is taken, tries `stem(1).ext`, `stem(2).ext`, ... and
/// returns the first free one. Symlinks count as taken whether or not their
/// target exists.
pub fn resolve_target(out_dir: &Path, name: &OsStr) -> PathBuf {
    resolve_target_with(out_dir, name, is_occupied)
}

/// Same as [`resolve_target`], with the caller deciding which paths count as
/// taken.
pub fn resolve_target_with(
    out_dir: &Path,
    name: &OsStr,
    is_taken: impl Fn(&Path) -> bool,
) -> PathBuf {
    let target = out_dir.join(name);
    if !is_taken(&target) {
        return target;
    }

    let name_path = Path::new(name);
    let stem = name_path.file_stem().unwrap_or(name);
    let extension = name_path.extension();

    let mut i: u64 = 1;
    loop {
        let candidate = out_dir.join(suffixed_name(stem, i, extension));
        if !is_taken(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

/// `stem(i).ext`, built without going through UTF-8.
fn suffixed_name(stem: &OsStr, i: u64, extension: Option<&OsStr>) -> OsString {
    let mut name = stem.to_os_string();
    name.push(format!("({})", i));
    if let Some(extension) = extension {
        name.push(".");
        name.push(extension);
    }
    name
}

/// Copy `file_path` into `out_dir` without overwriting anything.
///
/// The copy is named `override_name` if given, otherwise after the source
/// file; name clashes get a numeric suffix (see [`resolve_target`]). The
/// target is created exclusively, so an existing file or symlink is never
/// written through. If copying fails midway the partial target is removed.
/// Permissions and modification time are carried over to the copy.
/// `out_dir` must already exist. Returns the path of the new file.
pub fn safe_copy(
    file_path: &Path,
    out_dir: &Path,
    override_name: Option<&OsStr>,
) -> Result<PathBuf> {
    let name = match override_name {
        Some(name) => name,
        None => file_path
            .file_name()
            .ok_or_else(|| MediasortError::NoFileName(file_path.to_path_buf()))?,
    };

    let mut source = File::open(file_path)?;
    let metadata = source.metadata()?;

    let (target, mut dest) = loop {
        let target = resolve_target(out_dir, name);
        match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(dest) => break (target, dest),
            // taken between the probe and the create
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    };

    if let Err(e) = io::copy(&mut source, &mut dest) {
        drop(dest);
        if let Err(remove_err) = fs::remove_file(&target) {
            log::warn!(
                "Could not remove partial copy {}: {}",
                target.display(),
                remove_err
            );
        }
        return Err(e.into());
    }
    drop(dest);

    if let Err(e) = fs::set_permissions(&target, metadata.permissions()) {
        log::warn!("Could not copy permissions to {}: {}", target.display(), e);
    }

    let mtime = FileTime::from_last_modification_time(&metadata);
    if let Err(e) = filetime::set_file_mtime(&target, mtime) {
        log::warn!(
            "Could not preserve modification time on {}: {}",
            target.display(),
            e
        );
    }

    log::debug!("Copied {} -> {}", file_path.display(), target.display());
    Ok(target)
}
