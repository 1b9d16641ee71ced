use crate::errors::CommandError;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};
use zip::ZipArchive;

const DEFAULT_DIR_MODE: u32 = 0o755;
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Lexically collapses `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// Maps a raw archive entry name to the path it would be written to under `dest`,
/// rejecting anything that does not land strictly inside `dest`.
pub fn resolve_entry_path(dest: &Path, entry_name: &str) -> Result<PathBuf, CommandError> {
    let entry = Path::new(entry_name);
    let illegal = || CommandError::IllegalPath(entry_name.to_string());

    if entry.has_root() || matches!(entry.components().next(), Some(Component::Prefix(_))) {
        return Err(illegal());
    }

    let root = normalize(dest);
    let target = normalize(&root.join(entry));

    if target == root || !target.starts_with(&root) {
        return Err(illegal());
    }

    Ok(target)
}

#[cfg(unix)]
fn create_dir(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(mode).create(path)
}

#[cfg(not(unix))]
fn create_dir(path: &Path, _mode: u32) -> io::Result<()> {
    fs::create_dir_all(path)
}

#[cfg(unix)]
fn create_file(path: &Path, mode: u32) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)
}

#[cfg(not(unix))]
fn create_file(path: &Path, _mode: u32) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Extracts every entry of the zip at `archive_path` into `dest`.
///
/// Stops at the first failing entry; whatever was written before it stays on disk.
pub fn extract_zip(archive_path: &Path, dest: &Path) -> Result<(), CommandError> {
    let file = File::open(archive_path).map_err(|e| CommandError::io(archive_path, e))?;
    let mut archive = ZipArchive::new(file).map_err(CommandError::ExtractionFailed)?;
    debug!("Extracting {} entries into {}", archive.len(), dest.display());

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(CommandError::ExtractionFailed)?;
        let target = resolve_entry_path(dest, entry.name())?;
        trace!("{} -> {}", entry.name(), target.display());

        if entry.is_dir() {
            let mode = entry.unix_mode().map_or(DEFAULT_DIR_MODE, |m| m & 0o7777);
            create_dir(&target, mode).map_err(|e| CommandError::io(&target, e))?;
            continue;
        }

        if let Some(parent) = target.parent() {
            create_dir(parent, DEFAULT_DIR_MODE).map_err(|e| CommandError::io(parent, e))?;
        }

        let mode = entry.unix_mode().map_or(DEFAULT_FILE_MODE, |m| m & 0o7777);
        let mut out = create_file(&target, mode).map_err(|e| CommandError::io(&target, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| CommandError::io(&target, e))?;
    }

    Ok(())
}
