//! Atomic file export.
//!
//! Batch exports are written through a temporary file and rename so a
//! crashed or interrupted run never leaves a partially written target.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};

use crate::error::WriteError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `path` atomically.
///
/// Opens the parent directory with a capability handle, writes a hidden
/// temporary file next to the target, syncs it, and renames it into place.
///
/// # Errors
///
/// Returns [`WriteError`] if the parent directory cannot be opened or any
/// write, sync, or rename step fails.
pub(crate) fn export_atomic(path: &Utf8Path, contents: &str) -> Result<(), WriteError> {
    let file_name = path.file_name().ok_or_else(|| WriteError {
        path: path.to_path_buf(),
        message: "export path must name a file".to_owned(),
    })?;
    let parent = path.parent().map_or_else(|| Utf8Path::new("."), |dir| {
        if dir.as_str().is_empty() {
            Utf8Path::new(".")
        } else {
            dir
        }
    });

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| WriteError {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let tmp_name = temp_name(file_name);
    write_temp_file(&dir, &tmp_name, path, contents)?;

    if let Err(err) = rename_into_place(&dir, &tmp_name, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(WriteError {
            path: path.to_path_buf(),
            message: err.to_string(),
        });
    }

    // Best-effort directory sync; failures leave the rename intact.
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Ignore sync failures.
    }

    Ok(())
}

fn temp_name(file_name: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{file_name}.tmp.{}.{nanos}.{counter}", std::process::id())
}

fn write_temp_file(
    dir: &Dir,
    tmp_name: &str,
    target: &Utf8Path,
    contents: &str,
) -> Result<(), WriteError> {
    let fail = |message: String| WriteError {
        path: target.to_path_buf(),
        message,
    };

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| fail(err.to_string()))?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if let Err(err) = written {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(fail(err.to_string()));
    }

    Ok(())
}

#[cfg(windows)]
fn rename_into_place(dir: &Dir, tmp_name: &str, target_name: &str) -> std::io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_into_place(dir: &Dir, tmp_name: &str, target_name: &str) -> std::io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use camino::Utf8PathBuf;

    use super::*;

    fn unique_temp_path(file_name: &str) -> Utf8PathBuf {
        static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);
        let counter = DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = Utf8PathBuf::from("target")
            .join("chrononews-tests")
            .join(format!("atomic-{}-{counter}", std::process::id()));
        let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open workspace dir");
        root.create_dir_all(&dir).expect("create temp dir");
        dir.join(file_name)
    }

    fn read_back(path: &Utf8Path) -> String {
        std::fs::read_to_string(path).expect("read exported file")
    }

    #[test]
    fn writes_new_file() {
        let path = unique_temp_path("batch.json");
        export_atomic(&path, "{\"items\":[]}").expect("export succeeds");
        assert_eq!(read_back(&path), "{\"items\":[]}");
    }

    #[test]
    fn replaces_existing_file() {
        let path = unique_temp_path("batch.json");
        export_atomic(&path, "old").expect("first export");
        export_atomic(&path, "new").expect("second export");
        assert_eq!(read_back(&path), "new");
    }

    #[test]
    fn rejects_path_without_file_name() {
        let err = export_atomic(Utf8Path::new("target/.."), "x").expect_err("expected error");
        assert!(err.message.contains("must name a file"));
    }

    #[test]
    fn reports_missing_parent_directory() {
        let path = Utf8PathBuf::from("target")
            .join("chrononews-tests")
            .join("does-not-exist")
            .join("batch.json");
        let err = export_atomic(&path, "x").expect_err("expected error");
        assert_eq!(err.path, path);
    }
}
