use crate::{Error, Result};
use lav_fs::PermissionMode;
use lav_platform::Layout;
use lav_store::{BIN_DIR, CURRENT, Store};
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

/// Relative target of the publication link for `name`:
/// `../share/lav/<app>/current/bin/<name>`.
///
/// The target is fixed and only resolves when the bin directory is
/// `~/.local/bin` and the root is the default `~/.local/share/lav`. With
/// `LAV_ROOT` or `XDG_DATA_HOME` pointing elsewhere the links dangle.
pub fn publication_target(app: &str, name: impl AsRef<OsStr>) -> PathBuf {
    ["..", "share", "lav", app, CURRENT, BIN_DIR]
        .into_iter()
        .collect::<PathBuf>()
        .join(name.as_ref())
}

pub(crate) fn ensure_bin_dir(layout: &Layout) -> Result<()> {
    lav_fs::create_dir_all(&layout.bin_dir, PermissionMode::Directory).map_err(Error::CreateBinDir)
}

pub(crate) fn publish_executable(layout: &Layout, app: &str, name: &OsStr) -> Result<()> {
    let link = layout.bin_dir.join(name);
    let target = publication_target(app, name);

    lav_fs::replace_symlink(&link, &target).map_err(|source| Error::Publish {
        name: name.to_string_lossy().into_owned(),
        source,
    })?;
    tracing::debug!(link = %link.display(), target = %target.display(), "published");
    Ok(())
}

/// Link every executable directly under `<app>/current/bin` into the user
/// bin directory. Entries resolving to directories are skipped.
pub(crate) fn publish_current(layout: &Layout, store: &Store, app: &str) -> Result<Vec<String>> {
    ensure_bin_dir(layout)?;

    let bin_dir = store.current_bin_dir(app);
    let read_err = |e: std::io::Error| Error::ReadBinDir {
        path:   bin_dir.clone(),
        source: e,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(&bin_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.path().is_dir() {
            continue;
        }
        names.push(entry.file_name());
    }
    names.sort();

    for name in &names {
        publish_executable(layout, app, name)?;
    }

    Ok(names
        .into_iter()
        .map(|n| n.to_string_lossy().into_owned())
        .collect())
}
