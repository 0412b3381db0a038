use crate::{BIN_DIR, CURRENT, Error, NameKind, Result, check_name};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only view over a data root.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    pub fn app_dir(&self, app: &str) -> PathBuf { self.root.join(app) }

    pub fn version_dir(&self, app: &str, version: &str) -> PathBuf { self.app_dir(app).join(version) }

    pub fn current_link(&self, app: &str) -> PathBuf { self.app_dir(app).join(CURRENT) }

    /// `<root>/<app>/current/bin`, resolved through the current link.
    pub fn current_bin_dir(&self, app: &str) -> PathBuf { self.current_link(app).join(BIN_DIR) }

    /// Applications under the root, sorted byte-wise.
    pub fn apps(&self) -> Result<Vec<String>> { list_dirs(&self.root, |_| true) }

    /// Installed versions of `app`, sorted byte-wise. Never contains `current`.
    ///
    /// Ordering is lexicographic, so `1.10.0` sorts before `1.2.0`.
    pub fn versions(&self, app: &str) -> Result<Vec<String>> {
        check_name(NameKind::App, app)?;
        list_dirs(&self.app_dir(app), |name| name != CURRENT)
    }

    /// The version `<app>/current` points at, or `None` when no link exists.
    ///
    /// Only the last component of the link target is returned, so a target
    /// written as an absolute path still yields the version name.
    pub fn current_version(&self, app: &str) -> Result<Option<String>> {
        check_name(NameKind::App, app)?;
        let link = self.current_link(app);

        let target = match fs::read_link(&link) {
            Ok(target) => target,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Read { path: link, source: e }),
        };

        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| target.to_string_lossy().into_owned());
        Ok(Some(name))
    }

    /// Whether `<app>/<version>` exists. Follows symlinks.
    pub fn has_version(&self, app: &str, version: &str) -> Result<bool> {
        let dir = self.version_dir(app, version);
        match fs::metadata(&dir) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::Read { path: dir, source: e }),
        }
    }
}

fn list_dirs(dir: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<String>> {
    let read_err = |e: io::Error| Error::Read {
        path:   dir.to_path_buf(),
        source: e,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if !entry.file_type().map_err(read_err)?.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if keep(&name) => names.push(name),
            Ok(_) => {}
            Err(raw) => tracing::debug!(name = ?raw, "skipping non-UTF-8 entry"),
        }
    }

    names.sort();
    Ok(names)
}
