use crate::{Error, Result, activate, publish};
use lav_fs::PermissionMode;
use lav_platform::Layout;
use lav_store::{BIN_DIR, NameKind, Store, check_name};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

/// What an install left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installed {
    pub app:       String,
    pub version:   String,
    /// Names linked into the user bin directory, sorted.
    pub published: Vec<String>,
}

/// Places versions into the store and keeps the `current` and publication
/// links pointing at them.
#[derive(Debug, Clone)]
pub struct Installer {
    layout: Layout,
    store:  Store,
}

impl Installer {
    pub fn new(layout: Layout) -> Self {
        let store = Store::new(&layout.root);
        Self { layout, store }
    }

    pub fn layout(&self) -> &Layout { &self.layout }

    pub fn store(&self) -> &Store { &self.store }

    /// Install from `source`, choosing [`Installer::install_dir`] for
    /// directories and [`Installer::install_file`] for anything else.
    pub fn install(&self, source: &Path, app: &str, version: &str) -> Result<Installed> {
        let meta = stat_source(source)?;
        if meta.is_dir() {
            self.install_dir(source, app, version)
        } else {
            self.install_file(source, app, version)
        }
    }

    /// Install a single executable as `<root>/<app>/<version>/bin/<basename>`,
    /// mode `0755`, and publish it.
    pub fn install_file(&self, source: &Path, app: &str, version: &str) -> Result<Installed> {
        check_names(app, version)?;
        let source = absolute(source)?;
        if stat_source(&source)?.is_dir() {
            return Err(Error::NotAFile { path: source });
        }
        let name = source
            .file_name()
            .ok_or_else(|| Error::NotAFile { path: source.clone() })?
            .to_os_string();

        let bin_dir = self.store.version_dir(app, version).join(BIN_DIR);
        lav_fs::create_dir_all(&bin_dir, PermissionMode::Directory).map_err(Error::CreateVersionDir)?;

        let dest = bin_dir.join(&name);
        let bytes = lav_fs::copy_file(&source, &dest).map_err(Error::CopyBinary)?;
        PermissionMode::Executable
            .apply_to_path(&dest)
            .map_err(Error::MakeExecutable)?;
        tracing::debug!(src = %source.display(), dest = %dest.display(), bytes, "copied binary");

        activate::set_current(&self.store, app, version)?;

        publish::ensure_bin_dir(&self.layout)?;
        publish::publish_executable(&self.layout, app, &name)?;

        tracing::info!(app, version, "installed binary");
        Ok(Installed {
            app:       app.to_string(),
            version:   version.to_string(),
            published: vec![name.to_string_lossy().into_owned()],
        })
    }

    /// Mirror the tree at `source` into `<root>/<app>/<version>` and publish
    /// every executable under its `bin/`.
    ///
    /// `source` must be a directory with a `bin` subdirectory; both are
    /// checked before anything is written.
    pub fn install_dir(&self, source: &Path, app: &str, version: &str) -> Result<Installed> {
        check_names(app, version)?;
        let source = absolute(source)?;
        if !stat_source(&source)?.is_dir() {
            return Err(Error::NotADirectory { path: source });
        }
        let src_bin = source.join(BIN_DIR);
        match fs::metadata(&src_bin) {
            Ok(meta) if meta.is_dir() => {}
            _ => return Err(Error::MissingBinDir { path: source }),
        }

        let version_dir = self.store.version_dir(app, version);
        lav_fs::create_dir_all(&version_dir, PermissionMode::Directory)
            .map_err(Error::CreateVersionDir)?;
        lav_fs::copy_dir_all(&source, &version_dir).map_err(Error::CopyTree)?;
        tracing::debug!(src = %source.display(), dest = %version_dir.display(), "copied tree");

        activate::set_current(&self.store, app, version)?;

        let published = publish::publish_current(&self.layout, &self.store, app)?;

        tracing::info!(app, version, executables = published.len(), "installed directory");
        Ok(Installed {
            app: app.to_string(),
            version: version.to_string(),
            published,
        })
    }
}

fn check_names(app: &str, version: &str) -> Result<()> {
    check_name(NameKind::App, app)?;
    check_name(NameKind::Version, version)?;
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| Error::AbsolutePath {
        path:   path.to_path_buf(),
        source: e,
    })
}

fn stat_source(path: &Path) -> Result<Metadata> {
    fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Stat {
            path:   path.to_path_buf(),
            source: e,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    fn installer() -> (TempDir, Installer) {
        let home = tempdir().unwrap();
        let layout = Layout::new(
            home.path().join(".local/share/lav"),
            home.path().join(".local/bin"),
        );
        (home, Installer::new(layout))
    }

    #[test]
    fn install_dispatches_on_source_kind() {
        let (home, installer) = installer();
        let file = home.path().join("tool");
        fs::write(&file, "bin").unwrap();
        let dist = home.path().join("dist");
        fs::create_dir_all(dist.join("bin")).unwrap();
        fs::write(dist.join("bin/other"), "bin").unwrap();

        installer.install(&file, "a", "1").unwrap();
        installer.install(&dist, "b", "1").unwrap();

        assert!(installer.store().version_dir("a", "1").join("bin/tool").is_file());
        assert!(installer.store().version_dir("b", "1").join("bin/other").is_file());
    }

    #[test]
    fn missing_source_is_reported() {
        let (home, installer) = installer();
        let err = installer
            .install(&home.path().join("nope"), "app", "1.0.0")
            .unwrap_err();

        assert!(matches!(err, Error::SourceNotFound { .. }));
        assert!(!installer.layout().root.exists());
    }

    #[test]
    fn file_install_rejects_directory() {
        let (home, installer) = installer();
        let err = installer.install_file(home.path(), "app", "1").unwrap_err();
        assert!(matches!(err, Error::NotAFile { .. }));
    }

    #[test]
    fn dir_install_rejects_file() {
        let (home, installer) = installer();
        let file = home.path().join("tool");
        fs::write(&file, "").unwrap();

        let err = installer.install_dir(&file, "app", "1").unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn invalid_names_fail_before_mutation() {
        let (home, installer) = installer();
        let file = home.path().join("tool");
        fs::write(&file, "").unwrap();

        for (app, version) in [("app", "current"), ("", "1"), ("a/b", "1"), ("app", "..")] {
            let err = installer.install_file(&file, app, version).unwrap_err();
            assert!(matches!(err, Error::Store(lav_store::Error::InvalidName { .. })));
        }
        assert!(!installer.layout().root.exists());
    }

    #[test]
    fn relative_source_is_resolved() {
        let (_home, installer) = installer();
        // Cargo.toml of this crate, relative to the test's working directory
        let installed = installer
            .install_file(Path::new("Cargo.toml"), "manifest", "1")
            .unwrap();

        assert_eq!(installed.published, ["Cargo.toml"]);
    }
}
