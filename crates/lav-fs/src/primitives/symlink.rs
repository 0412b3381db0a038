use crate::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Point `link` at `target`, replacing whatever symlink is already there.
///
/// Only symlinks are ever removed. A regular file or directory sitting at
/// `link` is left untouched and the call fails when the new link cannot be
/// created on top of it. `target` is written verbatim, so relative targets
/// stay relative to the link's parent.
///
/// The remove and create steps are two syscalls; another process may observe
/// the link missing between them.
pub fn replace_symlink(link: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<()> {
    let link = link.as_ref();
    let target = target.as_ref();

    match fs::symlink_metadata(link) {
        Ok(meta) if meta.file_type().is_symlink() => {
            tracing::debug!(link = %link.display(), "removing existing symlink");
            remove_link(link).map_err(|e| Error::RemoveLink {
                path:   link.to_path_buf(),
                source: e,
            })?;
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(Error::Read {
                path:   link.to_path_buf(),
                source: e,
            });
        }
    }

    create_link(target, link).map_err(|e| Error::Symlink {
        link:   link.to_path_buf(),
        target: target.to_path_buf(),
        source: e,
    })
}

#[cfg(unix)]
fn create_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_link(target: &Path, link: &Path) -> io::Result<()> {
    let resolved = link.parent().map(|p| p.join(target));
    if resolved.is_some_and(|p| p.is_dir()) {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

#[cfg(unix)]
fn remove_link(link: &Path) -> io::Result<()> { fs::remove_file(link) }

#[cfg(windows)]
fn remove_link(link: &Path) -> io::Result<()> {
    // directory symlinks need RemoveDirectory on windows
    fs::remove_file(link).or_else(|_| fs::remove_dir(link))
}
