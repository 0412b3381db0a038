use crate::primitives::{copy_file, create_dir_all, replace_symlink};
use crate::{Error, PermissionMode, Result};
use std::fs;
use std::path::Path;

/// Recursively mirror the tree at `src` into `dest`.
///
/// Regular files and subdirectories take the permission bits of their source.
/// A subdirectory's mode is applied once its contents are in place, so
/// read-only source directories still copy. Symlinks are recreated with the
/// same target string. `dest` itself is created if needed but its mode is not
/// touched.
pub fn copy_dir_all(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    create_dir_all(dest, PermissionMode::Directory)?;

    let entries = fs::read_dir(src).map_err(|e| Error::Read {
        path:   src.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::Read {
            path:   src.to_path_buf(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| Error::Read {
            path:   entry.path(),
            source: e,
        })?;

        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_all(&src_path, &dest_path)?;
            mirror_permissions(&src_path, &dest_path)?;
        } else if file_type.is_symlink() {
            let target = fs::read_link(&src_path).map_err(|e| Error::Read {
                path:   src_path.clone(),
                source: e,
            })?;
            replace_symlink(&dest_path, target)?;
        } else {
            copy_file(&src_path, &dest_path)?;
            mirror_permissions(&src_path, &dest_path)?;
        }
        tracing::trace!(path = %dest_path.display(), "copied");
    }

    Ok(())
}

fn mirror_permissions(src: &Path, dest: &Path) -> Result<()> {
    let permissions = fs::symlink_metadata(src)
        .map_err(|e| Error::Read {
            path:   src.to_path_buf(),
            source: e,
        })?
        .permissions();

    fs::set_permissions(dest, permissions).map_err(|e| Error::Permissions {
        path:   dest.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_dir_all() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("subdir")).unwrap();
        fs::write(src.join("file.txt"), "data").unwrap();
        fs::write(src.join("subdir/nested.txt"), "nested").unwrap();

        copy_dir_all(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("file.txt")).unwrap(), "data");
        assert_eq!(fs::read_to_string(dest.join("subdir/nested.txt")).unwrap(), "nested");
    }

    #[cfg(unix)]
    #[test]
    fn carries_file_and_directory_modes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("bin")).unwrap();
        fs::create_dir_all(src.join("share")).unwrap();
        fs::write(src.join("bin/tool"), "#!/bin/sh\n").unwrap();
        fs::write(src.join("share/readme"), "docs").unwrap();
        fs::set_permissions(src.join("bin/tool"), fs::Permissions::from_mode(0o750)).unwrap();
        fs::set_permissions(src.join("share/readme"), fs::Permissions::from_mode(0o600)).unwrap();
        fs::set_permissions(src.join("share"), fs::Permissions::from_mode(0o700)).unwrap();

        copy_dir_all(&src, &dest).unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&dest.join("bin/tool")), 0o750);
        assert_eq!(mode(&dest.join("share/readme")), 0o600);
        assert_eq!(mode(&dest.join("share")), 0o700);
    }

    #[cfg(unix)]
    #[test]
    fn copies_into_read_only_source_directory() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("lib")).unwrap();
        fs::write(src.join("lib/libfoo.so"), "elf").unwrap();
        fs::set_permissions(src.join("lib"), fs::Permissions::from_mode(0o555)).unwrap();

        copy_dir_all(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("lib/libfoo.so")).unwrap(), "elf");
        let mode = fs::metadata(dest.join("lib")).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o555);

        // let tempdir clean up
        fs::set_permissions(dest.join("lib"), fs::Permissions::from_mode(0o755)).unwrap();
        fs::set_permissions(src.join("lib"), fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn recreates_symlinks_verbatim() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src.join("bin")).unwrap();
        fs::write(src.join("bin/python3.12"), "").unwrap();
        std::os::unix::fs::symlink("python3.12", src.join("bin/python3")).unwrap();

        copy_dir_all(&src, &dest).unwrap();

        let link = dest.join("bin/python3");
        assert!(link.is_symlink());
        assert_eq!(fs::read_link(link).unwrap(), Path::new("python3.12"));
    }
}
