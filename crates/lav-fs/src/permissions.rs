use crate::{Error, Result};
use std::path::Path;

/// Permission modes lav applies to the files and directories it creates.
///
/// On Unix each variant maps to mode bits. On Windows only the read-only
/// attribute can be expressed; it is set when the mode has no write bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionMode {
    /// `0o755`, used for installed binaries.
    Executable,

    /// `0o755`, used for every directory lav creates in the store.
    Directory,
}

impl PermissionMode {
    pub fn to_unix_mode(self) -> u32 {
        match self {
            Self::Executable | Self::Directory => 0o755,
        }
    }

    /// Set this mode on an existing `path`.
    pub fn apply_to_path(self, path: &Path) -> Result<()> {
        let mode = self.to_unix_mode();

        #[cfg(unix)]
        let permissions = {
            use std::os::unix::fs::PermissionsExt;
            std::fs::Permissions::from_mode(mode)
        };

        #[cfg(not(unix))]
        let permissions = {
            let mut permissions = std::fs::metadata(path)
                .map_err(|e| Error::Read {
                    path:   path.to_path_buf(),
                    source: e,
                })?
                .permissions();
            permissions.set_readonly(mode & 0o222 == 0);
            permissions
        };

        std::fs::set_permissions(path, permissions).map_err(|e| Error::Permissions {
            path:   path.to_path_buf(),
            source: e,
        })
    }
}
