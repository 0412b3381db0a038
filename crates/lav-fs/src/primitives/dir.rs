use crate::{Error, PermissionMode, Result};
use std::fs;
use std::path::Path;

/// Create `path` and any missing parents.
///
/// Newly created directories get `mode` (subject to the process umask);
/// directories that already exist keep theirs.
pub fn create_dir_all(path: impl AsRef<Path>, mode: PermissionMode) -> Result<()> {
    let path = path.as_ref();
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode.to_unix_mode());
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path).map_err(|e| Error::CreateDir {
        path:   path.to_path_buf(),
        source: e,
    })
}
