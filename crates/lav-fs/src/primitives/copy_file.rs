use crate::{Error, Result};
use std::fs::File;
use std::io;
use std::path::Path;

/// Copy the contents of `src` into `dest`, creating or truncating `dest`.
///
/// Permissions are not carried over; callers decide the destination mode.
/// Returns the number of bytes copied.
pub fn copy_file(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<u64> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    let mut reader = File::open(src).map_err(|e| Error::Read {
        path:   src.to_path_buf(),
        source: e,
    })?;
    let mut writer = File::create(dest).map_err(|e| Error::Write {
        path:   dest.to_path_buf(),
        source: e,
    })?;

    io::copy(&mut reader, &mut writer).map_err(|e| Error::Write {
        path:   dest.to_path_buf(),
        source: e,
    })
}
