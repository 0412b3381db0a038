//! Filesystem primitives behind lav's on-disk layout.
//!
//! Two concerns live here: replacing a symlink in place without ever
//! clobbering a regular file or directory, and copying files or whole trees
//! while carrying their permission bits over.

mod error;
pub mod permissions;
mod primitives;

pub use error::{Error, Result};
pub use permissions::PermissionMode;
pub use primitives::{copy_dir_all, copy_file, create_dir_all, replace_symlink};
