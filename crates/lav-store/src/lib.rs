//! The on-disk store:
//!
//! ```text
//! <root>/<app>/<version>/bin/<executable>
//! <root>/<app>/current -> <version>
//! ```
//!
//! This crate only reads it. Writing lives in `lav-install`.

pub use error::{Error, Result};
pub use name::{NameKind, check_name};
pub use store::Store;

mod error;
mod name;
mod store;

/// Reserved entry under each application naming the current version.
pub const CURRENT: &str = "current";

/// Executable directory inside every version.
pub const BIN_DIR: &str = "bin";
