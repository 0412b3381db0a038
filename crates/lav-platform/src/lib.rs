//! Where lav keeps things.
//!
//! Everything here is a pure function of an [`Environment`]; nothing touches
//! the filesystem. The binary passes [`OsEnvironment`], tests pass a map.

pub use env::{Environment, OsEnvironment};
pub use error::{Error, Result};
pub use layout::{Layout, ROOT_ENV, resolve_root, user_bin};

pub mod dir;
mod env;
mod error;
mod layout;
