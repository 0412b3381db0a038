//! State transitions over the store.
//!
//! An install always runs in the same order: version data, then the
//! `current` link, then publication links in the user bin directory. Anything
//! that observes the new `current` link therefore sees the complete version;
//! publication links may lag behind. Nothing is rolled back on failure.

pub use error::{Error, Result};
pub use installer::{Installed, Installer};
pub use publish::publication_target;

mod activate;
mod error;
mod installer;
mod publish;
