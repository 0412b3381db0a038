use std::io;
use std::path::PathBuf;

use crate::NameKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind:   NameKind,
        name:   String,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
