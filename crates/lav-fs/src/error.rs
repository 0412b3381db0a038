use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to remove existing symlink '{}': {source}", path.display())]
    RemoveLink { path: PathBuf, source: io::Error },

    #[error("failed to create symlink '{}' -> '{}': {source}", link.display(), target.display())]
    Symlink {
        link:   PathBuf,
        target: PathBuf,
        source: io::Error,
    },

    #[error("failed to set permissions on '{}': {source}", path.display())]
    Permissions { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
