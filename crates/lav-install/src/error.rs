use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("source does not exist: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("source path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("source path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("bin/ directory does not exist in source directory: {}", path.display())]
    MissingBinDir { path: PathBuf },

    #[error("version {version} does not exist for {app}")]
    VersionNotFound { app: String, version: String },

    #[error("failed to get absolute path of '{}': {source}", path.display())]
    AbsolutePath { path: PathBuf, source: io::Error },

    #[error("failed to inspect '{}': {source}", path.display())]
    Stat { path: PathBuf, source: io::Error },

    #[error("failed to create version directory: {0}")]
    CreateVersionDir(#[source] lav_fs::Error),

    #[error("failed to copy binary: {0}")]
    CopyBinary(#[source] lav_fs::Error),

    #[error("failed to make binary executable: {0}")]
    MakeExecutable(#[source] lav_fs::Error),

    #[error("failed to copy directory: {0}")]
    CopyTree(#[source] lav_fs::Error),

    #[error("failed to update current symlink: {0}")]
    RetargetCurrent(#[source] lav_fs::Error),

    #[error("failed to create bin directory: {0}")]
    CreateBinDir(#[source] lav_fs::Error),

    #[error("failed to read bin directory '{}': {source}", path.display())]
    ReadBinDir { path: PathBuf, source: io::Error },

    #[error("failed to create bin symlink for {name}: {source}")]
    Publish { name: String, source: lav_fs::Error },

    #[error(transparent)]
    Store(#[from] lav_store::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
