use crate::{Environment, Error, Result, dir};
use std::path::PathBuf;

/// Overrides the data root outright.
pub const ROOT_ENV: &str = "LAV_ROOT";

const APP_DIR: &str = "lav";

/// The two directories lav writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Data root holding `<app>/<version>` trees and `<app>/current` links.
    pub root:    PathBuf,
    /// Directory receiving the publication links.
    pub bin_dir: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>, bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            root:    root.into(),
            bin_dir: bin_dir.into(),
        }
    }

    pub fn from_env(env: &impl Environment) -> Result<Self> {
        let layout = Self::new(resolve_root(env)?, user_bin(env)?);
        tracing::debug!(root = %layout.root.display(), bin = %layout.bin_dir.display(), "resolved layout");
        Ok(layout)
    }
}

/// Data root, first match wins:
/// `$LAV_ROOT`, `$XDG_DATA_HOME/lav`, `~/.local/share/lav`.
pub fn resolve_root(env: &impl Environment) -> Result<PathBuf> {
    if let Some(root) = env.var(ROOT_ENV) {
        return Ok(PathBuf::from(root));
    }

    dir::user_data(env)
        .map(|data| data.join(APP_DIR))
        .ok_or(Error::NoHome)
}

pub fn user_bin(env: &impl Environment) -> Result<PathBuf> {
    dir::user_local_bin(env).ok_or(Error::NoHome)
}
