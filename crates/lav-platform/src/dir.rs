use crate::Environment;
use std::path::PathBuf;

pub fn user_home(env: &impl Environment) -> Option<PathBuf> { env.home_dir() }

/// `$XDG_DATA_HOME`, falling back to `~/.local/share`.
pub fn user_data(env: &impl Environment) -> Option<PathBuf> {
    env.var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| user_home(env).map(|p| p.join(".local").join("share")))
}

/// `~/.local/bin`. Not configurable.
pub fn user_local_bin(env: &impl Environment) -> Option<PathBuf> {
    user_home(env).map(|p| p.join(".local").join("bin"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OsEnvironment;

    #[test]
    fn test_user_home_matches_environment() {
        if let Some(home) = user_home(&OsEnvironment) {
            if let Some(env_home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) {
                assert_eq!(home, PathBuf::from(env_home));
            }
        }
    }

    #[test]
    fn test_user_local_bin_is_under_home() {
        if let (Some(home), Some(bin)) = (user_home(&OsEnvironment), user_local_bin(&OsEnvironment)) {
            assert!(bin.starts_with(home));
            assert!(bin.ends_with(".local/bin"));
        }
    }
}
