use std::path::PathBuf;

/// Read access to the process environment.
pub trait Environment {
    /// Value of `name`, with empty values reported as unset.
    fn var(&self, name: &str) -> Option<String>;

    fn home_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnvironment;

impl Environment for OsEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }

    fn home_dir(&self) -> Option<PathBuf> { home::home_dir().filter(|p| !p.as_os_str().is_empty()) }
}
