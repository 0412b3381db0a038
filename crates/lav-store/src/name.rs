use crate::{CURRENT, Error, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    App,
    Version,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::App => f.write_str("application"),
            Self::Version => f.write_str("version"),
        }
    }
}

/// Application and version names become single path components under the
/// root, so anything that would escape or alias another entry is refused.
pub fn check_name(kind: NameKind, name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("must not be empty")
    } else if name == "." || name == ".." {
        Some("must not be a relative path component")
    } else if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        Some("must not contain a path separator")
    } else if name.contains('\0') {
        Some("must not contain a NUL byte")
    } else if kind == NameKind::Version && name == CURRENT {
        Some("reserved")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidName {
            kind,
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        check_name(NameKind::App, "go").unwrap();
        check_name(NameKind::Version, "1.25.6").unwrap();
        check_name(NameKind::Version, "nightly-2024-01-01").unwrap();
        // only versions reserve `current`
        check_name(NameKind::App, "current").unwrap();
    }

    #[test]
    fn rejects_current_as_version() {
        let err = check_name(NameKind::Version, "current").unwrap_err();
        assert_eq!(err.to_string(), "invalid version name 'current': reserved");
    }

    #[test]
    fn rejects_path_like_names() {
        for name in ["", ".", "..", "a/b", "../etc"] {
            assert!(check_name(NameKind::App, name).is_err(), "{name:?}");
            assert!(check_name(NameKind::Version, name).is_err(), "{name:?}");
        }
    }
}
