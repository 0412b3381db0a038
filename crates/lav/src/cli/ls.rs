use std::io::Write;
use std::process::ExitCode;

use clap::Args;
use lav_store::Store;

use super::current_or_none;

pub const EXAMPLES: &str = "\
Examples:
  lav list         # List all applications
  lav list go      # List versions of go";

#[derive(Debug, Args)]
pub struct ListArg {
    /// Optional application name to list versions for
    #[arg(value_name = "app")]
    pub app: Option<String>,
}

impl ListArg {
    pub fn run(self, store: &Store, out: &mut impl Write) -> anyhow::Result<ExitCode> {
        match self.app {
            None => list_apps(store, out)?,
            Some(app) => list_versions(store, &app, out)?,
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn list_apps(store: &Store, out: &mut impl Write) -> anyhow::Result<()> {
    for app in store.apps()? {
        match current_or_none(store, &app) {
            Some(current) => writeln!(out, "{app} (current: {current})")?,
            None => writeln!(out, "{app}")?,
        }
    }
    Ok(())
}

fn list_versions(store: &Store, app: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let versions = store.versions(app)?;
    let current = current_or_none(store, app);

    for version in versions {
        if current.as_deref() == Some(version.as_str()) {
            writeln!(out, "{version} (current)")?;
        } else {
            writeln!(out, "{version}")?;
        }
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run(store: &Store, app: Option<&str>) -> String {
        let mut out = Vec::new();
        ListArg {
            app: app.map(str::to_string),
        }
        .run(store, &mut out)
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn marks_current_version() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path());
        for v in ["2.0.0", "1.1.0", "1.0.0"] {
            fs::create_dir_all(store.version_dir("app1", v)).unwrap();
        }
        std::os::unix::fs::symlink("1.1.0", store.current_link("app1")).unwrap();

        assert_eq!(run(&store, Some("app1")), "1.0.0\n1.1.0 (current)\n2.0.0\n");
    }

    #[test]
    fn lists_apps_with_and_without_current() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path());
        fs::create_dir_all(store.version_dir("appA", "1.0")).unwrap();
        fs::create_dir_all(store.version_dir("appB", "0.1")).unwrap();
        std::os::unix::fs::symlink("1.0", store.current_link("appA")).unwrap();

        assert_eq!(run(&store, None), "appA (current: 1.0)\nappB\n");
    }

    #[test]
    fn empty_root_lists_nothing() {
        let dir = tempdir().unwrap();
        assert_eq!(run(&Store::new(dir.path()), None), "");
    }
}
