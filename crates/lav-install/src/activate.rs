use crate::{Error, Installer, Result};
use lav_store::{NameKind, Store, check_name};

impl Installer {
    /// Point `<app>/current` at an already installed `version`.
    ///
    /// Publication links are not refreshed: if versions ship different
    /// executables, `bin` keeps whatever the last install published.
    pub fn switch(&self, app: &str, version: &str) -> Result<()> {
        check_name(NameKind::App, app)?;
        check_name(NameKind::Version, version)?;

        if !self.store().has_version(app, version)? {
            return Err(Error::VersionNotFound {
                app:     app.to_string(),
                version: version.to_string(),
            });
        }

        set_current(self.store(), app, version)?;
        tracing::info!(app, version, "switched");
        Ok(())
    }
}

pub(crate) fn set_current(store: &Store, app: &str, version: &str) -> Result<()> {
    let link = store.current_link(app);
    lav_fs::replace_symlink(&link, version).map_err(Error::RetargetCurrent)?;
    tracing::debug!(link = %link.display(), version, "retargeted current");
    Ok(())
}
