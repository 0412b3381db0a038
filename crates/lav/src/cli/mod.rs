pub mod app;
pub mod current;
pub mod install;
pub mod ls;
pub mod select;
pub mod use_ver;

use lav_install::Installer;
use lav_platform::{Environment, Layout, resolve_root};
use lav_store::Store;

/// Discovery commands only need the data root.
pub fn store(env: &impl Environment) -> anyhow::Result<Store> { Ok(Store::new(resolve_root(env)?)) }

pub fn installer(env: &impl Environment) -> anyhow::Result<Installer> {
    Ok(Installer::new(Layout::from_env(env)?))
}

/// Current version of `app` for listings, where an unreadable link is shown
/// the same as a missing one.
pub fn current_or_none(store: &Store, app: &str) -> Option<String> {
    store.current_version(app).unwrap_or_else(|err| {
        tracing::debug!(app, %err, "ignoring unreadable current link");
        None
    })
}
