//! Application State
//!
//! Holds the catalog, the per-session cart store and the location of the
//! landing page assets.

use super::store::CartStore;
use crate::catalog::Catalog;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

/// Landing page used when the assets directory has no `index.html`
const BUILTIN_INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state
#[derive(Debug)]
pub struct AppState {
    /// Immutable weapon catalog, loaded once at startup
    pub catalog: Catalog,

    /// Per-session carts
    pub carts: CartStore,

    /// Path to the directory containing HTML assets.
    pub assets_dir: PathBuf,
}

impl AppState {
    /// Creates state with an explicit assets directory
    pub fn new(catalog: Catalog, session_ttl: Duration, assets_dir: PathBuf) -> Self {
        tracing::info!(
            weapons = catalog.len(),
            assets_dir = %assets_dir.display(),
            ttl_secs = session_ttl.as_secs(),
            "application state ready"
        );

        Self {
            catalog,
            carts: CartStore::new(session_ttl),
            assets_dir,
        }
    }

    /// Creates state with the assets directory discovered from the working directory
    pub fn discover(catalog: Catalog, session_ttl: Duration) -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let assets_dir = Self::locate_assets_directory(&current_dir);
        Self::new(catalog, session_ttl, assets_dir)
    }

    /// Looks for `./assets`, then `../assets`, falling back to a relative "assets"
    fn locate_assets_directory(current_dir: &Path) -> PathBuf {
        if current_dir.join("assets").exists() {
            return current_dir.join("assets");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("assets").exists() {
                return parent.join("assets");
            }
        }

        PathBuf::from("assets")
    }

    /// Reads `index.html` from the assets directory, or the built-in page
    pub async fn load_index_html(&self) -> String {
        let path = self.assets_dir.join("index.html");
        match tokio::fs::read_to_string(&path).await {
            Ok(html) => html,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "serving built-in index page");
                BUILTIN_INDEX_HTML.to_string()
            }
        }
    }
}

/// Periodically drops expired sessions until the runtime shuts down.
pub fn spawn_session_sweeper(state: SharedState, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            state.carts.purge_expired();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_index_falls_back_to_builtin_page() {
        let state = AppState::new(
            Catalog::builtin().unwrap(),
            Duration::from_secs(60),
            PathBuf::from("/definitely/not/an/assets/dir"),
        );

        let html = state.load_index_html().await;
        assert!(html.contains("<html"));
    }

    #[test]
    fn locate_prefers_local_assets() {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert_eq!(
            AppState::locate_assets_directory(manifest_dir),
            manifest_dir.join("assets")
        );
    }

    #[tokio::test]
    async fn sweeper_purges_idle_sessions() {
        let catalog = Catalog::builtin().unwrap();
        let state = Arc::new(AppState::new(
            catalog,
            Duration::from_millis(1),
            PathBuf::from("assets"),
        ));
        state.carts.add("idle", 1, &state.catalog).unwrap();

        let sweeper = spawn_session_sweeper(state.clone(), Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(state.carts.session_count(), 0);
        sweeper.abort();
    }
}
