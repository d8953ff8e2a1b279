//! CLI runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration required to bootstrap the runtime and UI.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Base URL of the entity data source.
    pub api_base_url: String,
    /// Pause between starting a battle and showing its outcome.
    pub resolution_delay: Duration,
    /// Bound on refetches when the provider returns a duplicate entity.
    pub max_duplicate_refetches: u32,
    /// Directory for the score file (default: platform data dir).
    pub data_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://pokeapi.co/api/v2".to_owned(),
            resolution_delay: Duration::from_millis(1500),
            max_duplicate_refetches: 10,
            data_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_API_BASE_URL` - Entity data source (default: PokeAPI)
    /// - `DUEL_RESOLUTION_DELAY_MS` - Battle resolution pause (default: 1500)
    /// - `DUEL_MAX_REFETCHES` - Duplicate refetch bound (default: 10)
    /// - `DUEL_DATA_DIR` - Score file directory (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("DUEL_API_BASE_URL") {
            config.api_base_url = url.trim_end_matches('/').to_owned();
        }

        if let Some(delay_ms) = read_env::<u64>("DUEL_RESOLUTION_DELAY_MS") {
            config.resolution_delay = Duration::from_millis(delay_ms);
        }

        if let Some(bound) = read_env::<u32>("DUEL_MAX_REFETCHES") {
            config.max_duplicate_refetches = bound.max(1);
        }

        config.data_dir = env::var("DUEL_DATA_DIR").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
