use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`LINGO__CULTURE`, `LINGO__LOGGING__LEVEL`, ...).
pub const ENV_PREFIX: &str = "LINGO";
const ENV_SEPARATOR: &str = "__";
const DEFAULT_CONFIG: &str = "lingo";

/// Custom error type for config loading.
#[lingo_derive::lingo_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base File**: the given path, or `lingo` in the working directory. The
///    format follows the extension (`.toml`, `.json`, `.yaml`, ...); an
///    extension-less path is probed with every supported extension.
/// 2. **Environment Overrides**: variables prefixed with `LINGO__`; nested keys
///    use double underscores (`LINGO__RESOURCES__ROOT` maps to `resources.root`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unparsable, or the
/// merged values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use lingo_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     culture: Option<String>,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(path, env_source())
}

/// Same as [`load_config`] but reads overrides from `vars` instead of the
/// process environment. Keys keep their `LINGO__` prefix.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    vars: HashMap<String, String>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(path, env_source().source(Some(vars)))
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).try_parsing(true)
}

fn load<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    info!(path = %effective_path.display(), "Loading config");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(env)
        .build()
        .context(format!("Failed to build config from {}", effective_path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
