use crate::culture::Culture;
use crate::descriptor::DictionaryDescriptor;
use crate::error::DomainError;
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration for a registry host (e.g. the shell).
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LingoConfigInner {
    /// Culture activated after the initial registrations; unset means default paths.
    pub culture: Option<Culture>,
    pub logging: LoggingConfig,
    pub resources: ResourcesConfig,
    pub dictionaries: Vec<DictionaryConfig>,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct LingoConfig {
    #[serde(flatten, default)]
    inner: Arc<LingoConfigInner>,
}

impl Deref for LingoConfig {
    type Target = LingoConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for LingoConfig {
    fn deref_mut(&mut self) -> &mut LingoConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging knobs consumed by the application layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn`, `error` or `off`.
    pub level: String,
    pub json: bool,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
}

/// Where the filesystem loader looks for bundles.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    pub root: PathBuf,
}

/// One `[[dictionaries]]` entry.
///
/// Either `path` (not localized) or `default_culture` + `cultures` must be set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    pub name: String,
    pub path: Option<String>,
    pub default_culture: Option<Culture>,
    pub cultures: BTreeMap<Culture, String>,
}

impl TryFrom<&DictionaryConfig> for DictionaryDescriptor {
    type Error = DomainError;

    fn try_from(config: &DictionaryConfig) -> Result<Self, DomainError> {
        match (&config.path, &config.default_culture) {
            (None, Some(default_culture)) => Self::localized(
                config.name.clone(),
                default_culture.clone(),
                config.cultures.iter().map(|(culture, path)| (culture.clone(), path.clone())),
            ),
            (Some(_), Some(_)) => Err(DomainError::InvalidPath {
                message: "use either `path` or `default_culture` with `cultures`, not both".into(),
                context: Some(Cow::Owned(format!("Dictionary '{}'", config.name))),
            }),
            (_, None) if !config.cultures.is_empty() => Err(DomainError::MissingDefaultCulture {
                message: "cultures declared without `default_culture`".into(),
                context: Some(Cow::Owned(format!("Dictionary '{}'", config.name))),
            }),
            (Some(path), None) => Self::new(config.name.clone(), path.clone()),
            (None, None) => Err(DomainError::InvalidPath {
                message: "missing `path` or `default_culture`".into(),
                context: Some(Cow::Owned(format!("Dictionary '{}'", config.name))),
            }),
        }
    }
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, path: None }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self { root: PathBuf::from("resources") }
    }
}
