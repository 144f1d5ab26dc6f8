use crate::culture::Culture;
use crate::error::DomainError;
use crate::resolver::CultureResolver;
use fxhash::FxHashMap;
use std::borrow::Cow;

/// Culture → path table of a localized dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localization {
    default_culture: Culture,
    paths: FxHashMap<Culture, String>,
}

impl Localization {
    /// The culture whose path doubles as the descriptor's default path.
    #[must_use]
    pub const fn default_culture(&self) -> &Culture {
        &self.default_culture
    }

    /// Exact-match lookup of a culture's path.
    #[must_use]
    pub fn path(&self, culture: &Culture) -> Option<&str> {
        self.paths.get(culture).map(String::as_str)
    }

    /// All `(culture, path)` pairs sorted by culture tag.
    #[must_use]
    pub fn entries(&self) -> Vec<(&Culture, &str)> {
        let mut entries: Vec<_> =
            self.paths.iter().map(|(culture, path)| (culture, path.as_str())).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

/// Immutable description of a logical dictionary: its name plus either one
/// default path or a culture → path table anchored at a default culture.
///
/// Registries compare descriptors by instance (`Arc::ptr_eq`), never by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryDescriptor {
    name: String,
    default_path: String,
    localization: Option<Localization>,
}

impl DictionaryDescriptor {
    /// A dictionary that is not localized: every culture resolves to `path`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidName`] or [`DomainError::InvalidPath`] for empty values.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Result<Self, DomainError> {
        let name = validate_name(name.into())?;
        let default_path = validate_path(&name, path.into())?;
        Ok(Self { name, default_path, localization: None })
    }

    /// A localized dictionary.
    ///
    /// `default_culture` must be one of the keys in `paths`; its path becomes
    /// the default path used when no culture is active or none matches.
    ///
    /// # Errors
    /// Returns [`DomainError::MissingDefaultCulture`] when `paths` has no entry
    /// for `default_culture`, [`DomainError::InvalidName`] /
    /// [`DomainError::InvalidPath`] for empty values, and
    /// [`DomainError::InvalidPath`] when a culture appears twice (tags compare
    /// after canonicalization, so `en-us` and `EN-US` collide).
    pub fn localized<I, P>(
        name: impl Into<String>,
        default_culture: Culture,
        paths: I,
    ) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (Culture, P)>,
        P: Into<String>,
    {
        let name = validate_name(name.into())?;

        let mut table = FxHashMap::default();
        for (culture, path) in paths {
            let path = validate_path(&name, path.into())?;
            if table.contains_key(&culture) {
                return Err(DomainError::InvalidPath {
                    message: Cow::Owned(path),
                    context: Some(Cow::Owned(format!("Dictionary '{name}' lists culture '{culture}' twice"))),
                });
            }
            table.insert(culture, path);
        }

        let default_path = table.get(&default_culture).cloned().ok_or_else(|| {
            DomainError::MissingDefaultCulture {
                message: Cow::Owned(default_culture.to_string()),
                context: Some(Cow::Owned(format!("Dictionary '{name}'"))),
            }
        })?;

        Ok(Self {
            name,
            default_path,
            localization: Some(Localization { default_culture, paths: table }),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    /// The culture table, `None` when the dictionary is not localized.
    #[must_use]
    pub const fn localization(&self) -> Option<&Localization> {
        self.localization.as_ref()
    }

    #[must_use]
    pub fn default_culture(&self) -> Option<&Culture> {
        self.localization.as_ref().map(Localization::default_culture)
    }

    #[must_use]
    pub const fn is_localized(&self) -> bool {
        self.localization.is_some()
    }

    /// Physical path for `culture`; see [`CultureResolver::resolve`].
    #[must_use]
    pub fn path_for(&self, culture: Option<&Culture>) -> &str {
        CultureResolver::resolve(self, culture)
    }
}

fn validate_name(name: String) -> Result<String, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName {
            message: "EMPTY".into(),
            context: Some("Dictionary name cannot be empty".into()),
        });
    }
    Ok(name)
}

fn validate_path(name: &str, path: String) -> Result<String, DomainError> {
    if path.trim().is_empty() {
        return Err(DomainError::InvalidPath {
            message: "EMPTY".into(),
            context: Some(Cow::Owned(format!("Dictionary '{name}'"))),
        });
    }
    Ok(path)
}
