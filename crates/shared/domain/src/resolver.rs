//! Culture → physical path resolution.

use crate::culture::Culture;
use crate::descriptor::DictionaryDescriptor;

/// Maps a descriptor and the active culture to the physical path to load.
#[derive(Debug)]
pub struct CultureResolver;

impl CultureResolver {
    /// Resolves the path for `culture`.
    ///
    /// * No culture, or a descriptor without a culture table: the default path.
    /// * A culture present in the table: its path. Matching is exact, `en-US`
    ///   never falls back to `en`.
    /// * Anything else: the default path.
    ///
    /// # Examples
    /// ```rust
    /// use lingo_domain::{Culture, CultureResolver, DictionaryDescriptor};
    ///
    /// let ru = Culture::parse("ru-RU").unwrap();
    /// let en = Culture::parse("en-US").unwrap();
    /// let d = DictionaryDescriptor::localized(
    ///     "strings",
    ///     ru.clone(),
    ///     [(ru, "ru.json"), (en.clone(), "en.json")],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(CultureResolver::resolve(&d, None), "ru.json");
    /// assert_eq!(CultureResolver::resolve(&d, Some(&en)), "en.json");
    /// assert_eq!(CultureResolver::resolve(&d, Some(&Culture::parse("en").unwrap())), "ru.json");
    /// ```
    #[must_use]
    pub fn resolve<'a>(descriptor: &'a DictionaryDescriptor, culture: Option<&Culture>) -> &'a str {
        culture
            .zip(descriptor.localization())
            .and_then(|(culture, localization)| localization.path(culture))
            .unwrap_or_else(|| descriptor.default_path())
    }
}
