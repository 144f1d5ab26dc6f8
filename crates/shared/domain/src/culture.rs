use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_SUBTAG_LEN: usize = 8;
const MIN_LANGUAGE_LEN: usize = 2;

/// A culture (locale) tag such as `ru-RU`, `en` or `zh-Hant-TW`.
///
/// Tags are stored in canonical casing (language lower, script title, region
/// upper), so `EN_us` and `en-US` are the same culture. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Culture(Arc<str>);

impl Culture {
    /// Parses and canonicalizes a culture tag.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidCulture`] for empty or malformed tags.
    pub fn parse(tag: impl AsRef<str>) -> Result<Self, DomainError> {
        Self::try_from(tag.as_ref())
    }

    /// The canonical tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`"en"` for `en-US`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl TryFrom<&str> for Culture {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, DomainError> {
        let tag = value.trim();

        if tag.is_empty() {
            return Err(DomainError::InvalidCulture {
                message: "EMPTY".into(),
                context: Some("Culture tag cannot be empty".into()),
            });
        }

        let mut canonical = String::with_capacity(tag.len());
        let mut in_extension = false;
        for (index, subtag) in tag.split(['-', '_']).enumerate() {
            if subtag.is_empty()
                || subtag.len() > MAX_SUBTAG_LEN
                || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(invalid(tag, "Malformed subtag"));
            }

            if index == 0 {
                if subtag.len() < MIN_LANGUAGE_LEN || !subtag.chars().all(|c| c.is_ascii_alphabetic())
                {
                    return Err(invalid(tag, "Language subtag must be 2-8 letters"));
                }
                canonical.push_str(&subtag.to_ascii_lowercase());
                continue;
            }

            canonical.push('-');
            // Script and region casing stop at the first singleton (`u`, `x`, ...).
            in_extension |= subtag.len() == 1;
            let alphabetic = !in_extension && subtag.chars().all(|c| c.is_ascii_alphabetic());
            match subtag.len() {
                2 if alphabetic => canonical.push_str(&subtag.to_ascii_uppercase()),
                4 if alphabetic => {
                    let (head, tail) = subtag.split_at(1);
                    canonical.push_str(&head.to_ascii_uppercase());
                    canonical.push_str(&tail.to_ascii_lowercase());
                },
                _ => canonical.push_str(&subtag.to_ascii_lowercase()),
            }
        }

        Ok(Self(canonical.into()))
    }
}

impl TryFrom<String> for Culture {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, DomainError> {
        Self::try_from(value.as_str())
    }
}

impl FromStr for Culture {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<Culture> for String {
    fn from(culture: Culture) -> Self {
        culture.0.as_ref().to_owned()
    }
}

impl AsRef<str> for Culture {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn invalid(tag: &str, reason: &'static str) -> DomainError {
    DomainError::InvalidCulture {
        message: Cow::Owned(tag.to_owned()),
        context: Some(Cow::Borrowed(reason)),
    }
}
