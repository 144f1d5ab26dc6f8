use std::borrow::Cow;

/// A specialized [`LoaderError`] enum of this crate.
#[lingo_derive::lingo_error]
pub enum LoaderError {
    #[error("Bundle not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Malformed bundle{}: {message}", format_context(.context))]
    Malformed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unsupported bundle format{}: {message}", format_context(.context))]
    UnsupportedFormat { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid JSON{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid TOML{}: {source}", format_context(.context))]
    Toml { source: toml::de::Error, context: Option<Cow<'static, str>> },
}
