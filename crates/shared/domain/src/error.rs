use std::borrow::Cow;

/// Validation failures for domain values.
#[lingo_derive::lingo_error]
pub enum DomainError {
    /// The culture tag is empty or not shaped like `ll[-Script][-RR]`.
    #[error("Invalid culture{}: {message}", format_context(.context))]
    InvalidCulture { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A dictionary name is empty.
    #[error("Invalid dictionary name{}: {message}", format_context(.context))]
    InvalidName { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A physical path is empty or the path declaration is ambiguous.
    #[error("Invalid dictionary path{}: {message}", format_context(.context))]
    InvalidPath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A localized descriptor names a default culture that has no path.
    #[error("Default culture has no path{}: {message}", format_context(.context))]
    MissingDefaultCulture { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
