use lingo_domain::DomainError;
use lingo_event_bus::NotifierError;
use lingo_loader::LoaderError;
use std::borrow::Cow;

/// A specialized [`RegistryError`] enum of this crate.
#[lingo_derive::lingo_error]
pub enum RegistryError {
    /// Another descriptor instance already owns the name.
    #[error("Dictionary name already registered{}: {message}", format_context(.context))]
    DuplicateName { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Dictionary not registered{}: {message}", format_context(.context))]
    DictionaryNotRegistered { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Resource not found{}: {message}", format_context(.context))]
    ResourceNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The stored value cannot be read as the requested type.
    #[error("Resource type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Bundle load failed{}: {source}", format_context(.context))]
    BundleLoad { source: LoaderError, context: Option<Cow<'static, str>> },

    #[error("Invalid dictionary definition{}: {source}", format_context(.context))]
    Domain { source: DomainError, context: Option<Cow<'static, str>> },

    #[error("Change notifier failure{}: {source}", format_context(.context))]
    Notifier { source: NotifierError, context: Option<Cow<'static, str>> },
}
