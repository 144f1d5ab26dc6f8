use std::borrow::Cow;

/// Errors that can occur while wiring notifier subscriptions.
#[lingo_derive::lingo_error]
pub enum NotifierError {
    /// Capacity must be greater than zero for channel subscriptions.
    #[error("Invalid capacity{}: {message}", format_context(.context))]
    InvalidCapacity { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
