use lingo_derive::lingo_error;
use std::borrow::Cow;

#[lingo_error]
pub enum DemoError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing entry{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read(path: &str) -> Result<String, DemoError> {
    std::fs::read_to_string(path).context("reading demo file")
}

fn main() {
    let missing = DemoError::Missing { message: "greeting".into(), context: None };
    assert_eq!(missing.kind(), "Missing");

    let internal: DemoError = "boom".into();
    assert_eq!(internal.kind(), "Internal");

    let err = read("/definitely/not/here").unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert!(err.to_string().contains("(reading demo file)"));
}
