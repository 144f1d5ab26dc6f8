#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the Lingo workspace.
//!
//! ## Usage
//! Add the crate as a regular dependency of any crate that declares errors:
//! ```toml
//! [dependencies]
//! lingo-derive = { path = "../infra/derive" }
//! thiserror = "2"
//! ```
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring crate error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling `?` on upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
/// * **Kind Accessor**: Generates `fn kind(&self) -> &'static str` returning the variant
///   name, handy as a structured logging field.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping an upstream error must also carry the `context` field.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use lingo_derive::lingo_error;
/// use std::borrow::Cow;
///
/// #[lingo_error]
/// pub enum LoaderError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Resource not found{}: {message}", format_context(.context))]
///     NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoaderError> {
///     std::fs::read_to_string(path).context("Reading bundle")
/// }
///
/// assert_eq!(LoaderError::NotFound { message: "x".into(), context: None }.kind(), "NotFound");
/// ```
#[proc_macro_attribute]
pub fn lingo_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand_derive(input).into()
}
