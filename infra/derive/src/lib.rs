#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the assembler workspace.
//!
//! Only one macro lives here today: [`macro@hm3_error`], which turns a plain enum into the
//! error type every pipeline crate exposes.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for stage error enums.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(..)`, implemented for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant wrapping a source error.
/// * `From<Source>` for each distinct source type (first variant wins on duplicates).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper for `#[error(..)]` strings.
///
/// # Requirements
///
/// Every variant uses named fields and carries `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[hm3_derive::hm3_error]
/// pub enum SiteError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<String, SiteError> {
///     std::fs::read_to_string(path).context(format!("Reading {}", path.display()))
/// }
/// ```
#[proc_macro_attribute]
pub fn hm3_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
