#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every Shopdesk crate.
//!
//! * [`shopdesk_error`] turns a plain enum into a crate error type.
//! * [`shopdesk_slice`] turns a struct into a registrable feature slice handle.
//!
//! The examples below are `ignore`d to avoid compiling in this crate; the
//! consuming crates exercise them in their own tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for defining crate-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants holding a `source` field.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
/// * **Access denial**: an `access_denied(..)` constructor when an `AccessDenied`
///   variant with a `message` field is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants with a `source` field (or `#[source]`/`#[from]`) must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[shopdesk_derive::shopdesk_error]
/// pub enum SettingsError {
///     #[error("Access denied{}: {message}", format_context(.context))]
///     AccessDenied { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn save() -> Result<(), SettingsError> {
///     Err(SettingsError::access_denied("cookie lifetime is shared by all shops"))
/// }
/// ```
#[proc_macro_attribute]
pub fn shopdesk_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// Generates an `Arc`-backed wrapper named after the struct, moves the fields into
/// a `<Name>Inner` struct, implements `Deref` to the inner state and registers the
/// wrapper as a `FeatureSlice` of the kernel registry.
///
/// # Example
/// ```rust,ignore
/// #[shopdesk_derive::shopdesk_slice]
/// pub struct Search {
///     pub default_limit: usize,
/// }
///
/// let slice = Search::new(SearchInner { default_limit: 10 });
/// ```
#[proc_macro_attribute]
pub fn shopdesk_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
