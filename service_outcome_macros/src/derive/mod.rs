//! Implementation of the `Service` derive.
//!
//! Split in the usual two halves: [`parse`] turns the derive input and
//! its `#[service(...)]` attributes into a validated description, and
//! [`generate`] emits the trait implementation, factories, and predicate
//! trait from it. Keeping the halves separate lets both be unit tested
//! without expanding a full macro invocation.

pub(crate) mod crate_path;
pub(crate) mod generate;
pub(crate) mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Expands the derive input into the generated service surface.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let service = parse::parse_input(input)?;
    Ok(generate::expand_service(&service))
}
