//! Procedural macros for `service_outcome`.
//!
//! The `Service` derive reads `#[service(...)]` attributes, validates
//! the declared error descriptors at compile time, and emits the
//! per-service surface: the `Service` trait implementation backed by a
//! one-time registry, one `<name>_failure` factory per declared error,
//! and a `<Type>Outcome` predicate trait implemented for every
//! `Outcome<T>`.
//!
//! Declarations are validated where they are written: an empty error
//! name, a missing `name` or `code` key, and two errors sharing a name
//! are all rejected with an error pointing at the offending attribute.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `service_outcome::Service`.
///
/// ```ignore
/// #[derive(Service)]
/// #[service(
///     error(name = "divide_by_zero", code = "errors.div_zero"),
///     error(name = "overflow", code = "errors.overflow"),
/// )]
/// struct Division;
/// ```
///
/// Supported keys inside `#[service(...)]`:
///
/// - `error(name = "...", code = "...")` — declares one coded error;
///   repeatable, order-preserving.
/// - `crate = "..."` — re-points generated paths when the library crate
///   is renamed in the consumer's `Cargo.toml`.
#[proc_macro_derive(Service, attributes(service))]
pub fn derive_service(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
