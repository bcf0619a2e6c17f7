//! Code generation for the `Service` derive.
//!
//! Emits three pieces from a validated [`ServiceInput`]: the `Service`
//! trait implementation whose registry is a per-type `static` populated
//! exactly once, an inherent `<name>_failure` factory per declared
//! error, and a `<Type>Outcome` predicate trait implemented for every
//! `Outcome<T>` so predicates stay callable (and false) on successes.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::crate_path;
use super::parse::ServiceInput;

/// Expands the complete generated surface for one service.
pub(crate) fn expand_service(service: &ServiceInput) -> TokenStream {
    let krate = crate_path::resolve(service.crate_path.as_ref());
    let service_impl = generate_service_impl(service, &krate);
    let factories = generate_factories(service, &krate);
    let predicates = generate_predicate_trait(service, &krate);
    quote! {
        #service_impl
        #factories
        #predicates
    }
}

/// Generates the `Service` implementation with its one-time registry.
///
/// The descriptor list was validated at compile time, so the generated
/// code takes the hidden pre-validated construction path and cannot fail
/// at run time.
fn generate_service_impl(service: &ServiceInput, krate: &TokenStream) -> TokenStream {
    let ident = &service.ident;
    let descriptors = service.errors.iter().map(|e| {
        let name = &e.name;
        let code = &e.code;
        quote! { #krate::ErrorDescriptor::from_validated(#name, #code) }
    });
    quote! {
        impl #krate::Service for #ident {
            fn registry() -> &'static #krate::ErrorRegistry {
                static REGISTRY: #krate::ErrorRegistry = #krate::ErrorRegistry::new();
                REGISTRY.declare_validated(|| {
                    #krate::ErrorSet::from_validated(::std::vec::Vec::from([
                        #(#descriptors),*
                    ]))
                });
                &REGISTRY
            }
        }
    }
}

/// Generates one inherent `<name>_failure` factory per declared error.
fn generate_factories(service: &ServiceInput, krate: &TokenStream) -> TokenStream {
    if service.errors.is_empty() {
        return TokenStream::new();
    }
    let ident = &service.ident;
    let vis = &service.vis;
    let methods = service.errors.iter().map(|e| {
        let factory = format_ident!("{}_failure", e.name, span = e.span);
        let code = &e.code;
        let doc = format!(
            "Builds a failure outcome carrying the `{}` code declared for the `{}` error.",
            e.code, e.name,
        );
        quote! {
            #[doc = #doc]
            #[must_use]
            #vis fn #factory<T>(
                data: impl ::core::convert::Into<::core::option::Option<T>>,
            ) -> #krate::Outcome<T> {
                #krate::Outcome::failure(#code, data)
            }
        }
    });
    quote! {
        impl #ident {
            #(#methods)*
        }
    }
}

/// Generates the `<Type>Outcome` predicate trait and its blanket
/// implementation over `Outcome<T>`.
fn generate_predicate_trait(service: &ServiceInput, krate: &TokenStream) -> TokenStream {
    if service.errors.is_empty() {
        return TokenStream::new();
    }
    let ident = &service.ident;
    let vis = &service.vis;
    let trait_ident = format_ident!("{}Outcome", ident);
    let trait_doc = format!("Per-error predicates for outcomes produced by `{ident}`.");

    let decls = service.errors.iter().map(|e| {
        let predicate = format_ident!("is_{}_failure", e.name, span = e.span);
        let doc = format!(
            "True when the outcome is a failure carrying the `{}` code.",
            e.code,
        );
        quote! {
            #[doc = #doc]
            #[must_use]
            fn #predicate(&self) -> bool;
        }
    });
    let impls = service.errors.iter().map(|e| {
        let predicate = format_ident!("is_{}_failure", e.name, span = e.span);
        let code = &e.code;
        quote! {
            fn #predicate(&self) -> bool {
                self.error_code() == ::core::option::Option::Some(#code)
            }
        }
    });

    quote! {
        #[doc = #trait_doc]
        #vis trait #trait_ident {
            #(#decls)*
        }
        impl<T> #trait_ident for #krate::Outcome<T> {
            #(#impls)*
        }
    }
}
