//! Parsing and validation for the `Service` derive.
//!
//! The original sin this derive guards against is a malformed error
//! declaration surfacing at run time. Every check here — empty names,
//! missing keys, names that cannot form an identifier, duplicate names —
//! fails the build at the attribute that caused it, so a service that
//! compiles is a service whose declaration is well formed.

use heck::ToSnakeCase;
use proc_macro2::Span;
use syn::{Attribute, Data, DeriveInput, Lit, LitStr};

/// Validated description of one `#[service(...)]` declaration.
pub(crate) struct ServiceInput {
    pub ident: syn::Ident,
    pub vis: syn::Visibility,
    pub crate_path: Option<syn::Path>,
    pub errors: Vec<ErrorDecl>,
}

/// One declared error, with its name normalised to `snake_case`.
pub(crate) struct ErrorDecl {
    pub name: String,
    pub code: String,
    pub span: Span,
}

/// Parses a string literal value for `key` from a nested meta entry.
fn lit_str(meta: &syn::meta::ParseNestedMeta<'_>, key: &str) -> syn::Result<LitStr> {
    let lit = meta.value()?.parse::<Lit>()?;
    match lit {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}

/// Parses one `error(name = "...", code = "...")` entry.
fn parse_error_decl(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<ErrorDecl> {
    let mut name: Option<LitStr> = None;
    let mut code: Option<LitStr> = None;
    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("name") {
            name = Some(lit_str(&nested, "name")?);
            Ok(())
        } else if nested.path.is_ident("code") {
            code = Some(lit_str(&nested, "code")?);
            Ok(())
        } else {
            Err(nested.error("unknown error key; expected `name` or `code`"))
        }
    })?;

    let Some(name_lit) = name else {
        return Err(meta.error("error declaration is missing a `name`"));
    };
    let Some(code_lit) = code else {
        return Err(meta.error("error declaration is missing a `code`"));
    };

    let span = name_lit.span();
    let raw = name_lit.value();
    if raw.is_empty() {
        return Err(syn::Error::new(span, "error name must not be empty"));
    }
    let normalised = raw.to_snake_case();
    if syn::parse_str::<syn::Ident>(&normalised).is_err() {
        return Err(syn::Error::new(
            span,
            format!("error name `{raw}` cannot form a method identifier"),
        ));
    }
    Ok(ErrorDecl {
        name: normalised,
        code: code_lit.value(),
        span,
    })
}

/// Walks all `#[service(...)]` attributes and collects their entries.
fn parse_service_attrs(
    attrs: &[Attribute],
) -> syn::Result<(Vec<ErrorDecl>, Option<syn::Path>)> {
    let mut errors = Vec::new();
    let mut crate_path = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("service")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("error") {
                errors.push(parse_error_decl(&meta)?);
                Ok(())
            } else if meta.path.is_ident("crate") {
                let s = lit_str(&meta, "crate")?;
                crate_path = Some(syn::parse_str::<syn::Path>(&s.value()).map_err(|_| {
                    syn::Error::new(s.span(), "crate must be a valid module path")
                })?);
                Ok(())
            } else {
                Err(meta.error("unknown service attribute; expected `error(...)` or `crate`"))
            }
        })?;
    }
    Ok((errors, crate_path))
}

/// Rejects declarations whose normalised names collide.
///
/// Generated factories and predicates are keyed by name; without this
/// check a later declaration would silently shadow an earlier one.
fn reject_duplicates(errors: &[ErrorDecl]) -> syn::Result<()> {
    for (idx, decl) in errors.iter().enumerate() {
        if errors
            .iter()
            .take(idx)
            .any(|earlier| earlier.name == decl.name)
        {
            return Err(syn::Error::new(
                decl.span,
                format!("duplicate error name `{}`", decl.name),
            ));
        }
    }
    Ok(())
}

/// Gathers and validates everything the generators need.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ServiceInput> {
    if let Data::Union(data) = &input.data {
        return Err(syn::Error::new_spanned(
            data.union_token,
            "Service cannot be derived for unions",
        ));
    }
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Service cannot be derived for generic types",
        ));
    }

    let (errors, crate_path) = parse_service_attrs(&input.attrs)?;
    reject_duplicates(&errors)?;

    Ok(ServiceInput {
        ident: input.ident.clone(),
        vis: input.vis.clone(),
        crate_path,
        errors,
    })
}
