//! Core crate for the `service_outcome` result framework.
//!
//! Service objects built on this crate return a uniform, immutable
//! [`Outcome`] value — a success flag, an opaque payload, and an optional
//! error code — instead of raising errors or returning ad-hoc tuples. Each
//! service declares a fixed set of named, coded errors and receives a
//! factory and a predicate for every declared error. The derive macro that
//! generates those per-service surfaces lives in the companion
//! `service_outcome_macros` crate.
//!
//! ```rust
//! use service_outcome::{Outcome, Service};
//!
//! #[derive(Service)]
//! #[service(error(name = "divide_by_zero", code = "errors.div_zero"))]
//! struct Division;
//!
//! impl Division {
//!     fn call(dividend: i64, divisor: i64) -> Outcome<i64> {
//!         match dividend.checked_div(divisor) {
//!             Some(quotient) => Self::success(quotient),
//!             None => Self::divide_by_zero_failure(dividend),
//!         }
//!     }
//! }
//!
//! let outcome = Division::call(10, 0);
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.error_code(), Some("errors.div_zero"));
//! ```
//!
//! # Compile-time validation
//!
//! Malformed declarations are rejected when the service is defined, not
//! when it first runs. Two errors sharing a name collide:
//!
//! ```compile_fail
//! use service_outcome::Service;
//!
//! #[derive(Service)]
//! #[service(
//!     error(name = "exhausted", code = "errors.exhausted"),
//!     error(name = "exhausted", code = "errors.exhausted_again"),
//! )]
//! struct Quota;
//! ```
//!
//! as does an empty error name:
//!
//! ```compile_fail
//! use service_outcome::Service;
//!
//! #[derive(Service)]
//! #[service(error(name = "", code = "errors.blank"))]
//! struct Blank;
//! ```
//!
//! and an error without a code:
//!
//! ```compile_fail
//! use service_outcome::Service;
//!
//! #[derive(Service)]
//! #[service(error(name = "uncoded"))]
//! struct Uncoded;
//! ```

pub use service_outcome_macros::Service;

mod descriptor;
mod error;
mod error_set;
mod outcome;
mod registry;

pub use descriptor::ErrorDescriptor;
pub use error::OutcomeError;
pub use error_set::ErrorSet;
pub use outcome::Outcome;
pub use registry::ErrorRegistry;

use std::borrow::Cow;

/// Trait implemented by types that act as service objects.
///
/// A service produces exactly one [`Outcome`] per invocation. The only
/// required method is [`Service::registry`], which hands back the
/// per-service cell holding the declared error set; the
/// `#[derive(Service)]` macro generates it, together with one
/// `<name>_failure` factory and one `is_<name>_failure` predicate per
/// declared error. Everything else is provided.
pub trait Service {
    /// Returns the per-service registry cell holding the declared errors.
    ///
    /// Implementations own the backing `static`; the registry is never
    /// shared between services and is written at most once.
    fn registry() -> &'static ErrorRegistry;

    /// Returns the frozen error set declared by this service.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::ErrorsNotDeclared`] when the service has
    /// not declared its errors yet.
    fn errors() -> Result<&'static ErrorSet, OutcomeError> {
        Self::registry()
            .get()
            .ok_or_else(|| OutcomeError::errors_not_declared(std::any::type_name::<Self>()))
    }

    /// Builds a success outcome carrying `data`.
    #[must_use]
    fn success<T>(data: impl Into<Option<T>>) -> Outcome<T> {
        Outcome::success(data)
    }

    /// Builds a failure outcome carrying an explicit `code`.
    ///
    /// This generic path stays usable even when the service never
    /// declared an error set; it needs only a code, not a declared
    /// descriptor.
    #[must_use]
    fn failure<T>(code: impl Into<Cow<'static, str>>, data: impl Into<Option<T>>) -> Outcome<T> {
        Outcome::failure(code, data)
    }

    /// Builds a failure outcome with no error code.
    ///
    /// Permitted, but discouraged by convention: an uncoded failure
    /// matches no declared error and callers can only branch on
    /// [`Outcome::is_failure`].
    #[must_use]
    fn failure_uncoded<T>(data: impl Into<Option<T>>) -> Outcome<T> {
        Outcome::failure_uncoded(data)
    }

    /// Builds a failure outcome for the declared error called `name`.
    ///
    /// This is the runtime, table-driven counterpart of the generated
    /// `<name>_failure` factories; prefer those when the error is known
    /// at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::ErrorsNotDeclared`] when the service has
    /// not declared its errors, and [`OutcomeError::UnknownErrorName`]
    /// when `name` is not in the declared set.
    fn failure_named<T>(
        name: &str,
        data: impl Into<Option<T>>,
    ) -> Result<Outcome<T>, OutcomeError> {
        let descriptor = Self::errors()?
            .get(name)
            .ok_or_else(|| OutcomeError::unknown_error_name(name))?;
        Ok(Outcome::failure(descriptor.code().to_owned(), data))
    }

    /// Tests whether `outcome` carries the code of the declared error
    /// called `name`.
    ///
    /// Success outcomes, unknown names, and undeclared services all
    /// answer `false`. This is the runtime counterpart of the generated
    /// `is_<name>_failure` predicates.
    #[must_use]
    fn matches_error<T>(outcome: &Outcome<T>, name: &str) -> bool {
        Self::registry()
            .get()
            .is_some_and(|set| set.matches(name, outcome))
    }
}
