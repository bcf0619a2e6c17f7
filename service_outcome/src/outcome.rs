//! The uniform result value services return.
//!
//! An [`Outcome`] is constructed exactly once, by a factory, and never
//! mutated: a success flag, an optional payload, and an optional error
//! code. Success outcomes never carry a code. Callers branch on
//! [`Outcome::is_success`] / [`Outcome::is_failure`] (or the per-service
//! generated predicates) and then read the payload.

use std::borrow::Cow;

use serde::Serialize;

use crate::ErrorDescriptor;

/// Immutable success/failure value carrying a payload and an optional
/// error code.
///
/// `Serialize` is derived so outcomes can cross an API boundary;
/// `Deserialize` is deliberately absent — outcomes must only ever be
/// built through the factories, which uphold the invariant that a
/// success never carries an error code.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Outcome<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<Cow<'static, str>>,
}

impl<T> Outcome<T> {
    /// Builds a success outcome.
    ///
    /// Accepts either a payload or `None`:
    ///
    /// ```rust
    /// use service_outcome::Outcome;
    ///
    /// let with_payload = Outcome::success(42);
    /// assert_eq!(with_payload.data(), Some(&42));
    ///
    /// let empty: Outcome<u32> = Outcome::success(None);
    /// assert!(empty.is_success());
    /// assert_eq!(empty.data(), None);
    /// ```
    #[must_use]
    pub fn success(data: impl Into<Option<T>>) -> Self {
        Self {
            success: true,
            data: data.into(),
            error_code: None,
        }
    }

    /// Builds a failure outcome carrying `code`.
    #[must_use]
    pub fn failure(code: impl Into<Cow<'static, str>>, data: impl Into<Option<T>>) -> Self {
        Self {
            success: false,
            data: data.into(),
            error_code: Some(code.into()),
        }
    }

    /// Builds a failure outcome with no error code.
    ///
    /// Permitted, but discouraged by convention: such an outcome matches
    /// no declared error.
    #[must_use]
    pub fn failure_uncoded(data: impl Into<Option<T>>) -> Self {
        Self {
            success: false,
            data: data.into(),
            error_code: None,
        }
    }

    /// True when the outcome was built by a success factory.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// True when the outcome was built by a failure factory.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.success
    }

    /// Borrows the payload, if one was attached.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the outcome and yields the payload, if one was attached.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// The error code attached at construction, if any.
    ///
    /// Always `None` for success outcomes.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// Tests whether this outcome is a failure carrying `descriptor`'s
    /// code.
    ///
    /// Success outcomes answer `false` regardless of the descriptor.
    #[must_use]
    pub fn matches(&self, descriptor: &ErrorDescriptor) -> bool {
        !self.success && self.error_code.as_deref() == Some(descriptor.code())
    }
}
