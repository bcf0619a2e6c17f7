//! Declared-error descriptors.
//!
//! An [`ErrorDescriptor`] names one recognised failure kind for a service:
//! a symbolic `name` unique within that service's declaration, and an
//! opaque `code` attached to every outcome of that error. Descriptors are
//! created once, when a service declares its errors, and never mutated.

use std::borrow::Cow;

use crate::OutcomeError;

/// Immutable `{name, code}` pair describing one declared error.
///
/// Fields are [`Cow`]s so descriptors emitted by the derive macro borrow
/// string literals while runtime declarations may own heap strings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorDescriptor {
    name: Cow<'static, str>,
    code: Cow<'static, str>,
}

impl ErrorDescriptor {
    /// Constructs a descriptor, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidDescriptor`] when `name` is empty.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
    ) -> Result<Self, OutcomeError> {
        let name = name.into();
        let code = code.into();
        if name.is_empty() {
            return Err(OutcomeError::invalid_descriptor(code));
        }
        Ok(Self { name, code })
    }

    /// Symbolic name, unique within one service's declared error set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classification code attached to outcomes of this error.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

// Constructor for input the derive macro already validated at compile
// time. Not part of the public API surface.
#[doc(hidden)]
impl ErrorDescriptor {
    #[must_use]
    pub fn from_validated(name: &'static str, code: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            code: Cow::Borrowed(code),
        }
    }
}
