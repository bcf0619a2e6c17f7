//! Constructor helpers for `OutcomeError`.

use super::OutcomeError;

impl OutcomeError {
    /// Construct an [`OutcomeError::InvalidDescriptor`] for the
    /// descriptor carrying `code`.
    ///
    /// # Examples
    ///
    /// ```
    /// use service_outcome::OutcomeError;
    /// let e = OutcomeError::invalid_descriptor("errors.blank");
    /// assert!(matches!(e, OutcomeError::InvalidDescriptor { .. }));
    /// ```
    #[must_use]
    pub fn invalid_descriptor(code: impl Into<String>) -> Self {
        Self::InvalidDescriptor { code: code.into() }
    }

    /// Construct an [`OutcomeError::DuplicateErrorName`] for `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use service_outcome::OutcomeError;
    /// let e = OutcomeError::duplicate_error_name("expired");
    /// assert!(matches!(e, OutcomeError::DuplicateErrorName { .. }));
    /// ```
    #[must_use]
    pub fn duplicate_error_name(name: impl Into<String>) -> Self {
        Self::DuplicateErrorName { name: name.into() }
    }

    /// Construct an [`OutcomeError::ErrorsNotDeclared`] for `service`.
    #[must_use]
    pub fn errors_not_declared(service: impl Into<String>) -> Self {
        Self::ErrorsNotDeclared {
            service: service.into(),
        }
    }

    /// Construct an [`OutcomeError::UnknownErrorName`] for `name`.
    #[must_use]
    pub fn unknown_error_name(name: impl Into<String>) -> Self {
        Self::UnknownErrorName { name: name.into() }
    }
}
