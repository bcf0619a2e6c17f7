//! Per-service, one-time declaration cells.
//!
//! Each service owns exactly one `static` [`ErrorRegistry`]; there is no
//! global lookup. The registry freezes the service's [`ErrorSet`] on the
//! first declaration and hands the frozen set back on every later call,
//! so repeated configuration is idempotent and the predicate and factory
//! surfaces can never drift apart.

use std::sync::OnceLock;

use crate::{ErrorDescriptor, ErrorSet, OutcomeError};

/// One-time cell holding a service's declared error set.
///
/// The constructor is `const` so services hold the registry in a
/// `static`; the cell is written at most once, and concurrent first-time
/// declarations are raced through the underlying [`OnceLock`] so exactly
/// one set survives.
#[derive(Debug)]
pub struct ErrorRegistry {
    set: OnceLock<ErrorSet>,
}

impl ErrorRegistry {
    /// Creates an empty, undeclared registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            set: OnceLock::new(),
        }
    }

    /// Declares the error set, freezing it on first use.
    ///
    /// The first successful declaration wins. Later declarations are
    /// no-ops returning the frozen set; when the rejected descriptors
    /// differ from the frozen ones a warning is emitted, since the
    /// caller's declaration is being ignored rather than merged.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::DuplicateErrorName`] when two descriptors
    /// share a name; the declaration then registers nothing, and an
    /// earlier frozen set (if any) is left untouched.
    pub fn declare(
        &self,
        descriptors: impl IntoIterator<Item = ErrorDescriptor>,
    ) -> Result<&ErrorSet, OutcomeError> {
        let candidate = ErrorSet::new(descriptors)?;
        let frozen = self.set.get_or_init(|| candidate.clone());
        if *frozen != candidate {
            tracing::warn!(
                declared = frozen.len(),
                rejected = candidate.len(),
                "ignoring re-declaration that differs from the frozen error set"
            );
        }
        Ok(frozen)
    }

    /// The frozen error set, or `None` until a declaration succeeds.
    #[must_use]
    pub fn get(&self) -> Option<&ErrorSet> {
        self.set.get()
    }

    /// True once a declaration has been frozen.
    #[must_use]
    pub fn is_declared(&self) -> bool {
        self.set.get().is_some()
    }
}

impl Default for ErrorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Declaration path for the derive macro, whose descriptor lists were
// validated at compile time. Not part of the public API surface.
#[doc(hidden)]
impl ErrorRegistry {
    pub fn declare_validated(&self, build: impl FnOnce() -> ErrorSet) -> &ErrorSet {
        self.set.get_or_init(build)
    }
}
