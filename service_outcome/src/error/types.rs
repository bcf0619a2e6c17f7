//! Primary error enum for framework misuse.

use thiserror::Error;

/// Errors raised when the framework is configured or queried
/// incorrectly.
///
/// These surface at service definition time (malformed declarations) or
/// on the runtime lookup paths (`failure_named`, `errors`). Expected
/// business failures never take this form — they travel as failure
/// outcomes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// A declared error descriptor is malformed.
    #[error("invalid error descriptor for code '{code}': name must not be empty")]
    InvalidDescriptor {
        /// Code of the offending descriptor, kept for identification
        /// since the descriptor has no usable name.
        code: String,
    },

    /// Two descriptors in one declaration share a name.
    #[error("duplicate error name '{name}' in a single declaration")]
    DuplicateErrorName {
        /// The colliding name.
        name: String,
    },

    /// A declared-error surface was used before any declaration.
    #[error("service '{service}' has not declared its errors")]
    ErrorsNotDeclared {
        /// Type name of the offending service.
        service: String,
    },

    /// A named lookup asked for an error outside the declared set.
    #[error("no declared error named '{name}'")]
    UnknownErrorName {
        /// The unrecognised name.
        name: String,
    },
}
