//! Ordered, validated collections of declared errors.
//!
//! An [`ErrorSet`] is the descriptor table one service owns: the ordered
//! descriptors supplied at declaration time, validated so no two share a
//! name. The set backs both the generated predicates and the runtime
//! `failure_named` / `matches` lookups.

use crate::{ErrorDescriptor, Outcome, OutcomeError};

/// Immutable, ordered set of [`ErrorDescriptor`]s declared by one
/// service.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorSet {
    descriptors: Vec<ErrorDescriptor>,
}

impl ErrorSet {
    /// Builds a set from descriptors, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::DuplicateErrorName`] when two descriptors
    /// share a name. Nothing is registered in that case: the whole
    /// declaration is rejected, since name collisions would make the
    /// per-name lookup (and the generated predicates) ambiguous.
    pub fn new(
        descriptors: impl IntoIterator<Item = ErrorDescriptor>,
    ) -> Result<Self, OutcomeError> {
        let descriptors: Vec<ErrorDescriptor> = descriptors.into_iter().collect();
        for (idx, descriptor) in descriptors.iter().enumerate() {
            if descriptors
                .iter()
                .take(idx)
                .any(|earlier| earlier.name() == descriptor.name())
            {
                return Err(OutcomeError::duplicate_error_name(descriptor.name()));
            }
        }
        Ok(Self { descriptors })
    }

    /// Looks up a descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ErrorDescriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }

    /// The code declared for `name`, if present.
    #[must_use]
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.get(name).map(ErrorDescriptor::code)
    }

    /// Tests whether `outcome` is a failure carrying the code declared
    /// for `name`.
    ///
    /// Unknown names and success outcomes answer `false`.
    #[must_use]
    pub fn matches<T>(&self, name: &str, outcome: &Outcome<T>) -> bool {
        self.get(name).is_some_and(|d| outcome.matches(d))
    }

    /// Iterates the descriptors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorDescriptor> {
        self.descriptors.iter()
    }

    /// Number of declared errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// True when no errors were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a ErrorDescriptor;
    type IntoIter = std::slice::Iter<'a, ErrorDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Constructor for descriptor lists the derive macro already checked for
// duplicates at compile time. Not part of the public API surface.
#[doc(hidden)]
impl ErrorSet {
    #[must_use]
    pub fn from_validated(descriptors: Vec<ErrorDescriptor>) -> Self {
        Self { descriptors }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for set validation and lookup.

    use super::*;

    fn descriptor(name: &'static str, code: &'static str) -> ErrorDescriptor {
        ErrorDescriptor::new(name, code).unwrap_or_else(|e| panic!("{e}"))
    }

    fn payment_set() -> ErrorSet {
        ErrorSet::new([
            descriptor("card_declined", "errors.card_declined"),
            descriptor("expired", "errors.expired"),
        ])
        .unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn preserves_declaration_order() {
        let set = payment_set();
        let names: Vec<&str> = set.iter().map(ErrorDescriptor::name).collect();
        assert_eq!(names, ["card_declined", "expired"]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = ErrorSet::new([
            descriptor("expired", "errors.expired"),
            descriptor("expired", "errors.expired_again"),
        ]);
        let err = match result {
            Err(err) => err,
            Ok(_) => panic!("duplicate names should be rejected"),
        };
        assert!(matches!(
            err,
            OutcomeError::DuplicateErrorName { name } if name == "expired"
        ));
    }

    #[test]
    fn duplicate_codes_are_tolerated() {
        let set = ErrorSet::new([
            descriptor("card_declined", "errors.payment"),
            descriptor("expired", "errors.payment"),
        ]);
        assert!(set.is_ok());
    }

    #[test]
    fn looks_up_codes_by_name() {
        let set = payment_set();
        assert_eq!(set.code_for("expired"), Some("errors.expired"));
        assert_eq!(set.code_for("unknown"), None);
    }

    #[test]
    fn matches_dispatches_by_name() {
        let set = payment_set();
        let outcome: Outcome<()> = Outcome::failure("errors.expired", None);
        assert!(set.matches("expired", &outcome));
        assert!(!set.matches("card_declined", &outcome));
        assert!(!set.matches("unknown", &outcome));
        assert!(!set.matches("expired", &Outcome::success(())));
    }

    #[test]
    fn empty_sets_are_permitted() {
        let set = ErrorSet::new([]).unwrap_or_else(|e| panic!("{e}"));
        assert!(set.is_empty());
        assert_eq!(set.get("anything"), None);
    }
}
