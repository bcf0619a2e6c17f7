//! Coverage of the runtime declaration path: services that wire their
//! own registry `static` instead of using the derive, the
//! freeze-on-first-declaration behaviour, and the misuse errors.

use service_outcome::{
    ErrorDescriptor, ErrorRegistry, ErrorSet, Outcome, OutcomeError, Service,
};

fn descriptor(name: &'static str, code: &'static str) -> ErrorDescriptor {
    ErrorDescriptor::new(name, code).unwrap_or_else(|e| panic!("{e}"))
}

struct Undeclared;

static UNDECLARED_REGISTRY: ErrorRegistry = ErrorRegistry::new();

impl Service for Undeclared {
    fn registry() -> &'static ErrorRegistry {
        &UNDECLARED_REGISTRY
    }
}

struct Enrolment;

static ENROLMENT_REGISTRY: ErrorRegistry = ErrorRegistry::new();

impl Service for Enrolment {
    fn registry() -> &'static ErrorRegistry {
        &ENROLMENT_REGISTRY
    }
}

struct Frozen;

static FROZEN_REGISTRY: ErrorRegistry = ErrorRegistry::new();

impl Service for Frozen {
    fn registry() -> &'static ErrorRegistry {
        &FROZEN_REGISTRY
    }
}

#[test]
fn undeclared_services_fail_fast_on_declared_error_surfaces() {
    let err = match Undeclared::errors() {
        Err(err) => err,
        Ok(_) => panic!("errors() should fail before declaration"),
    };
    assert!(matches!(err, OutcomeError::ErrorsNotDeclared { .. }));

    let named: Result<Outcome<()>, OutcomeError> = Undeclared::failure_named("anything", None);
    assert!(matches!(
        named,
        Err(OutcomeError::ErrorsNotDeclared { .. })
    ));
}

#[test]
fn the_generic_failure_path_needs_no_declaration() {
    let outcome: Outcome<()> = Undeclared::failure("errors.unknown", None);
    assert!(outcome.is_failure());
    assert_eq!(outcome.error_code(), Some("errors.unknown"));
    assert!(!Undeclared::matches_error(&outcome, "anything"));

    let ok = Undeclared::success("done");
    assert!(ok.is_success());
}

#[test]
fn runtime_declaration_enables_the_named_surfaces() {
    Enrolment::registry()
        .declare([
            descriptor("already_enrolled", "errors.already_enrolled"),
            descriptor("course_full", "errors.course_full"),
        ])
        .unwrap_or_else(|e| panic!("{e}"));

    let outcome: Outcome<u32> = Enrolment::failure_named("course_full", 9)
        .unwrap_or_else(|e| panic!("{e}"));
    assert!(outcome.is_failure());
    assert_eq!(outcome.error_code(), Some("errors.course_full"));
    assert_eq!(outcome.data(), Some(&9));
    assert!(Enrolment::matches_error(&outcome, "course_full"));
    assert!(!Enrolment::matches_error(&outcome, "already_enrolled"));
}

#[test]
fn re_declaration_does_not_create_a_second_set() {
    let first = Frozen::registry()
        .declare([descriptor("timeout", "errors.timeout")])
        .unwrap_or_else(|e| panic!("{e}"));
    let second = Frozen::registry()
        .declare([descriptor("rejected", "errors.rejected")])
        .unwrap_or_else(|e| panic!("{e}"));

    assert!(std::ptr::eq(first, second));
    assert_eq!(second.code_for("timeout"), Some("errors.timeout"));
    assert_eq!(second.code_for("rejected"), None);

    let before_and_after: Outcome<()> = Outcome::failure("errors.timeout", None);
    assert!(Frozen::matches_error(&before_and_after, "timeout"));
    assert!(!Frozen::matches_error(&before_and_after, "rejected"));
}

#[test]
fn duplicate_names_register_nothing() {
    let registry = ErrorRegistry::new();
    let result = registry.declare([
        descriptor("expired", "errors.a"),
        descriptor("expired", "errors.b"),
    ]);
    assert!(matches!(
        result,
        Err(OutcomeError::DuplicateErrorName { name }) if name == "expired"
    ));
    assert!(!registry.is_declared());
}

#[test]
fn error_sets_reject_duplicates_eagerly() {
    let result = ErrorSet::new([
        descriptor("expired", "errors.a"),
        descriptor("expired", "errors.b"),
    ]);
    assert!(result.is_err());
}
