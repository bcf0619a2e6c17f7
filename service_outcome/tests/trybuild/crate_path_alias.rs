use service_outcome::{Outcome, Service};

/// Verifies that `#[service(crate = "service_outcome")]` is accepted and
/// the generated code compiles correctly. Uses the real crate name as a
/// self-referential alias so no workspace reconfiguration is needed.
#[derive(Service)]
#[service(
    crate = "service_outcome",
    error(name = "missed", code = "errors.missed")
)]
struct Lookup;

fn main() {
    let outcome: Outcome<u32> = Lookup::missed_failure(None);
    assert!(outcome.is_failure());
    assert!(outcome.is_missed_failure());
    assert!(Lookup::errors().is_ok());
}
