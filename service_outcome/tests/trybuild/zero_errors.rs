use service_outcome::{Outcome, Service};

/// Verifies that a service declaring no errors still compiles: it gets an
/// empty frozen set, the generic factories, and no generated surface.
#[derive(Service)]
struct Passthrough;

fn main() {
    let ok: Outcome<&str> = Passthrough::success("done");
    assert!(ok.is_success());

    let failed: Outcome<&str> = Passthrough::failure("errors.unknown", None);
    assert!(failed.is_failure());

    let set = match Passthrough::errors() {
        Ok(set) => set,
        Err(err) => panic!("empty declarations should still freeze: {err}"),
    };
    assert!(set.is_empty());
}
