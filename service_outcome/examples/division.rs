//! Minimal service walkthrough: declare coded errors, return outcomes,
//! branch uniformly at the call site.

use service_outcome::{Outcome, Service};

#[derive(Service)]
#[service(
    error(name = "divide_by_zero", code = "errors.div_zero"),
    error(name = "overflow", code = "errors.overflow"),
)]
struct Division;

impl Division {
    fn call(dividend: i64, divisor: i64) -> Outcome<i64> {
        if divisor == 0 {
            return Self::divide_by_zero_failure(dividend);
        }
        match dividend.checked_div(divisor) {
            Some(quotient) => Self::success(quotient),
            None => Self::overflow_failure(dividend),
        }
    }
}

fn main() {
    let divided = Division::call(84, 2);
    assert!(divided.is_success());
    assert_eq!(divided.data(), Some(&42));
    tracing::info!(quotient = ?divided.data(), "division succeeded");

    let by_zero = Division::call(84, 0);
    assert!(by_zero.is_divide_by_zero_failure());
    assert!(!by_zero.is_overflow_failure());
    assert_eq!(by_zero.error_code(), Some("errors.div_zero"));

    let overflowed = Division::call(i64::MIN, -1);
    assert!(overflowed.is_overflow_failure());

    // Callers branch on the outcome, never on a raised error.
    let message = match Division::call(9, 3) {
        outcome if outcome.is_success() => "ok",
        outcome if outcome.is_divide_by_zero_failure() => "cannot divide by zero",
        _ => "arithmetic overflow",
    };
    assert_eq!(message, "ok");
}
