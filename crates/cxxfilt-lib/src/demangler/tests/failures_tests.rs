use crate::{Error, demangle};

#[test]
fn missing_prefix_is_rejected_up_front() {
    assert_eq!(demangle("fun"), Err(Error::NotMangled));
    assert_eq!(demangle("Z3funi"), Err(Error::NotMangled));
    assert_eq!(demangle(""), Err(Error::NotMangled));
}

#[test]
fn forward_substitution_reference() {
    // S1_ names the third entry while only two exist
    assert_eq!(demangle("_Z3fooPKiS1_"), Err(Error::UnknownSubstitution));
}

#[test]
fn template_parameter_before_any_are_bound() {
    assert_eq!(demangle("_Z1fIT_EvT_"), Err(Error::UnknownSubstitution));
}

#[test]
fn malformed_substitution() {
    assert_eq!(demangle("_ZSA"), Err(Error::Syntax));
    assert_eq!(demangle("_ZNSA"), Err(Error::Syntax));
}

#[test]
fn missing_encoding() {
    assert_eq!(demangle("_Za"), Err(Error::Syntax));
    assert_eq!(demangle("_ZNT"), Err(Error::Syntax));
}

#[test]
fn truncated_inputs() {
    assert_eq!(demangle("_ZN1fIL_"), Err(Error::Syntax));
    assert_eq!(demangle("_ZmmAtl"), Err(Error::Syntax));
}

#[test]
fn malformed_function_types() {
    assert_eq!(demangle("_ZZaSFvOEES_"), Err(Error::Syntax));
    assert_eq!(demangle("_ZZeqFvOEES_z"), Err(Error::Syntax));
}

#[test]
fn length_prefix_past_the_end() {
    assert_eq!(demangle("_Z1aMark"), Err(Error::Syntax));
    assert_eq!(demangle("_Z9ab"), Err(Error::Syntax));
}

#[test]
fn function_nesting_is_bounded() {
    // five concurrently open parameter lists, one per function type
    assert_eq!(
        demangle("_Z1fPFvFvFvFvFvvEEEEE"),
        Err(Error::NestingLimitExceeded)
    );
}

#[test]
fn pointer_recursion_is_bounded() {
    let symbol = format!("_Z1f{}i", "P".repeat(600));
    assert_eq!(demangle(&symbol), Err(Error::NestingLimitExceeded));
}

#[test]
fn failures_are_stable_across_calls() {
    assert_eq!(demangle("_ZSA"), demangle("_ZSA"));
}
