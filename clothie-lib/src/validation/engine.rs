//! Conjunctive evaluation of descriptor lists.

use super::ValidatorDescriptor;

/// Apply every rule in `validators` to `value`.
///
/// Rules are combined with logical AND, so order does not matter and an empty
/// list always validates. The function is total: a rejected value is simply
/// `false`.
pub fn validate(value: &str, validators: &[ValidatorDescriptor]) -> bool {
    validators.iter().all(|validator| validator.accepts(value))
}

/// Collect the rules in `validators` that reject `value`, in declaration order.
pub fn failing<'a>(value: &str, validators: &'a [ValidatorDescriptor]) -> Vec<&'a ValidatorDescriptor> {
    validators
        .iter()
        .filter(|validator| !validator.accepts(value))
        .collect()
}
