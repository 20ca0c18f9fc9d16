//! Validator descriptors and the constructors that build them.

use std::fmt;

/// A single declarative validation rule.
///
/// Descriptors carry data only; evaluation lives in [`validate`](super::validate).
/// Parameters exist exactly on the variants that need them, so a `MinLength`
/// without a bound cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidatorDescriptor {
    /// The trimmed value must not be empty.
    Required,
    /// The value must contain an `@`.
    Email,
    /// The trimmed value must be at least this many characters long.
    MinLength(usize),
    /// The trimmed value must be at most this many characters long.
    MaxLength(usize),
    /// The value must equal the reference exactly.
    ///
    /// The reference is captured at construction time; rebuild the descriptor
    /// when the value it mirrors changes.
    PasswordMatch(String),
}

impl ValidatorDescriptor {
    /// Returns `true` if `value` satisfies this rule.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Required => trimmed_len(value) > 0,
            Self::Email => value.contains('@'),
            Self::MinLength(min) => trimmed_len(value) >= *min,
            Self::MaxLength(max) => trimmed_len(value) <= *max,
            Self::PasswordMatch(reference) => value == reference,
        }
    }
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

impl fmt::Display for ValidatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Email => write!(f, "email address"),
            Self::MinLength(min) => write!(f, "at least {} characters", min),
            Self::MaxLength(max) => write!(f, "at most {} characters", max),
            Self::PasswordMatch(_) => write!(f, "matches password"),
        }
    }
}

/// Require a non-blank value.
pub fn required() -> ValidatorDescriptor {
    ValidatorDescriptor::Required
}

/// Require an `@` somewhere in the value.
pub fn email() -> ValidatorDescriptor {
    ValidatorDescriptor::Email
}

/// Require at least `min` characters after trimming.
pub fn min_length(min: usize) -> ValidatorDescriptor {
    ValidatorDescriptor::MinLength(min)
}

/// Require at most `max` characters after trimming.
pub fn max_length(max: usize) -> ValidatorDescriptor {
    ValidatorDescriptor::MaxLength(max)
}

/// Require the value to equal `reference`, byte for byte.
pub fn password_match(reference: impl Into<String>) -> ValidatorDescriptor {
    ValidatorDescriptor::PasswordMatch(reference.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(required(), ValidatorDescriptor::Required);
        assert_eq!(email(), ValidatorDescriptor::Email);
        assert_eq!(min_length(6), ValidatorDescriptor::MinLength(6));
        assert_eq!(max_length(10), ValidatorDescriptor::MaxLength(10));
        assert_eq!(
            password_match("secret1"),
            ValidatorDescriptor::PasswordMatch("secret1".to_string())
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // four characters, eight bytes
        assert!(max_length(4).accepts("衣服衣服"));
        assert!(!min_length(5).accepts("衣服衣服"));
    }

    #[test]
    fn test_length_ignores_surrounding_whitespace() {
        assert!(!min_length(3).accepts("  ab  "));
        assert!(max_length(2).accepts("  ab  "));
    }

    #[test]
    fn test_display() {
        assert_eq!(min_length(6).to_string(), "at least 6 characters");
        assert_eq!(max_length(10).to_string(), "at most 10 characters");
        assert_eq!(password_match("x").to_string(), "matches password");
    }
}
