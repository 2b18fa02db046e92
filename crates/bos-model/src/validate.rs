//! Pre-dispatch validation of user input.
//!
//! Validation runs before any network traffic: an empty expression or a
//! variable count over the method's limit never reaches the service.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::method::Method;

/// Reasons an expression is rejected before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The trimmed expression was empty.
    #[error("Enter a Boolean expression first.")]
    EmptyInput,

    /// The expression uses more distinct variables than the method supports.
    #[error("{} supports at most {limit} variables.", method.label())]
    TooManyVariables {
        /// Method whose limit was exceeded.
        method: Method,
        /// The limit that was exceeded.
        limit: usize,
    },
}

/// Count distinct variables in an expression.
///
/// Every ASCII-alphabetic character counts as a variable reference; case is
/// folded so `a` and `A` are the same variable.
pub fn distinct_variable_count(expression: &str) -> usize {
    expression
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect::<BTreeSet<char>>()
        .len()
}

/// Validate an expression against a method's constraints.
pub fn validate(expression: &str, method: Method) -> Result<(), ValidationError> {
    if expression.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if let Some(limit) = method.variable_limit()
        && distinct_variable_count(expression) > limit
    {
        return Err(ValidationError::TooManyVariables { method, limit });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{ValidationError, distinct_variable_count, validate};
    use crate::method::Method;

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(validate("", Method::Simplify), Err(ValidationError::EmptyInput));
        assert_eq!(validate("   \t", Method::Qm), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn case_folds_variables() {
        assert_eq!(distinct_variable_count("a & A | b"), 2);
        assert_eq!(distinct_variable_count("(A+B)·C'"), 3);
        assert_eq!(distinct_variable_count("1 + 0"), 0);
    }

    #[test]
    fn kmap_rejects_five_variables() {
        assert_eq!(
            validate("A&B&C&D&E", Method::Kmap),
            Err(ValidationError::TooManyVariables {
                method: Method::Kmap,
                limit: 4
            })
        );
        assert!(validate("A&B&C&D", Method::Kmap).is_ok());
    }

    #[test]
    fn qm_rejects_nine_variables() {
        assert_eq!(
            validate("A&B&C&D&E&F&G&H&I", Method::Qm),
            Err(ValidationError::TooManyVariables {
                method: Method::Qm,
                limit: 8
            })
        );
        assert!(validate("A&B&C&D&E&F&G&H", Method::Qm).is_ok());
    }

    #[test]
    fn simplify_has_no_limit() {
        let expr: String = ('A'..='Z').flat_map(|c| [c, '&']).collect();
        assert!(validate(expr.trim_end_matches('&'), Method::Simplify).is_ok());
    }

    #[test]
    fn error_messages_name_the_limit() {
        let err = validate("A&B&C&D&E", Method::Kmap).unwrap_err();
        assert_eq!(err.to_string(), "Karnaugh map supports at most 4 variables.");
    }

    proptest! {
        #[test]
        fn nonempty_within_limit_always_passes(expr in "[A-Da-d&|() ]{1,40}") {
            // Only A-D can occur, so the kmap limit of 4 can never trip.
            prop_assume!(!expr.trim().is_empty());
            prop_assert!(validate(&expr, Method::Kmap).is_ok());
        }

        #[test]
        fn count_never_exceeds_alphabet(expr in ".{0,200}") {
            prop_assert!(distinct_variable_count(&expr) <= 26);
        }
    }
}
