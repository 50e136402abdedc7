//! The value-assertion requirement.
//!
//! A requirement holds one already-evaluated contract term. The caller
//! computes the boolean before building the requirement, so short-circuiting
//! and any side effects in the condition are entirely the caller's business;
//! evaluation here only inspects the stored result. Keeping the evaluation
//! eager is part of the observable contract, so [`AssertValue`] stores a
//! plain `bool`, never a closure to re-run later.

use std::fmt;

use crate::violation::ContractViolation;

/// One contract term, evaluatable against a value.
pub trait Requirement<T: ?Sized> {
    /// Checks `value` under the default field name `"value"`.
    fn to(&self, value: &T) -> Result<(), ContractViolation> {
        self.to_field(value, "value")
    }

    /// Checks `value`, attributing any violation to `field`.
    fn to_field(&self, value: &T, field: &str) -> Result<(), ContractViolation>;
}

/// Requirement that a caller-computed expression came out `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertValue {
    expr: bool,
    reason: Option<String>,
}

impl AssertValue {
    /// Wraps an already-evaluated expression and the contract text
    /// explaining why it must be true. Constant-time, never fails.
    pub fn apply(expr: bool, reason: Option<&str>) -> Self {
        AssertValue {
            expr,
            reason: reason.map(str::to_string),
        }
    }
}

impl<T> Requirement<T> for AssertValue
where
    T: fmt::Debug + ?Sized,
{
    /// Succeeds iff the stored expression is `true`; otherwise hands the
    /// rejected value and the stored reason to the violation builder.
    fn to_field(&self, value: &T, field: &str) -> Result<(), ContractViolation> {
        if self.expr {
            Ok(())
        } else {
            Err(ContractViolation::from_bad_value(
                value,
                field,
                self.reason.as_deref(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_expression_passes_any_value() {
        assert!(AssertValue::apply(true, None).to(&5).is_ok());
        assert!(AssertValue::apply(true, None).to(&"anything").is_ok());
        assert!(AssertValue::apply(true, Some("ignored")).to(&vec![1, 2]).is_ok());
    }

    #[test]
    fn false_expression_rejects_the_value() {
        let err = AssertValue::apply(false, None).to(&5).unwrap_err();
        assert_eq!(err.rejected_value(), "5");
    }

    #[test]
    fn reason_travels_into_the_violation() {
        let err = AssertValue::apply(false, Some("must be positive"))
            .to(&-1)
            .unwrap_err();
        assert_eq!(err.reason(), Some("must be positive"));
    }

    #[test]
    fn field_name_defaults_to_value() {
        let err = AssertValue::apply(false, None).to(&5).unwrap_err();
        assert_eq!(err.field(), "value");
    }

    #[test]
    fn explicit_field_name_is_recorded() {
        let err = AssertValue::apply(false, None)
            .to_field(&17, "retries")
            .unwrap_err();
        assert_eq!(err.field(), "retries");
    }

    #[test]
    fn requirement_is_reusable_across_values() {
        let requirement = AssertValue::apply(false, Some("never"));
        assert!(requirement.to(&1).is_err());
        assert!(requirement.to(&2).is_err());
    }
}
