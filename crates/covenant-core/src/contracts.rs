//! Entry points for working with contracts.
//!
//! The dispatching functions come in three names that do exactly the same
//! thing: [`require_that`] for preconditions at the top of a routine,
//! [`ensure_that`] for postconditions at the bottom, and [`check_that`] for
//! invariants mid-routine. The split documents intent at the call site;
//! all three gate on the same switch and dispatch identically.

use std::fmt;

use crate::assert_value::{AssertValue, Requirement};
use crate::check;
use crate::checks;
use crate::violation::ContractViolation;

/// Tells the library to enforce contracts wrapped in [`require_that`],
/// [`ensure_that`], and [`check_that`]. This is the starting state.
pub fn enable_contracts() {
    checks::enable();
}

/// Tells the library to skip over wrapped contracts.
pub fn disable_contracts() {
    checks::disable();
}

/// Whether wrapped contracts are currently enforced.
pub fn are_contracts_enabled() -> bool {
    checks::are_enabled()
}

/// Checks a set of preconditions, if contract checking is enabled.
///
/// Use at the start of a routine, before touching anything else.
pub fn require_that<P, F>(callback: F, params: P) -> Result<(), ContractViolation>
where
    F: FnOnce(P) -> Result<(), ContractViolation>,
{
    check::now(callback, params)
}

/// Checks a set of postconditions, if contract checking is enabled.
///
/// Use at the end of a routine, on the result about to be returned.
pub fn ensure_that<P, F>(callback: F, params: P) -> Result<(), ContractViolation>
where
    F: FnOnce(P) -> Result<(), ContractViolation>,
{
    check::now(callback, params)
}

/// Checks a mid-routine invariant, if contract checking is enabled.
pub fn check_that<P, F>(callback: F, params: P) -> Result<(), ContractViolation>
where
    F: FnOnce(P) -> Result<(), ContractViolation>,
{
    check::now(callback, params)
}

/// Checks that an already-evaluated expression is true for `value`.
///
/// Not gated on the switch; this is the individual contract term the gated
/// callbacks are built out of.
pub fn assert_value<T>(value: &T, expr: bool) -> Result<(), ContractViolation>
where
    T: fmt::Debug + ?Sized,
{
    AssertValue::apply(expr, None).to(value)
}

/// Like [`assert_value`], with the contract text carried into the
/// violation and its message.
pub fn assert_value_because<T>(
    value: &T,
    expr: bool,
    reason: &str,
) -> Result<(), ContractViolation>
where
    T: fmt::Debug + ?Sized,
{
    AssertValue::apply(expr, Some(reason)).to(value)
}

/// Applies `callback` to every element of `values`, in order, stopping at
/// the first violation and returning it.
///
/// A convenience iterator, not a contract primitive: it does not consult
/// the switch, and it never aggregates multiple violations.
pub fn for_all<T, I, F>(values: I, mut callback: F) -> Result<(), ContractViolation>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Result<(), ContractViolation>,
{
    for value in values {
        callback(value)?;
    }
    Ok(())
}
