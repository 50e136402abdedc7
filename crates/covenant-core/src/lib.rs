//! Design-by-contract checks for Rust code.
//!
//! Calling code declares preconditions, postconditions, and mid-routine
//! invariants; the declarations are enforced only while the process-wide
//! switch is on. A condition that does not hold produces a
//! [`ContractViolation`] carrying the failing value, the optional contract
//! text, and the call site responsible, as structured fields.
//!
//! The usual entry points are the facade functions in [`contracts`],
//! re-exported at the crate root:
//!
//! ```
//! use covenant_core::{assert_value, require_that};
//!
//! fn divide(a: u32, b: u32) -> Result<u32, covenant_core::ContractViolation> {
//!     require_that(|b: &u32| assert_value(b, *b > 0), &b)?;
//!     Ok(a / b)
//! }
//!
//! assert_eq!(divide(10, 2).unwrap(), 5);
//! assert!(divide(10, 0).is_err());
//! ```

pub mod assert_value;
pub mod check;
pub mod checks;
pub mod contracts;
pub mod violation;

pub use assert_value::{AssertValue, Requirement};
pub use contracts::{
    are_contracts_enabled, assert_value, assert_value_because, check_that, disable_contracts,
    enable_contracts, ensure_that, for_all, require_that,
};
pub use violation::{ContractViolation, Diagnostic};
