//! Gated dispatch of contract bodies.
//!
//! This is the performance lever of the whole library: while the switch is
//! off, a wrapped contract costs one flag read and nothing inside the body,
//! including any requirement construction, runs at all.

use crate::checks;
use crate::violation::ContractViolation;

/// Runs `callback` with `params` if contract checking is enabled.
///
/// `params` is whatever argument bundle the callback expects: a single
/// value, a tuple, or `()`. When the switch is on the callback runs exactly
/// once with the bundle passed through unchanged, and its result propagates
/// unmodified. When the switch is off the callback is never invoked.
pub fn now<P, F>(callback: F, params: P) -> Result<(), ContractViolation>
where
    F: FnOnce(P) -> Result<(), ContractViolation>,
{
    if !checks::are_enabled() {
        return Ok(());
    }
    callback(params)
}
