//! The process-wide contract switch.
//!
//! One shared flag decides whether wrapped contract bodies run at all. It
//! starts on, and only [`enable`] and [`disable`] ever write it.
//!
//! Thread-safety: the flag is a single `AtomicBool` accessed with relaxed
//! ordering. Concurrent writers race benignly, last writer wins, and a
//! concurrent reader sees whichever value is current; the switch promises
//! no ordering relative to any other memory. All access goes through the
//! three functions here, so tests can reset the state deterministically.

use std::sync::atomic::{AtomicBool, Ordering};

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Turns contract checking on. Idempotent.
pub fn enable() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Turns contract checking off. Idempotent.
pub fn disable() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Whether wrapped contract bodies currently run.
pub fn are_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}
