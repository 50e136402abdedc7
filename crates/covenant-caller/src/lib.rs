//! Call-site attribution for the Covenant contracts library.
//!
//! A contract violation is only diagnosable if it points at the application
//! code that declared the contract, not at the contract library's own
//! plumbing. This crate recovers [`Frame`]s from a rendered
//! `std::backtrace::Backtrace` and runs them through a configurable
//! [`FrameFilter`] to find the first frame that belongs to the caller.
//!
//! Frames are normalized innermost-first: index 0 is the most recent call,
//! so the first frame surviving the filter is the nearest application frame.

pub mod filter;
pub mod frame;

pub use filter::FrameFilter;
pub use frame::{parse_backtrace, Frame, FrameKind};
