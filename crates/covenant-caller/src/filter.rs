//! Filtering uninteresting frames out of a parsed backtrace.

use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// Symbol fragments that never identify application code: runtime startup,
/// unwinding, the backtrace machinery itself, and the test harness.
pub const DEFAULT_IGNORED: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "backtrace::",
    "test::",
    "__rust",
    "rust_begin_unwind",
    "__libc_start",
    "_start",
];

/// Selects the caller frame from a backtrace by skipping every frame whose
/// symbol contains one of the configured fragments.
///
/// The ignore list is configuration, not a baked-in pattern: start from
/// [`FrameFilter::default`] and append the embedding library's own module
/// prefixes with [`with_ignored`](FrameFilter::with_ignored).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameFilter {
    ignored: Vec<String>,
}

impl Default for FrameFilter {
    fn default() -> Self {
        FrameFilter::new(DEFAULT_IGNORED.iter().map(|s| s.to_string()))
    }
}

impl FrameFilter {
    /// Builds a filter from an explicit ignore list.
    pub fn new(ignored: impl IntoIterator<Item = String>) -> Self {
        FrameFilter {
            ignored: ignored.into_iter().collect(),
        }
    }

    /// Appends one symbol fragment to the ignore list.
    pub fn with_ignored(mut self, fragment: impl Into<String>) -> Self {
        self.ignored.push(fragment.into());
        self
    }

    /// The current ignore list.
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// The first frame, innermost-first, whose symbol matches no ignored
    /// fragment. `None` when every frame is library or runtime plumbing.
    pub fn caller<'a>(&self, frames: &'a [Frame]) -> Option<&'a Frame> {
        frames.iter().find(|frame| !self.is_ignored(frame))
    }

    fn is_ignored(&self, frame: &Frame) -> bool {
        self.ignored
            .iter()
            .any(|fragment| frame.function.contains(fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameKind;

    fn frame(function: &str) -> Frame {
        Frame {
            function: function.to_string(),
            file: Some("src/lib.rs".to_string()),
            line: Some(1),
            kind: FrameKind::Function,
        }
    }

    #[test]
    fn skips_runtime_frames() {
        let frames = vec![
            frame("std::backtrace::Backtrace::force_capture"),
            frame("core::ops::function::FnOnce::call_once"),
            frame("my_app::checkout"),
            frame("std::rt::lang_start"),
        ];
        let caller = FrameFilter::default().caller(&frames).unwrap();
        assert_eq!(caller.function, "my_app::checkout");
    }

    #[test]
    fn appended_fragments_are_honoured() {
        let frames = vec![frame("my_lib::internal::verify"), frame("my_app::checkout")];
        let filter = FrameFilter::default().with_ignored("my_lib::");
        assert_eq!(
            filter.caller(&frames).unwrap().function,
            "my_app::checkout"
        );
    }

    #[test]
    fn all_frames_ignored_yields_none() {
        let frames = vec![frame("std::rt::lang_start"), frame("test::run_test")];
        assert!(FrameFilter::default().caller(&frames).is_none());
    }

    #[test]
    fn empty_ignore_list_returns_innermost_frame() {
        let frames = vec![frame("std::rt::lang_start"), frame("my_app::checkout")];
        let filter = FrameFilter::new(Vec::new());
        assert_eq!(
            filter.caller(&frames).unwrap().function,
            "std::rt::lang_start"
        );
    }

    #[test]
    fn default_list_is_exposed() {
        let filter = FrameFilter::default();
        assert_eq!(filter.ignored().len(), DEFAULT_IGNORED.len());
    }
}
