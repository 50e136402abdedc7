//! Call frames recovered from a rendered backtrace.
//!
//! The standard library exposes resolved frame symbols only through the
//! `Display` form of `std::backtrace::Backtrace`, which prints one numbered
//! symbol line per frame, optionally followed by an `at file:line:col`
//! source location. [`parse_backtrace`] turns that text back into structured
//! frames, innermost call first.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a frame's symbol was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// A named function or method.
    Function,
    /// A closure body nested inside a named function.
    Closure,
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameKind::Function => write!(f, "function"),
            FrameKind::Closure => write!(f, "closure"),
        }
    }
}

/// One resolved call frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Fully qualified symbol, e.g. `my_app::orders::place_order`.
    pub function: String,
    /// Source file, when debug info resolved it.
    pub file: Option<String>,
    /// Source line, when debug info resolved it.
    pub line: Option<u32>,
    /// Whether the symbol is a named function or a closure body.
    pub kind: FrameKind,
}

impl Frame {
    /// Human-readable descriptor of this frame, `function()@file:line`.
    ///
    /// Falls back to the bare symbol when no source location resolved.
    pub fn display_name(&self) -> String {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => format!("{}()@{file}:{line}", self.function),
            (Some(file), None) => format!("{}()@{file}", self.function),
            _ => format!("{}()", self.function),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parses the `Display` rendering of a `std::backtrace::Backtrace` into
/// frames, preserving the innermost-first order of the rendering.
///
/// Unrecognized lines are skipped, so a backtrace captured without debug
/// info degrades to symbol-only frames rather than failing.
pub fn parse_backtrace(rendered: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim();
        if let Some(symbol) = split_symbol_line(trimmed) {
            let kind = if symbol.contains("{{closure}}") {
                FrameKind::Closure
            } else {
                FrameKind::Function
            };
            frames.push(Frame {
                function: symbol.to_string(),
                file: None,
                line: None,
                kind,
            });
        } else if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(last) = frames.last_mut() {
                if last.file.is_none() {
                    let (file, line) = split_location(location);
                    last.file = Some(file.to_string());
                    last.line = line;
                }
            }
        }
    }

    frames
}

/// Matches `N: symbol` lines and returns the symbol part.
fn split_symbol_line(line: &str) -> Option<&str> {
    let (index, symbol) = line.split_once(':')?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let symbol = symbol.trim();
    if symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}

/// Splits `path:line:col` into the path and the line number. The column is
/// discarded; the path may itself contain colons.
fn split_location(location: &str) -> (&str, Option<u32>) {
    let Some((rest, _col)) = location.rsplit_once(':') else {
        return (location, None);
    };
    let Some((file, line)) = rest.rsplit_once(':') else {
        return (location, None);
    };
    match line.parse::<u32>() {
        Ok(line) => (file, Some(line)),
        Err(_) => (location, None),
    }
}
