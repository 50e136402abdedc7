//! Building and raising the failure for a broken contract.
//!
//! [`ContractViolation::from_bad_value`] is the single construction path:
//! it captures the current backtrace, filters out this library's own frames
//! to attribute the failure to application code, renders the rejected value,
//! and assembles the message
//! `contract failed at <caller>; failed value is: <value>` with
//! `; contract is: <reason>` appended only when a reason was supplied.
//! There is no fallback reason text; an absent reason leaves the message
//! without the marker entirely.

use std::backtrace::Backtrace;
use std::fmt;

use serde::{Deserialize, Serialize};

use covenant_caller::{parse_backtrace, Frame, FrameFilter};

/// Placeholder caller when no frame survives filtering, e.g. a backtrace
/// captured without debug info.
const UNKNOWN_CALLER: &str = "<unknown caller>";

/// Structured payload describing one contract violation.
///
/// Everything the message says is also retrievable here, so embedding code
/// can react to a violation without parsing the message string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// First stack frame outside the contract library, when resolvable.
    pub caller: Option<Frame>,
    /// Display form of `caller`, or a placeholder.
    pub caller_name: String,
    /// Debug rendering of the rejected value.
    pub value: String,
    /// Name of the field or variable that was checked.
    pub field: String,
    /// The contract text, when the caller supplied one.
    pub reason: Option<String>,
    /// Type descriptor of the rejected value, e.g. `i32<5>`.
    pub data_type: String,
}

/// The failure raised when a contract term does not hold.
///
/// Always fatal to the current operation: the library never catches,
/// retries, or converts it. Callers propagate it with `?` up to whatever
/// boundary the embedding application handles errors at.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ContractViolation {
    message: String,
    diagnostic: Diagnostic,
}

impl ContractViolation {
    /// Builds the violation for `value` failing a contract check.
    ///
    /// The caller location is the first backtrace frame not matching the
    /// default ignore fragments or this library's own module prefixes.
    pub fn from_bad_value<T>(value: &T, field: &str, reason: Option<&str>) -> Self
    where
        T: fmt::Debug + ?Sized,
    {
        let frames = parse_backtrace(&Backtrace::force_capture().to_string());
        let filter = FrameFilter::default()
            .with_ignored("covenant_core::")
            .with_ignored("covenant_caller::");
        let caller = filter.caller(&frames).cloned();
        let caller_name = caller
            .as_ref()
            .map(Frame::display_name)
            .unwrap_or_else(|| UNKNOWN_CALLER.to_string());

        let rendered = format!("{value:?}");
        let data_type = describe_type(value, &rendered);

        let mut message = format!("contract failed at {caller_name}; failed value is: {rendered}");
        if let Some(reason) = reason {
            message.push_str("; contract is: ");
            message.push_str(reason);
        }

        ContractViolation {
            message,
            diagnostic: Diagnostic {
                caller,
                caller_name,
                value: rendered,
                field: field.to_string(),
                reason: reason.map(str::to_string),
                data_type,
            },
        }
    }

    /// The rendered message, identical to the `Display` output.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// First stack frame outside the contract library, when resolvable.
    pub fn caller(&self) -> Option<&Frame> {
        self.diagnostic.caller.as_ref()
    }

    /// Display form of the caller location.
    pub fn caller_name(&self) -> &str {
        &self.diagnostic.caller_name
    }

    /// Debug rendering of the value that failed the contract.
    pub fn rejected_value(&self) -> &str {
        &self.diagnostic.value
    }

    /// Name of the field or variable that was checked.
    pub fn field(&self) -> &str {
        &self.diagnostic.field
    }

    /// The contract text, when one was supplied.
    pub fn reason(&self) -> Option<&str> {
        self.diagnostic.reason.as_deref()
    }

    /// Type descriptor of the rejected value.
    pub fn data_type(&self) -> &str {
        &self.diagnostic.data_type
    }

    /// The full structured payload.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// HTTP status for embedders that surface violations over HTTP: a
    /// broken contract is a generic unexpected server error.
    pub fn status_code(&self) -> u16 {
        500
    }
}

/// Type name plus a short value hint for scalar-sized renderings, e.g.
/// `i32<5>`. Composite or long renderings get the bare type name.
fn describe_type<T>(_value: &T, rendered: &str) -> String
where
    T: fmt::Debug + ?Sized,
{
    let name = std::any::type_name::<T>();
    if rendered.len() <= 32 && !rendered.contains('\n') {
        format!("{name}<{rendered}>")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_without_reason_has_no_contract_marker() {
        let violation = ContractViolation::from_bad_value(&5, "value", None);
        assert!(violation.message().starts_with("contract failed at "));
        assert!(violation.message().contains("failed value is: 5"));
        assert!(!violation.message().contains("; contract is: "));
    }

    #[test]
    fn message_with_reason_appends_contract_clause() {
        let violation =
            ContractViolation::from_bad_value(&5, "value", Some("must be less than 4"));
        assert!(violation
            .message()
            .ends_with("; contract is: must be less than 4"));
        assert_eq!(violation.reason(), Some("must be less than 4"));
    }

    #[test]
    fn structured_fields_match_the_inputs() {
        let violation = ContractViolation::from_bad_value(&5, "attempts", Some("too many"));
        assert_eq!(violation.rejected_value(), "5");
        assert_eq!(violation.field(), "attempts");
        assert_eq!(violation.data_type(), "i32<5>");
    }

    #[test]
    fn display_matches_message() {
        let violation = ContractViolation::from_bad_value(&"oops", "value", None);
        assert_eq!(violation.to_string(), violation.message());
    }

    #[test]
    fn composite_values_render_recursively() {
        let violation = ContractViolation::from_bad_value(&vec![(1, "a"), (2, "b")], "pairs", None);
        assert_eq!(violation.rejected_value(), r#"[(1, "a"), (2, "b")]"#);
    }

    #[test]
    fn long_renderings_drop_the_value_hint() {
        let value = "x".repeat(64);
        let violation = ContractViolation::from_bad_value(&value, "value", None);
        assert_eq!(violation.data_type(), "alloc::string::String");
    }

    #[test]
    fn scalar_descriptor_includes_the_value() {
        let violation = ContractViolation::from_bad_value(&true, "flag", None);
        assert_eq!(violation.data_type(), "bool<true>");
    }

    #[test]
    fn status_maps_to_unexpected_server_error() {
        let violation = ContractViolation::from_bad_value(&5, "value", None);
        assert_eq!(violation.status_code(), 500);
    }

    #[test]
    fn diagnostic_serializes_to_json() {
        let violation = ContractViolation::from_bad_value(&5, "value", Some("positive"));
        let json = serde_json::to_value(violation.diagnostic()).unwrap();
        assert_eq!(json["value"], "5");
        assert_eq!(json["reason"], "positive");
        assert_eq!(json["field"], "value");
    }
}
