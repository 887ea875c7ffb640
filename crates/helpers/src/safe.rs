//! Uniform fault suppression for fallible helpers.
//!
//! Every fallible helper in this crate runs its body through
//! [`safe_operation`] or [`safe_operation_with`]. The body returns a
//! `Result`; an `Err` is turned into a [`Fault`], handed to exactly one
//! reporter, and the helper returns `None`. Nothing is retried and nothing
//! propagates to the caller.
//!
//! # Examples
//!
//! ```
//! use funchelper::safe::{safe_operation, safe_operation_with};
//! use funchelper::HelperError;
//!
//! let parsed = safe_operation("parse_port", || "8080".parse::<u16>().map_err(|e| {
//!     HelperError::out_of_range(e.to_string())
//! }));
//! assert_eq!(parsed, Some(8080));
//!
//! let mut seen = None;
//! let failed: Option<u16> = safe_operation_with(
//!     "parse_port",
//!     |fault: funchelper::Fault| seen = Some(fault.operation()),
//!     || Err(HelperError::out_of_range("99999")),
//! );
//! assert_eq!(failed, None);
//! assert_eq!(seen, Some("parse_port"));
//! ```

use crate::error::{Fault, HelperError};

/// Receives the fault of a failed operation.
///
/// Implemented for any `FnOnce(Fault)` closure and for the default
/// [`LogFault`] reporter.
pub trait FaultReporter {
    fn report(self, fault: Fault);
}

impl<F> FaultReporter for F
where
    F: FnOnce(Fault),
{
    fn report(self, fault: Fault) {
        self(fault)
    }
}

/// Default reporter: one `warn` event on the tracing channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFault;

impl FaultReporter for LogFault {
    fn report(self, fault: Fault) {
        tracing::warn!(
            operation = fault.operation(),
            error = %fault.error(),
            "Helper operation failed"
        );
    }
}

/// Runs `operation` once, logging any failure through [`LogFault`].
pub fn safe_operation<T, E>(
    operation_name: &'static str,
    operation: impl FnOnce() -> Result<T, E>,
) -> Option<T>
where
    E: Into<HelperError>,
{
    safe_operation_with(operation_name, LogFault, operation)
}

/// Runs `operation` once, routing any failure to `reporter` instead of the
/// default log.
pub fn safe_operation_with<T, E, R>(
    operation_name: &'static str,
    reporter: R,
    operation: impl FnOnce() -> Result<T, E>,
) -> Option<T>
where
    E: Into<HelperError>,
    R: FaultReporter,
{
    match operation() {
        Ok(value) => Some(value),
        Err(e) => {
            reporter.report(Fault::new(operation_name, e.into()));
            None
        }
    }
}
