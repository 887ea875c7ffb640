//! funchelper - small, non-failing helpers for dates, strings, numbers,
//! booleans, permissions and bundled assets.
//!
//! # Design Principles
//!
//! - **Never fail the caller** - fallible helpers return `Option` and route
//!   the failure through [`safe::safe_operation`], which logs it (or hands it
//!   to a caller-supplied reporter) exactly once
//! - **Platform services are ports** - the clock, assets and permission
//!   grants come in through `funchelper-ports` traits
//! - **No hidden globals** - locale and time zone are explicit
//!   [`config::DateConfig`] values
//! - **Synchronous** - every helper runs to completion on the caller's thread

pub mod adapters;
pub mod assets;
pub mod boolean;
pub mod calendar;
pub mod config;
pub mod datetime;
pub mod error;
pub mod json;
pub mod number;
pub mod permission;
pub mod safe;
pub mod string;

// Re-export commonly used items at crate root for convenience
pub use boolean::OptionBoolExt;
pub use calendar::Calendar;
pub use config::{DateConfig, HelperConfig};
pub use datetime::DateTimeExt;
pub use error::{ConfigError, Fault, HelperError};
pub use number::NumberExt;
pub use safe::{safe_operation, safe_operation_with, FaultReporter, LogFault};
pub use string::{none_if_blank, none_if_empty, OptionStrExt, StrExt};

pub use funchelper_ports::{AssetPort, ClockPort, PermissionPort, PermissionStatus};
