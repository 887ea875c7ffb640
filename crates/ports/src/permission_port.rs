//! Permission grant query port

use std::fmt;

/// Grant state of a single platform permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

/// Platform permission service.
///
/// Permission identifiers are the platform's permission strings, e.g.
/// `"android.permission.CAMERA"`.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PermissionPort: Send + Sync {
    /// Current grant state of `permission` for this application.
    fn check_permission(&self, permission: &str) -> PermissionStatus;

    /// Whether the platform recommends explaining why `permission` is
    /// needed before requesting it again.
    fn should_show_rationale(&self, permission: &str) -> bool;
}
