//! In-memory permission grant table.

use std::collections::HashSet;

use funchelper_ports::{PermissionPort, PermissionStatus};

/// Permission state held in memory.
///
/// Anything not explicitly granted is denied. Useful for hosts without a
/// platform permission service and for tests.
#[derive(Debug, Clone, Default)]
pub struct GrantTable {
    granted: HashSet<String>,
    rationale: HashSet<String>,
}

impl GrantTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, permission: impl Into<String>) -> Self {
        self.granted.insert(permission.into());
        self
    }

    /// Mark `permission` as one the user previously declined, so a
    /// rationale should be shown before asking again.
    pub fn with_rationale(mut self, permission: impl Into<String>) -> Self {
        self.rationale.insert(permission.into());
        self
    }

    pub fn revoke(&mut self, permission: &str) -> bool {
        self.granted.remove(permission)
    }
}

impl PermissionPort for GrantTable {
    fn check_permission(&self, permission: &str) -> PermissionStatus {
        if self.granted.contains(permission) {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    fn should_show_rationale(&self, permission: &str) -> bool {
        !self.granted.contains(permission) && self.rationale.contains(permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_permissions_are_denied() {
        let table = GrantTable::new();
        assert_eq!(table.check_permission("CAMERA"), PermissionStatus::Denied);
        assert!(!table.should_show_rationale("CAMERA"));
    }

    #[test]
    fn grant_and_revoke() {
        let mut table = GrantTable::new().grant("CAMERA");
        assert_eq!(table.check_permission("CAMERA"), PermissionStatus::Granted);
        assert!(table.revoke("CAMERA"));
        assert!(!table.revoke("CAMERA"));
        assert_eq!(table.check_permission("CAMERA"), PermissionStatus::Denied);
    }

    #[test]
    fn rationale_only_for_ungranted() {
        let table = GrantTable::new()
            .with_rationale("CAMERA")
            .with_rationale("MICROPHONE")
            .grant("MICROPHONE");
        assert!(table.should_show_rationale("CAMERA"));
        assert!(!table.should_show_rationale("MICROPHONE"));
    }
}
