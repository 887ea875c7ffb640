//! Permission grant queries.

use funchelper_ports::PermissionPort;

pub fn is_permission_granted(permissions: &dyn PermissionPort, permission: &str) -> bool {
    permissions.check_permission(permission).is_granted()
}

pub fn is_permission_not_granted(permissions: &dyn PermissionPort, permission: &str) -> bool {
    !is_permission_granted(permissions, permission)
}

/// Whether the app should explain why it needs `permission` before asking
/// for it again.
pub fn should_show_permission_rationale(permissions: &dyn PermissionPort, permission: &str) -> bool {
    permissions.should_show_rationale(permission)
}

/// The subset of `requested` that is not granted, in input order.
///
/// # Examples
///
/// ```
/// use funchelper::adapters::GrantTable;
/// use funchelper::permission::ungranted_permissions;
///
/// let table = GrantTable::new().grant("B");
/// assert_eq!(ungranted_permissions(&table, ["A", "B", "C"]), vec!["A", "C"]);
/// ```
pub fn ungranted_permissions<I, S>(permissions: &dyn PermissionPort, requested: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    requested
        .into_iter()
        .filter(|p| is_permission_not_granted(permissions, p.as_ref()))
        .collect()
}
