//! Helpers for optional booleans.

pub trait OptionBoolExt {
    /// `true` only for `Some(true)`.
    fn is_true(self) -> bool;

    /// `true` only for `Some(false)`.
    fn is_false(self) -> bool;

    /// The value, treating `None` as `true`.
    fn or_true(self) -> bool;

    /// The value, treating `None` as `false`.
    fn or_false(self) -> bool;
}

impl OptionBoolExt for Option<bool> {
    fn is_true(self) -> bool {
        self == Some(true)
    }

    fn is_false(self) -> bool {
        self == Some(false)
    }

    fn or_true(self) -> bool {
        self.unwrap_or(true)
    }

    fn or_false(self) -> bool {
        self.unwrap_or(false)
    }
}
