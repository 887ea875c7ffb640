//! String conversion utilities.

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// # Examples
///
/// ```
/// use funchelper::string::none_if_empty;
///
/// assert_eq!(none_if_empty("hello"), Some("hello"));
/// assert_eq!(none_if_empty(""), None);
/// assert_eq!(none_if_empty(" "), Some(" ")); // Whitespace is not empty
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Converts an empty or whitespace-only string to `None`.
///
/// # Examples
///
/// ```
/// use funchelper::string::none_if_blank;
///
/// assert_eq!(none_if_blank("hello"), Some("hello"));
/// assert_eq!(none_if_blank(" \t"), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => word.to_string(),
    }
}

/// Extension methods on string slices.
pub trait StrExt {
    /// `true` if every character is numeric in the Unicode sense (general
    /// category `Nd`, `Nl` or `No`), so `½`, `²` and `Ⅻ` count alongside
    /// decimal digits. Vacuously `true` for `""`.
    fn is_digit_only(&self) -> bool;

    /// Lowercases the text, splits it on `delimiter`, capitalizes each
    /// word, and joins the words with single spaces.
    ///
    /// ```
    /// use funchelper::string::StrExt;
    ///
    /// assert_eq!("hELLO wORLD".to_title_case(" "), "Hello World");
    /// assert_eq!("snake_case_name".to_title_case("_"), "Snake Case Name");
    /// ```
    fn to_title_case(&self, delimiter: &str) -> String;

    /// Uppercases the first character if it is lowercase; the rest of the
    /// text is unchanged.
    fn capitalize_first_char(&self) -> String;
}

impl StrExt for str {
    fn is_digit_only(&self) -> bool {
        self.chars().all(char::is_numeric)
    }

    fn to_title_case(&self, delimiter: &str) -> String {
        let lower = self.to_lowercase();
        if delimiter.is_empty() {
            return capitalize(&lower);
        }
        lower
            .split(delimiter)
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn capitalize_first_char(&self) -> String {
        capitalize(self)
    }
}

/// Extension methods on optional strings: numeric parsing with defaults and
/// null/blank fallbacks.
pub trait OptionStrExt {
    /// Parse as `i32`, or `default` if absent or not an integer.
    fn to_int_or_default(&self, default: i32) -> i32;

    fn to_int_or_zero(&self) -> i32 {
        self.to_int_or_default(0)
    }

    /// Parse as `f64`, or `default` if absent or not a number.
    fn to_double_or_default(&self, default: f64) -> f64;

    fn to_double_or_zero(&self) -> f64 {
        self.to_double_or_default(0.0)
    }

    /// The string, or `fallback()` if absent.
    fn if_null(&self, fallback: impl FnOnce() -> String) -> String;

    /// The string, or `fallback()` if absent, empty, or whitespace-only.
    fn if_null_or_blank(&self, fallback: impl FnOnce() -> String) -> String;

    /// The string, or `fallback()` if absent or empty.
    fn if_null_or_empty(&self, fallback: impl FnOnce() -> String) -> String;
}

impl<S: AsRef<str>> OptionStrExt for Option<S> {
    fn to_int_or_default(&self, default: i32) -> i32 {
        self.as_ref()
            .and_then(|s| s.as_ref().parse().ok())
            .unwrap_or(default)
    }

    fn to_double_or_default(&self, default: f64) -> f64 {
        self.as_ref()
            .and_then(|s| s.as_ref().parse().ok())
            .unwrap_or(default)
    }

    fn if_null(&self, fallback: impl FnOnce() -> String) -> String {
        match self {
            Some(s) => s.as_ref().to_string(),
            None => fallback(),
        }
    }

    fn if_null_or_blank(&self, fallback: impl FnOnce() -> String) -> String {
        match self.as_ref().and_then(|s| none_if_blank(s.as_ref())) {
            Some(s) => s.to_string(),
            None => fallback(),
        }
    }

    fn if_null_or_empty(&self, fallback: impl FnOnce() -> String) -> String {
        match self.as_ref().and_then(|s| none_if_empty(s.as_ref())) {
            Some(s) => s.to_string(),
            None => fallback(),
        }
    }
}
