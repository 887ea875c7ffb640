//! Floating point display helpers.
//!
//! Output always uses `.` as the decimal separator; locale-specific number
//! formatting is left to the caller.

/// Fraction digits past which every `f32` / `f64` expansion is all zeros:
/// the smallest subnormal `f64` is 2^-1074.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Display helpers for `f32` / `f64`.
pub trait NumberExt {
    /// Format with exactly `decimal_places` fraction digits, rounding half
    /// to even at the last digit.
    ///
    /// Zero places prints no decimal point. A negative count disables
    /// formatting and returns the plain `Display` form. Counts beyond the
    /// exact binary expansion are padded with zeros.
    ///
    /// ```
    /// use funchelper::number::NumberExt;
    ///
    /// assert_eq!(3.14159_f64.to_fixed_decimal(2), "3.14");
    /// assert_eq!(3.6_f64.to_fixed_decimal(0), "4");
    /// assert_eq!(3.5_f64.to_fixed_decimal(-1), "3.5");
    /// ```
    fn to_fixed_decimal(self, decimal_places: i32) -> String;

    /// Plain decimal form with trailing fractional zeros removed and no
    /// exponent notation: `15.000` becomes `"15"`, `1.50` becomes `"1.5"`.
    fn trim_zeros(self) -> String;
}

macro_rules! impl_number_ext {
    ($($ty:ty),*) => {
        $(
            impl NumberExt for $ty {
                fn to_fixed_decimal(self, decimal_places: i32) -> String {
                    let Ok(places) = usize::try_from(decimal_places) else {
                        return self.to_string();
                    };
                    let exact = places.min(EXACT_FRACTION_DIGITS);
                    let mut out = format!("{self:.exact$}");
                    if self.is_finite() {
                        out.extend(std::iter::repeat('0').take(places - exact));
                    }
                    out
                }

                fn trim_zeros(self) -> String {
                    // Display never uses exponent notation and already
                    // drops trailing fractional zeros.
                    self.to_string()
                }
            }
        )*
    };
}

impl_number_ext!(f32, f64);
