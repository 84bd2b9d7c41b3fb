mod matrix;
pub mod ops;

pub use matrix::Matrix;

/// 2D point type used for nalgebra interop.
pub type Point2 = nalgebra::Point2<f64>;

/// Dynamically sized matrix type used for nalgebra interop.
pub type DMatrix = nalgebra::DMatrix<f64>;

/// Number of decimal digits kept by rounded matrix arithmetic.
///
/// Products and scalar multiples are rounded to this many digits so that
/// floating-point noise does not accumulate across repeated compositions.
pub const ROUNDING_DECIMALS: i32 = 5;

/// Rounds `value` to `decimals` decimal digits, halves toward positive infinity.
///
/// The decimal shift goes through the shortest decimal representation of the
/// value rather than a binary multiplication, so `1.005` rounds to `1.01` at
/// two digits. Non-finite values are returned unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let shifted = shift_decimal(value, decimals);
    // Compare the fraction instead of adding 0.5: the sum is inexact for
    // `0.49999999999999994` and for integers at or above 2^52.
    let floor = shifted.floor();
    let rounded = if shifted - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    shift_decimal(rounded, -decimals)
}

/// Multiplies `value` by `10^exponent` in decimal notation.
fn shift_decimal(value: f64, exponent: i32) -> f64 {
    // `Display` for f64 never uses scientific notation, so appending an
    // exponent always yields a parseable literal.
    format!("{value}e{exponent}")
        .parse()
        .unwrap_or_else(|_| value * 10f64.powi(exponent))
}
