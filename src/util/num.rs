/// Floored modulo for `f64`: `left - floor(left / right) * right`.
///
/// Unlike the `%` operator on `f64`, which truncates, the result takes the
/// sign of `right`. The caller is responsible for rejecting a zero divisor.
///
/// ## Example
/// ```
/// use postfixer::util::num::floored_mod;
///
/// assert_eq!(floored_mod(7.0, 3.0), 1.0);
/// assert_eq!(floored_mod(-7.0, 3.0), 2.0);
/// assert_eq!(floored_mod(7.0, -3.0), -2.0);
/// ```
#[must_use]
pub fn floored_mod(left: f64, right: f64) -> f64 {
    left - (left / right).floor() * right
}
