/// Numeric helpers.
///
/// Floating-point operations the standard library does not provide in the
/// form the evaluator needs.
pub mod num;
