//! Scalar type bounds for matrix elements.

use num_traits::Num;

/// Shared trait bounds for all element types usable in a [`crate::Matrix`].
///
/// This is a closed capability set rather than duck-typed arithmetic: an
/// element type must supply `+`, `-`, `*`, `/`, an additive identity and a
/// multiplicative identity (via [`num_traits::Num`]) and be `Copy`. Both
/// `f64` and [`num_complex::Complex64`] satisfy these bounds.
pub trait Scalar: Copy + Num + 'static {}

impl<T> Scalar for T where T: Copy + Num + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn test_standard_types() {
        assert_scalar::<f32>();
        assert_scalar::<f64>();
        assert_scalar::<i32>();
        assert_scalar::<num_complex::Complex64>();
    }
}
