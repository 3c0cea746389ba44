//! Scalar entries for real and complex computations.

use num_complex::Complex;
use num_traits::Float;
use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Matrix and vector entries accepted by the kernel.
///
/// Implemented for `f32`, `f64`, and the corresponding `num_complex`
/// types. [`Coefficient::Real`] is the associated magnitude type:
/// norms, logarithmic norms, and eigenvalues are always reported in
/// `Real`, even when the entries themselves are complex.
pub trait Coefficient:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Sum
    + Send
    + Sync
    + 'static
{
    /// Magnitude type: the floating-point type underlying `Self`.
    type Real: Float + Debug + Sum + Send + Sync + 'static;

    /// Whether the type carries an imaginary part.
    const COMPLEX: bool;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Absolute value for real types, modulus for complex ones.
    fn modulus(self) -> Self::Real;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Imaginary part; zero for real types.
    fn im(self) -> Self::Real;

    /// Complex conjugate; the identity for real types.
    fn conj(self) -> Self;

    /// Embed a magnitude back into the entry type.
    fn from_real(r: Self::Real) -> Self;

    /// Convert an `f64` constant into the magnitude type.
    fn real_from_f64(v: f64) -> Self::Real;

    /// Whether `self` is exactly zero.
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

macro_rules! impl_real_coefficient {
    ($t:ty) => {
        impl Coefficient for $t {
            type Real = $t;
            const COMPLEX: bool = false;

            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn modulus(self) -> $t {
                self.abs()
            }

            fn re(self) -> $t {
                self
            }

            fn im(self) -> $t {
                0.0
            }

            fn conj(self) -> Self {
                self
            }

            fn from_real(r: $t) -> Self {
                r
            }

            fn real_from_f64(v: f64) -> $t {
                v as $t
            }
        }
    };
}

impl_real_coefficient!(f32);
impl_real_coefficient!(f64);

macro_rules! impl_complex_coefficient {
    ($t:ty) => {
        impl Coefficient for Complex<$t> {
            type Real = $t;
            const COMPLEX: bool = true;

            fn zero() -> Self {
                Complex::new(0.0, 0.0)
            }

            fn one() -> Self {
                Complex::new(1.0, 0.0)
            }

            fn modulus(self) -> $t {
                self.norm()
            }

            fn re(self) -> $t {
                self.re
            }

            fn im(self) -> $t {
                self.im
            }

            fn conj(self) -> Self {
                Complex::new(self.re, -self.im)
            }

            fn from_real(r: $t) -> Self {
                Complex::new(r, 0.0)
            }

            fn real_from_f64(v: f64) -> $t {
                v as $t
            }
        }
    };
}

impl_complex_coefficient!(f32);
impl_complex_coefficient!(f64);
