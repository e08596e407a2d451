use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A numeric type that can be stored in an [`Array2D`](crate::Array2D) or a
/// [`TinyVector`](crate::TinyVector).
pub trait Element:
    Copy
    + Debug
    + Default
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn abs(self) -> Self;

    /// Widens the element to a double, for averaging.
    fn to_f64(self) -> f64;
}

/// Floating point elements, which additionally support the transcendental functions.
pub trait Real: Element {
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
}

macro_rules! element_impl {
    ($t:ty, $zero:literal, $one:literal) => {
        impl Element for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

element_impl!(i32, 0, 1);
element_impl!(i64, 0, 1);
element_impl!(f32, 0.0, 1.0);
element_impl!(f64, 0.0, 1.0);

macro_rules! real_impl {
    ($t:ty) => {
        impl Real for $t {
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            fn sin(self) -> Self {
                <$t>::sin(self)
            }

            fn cos(self) -> Self {
                <$t>::cos(self)
            }

            fn tan(self) -> Self {
                <$t>::tan(self)
            }

            fn exp(self) -> Self {
                <$t>::exp(self)
            }

            fn ln(self) -> Self {
                <$t>::ln(self)
            }
        }
    };
}

real_impl!(f32);
real_impl!(f64);

/// The smaller of two elements, preferring `a` when they are unordered.
pub(crate) fn min<T: Element>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// The larger of two elements, preferring `a` when they are unordered.
pub(crate) fn max<T: Element>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}
