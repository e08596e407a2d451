//! Elementwise arithmetic.
//!
//! The compound assignment operators (`+=`, `-=`, `*=`, `/=`) work in place on the shared
//! buffer and are visible through every handle sharing it. The binary operators and negation
//! never touch either operand's buffer; they always build their result in fresh storage. This
//! holds for owned operands too, since an owned handle may still share its buffer with others.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{equal_size, Array2D};
use crate::value::Element;

macro_rules! array_op_impl {
    ($op:ident, $op_method:ident, $op_assign:ident, $op_assign_method:ident) => {
        impl<T: Element> $op_assign<&Array2D<T>> for Array2D<T> {
            fn $op_assign_method(&mut self, rhs: &Array2D<T>) {
                assert!(
                    equal_size(self, rhs),
                    "array shapes differ: {}x{} and {}x{}",
                    self.rows(),
                    self.cols(),
                    rhs.rows(),
                    rhs.cols(),
                );
                for (a, b) in self.as_cells().iter().zip(rhs.as_cells()) {
                    a.set(a.get().$op_method(b.get()));
                }
            }
        }

        impl<T: Element> $op_assign<Array2D<T>> for Array2D<T> {
            fn $op_assign_method(&mut self, rhs: Array2D<T>) {
                self.$op_assign_method(&rhs)
            }
        }

        impl<T: Element> $op_assign<T> for Array2D<T> {
            fn $op_assign_method(&mut self, rhs: T) {
                for a in self.as_cells() {
                    a.set(a.get().$op_method(rhs));
                }
            }
        }

        impl<T: Element> $op<&Array2D<T>> for &Array2D<T> {
            type Output = Array2D<T>;

            fn $op_method(self, rhs: &Array2D<T>) -> Self::Output {
                assert!(
                    equal_size(self, rhs),
                    "array shapes differ: {}x{} and {}x{}",
                    self.rows(),
                    self.cols(),
                    rhs.rows(),
                    rhs.cols(),
                );
                let mut result = self.deep_clone();
                result.$op_assign_method(rhs);
                result
            }
        }

        impl<T: Element> $op<Array2D<T>> for &Array2D<T> {
            type Output = Array2D<T>;

            fn $op_method(self, rhs: Array2D<T>) -> Self::Output {
                self.$op_method(&rhs)
            }
        }

        impl<T: Element> $op<&Array2D<T>> for Array2D<T> {
            type Output = Array2D<T>;

            fn $op_method(self, rhs: &Array2D<T>) -> Self::Output {
                (&self).$op_method(rhs)
            }
        }

        impl<T: Element> $op<Array2D<T>> for Array2D<T> {
            type Output = Array2D<T>;

            fn $op_method(self, rhs: Array2D<T>) -> Self::Output {
                (&self).$op_method(&rhs)
            }
        }

        impl<T: Element> $op<T> for &Array2D<T> {
            type Output = Array2D<T>;

            fn $op_method(self, rhs: T) -> Self::Output {
                let mut result = self.deep_clone();
                result.$op_assign_method(rhs);
                result
            }
        }

        impl<T: Element> $op<T> for Array2D<T> {
            type Output = Array2D<T>;

            fn $op_method(self, rhs: T) -> Self::Output {
                (&self).$op_method(rhs)
            }
        }
    };
}

array_op_impl!(Add, add, AddAssign, add_assign);
array_op_impl!(Sub, sub, SubAssign, sub_assign);
array_op_impl!(Mul, mul, MulAssign, mul_assign);
array_op_impl!(Div, div, DivAssign, div_assign);

impl<T: Element> Neg for &Array2D<T> {
    type Output = Array2D<T>;

    fn neg(self) -> Self::Output {
        let mut result = Array2D::new(self.rows(), self.cols());
        result -= self;
        result
    }
}

impl<T: Element> Neg for Array2D<T> {
    type Output = Array2D<T>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

// Scalars on the left. Commutative operations reuse the array-first form; the others start
// from a fresh array filled with the scalar.
macro_rules! scalar_lhs_impl {
    ($($t:ty),*) => {
        $(
            impl Add<&Array2D<$t>> for $t {
                type Output = Array2D<$t>;

                fn add(self, rhs: &Array2D<$t>) -> Self::Output {
                    rhs + self
                }
            }

            impl Sub<&Array2D<$t>> for $t {
                type Output = Array2D<$t>;

                fn sub(self, rhs: &Array2D<$t>) -> Self::Output {
                    let mut result = Array2D::new(rhs.rows(), rhs.cols());
                    result.fill(self);
                    result -= rhs;
                    result
                }
            }

            impl Mul<&Array2D<$t>> for $t {
                type Output = Array2D<$t>;

                fn mul(self, rhs: &Array2D<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl Div<&Array2D<$t>> for $t {
                type Output = Array2D<$t>;

                fn div(self, rhs: &Array2D<$t>) -> Self::Output {
                    let mut result = Array2D::new(rhs.rows(), rhs.cols());
                    result.fill(self);
                    result /= rhs;
                    result
                }
            }

            impl Add<Array2D<$t>> for $t {
                type Output = Array2D<$t>;

                fn add(self, rhs: Array2D<$t>) -> Self::Output {
                    self + &rhs
                }
            }

            impl Sub<Array2D<$t>> for $t {
                type Output = Array2D<$t>;

                fn sub(self, rhs: Array2D<$t>) -> Self::Output {
                    self - &rhs
                }
            }

            impl Mul<Array2D<$t>> for $t {
                type Output = Array2D<$t>;

                fn mul(self, rhs: Array2D<$t>) -> Self::Output {
                    self * &rhs
                }
            }

            impl Div<Array2D<$t>> for $t {
                type Output = Array2D<$t>;

                fn div(self, rhs: Array2D<$t>) -> Self::Output {
                    self / &rhs
                }
            }
        )*
    };
}

scalar_lhs_impl!(i32, i64, f32, f64);
