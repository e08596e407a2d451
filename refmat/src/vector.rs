use std::fmt;
use std::ops::{Add, AddAssign, Deref, DerefMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::value::{Element, Real};

/// A small vector of fixed size with ordinary value semantics. Nothing is shared; copies are
/// independent.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq)]
pub struct TinyVector<T, const N: usize>([T; N]);

impl<T: Element, const N: usize> TinyVector<T, N> {
    pub fn zeros() -> Self {
        Self([T::ZERO; N])
    }

    pub fn ones() -> Self {
        Self([T::ONE; N])
    }

    pub const fn new(values: [T; N]) -> Self {
        Self(values)
    }

    pub fn scale(&mut self, value: T) {
        *self *= value;
    }

    pub fn set_to_zero(&mut self) {
        self.0 = [T::ZERO; N];
    }

    pub fn dot(&self, b: &Self) -> T {
        inner_product(self, b)
    }
}

impl<T: Real, const N: usize> TinyVector<T, N> {
    /// The Euclidean length.
    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }
}

pub fn inner_product<T: Element, const N: usize>(a: &TinyVector<T, N>, b: &TinyVector<T, N>) -> T {
    a.iter().zip(b.iter()).fold(T::ZERO, |sum, (&a, &b)| sum + a * b)
}

pub fn cross_product<T: Element>(a: &TinyVector<T, 3>, b: &TinyVector<T, 3>) -> TinyVector<T, 3> {
    TinyVector([
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

macro_rules! op_impl {
    ($op:ident, $op_method:ident, $op_assign:ident, $op_assign_method:ident) => {
        impl<T: Element, const N: usize> $op<TinyVector<T, N>> for TinyVector<T, N> {
            type Output = TinyVector<T, N>;

            fn $op_method(mut self, rhs: TinyVector<T, N>) -> Self::Output {
                self.$op_assign_method(rhs);
                self
            }
        }

        impl<T: Element, const N: usize> $op<&TinyVector<T, N>> for TinyVector<T, N> {
            type Output = TinyVector<T, N>;

            fn $op_method(mut self, rhs: &TinyVector<T, N>) -> Self::Output {
                self.$op_assign_method(rhs);
                self
            }
        }

        impl<T: Element, const N: usize> $op<TinyVector<T, N>> for &TinyVector<T, N> {
            type Output = TinyVector<T, N>;

            fn $op_method(self, rhs: TinyVector<T, N>) -> Self::Output {
                (*self).$op_method(rhs)
            }
        }

        impl<T: Element, const N: usize> $op<&TinyVector<T, N>> for &TinyVector<T, N> {
            type Output = TinyVector<T, N>;

            fn $op_method(self, rhs: &TinyVector<T, N>) -> Self::Output {
                (*self).$op_method(rhs)
            }
        }

        impl<T: Element, const N: usize> $op_assign<TinyVector<T, N>> for TinyVector<T, N> {
            fn $op_assign_method(&mut self, rhs: TinyVector<T, N>) {
                self.$op_assign_method(&rhs)
            }
        }

        impl<T: Element, const N: usize> $op_assign<&TinyVector<T, N>> for TinyVector<T, N> {
            fn $op_assign_method(&mut self, rhs: &TinyVector<T, N>) {
                for (r, &b) in self.iter_mut().zip(rhs.iter()) {
                    *r = (*r).$op_method(b);
                }
            }
        }
    };
}

op_impl!(Add, add, AddAssign, add_assign);
op_impl!(Sub, sub, SubAssign, sub_assign);

impl<T: Element, const N: usize> Mul<T> for TinyVector<T, N> {
    type Output = TinyVector<T, N>;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Element, const N: usize> Mul<T> for &TinyVector<T, N> {
    type Output = TinyVector<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        (*self).mul(rhs)
    }
}

impl<T: Element, const N: usize> MulAssign<T> for TinyVector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for r in self.iter_mut() {
            *r = *r * rhs;
        }
    }
}

impl<T: Element, const N: usize> Neg for TinyVector<T, N> {
    type Output = TinyVector<T, N>;

    fn neg(self) -> Self::Output {
        self * -T::ONE
    }
}

impl<T: Element, const N: usize> Neg for &TinyVector<T, N> {
    type Output = TinyVector<T, N>;

    fn neg(self) -> Self::Output {
        self * -T::ONE
    }
}

impl<T: Element, const N: usize> Default for TinyVector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> Deref for TinyVector<T, N> {
    type Target = [T; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T, const N: usize> DerefMut for TinyVector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T, const N: usize> From<[T; N]> for TinyVector<T, N> {
    fn from(values: [T; N]) -> Self {
        Self(values)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a TinyVector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut TinyVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for TinyVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for x in 0..N {
            fmt::Debug::fmt(&self[x], f)?;
            if x < N - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use super::TinyVector;

    impl<T: Serialize, const N: usize> Serialize for TinyVector<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for TinyVector<T, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let values = Vec::<T>::deserialize(deserializer)?;
            let len = values.len();
            values
                .try_into()
                .map(TinyVector)
                .map_err(|_| de::Error::invalid_length(len, &"a sequence of N values"))
        }
    }
}
