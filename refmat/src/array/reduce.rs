use super::Array2D;
use crate::value::{self, Element, Real};

impl<T: Element> Array2D<T> {
    /// The smallest element. Panics if the array is empty.
    pub fn minimum(&self) -> T {
        self.fold_first(value::min)
    }

    /// The largest element. Panics if the array is empty.
    pub fn maximum(&self) -> T {
        self.fold_first(value::max)
    }

    pub fn sum(&self) -> T {
        self.iter().fold(T::ZERO, |sum, x| sum + x)
    }

    /// The L1 norm: the sum of absolute values.
    pub fn norm1(&self) -> T {
        self.iter().fold(T::ZERO, |sum, x| sum + x.abs())
    }

    /// The L-infinity norm: the largest absolute value, or zero for an empty array.
    pub fn norminf(&self) -> T {
        self.iter().fold(T::ZERO, |norm, x| value::max(norm, x.abs()))
    }

    /// The average element, computed in double precision for every element type. NaN for an
    /// empty array.
    pub fn mean(&self) -> f64 {
        self.iter().fold(0.0, |sum, x| sum + x.to_f64()) / self.len() as f64
    }

    fn fold_first(&self, f: impl Fn(T, T) -> T) -> T {
        assert!(!self.is_empty(), "reduction of an empty array");
        let mut values = self.iter();
        let first = values.next().unwrap_or_default();
        values.fold(first, f)
    }
}

impl<T: Real> Array2D<T> {
    /// The L2 norm: the square root of the sum of squares.
    pub fn norm2(&self) -> T {
        self.iter().fold(T::ZERO, |sum, x| sum + x * x).sqrt()
    }
}
