use super::Array2D;
use crate::value::{Element, Real};

/// Builds a new array of the same shape holding `f(x)` for every element `x` of `array`.
///
/// The input is never modified.
pub fn apply_function<T, F>(array: &Array2D<T>, mut f: F) -> Array2D<T>
where
    T: Element,
    F: FnMut(T) -> T,
{
    let result = Array2D::new(array.rows(), array.cols());
    for (destination, x) in result.iter_cells().zip(array) {
        destination.set(f(x));
    }
    result
}

impl<T: Element> Array2D<T> {
    /// See [`apply_function`].
    pub fn map(&self, f: impl FnMut(T) -> T) -> Array2D<T> {
        apply_function(self, f)
    }
}

pub fn sin<T: Real>(array: &Array2D<T>) -> Array2D<T> {
    apply_function(array, T::sin)
}

pub fn cos<T: Real>(array: &Array2D<T>) -> Array2D<T> {
    apply_function(array, T::cos)
}

pub fn tan<T: Real>(array: &Array2D<T>) -> Array2D<T> {
    apply_function(array, T::tan)
}

pub fn exp<T: Real>(array: &Array2D<T>) -> Array2D<T> {
    apply_function(array, T::exp)
}

/// Natural logarithm.
pub fn log<T: Real>(array: &Array2D<T>) -> Array2D<T> {
    apply_function(array, T::ln)
}

pub fn sqrt<T: Real>(array: &Array2D<T>) -> Array2D<T> {
    apply_function(array, T::sqrt)
}

pub fn square<T: Element>(array: &Array2D<T>) -> Array2D<T> {
    apply_function(array, |x| x * x)
}
