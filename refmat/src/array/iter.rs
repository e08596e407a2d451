use std::cell::Cell;
use std::iter::FusedIterator;
use std::slice;

use super::Array2D;

/// Iterates over an array's elements by value, in storage order.
#[derive(Clone)]
pub struct Iter<'a, T> {
    cells: slice::Iter<'a, Cell<T>>,
}

impl<'a, T: Copy> Iterator for Iter<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cells.next().map(Cell::get)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl<'a, T: Copy> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Copy> FusedIterator for Iter<'a, T> {}

impl<T> Array2D<T> {
    /// Starts a fresh pass over the elements, in storage order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cells: self.as_cells().iter(),
        }
    }

    /// Iterates over writable cursors into the shared buffer, in storage order.
    pub fn iter_cells(&self) -> slice::Iter<'_, Cell<T>> {
        self.as_cells().iter()
    }
}

impl<'a, T: Copy> IntoIterator for &'a Array2D<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
