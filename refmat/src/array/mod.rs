//! A two-dimensional dense array whose storage is shared between handles.
//!
//! Copying a handle (`Clone`) is cheap: the new handle points at the same buffer and bumps a
//! [`SharedCounter`]. The buffer is freed when the last handle sharing it is dropped or
//! reassigned. Sharing is never broken implicitly. Every in-place operation (`fill`, `set`,
//! the compound assignment operators) writes to whatever buffer the handle currently points
//! at, and every handle sharing that buffer sees the change. Value-producing operators and
//! functions always allocate a fresh result. [`Array2D::deep_clone`] is the only way to get a
//! private copy of an existing buffer.
//!
//! Elements are stored in column-major order: element `(i, j)` lives at flat index
//! `i + rows * j`.

use std::cell::Cell;
use std::error::Error;
use std::fmt;
use std::ops::Index;
use std::ptr::NonNull;

use tracing::trace;

use crate::counter::SharedCounter;
use crate::value::Element;

pub use self::functions::{apply_function, cos, exp, log, sin, sqrt, square, tan};
pub use self::iter::Iter;

mod functions;
mod iter;
mod ops;
mod reduce;
#[cfg(feature = "serde")]
mod serialize;

pub struct Array2D<T> {
    rows: usize,
    cols: usize,
    buffer: Option<NonNull<[Cell<T>]>>,
    counter: SharedCounter,
}

impl<T: Element> Array2D<T> {
    /// Allocates a `rows` by `cols` array with every element set to `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .expect("array dimensions overflow usize");

        Self {
            rows,
            cols,
            buffer: allocate(len),
            counter: SharedCounter::new(),
        }
    }

    /// Builds an array from values given in column-major order.
    pub fn from_shape_vec(rows: usize, cols: usize, values: Vec<T>) -> Result<Self, ShapeError> {
        if rows.checked_mul(cols) != Some(values.len()) {
            return Err(ShapeError {
                rows,
                cols,
                len: values.len(),
            });
        }

        let array = Self::new(rows, cols);
        for (cell, value) in array.as_cells().iter().zip(values) {
            cell.set(value);
        }
        Ok(array)
    }

    /// Copies this array's contents into freshly allocated storage that no other handle shares.
    pub fn deep_clone(&self) -> Self {
        let result = Self::new(self.rows, self.cols);
        for (destination, source) in result.as_cells().iter().zip(self.as_cells()) {
            destination.set(source.get());
        }
        result
    }

    /// Overwrites every element of the current buffer with `value`.
    ///
    /// The buffer is not detached first, so every handle sharing it observes the change.
    pub fn fill(&mut self, value: T) {
        for cell in self.as_cells() {
            cell.set(value);
        }
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> T {
        self[(row, column)].get()
    }

    /// Writes a single element of the shared buffer.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        self[(row, column)].set(value);
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T> Array2D<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The elements of the shared buffer, in storage order.
    #[inline]
    pub fn as_cells(&self) -> &[Cell<T>] {
        match self.buffer {
            // The buffer outlives every handle that shares it, including this one.
            Some(buffer) => unsafe { buffer.as_ref() },
            None => &[],
        }
    }

    /// Makes this handle share `rhs`'s buffer, releasing its own buffer first.
    ///
    /// Does nothing if the two handles already share a buffer.
    pub fn assign(&mut self, rhs: &Array2D<T>) {
        if !self.shares_buffer(rhs) {
            self.release();
            self.buffer = rhs.buffer;
            self.counter.assign(&rhs.counter);
            self.rows = rhs.rows;
            self.cols = rhs.cols;
        }
    }

    /// True if both handles point at the same storage.
    #[inline]
    pub fn shares_buffer(&self, other: &Array2D<T>) -> bool {
        self.counter.shares_cell(&other.counter)
    }

    /// The number of handles currently sharing this handle's storage.
    #[inline]
    pub fn handle_count(&self) -> usize {
        self.counter.count()
    }

    #[inline]
    fn flat_index(&self, row: usize, column: usize) -> usize {
        debug_assert!(
            row < self.rows && column < self.cols,
            "index ({row}, {column}) out of bounds for {}x{} array",
            self.rows,
            self.cols,
        );
        row + self.rows * column
    }

    /// Frees the buffer if this is the last handle sharing it. The counter must still count
    /// this handle when this is called.
    fn release(&mut self) {
        if self.counter.is_unique() {
            if let Some(buffer) = self.buffer.take() {
                unsafe { drop(Box::from_raw(buffer.as_ptr())) };
                trace!(len = self.rows * self.cols, "Released array buffer.");

                #[cfg(test)]
                LIVE_BUFFERS.with(|live| live.set(live.get() - 1));
            }
        }
    }
}

fn allocate<T: Element>(len: usize) -> Option<NonNull<[Cell<T>]>> {
    if len == 0 {
        return None;
    }

    let buffer: Box<[Cell<T>]> = (0..len).map(|_| Cell::new(T::default())).collect();
    trace!(len, "Allocated array buffer.");

    #[cfg(test)]
    LIVE_BUFFERS.with(|live| live.set(live.get() + 1));

    Some(NonNull::from(Box::leak(buffer)))
}

#[cfg(test)]
thread_local! {
    static LIVE_BUFFERS: Cell<usize> = Cell::new(0);
}

#[cfg(test)]
pub(crate) fn live_buffers() -> usize {
    LIVE_BUFFERS.with(Cell::get)
}

/// True if both arrays have the same number of rows and the same number of columns.
pub fn equal_size<T>(a: &Array2D<T>, b: &Array2D<T>) -> bool {
    a.rows() == b.rows() && a.cols() == b.cols()
}

impl<T> Default for Array2D<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            buffer: None,
            counter: SharedCounter::new(),
        }
    }
}

/// Creates another handle to the same storage. Use [`Array2D::deep_clone`] for a private copy.
impl<T> Clone for Array2D<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            buffer: self.buffer,
            counter: self.counter.clone(),
        }
    }
}

impl<T> Drop for Array2D<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> Index<(usize, usize)> for Array2D<T> {
    type Output = Cell<T>;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.as_cells()[self.flat_index(row, column)]
    }
}

impl<T> Index<usize> for Array2D<T> {
    type Output = Cell<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_cells()[index]
    }
}

impl<T: Element> PartialEq for Array2D<T> {
    fn eq(&self, other: &Self) -> bool {
        equal_size(self, other) && self.iter().eq(other.iter())
    }
}

impl<T: Element> fmt::Debug for Array2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }

        for row in 0..self.rows {
            write!(f, "{}", if row == 0 { "[" } else { " " })?;
            for column in 0..self.cols {
                fmt::Debug::fmt(&self.get(row, column), f)?;
                if column < self.cols - 1 {
                    write!(f, " ")?;
                }
            }
            write!(f, "{}", if row < self.rows - 1 { "\n" } else { "]" })?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShapeError {
    pub rows: usize,
    pub cols: usize,
    pub len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape ({}, {}) for {} values",
            self.rows, self.cols, self.len
        )
    }
}

impl Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(rows: usize, cols: usize, value: f64) -> Array2D<f64> {
        let mut a = Array2D::new(rows, cols);
        a.fill(value);
        a
    }

    #[test]
    fn new_is_zeroed() {
        for (rows, cols) in [(1, 1), (2, 3), (4, 1), (7, 5)] {
            let a = Array2D::<f64>::new(rows, cols);
            assert_eq!(a.rows(), rows);
            assert_eq!(a.cols(), cols);
            assert!(a.iter().all(|x| x == 0.0));

            let b = Array2D::<i32>::new(rows, cols);
            assert!(b.iter().all(|x| x == 0));
        }
    }

    #[test]
    fn default_is_empty() {
        let a = Array2D::<f64>::default();
        assert_eq!((a.rows(), a.cols()), (0, 0));
        assert!(a.is_empty());
        assert!(a.as_cells().is_empty());
        assert_eq!(a.handle_count(), 1);
    }

    #[test]
    fn column_major_layout() {
        let a = Array2D::from_shape_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(a.get(0, 0), 1);
        assert_eq!(a.get(1, 0), 2);
        assert_eq!(a.get(0, 1), 3);
        assert_eq!(a.get(1, 2), 6);
        assert_eq!(a[4].get(), 5);
    }

    #[test]
    fn from_shape_vec_checks_length() {
        assert_eq!(
            Array2D::from_shape_vec(2, 2, vec![1.0, 2.0, 3.0]),
            Err(ShapeError {
                rows: 2,
                cols: 2,
                len: 3
            })
        );
    }

    #[test]
    fn copies_alias() {
        let a = filled(2, 2, 5.0);
        let mut b = a.clone();
        b.fill(9.0);
        assert_eq!(a.get(0, 0), 9.0);
        assert!(a.shares_buffer(&b));
        assert_eq!(a.handle_count(), 2);

        b.set(1, 1, -1.0);
        assert_eq!(a.get(1, 1), -1.0);
    }

    #[test]
    fn deep_clone_breaks_aliasing() {
        let a = filled(2, 2, 5.0);
        let mut b = a.deep_clone();
        b.fill(9.0);
        assert_eq!(a.get(0, 0), 5.0);
        assert!(!a.shares_buffer(&b));
        assert!(a.handle_count() == 1 && b.handle_count() == 1);
    }

    #[test]
    fn writes_through_index() {
        let a = Array2D::<i64>::new(3, 2);
        let b = a.clone();
        a[(2, 1)].set(7);
        b[0].set(4);
        assert_eq!(b.get(2, 1), 7);
        assert_eq!(a.get(0, 0), 4);
    }

    #[test]
    fn assign_aliases_target() {
        let a = filled(2, 2, 1.0);
        let mut b = filled(3, 1, 2.0);
        b.assign(&a);

        assert!(b.shares_buffer(&a));
        assert_eq!((b.rows(), b.cols()), (2, 2));
        assert_eq!(a.handle_count(), 2);

        b.fill(3.0);
        assert_eq!(a.get(1, 0), 3.0);
    }

    #[test]
    fn assign_to_alias_is_noop() {
        let a = filled(2, 2, 1.0);
        let mut b = a.clone();
        b.assign(&a);
        assert_eq!(a.handle_count(), 2);
        assert_eq!(b.get(0, 1), 1.0);
    }

    #[test]
    fn buffers_freed_with_last_handle() {
        let before = live_buffers();

        let a = filled(2, 2, 1.0);
        assert_eq!(live_buffers(), before + 1);

        {
            let b = a.clone();
            let _c = b.clone();
            assert_eq!(a.handle_count(), 3);
        }
        assert_eq!(live_buffers(), before + 1);
        assert_eq!(a.handle_count(), 1);

        let b = a.clone();
        drop(a);
        assert_eq!(live_buffers(), before + 1);
        drop(b);
        assert_eq!(live_buffers(), before);
    }

    #[test]
    fn reassignment_frees_unshared_buffer() {
        let before = live_buffers();

        let a = filled(2, 2, 1.0);
        let mut b = filled(2, 2, 2.0);
        assert_eq!(live_buffers(), before + 2);

        b.assign(&a);
        assert_eq!(live_buffers(), before + 1);

        let mut c = filled(1, 1, 3.0);
        let d = c.clone();
        c.assign(&a);
        assert_eq!(live_buffers(), before + 2);
        assert_eq!(d.get(0, 0), 3.0);
        assert!(d.handle_count() == 1 && a.handle_count() == 3);

        drop((a, b, c, d));
        assert_eq!(live_buffers(), before);
    }

    #[test]
    fn empty_arrays_hold_no_buffer() {
        let before = live_buffers();
        let a = Array2D::<f32>::new(0, 4);
        let b = a.deep_clone();
        assert_eq!(live_buffers(), before);
        assert!(a.is_empty() && b.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn out_of_bounds_row_traps() {
        let a = Array2D::<f64>::new(2, 2);
        a.get(2, 0);
    }

    #[test]
    fn equal_size_compares_both_dimensions() {
        let cases = [
            ((2, 3), (2, 3), true),
            ((2, 3), (3, 2), false),
            ((1, 6), (6, 1), false),
            ((2, 3), (2, 4), false),
            ((0, 0), (0, 0), true),
            ((0, 3), (0, 0), false),
            ((0, 3), (3, 0), false),
        ];

        for ((r1, c1), (r2, c2), expected) in cases {
            let a = Array2D::<i32>::new(r1, c1);
            let b = Array2D::<i32>::new(r2, c2);
            assert_eq!(equal_size(&a, &b), expected, "{r1}x{c1} vs {r2}x{c2}");
            assert_eq!(equal_size(&b, &a), expected, "{r2}x{c2} vs {r1}x{c1}");
        }

        assert!(equal_size(&Array2D::<f64>::default(), &Array2D::new(0, 0)));
    }

    #[test]
    fn debug_output() {
        let a = Array2D::from_shape_vec(2, 2, vec![1, 3, 2, 4]).unwrap();
        assert_eq!(format!("{a:?}"), "[1 2\n 3 4]");
        assert_eq!(format!("{:?}", Array2D::<i32>::default()), "[]");
    }
}
