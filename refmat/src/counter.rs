use std::cell::Cell;
use std::fmt;
use std::ptr::NonNull;

/// An intrusive reference count.
///
/// Every copy of a `SharedCounter` points at the same heap cell, which always holds the number
/// of live copies. The cell is freed when the last copy is dropped or reassigned. The counter
/// owns nothing else; it only answers whether a handle is the sole owner of whatever the
/// counter was created alongside.
///
/// ```
/// # use refmat::SharedCounter;
/// let a = SharedCounter::new(); // 1
/// let b = a.clone(); // both are 2
/// let mut c = SharedCounter::new(); // 1
/// c.assign(&a); // all three are 3
/// assert_eq!(b.count(), 3);
/// ```
///
/// Counting is not atomic, so the type is neither `Send` nor `Sync`.
pub struct SharedCounter {
    cell: NonNull<Cell<usize>>,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self {
            cell: NonNull::from(Box::leak(Box::new(Cell::new(1)))),
        }
    }

    /// True if this is the only copy of the counter.
    #[inline]
    pub fn is_unique(&self) -> bool {
        self.count() == 1
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.cell().get()
    }

    /// Drops this copy's share of its current cell and joins `other`'s cell.
    ///
    /// Assigning a counter to itself, or to a copy of itself, leaves the count unchanged.
    pub fn assign(&mut self, other: &SharedCounter) {
        if !self.shares_cell(other) {
            other.increment();
            self.decrement();
            self.cell = other.cell;
        }
    }

    /// True if both counters count the same owners.
    #[inline]
    pub fn shares_cell(&self, other: &SharedCounter) -> bool {
        self.cell == other.cell
    }

    #[inline]
    fn cell(&self) -> &Cell<usize> {
        // The cell stays allocated for as long as any copy, including this one, is alive.
        unsafe { self.cell.as_ref() }
    }

    #[inline]
    fn increment(&self) {
        let count = self.cell().get();
        debug_assert!(count > 0, "counter incremented after release");
        self.cell().set(count + 1);
    }

    /// Releases this copy's share, freeing the cell if it was the last one.
    fn decrement(&mut self) {
        let count = self.cell().get();
        if count == 1 {
            unsafe { drop(Box::from_raw(self.cell.as_ptr())) };
        } else {
            self.cell().set(count - 1);
        }
    }
}

impl Clone for SharedCounter {
    fn clone(&self) -> Self {
        self.increment();
        Self { cell: self.cell }
    }
}

impl Drop for SharedCounter {
    fn drop(&mut self) {
        self.decrement();
    }
}

impl Default for SharedCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SharedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedCounter").field(&self.count()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_unique() {
        let counter = SharedCounter::new();
        assert!(counter.is_unique());
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn copies_share_count() {
        let a = SharedCounter::new();
        let b = a.clone();
        assert_eq!(a.count(), 2);
        assert_eq!(b.count(), 2);
        assert!(!a.is_unique());
        assert!(a.shares_cell(&b));

        {
            let c = b.clone();
            assert_eq!(c.count(), 3);
        }

        assert_eq!(a.count(), 2);
        drop(b);
        assert!(a.is_unique());
    }

    #[test]
    fn assign_moves_between_cells() {
        let a = SharedCounter::new();
        let b = a.clone();
        let mut c = SharedCounter::new();
        let d = c.clone();

        c.assign(&a);
        assert_eq!(a.count(), 3);
        assert!(c.shares_cell(&b));
        assert!(d.is_unique());
        assert!(!d.shares_cell(&c));
    }

    #[test]
    fn assign_last_copy_releases_old_cell() {
        let a = SharedCounter::new();
        let mut b = SharedCounter::new();

        b.assign(&a);
        assert_eq!(a.count(), 2);

        drop(a);
        assert!(b.is_unique());
    }

    #[test]
    fn self_assign_is_noop() {
        let mut a = SharedCounter::new();
        let b = a.clone();

        a.assign(&b);
        assert_eq!(a.count(), 2);
        assert!(a.shares_cell(&b));

        let mut c = SharedCounter::new();
        let copy = c.clone();
        c.assign(&copy);
        assert_eq!(c.count(), 2);
        drop(copy);
        assert!(c.is_unique());
    }
}
