use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::math::Scalar;

use super::Vec2;

/// Shared, mutable handle to a [`Vec2`].
///
/// Cloning the handle creates an alias: every clone reads and writes the
/// same storage. Use [`detach`](Self::detach) for an independent copy.
///
/// The handle is single-threaded (`!Send`, `!Sync`).
#[derive(Clone, Default)]
pub struct SharedVec2<T> {
    inner: Rc<RefCell<Vec2<T>>>,
}

impl<T: Scalar> SharedVec2<T> {
    /// Wraps `value` in a new shared handle.
    #[must_use]
    pub fn new(value: Vec2<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> Vec2<T> {
        *self.inner.borrow()
    }

    /// Replaces the value seen by every alias.
    pub fn set(&self, value: Vec2<T>) {
        *self.inner.borrow_mut() = value;
    }

    /// Mutates the value in place and returns what `f` returns.
    pub fn update<R>(&self, f: impl FnOnce(&mut Vec2<T>) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// Returns whether both handles alias the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns a new handle holding a copy of the current value.
    #[must_use]
    pub fn detach(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Scalar> From<Vec2<T>> for SharedVec2<T> {
    fn from(value: Vec2<T>) -> Self {
        Self::new(value)
    }
}

impl<T: Scalar> fmt::Debug for SharedVec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedVec2").field(&self.get()).finish()
    }
}
