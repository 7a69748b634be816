use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::{GeometryError, ParseError, Result};
use crate::math::Scalar;
use crate::text;

use super::Vec2;

/// Ordered, growable sequence of [`Vec2`] values.
///
/// Text form is `[(x1, y1), (x2, y2), ...]`, or `[]` when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vec2Array<T> {
    items: Vec<Vec2<T>>,
}

impl<T: Scalar> Vec2Array<T> {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an array of `len` null vectors.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self::filled(len, Vec2::zero())
    }

    /// Creates an array of `len` copies of `value`.
    #[must_use]
    pub fn filled(len: usize, value: Vec2<T>) -> Self {
        Self {
            items: vec![value; len],
        }
    }

    /// Creates an array from `(x, y)` pairs, keeping their order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (T, T)>) -> Self {
        pairs.into_iter().collect()
    }

    /// Appends `value` at the end of the array.
    pub fn push(&mut self, value: Vec2<T>) {
        self.items.push(value);
    }

    /// Returns the number of vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the array holds no vectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the vector at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Vec2<T>> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or_else(|| GeometryError::IndexOutOfRange { index, len }.into())
    }

    /// Returns a mutable reference to the vector at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Vec2<T>> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| GeometryError::IndexOutOfRange { index, len }.into())
    }

    /// Returns the first vector, or `None` if the array is empty.
    #[must_use]
    pub fn first(&self) -> Option<&Vec2<T>> {
        self.items.first()
    }

    /// Returns the last vector, or `None` if the array is empty.
    #[must_use]
    pub fn last(&self) -> Option<&Vec2<T>> {
        self.items.last()
    }

    /// Returns whether some element is exactly equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &Vec2<T>) -> bool {
        self.items.contains(value)
    }

    /// Iterates over the vectors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec2<T>> {
        self.items.iter()
    }

    /// Iterates over the vectors in insertion order, allowing each to be
    /// modified in place.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Vec2<T>> {
        self.items.iter_mut()
    }

    /// Removes all vectors.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Consumes the array, returning its vectors.
    #[must_use]
    pub fn into_vec(self) -> Vec<Vec2<T>> {
        self.items
    }
}

impl<T: Scalar> Index<usize> for Vec2Array<T> {
    type Output = Vec2<T>;

    fn index(&self, index: usize) -> &Vec2<T> {
        &self.items[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Vec2Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut Vec2<T> {
        &mut self.items[index]
    }
}

impl<T: Scalar> From<Vec<Vec2<T>>> for Vec2Array<T> {
    fn from(items: Vec<Vec2<T>>) -> Self {
        Self { items }
    }
}

impl<T: Scalar, const N: usize> From<[(T, T); N]> for Vec2Array<T> {
    fn from(pairs: [(T, T); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<T: Scalar> FromIterator<Vec2<T>> for Vec2Array<T> {
    fn from_iter<I: IntoIterator<Item = Vec2<T>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Scalar> FromIterator<(T, T)> for Vec2Array<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        iter.into_iter().map(Vec2::from).collect()
    }
}

impl<T: Scalar> Extend<Vec2<T>> for Vec2Array<T> {
    fn extend<I: IntoIterator<Item = Vec2<T>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Vec2Array<T> {
    type Item = Vec2<T>;
    type IntoIter = std::vec::IntoIter<Vec2<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vec2Array<T> {
    type Item = &'a Vec2<T>;
    type IntoIter = std::slice::Iter<'a, Vec2<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vec2Array<T> {
    type Item = &'a mut Vec2<T>;
    type IntoIter = std::slice::IterMut<'a, Vec2<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: Scalar> fmt::Display for Vec2Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(v, f)?;
        }
        f.write_str("]")
    }
}

impl<T: Scalar> FromStr for Vec2Array<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        text::parse_all(s, text::read_vec2_array)
    }
}
