//! The mutable integer sequence that a sort run reorders.
//!
//! `swap` and `replace` are the only mutation paths, so every in-place
//! reorder the animation shows corresponds to an explicit `swap` call.

use std::fmt;

use crate::step::Direction;

/// Ordered collection of integers with an index-based swap primitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberSequence {
    values: Vec<i32>,
}

impl NumberSequence {
    /// Create a sequence from the given values.
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> i32 {
        self.values[index]
    }

    /// Borrow the values.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Copy of the current values, for handing to the render side.
    #[must_use]
    pub fn snapshot(&self) -> Vec<i32> {
        self.values.clone()
    }

    /// Exchange the elements at `i` and `j`.
    ///
    /// A no-op when `i == j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        let len = self.values.len();
        assert!(
            i < len && j < len,
            "swap indices ({i}, {j}) out of range for sequence of length {len}"
        );
        if i != j {
            self.values.swap(i, j);
        }
    }

    /// Substitute the entire contents.
    pub fn replace(&mut self, values: Vec<i32>) {
        self.values = values;
    }

    /// Whether the values are ordered according to `direction`.
    ///
    /// Ascending means non-decreasing, descending means non-increasing.
    #[must_use]
    pub fn is_sorted(&self, direction: Direction) -> bool {
        self.values.windows(2).all(|w| match direction {
            Direction::Ascending => w[0] <= w[1],
            Direction::Descending => w[0] >= w[1],
        })
    }

    /// Whether this sequence holds exactly the same multiset of values as `other`.
    #[must_use]
    pub fn is_permutation_of(&self, other: &[i32]) -> bool {
        if self.values.len() != other.len() {
            return false;
        }
        let mut a = self.values.clone();
        let mut b = other.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl From<Vec<i32>> for NumberSequence {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for NumberSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
