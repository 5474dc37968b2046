//! Applies unary functions to a fixed list of integers.

use itertools::Itertools;
use std::fmt;
use std::ops::Deref;

/// Ordered list of integers, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberList(Vec<i64>);

impl NumberList {
    pub fn new(numbers: impl Into<Vec<i64>>) -> Self {
        NumberList(numbers.into())
    }

    /// `f(x)` for every `x`, same length and order as `self`.
    pub fn map<U, F>(&self, f: F) -> Vec<U>
    where
        F: Fn(i64) -> U,
    {
        self.0.iter().copied().map(f).collect()
    }

    /// The elements for which `predicate` holds, in their original order.
    pub fn filter<P>(&self, predicate: P) -> NumberList
    where
        P: Fn(i64) -> bool,
    {
        NumberList(self.0.iter().copied().filter(|&x| predicate(x)).collect())
    }
}

impl Deref for NumberList {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for NumberList {
    fn from(numbers: Vec<i64>) -> Self {
        NumberList(numbers)
    }
}

impl fmt::Display for NumberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}
