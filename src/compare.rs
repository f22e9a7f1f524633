//! Strict weak orderings used to place keys in a tree.
//!
//! Every placement and search decision in a tree goes through a `Compare` implementation
//! supplied when the tree is constructed. `Natural` defers to `Ord`, and any closure of the form
//! `Fn(&T, &T) -> Ordering` can be used directly.
//!
//! # Examples
//!
//! ```
//! use red_black_collections::compare::{Compare, Natural};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over values of type `T`.
pub trait Compare<T: ?Sized> {
    /// Compares two values, returning their relative order.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// The comparator that orders values by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

/// A comparator that reverses the order of another comparator.
///
/// # Examples
///
/// ```
/// use red_black_collections::compare::{Compare, Natural, Reversed};
/// use std::cmp::Ordering;
///
/// assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T, C> Compare<T> for Reversed<C>
where
    T: ?Sized,
    C: Compare<T>,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.0.compare(rhs, lhs)
    }
}
