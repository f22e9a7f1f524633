use crate::compare::{Compare, Natural};
use crate::error::{Result, Violation};
use crate::red_black_tree::cursor::{Cursor, CursorMut};
use crate::red_black_tree::set::{RedBlackSetIntoIter, RedBlackSetIter};
use crate::red_black_tree::tree::{Policy, RedBlackTree, DEFAULT_CHUNK_SIZE};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::result;

/// An ordered multiset implemented using a red black tree.
///
/// Unlike `RedBlackSet`, the multiset keeps every key it is given. Keys that compare equal are
/// stored next to each other in the order they were inserted.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::RedBlackMultiset;
///
/// let mut multiset = RedBlackMultiset::new();
/// for key in vec![1, 2, 3, 3, 4] {
///     multiset.insert(key).unwrap();
/// }
///
/// assert_eq!(multiset.len(), 5);
/// assert_eq!(multiset.count(&3), 2);
/// assert_eq!(multiset.equal_range(&3).collect::<Vec<_>>(), vec![&3, &3]);
///
/// assert_eq!(multiset.erase(&3), Ok(2));
/// assert_eq!(multiset.count(&3), 0);
/// ```
pub struct RedBlackMultiset<T, C = Natural> {
    tree: RedBlackTree<T, (), C>,
}

impl<T> RedBlackMultiset<T> {
    /// Constructs a new, empty `RedBlackMultiset<T>` ordered by `Ord`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    ///
    /// let multiset: RedBlackMultiset<u32> = RedBlackMultiset::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Constructs a new, empty `RedBlackMultiset<T>` whose nodes are allocated `chunk_size` at a
    /// time.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackMultiset {
            tree: RedBlackTree::with_config(Policy::Multi, Natural, chunk_size),
        }
    }
}

impl<T, C> RedBlackMultiset<T, C> {
    /// Constructs a new, empty `RedBlackMultiset<T, C>` ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        RedBlackMultiset {
            tree: RedBlackTree::with_config(Policy::Multi, comparator, DEFAULT_CHUNK_SIZE),
        }
    }

    /// Inserts a key into the multiset after any keys that compare equal to it, and returns a
    /// cursor at the new element.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    ///
    /// let mut multiset = RedBlackMultiset::new();
    /// multiset.insert(1).unwrap();
    /// let mut cursor = multiset.insert(1).unwrap();
    /// cursor.move_prev();
    /// assert_eq!(cursor.key(), Some(&1));
    /// assert_eq!(multiset.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) -> Result<Cursor<'_, T, (), C>>
    where
        C: Compare<T>,
    {
        let (id, _) = self.tree.insert(key, ())?;
        Ok(self.tree.cursor(Some(id)))
    }

    /// Removes one occurrence of a key from the multiset, the one that was inserted first.
    /// Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    ///
    /// let mut multiset = RedBlackMultiset::new();
    /// multiset.insert(1).unwrap();
    /// multiset.insert(1).unwrap();
    /// assert_eq!(multiset.remove(&1), Some(1));
    /// assert_eq!(multiset.count(&1), 1);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.remove(key).map(|pair| pair.0)
    }

    /// Removes every occurrence of a key from the multiset and returns how many were removed,
    /// reporting `Error::KeyNotFound` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    /// use red_black_collections::Error;
    ///
    /// let mut multiset = RedBlackMultiset::new();
    /// multiset.insert(1).unwrap();
    /// multiset.insert(1).unwrap();
    /// assert_eq!(multiset.erase(&1), Ok(2));
    /// assert_eq!(multiset.erase(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn erase<Q>(&mut self, key: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.erase_all(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.contains(key)
    }

    /// Returns the number of keys that compare equal to a particular key.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.count(key)
    }

    /// Returns a cursor at the first occurrence of a particular key, or the end cursor if the key
    /// does not exist.
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, T, (), C>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.cursor(self.tree.search(key))
    }

    /// Returns a mutable cursor at the first occurrence of a particular key.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    ///
    /// let mut multiset: RedBlackMultiset<u32> = vec![1, 2, 2, 2, 3].into_iter().collect();
    /// let mut cursor = multiset.find_mut(&2);
    /// cursor.move_next();
    /// cursor.remove_current();
    /// assert_eq!(multiset.count(&2), 2);
    /// ```
    pub fn find_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, T, (), C>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let position = self.tree.search(key);
        self.tree.cursor_mut(position)
    }

    /// Returns a cursor at the first key that is not less than a particular key.
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor<'_, T, (), C>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.cursor(self.tree.lower_bound(key))
    }

    /// Returns a cursor at the first key that is greater than a particular key.
    pub fn upper_bound<Q>(&self, key: &Q) -> Cursor<'_, T, (), C>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.cursor(self.tree.upper_bound(key))
    }

    /// Returns an iterator over every key that compares equal to a particular key, in insertion
    /// order. The iterator is empty if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    ///
    /// let multiset: RedBlackMultiset<u32> = vec![1, 2, 3, 3, 4].into_iter().collect();
    /// assert_eq!(multiset.equal_range(&3).count(), 2);
    /// assert_eq!(multiset.equal_range(&5).next(), None);
    /// ```
    pub fn equal_range<Q>(&self, key: &Q) -> RedBlackSetIter<'_, T, C>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let (lower, upper) = self.tree.equal_range(key);
        RedBlackSetIter::new(self.tree.range_between(lower, upper))
    }

    pub fn begin(&self) -> Cursor<'_, T, (), C> {
        self.tree.begin()
    }

    pub fn end(&self) -> Cursor<'_, T, (), C> {
        self.tree.end()
    }

    /// Returns a mutable cursor at the smallest key.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, (), C> {
        let first = self.tree.first();
        self.tree.cursor_mut(first)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Moves every key of `other` into the multiset, leaving `other` empty. Equal keys from
    /// `other` are placed after the ones already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMultiset;
    ///
    /// let mut multiset: RedBlackMultiset<u32> = (1..4).collect();
    /// let mut other: RedBlackMultiset<u32> = (3..6).collect();
    /// multiset.merge(&mut other).unwrap();
    /// assert_eq!(multiset.len(), 6);
    /// assert_eq!(multiset.count(&3), 2);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) -> Result<()>
    where
        C: Compare<T>,
    {
        self.tree.merge(&mut other.tree)
    }

    /// Returns the minimum key of the multiset. Returns `None` if the multiset is empty.
    pub fn min(&self) -> Option<&T> {
        self.begin().key()
    }

    /// Returns the maximum key of the multiset. Returns `None` if the multiset is empty.
    pub fn max(&self) -> Option<&T> {
        let mut cursor = self.end();
        cursor.move_prev();
        cursor.key()
    }

    /// Returns an iterator over the multiset. The iterator will yield keys using in-order
    /// traversal.
    pub fn iter(&self) -> RedBlackSetIter<'_, T, C> {
        RedBlackSetIter::new(self.tree.iter())
    }

    /// Checks the red black invariants of the underlying tree and returns its black height.
    pub fn validate(&self) -> result::Result<usize, Violation>
    where
        C: Compare<T>,
    {
        self.tree.validate()
    }
}

impl<T, C> IntoIterator for RedBlackMultiset<T, C> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        RedBlackSetIntoIter::new(self.tree.into_iter())
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackMultiset<T, C>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T, C>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for RedBlackMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Clone for RedBlackMultiset<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        RedBlackMultiset {
            tree: self.tree.clone(),
        }
    }
}

impl<T, C> fmt::Debug for RedBlackMultiset<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C> PartialEq for RedBlackMultiset<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for RedBlackMultiset<T, C> where T: Eq {}

impl<T, C> Extend<T> for RedBlackMultiset<T, C>
where
    C: Compare<T>,
{
    /// # Panics
    ///
    /// Panics if a node cannot be allocated.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key).expect("Error: failed to allocate node.");
        }
    }
}

impl<T> FromIterator<T> for RedBlackMultiset<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut multiset = RedBlackMultiset::new();
        multiset.extend(iter);
        multiset
    }
}
