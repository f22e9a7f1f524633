use crate::compare::{Compare, Natural};
use crate::error::{Result, Violation};
use crate::red_black_tree::cursor::{Cursor, CursorMut};
use crate::red_black_tree::iter::{TreeIntoIter, TreeIter};
use crate::red_black_tree::map::RedBlackMap;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::result;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black
/// so that no path from the root to an empty subtree is more than twice as long as any other.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0).unwrap();
/// set.insert(3).unwrap();
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct RedBlackSet<T, C = Natural> {
    map: RedBlackMap<T, (), C>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>` ordered by `Ord`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            map: RedBlackMap::new(),
        }
    }

    /// Constructs a new, empty `RedBlackSet<T>` whose nodes are allocated `chunk_size` at a time.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackSet {
            map: RedBlackMap::with_chunk_size(chunk_size),
        }
    }
}

impl<T, C> RedBlackSet<T, C> {
    /// Constructs a new, empty `RedBlackSet<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    /// use red_black_collections::{Natural, Reversed};
    ///
    /// let mut set = RedBlackSet::with_comparator(Reversed(Natural));
    /// set.insert(1).unwrap();
    /// set.insert(2).unwrap();
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&2, &1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        RedBlackSet {
            map: RedBlackMap::with_comparator(comparator),
        }
    }

    /// Inserts a key into the set. Returns a cursor at the key and whether it was inserted. If
    /// an equal key already exists, the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1).unwrap().1);
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1).unwrap().1);
    /// ```
    pub fn insert(&mut self, key: T) -> Result<(Cursor<'_, T, (), C>, bool)>
    where
        C: Compare<T>,
    {
        self.map.insert(key, ())
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Removes a key from the set, reporting `Error::KeyNotFound` if it does not exist.
    pub fn erase<Q>(&mut self, key: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.map.erase(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns a cursor at a particular key, or the end cursor if the key does not exist.
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, T, (), C>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.map.find(key)
    }

    /// Returns a mutable cursor at a particular key, or at the end position if the key does not
    /// exist. Removing through the cursor erases the element at that position.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set: RedBlackSet<u32> = (1..4).collect();
    /// let mut cursor = set.find_mut(&2);
    /// assert_eq!(cursor.remove_current(), Some((2, ())));
    /// assert_eq!(cursor.key(), Some(&3));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn find_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, T, (), C>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.map.find_mut(key)
    }

    /// Returns a cursor at the first key that is not less than a particular key.
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor<'_, T, (), C>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.map.lower_bound(key)
    }

    /// Returns a cursor at the first key that is greater than a particular key.
    pub fn upper_bound<Q>(&self, key: &Q) -> Cursor<'_, T, (), C>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.map.upper_bound(key)
    }

    pub fn begin(&self) -> Cursor<'_, T, (), C> {
        self.map.begin()
    }

    pub fn end(&self) -> Cursor<'_, T, (), C> {
        self.map.end()
    }

    /// Returns a mutable cursor at the smallest key.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, (), C> {
        self.map.cursor_front_mut()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.map.max_size()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(2).unwrap();
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Exchanges the contents of two sets.
    pub fn swap(&mut self, other: &mut Self) {
        self.map.swap(&mut other.map);
    }

    /// Moves every key of `other` into the set. Keys already present are dropped, and `other` is
    /// empty afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set: RedBlackSet<u32> = (1..4).collect();
    /// let mut other: RedBlackSet<u32> = (3..6).collect();
    /// set.merge(&mut other).unwrap();
    /// assert_eq!(set.len(), 5);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) -> Result<()>
    where
        C: Compare<T>,
    {
        self.map.merge(&mut other.map)
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.map.floor(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.map.ceil(key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1).unwrap();
    /// set.insert(2).unwrap();
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T, C> {
        RedBlackSetIter::new(self.map.iter())
    }

    /// Checks the red black invariants of the underlying tree and returns its black height.
    pub fn validate(&self) -> result::Result<usize, Violation>
    where
        C: Compare<T>,
    {
        self.map.validate()
    }
}

impl<T, C> IntoIterator for RedBlackSet<T, C> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        RedBlackSetIntoIter::new(self.map.into_iter())
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackSet<T, C>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T, C>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>` and `RedBlackMultiset<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    inner: TreeIntoIter<T, ()>,
}

impl<T> RedBlackSetIntoIter<T> {
    pub(crate) fn new(inner: TreeIntoIter<T, ()>) -> Self {
        RedBlackSetIntoIter { inner }
    }
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| pair.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for RedBlackSetIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| pair.0)
    }
}

impl<T> ExactSizeIterator for RedBlackSetIntoIter<T> {}

/// An iterator for `RedBlackSet<T>` and `RedBlackMultiset<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T, C> {
    inner: TreeIter<'a, T, (), C>,
}

impl<'a, T, C> RedBlackSetIter<'a, T, C> {
    pub(crate) fn new(inner: TreeIter<'a, T, (), C>) -> Self {
        RedBlackSetIter { inner }
    }
}

impl<'a, T, C> Clone for RedBlackSetIter<'a, T, C> {
    fn clone(&self) -> Self {
        RedBlackSetIter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T, C> Iterator for RedBlackSetIter<'a, T, C>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| pair.0)
    }
}

impl<'a, T, C> DoubleEndedIterator for RedBlackSetIter<'a, T, C>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| pair.0)
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Clone for RedBlackSet<T, C>
where
    T: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        RedBlackSet {
            map: self.map.clone(),
        }
    }
}

impl<T, C> fmt::Debug for RedBlackSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> PartialEq for RedBlackSet<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T, C> Eq for RedBlackSet<T, C> where T: Eq {}

impl<T, C> Extend<T> for RedBlackSet<T, C>
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

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackSet;
    use crate::compare::{Natural, Reversed};
    use crate::error::Error;

    #[test]
    fn test_len_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = RedBlackSet::new();
        assert!(set.insert(1).unwrap().1);
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_existing() {
        let mut set = RedBlackSet::new();
        set.insert(1).unwrap();
        let (cursor, inserted) = set.insert(1).unwrap();
        assert!(!inserted);
        assert_eq!(cursor.key(), Some(&1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = RedBlackSet::new();
        set.insert(1).unwrap();
        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
        assert_eq!(set.erase(&1), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_min_max() {
        let mut set = RedBlackSet::new();
        set.insert(1).unwrap();
        set.insert(3).unwrap();
        set.insert(5).unwrap();

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut set = RedBlackSet::new();
        set.insert(1).unwrap();
        set.insert(3).unwrap();
        set.insert(5).unwrap();

        assert_eq!(set.floor(&0), None);
        assert_eq!(set.floor(&2), Some(&1));
        assert_eq!(set.floor(&4), Some(&3));
        assert_eq!(set.floor(&6), Some(&5));

        assert_eq!(set.ceil(&0), Some(&1));
        assert_eq!(set.ceil(&2), Some(&3));
        assert_eq!(set.ceil(&4), Some(&5));
        assert_eq!(set.ceil(&6), None);
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut set = RedBlackSet::new();
        set.insert(String::from("b")).unwrap();
        set.insert(String::from("a")).unwrap();
        assert!(set.contains("a"));
        assert_eq!(set.lower_bound("aa").key().map(String::as_str), Some("b"));
        assert!(set.upper_bound("b").is_end());
    }

    #[test]
    fn test_reversed() {
        let mut set = RedBlackSet::with_comparator(Reversed(Natural));
        for key in 0..10u32 {
            set.insert(key).unwrap();
        }
        assert_eq!(set.min(), Some(&9));
        assert_eq!(set.floor(&5), Some(&5));
        assert_eq!(set.upper_bound(&5).key(), Some(&4));
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_into_iter() {
        let mut set = RedBlackSet::new();
        set.insert(1).unwrap();
        set.insert(5).unwrap();
        set.insert(3).unwrap();

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = RedBlackSet::new();
        set.insert(1).unwrap();
        set.insert(5).unwrap();
        set.insert(3).unwrap();

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!(set.iter().rev().collect::<Vec<&u32>>(), vec![&5, &3, &1]);
    }

    #[test]
    fn test_remove_current() {
        let mut set: RedBlackSet<u32> = (1..=10).collect();
        {
            let mut cursor = set.find_mut(&4);
            assert_eq!(cursor.remove_current(), Some((4, ())));
            assert_eq!(cursor.key(), Some(&5));
        }
        assert_eq!(set.find_mut(&4).remove_current(), None);

        let mut cursor = set.cursor_front_mut();
        while let Some(key) = cursor.key().cloned() {
            if key % 2 == 0 {
                cursor.remove_current();
            } else {
                cursor.move_next();
            }
        }
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5, &7, &9]);
        assert_eq!(set.len(), 5);
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_clone_and_eq() {
        let set: RedBlackSet<u32> = vec![3, 1, 2, 3].into_iter().collect();
        let copy = set.clone();
        assert_eq!(set, copy);
        assert_eq!(format!("{:?}", copy), "{1, 2, 3}");
    }
}
