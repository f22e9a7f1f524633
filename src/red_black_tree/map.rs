use crate::compare::{Compare, Natural};
use crate::error::{Error, Result, Violation};
use crate::red_black_tree::cursor::{Cursor, CursorMut};
use crate::red_black_tree::iter::{TreeIntoIter, TreeIter};
use crate::red_black_tree::tree::{Policy, RedBlackTree, DEFAULT_CHUNK_SIZE};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::result;

/// An iterator for `RedBlackMap<K, V, C>` that yields key-value pairs in order.
pub type RedBlackMapIter<'a, K, V, C> = TreeIter<'a, K, V, C>;

/// An owning iterator for `RedBlackMap<K, V, C>` that yields key-value pairs in order.
pub type RedBlackMapIntoIter<K, V> = TreeIntoIter<K, V>;

/// An ordered map implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// No red node has a red child, and every path from a node to an empty subtree passes through the
/// same number of black nodes, so the longest path is at most twice the shortest and every
/// operation is logarithmic. Keys are unique: inserting an existing key leaves the map unchanged.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1).unwrap();
/// map.insert(3, 4).unwrap();
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// *map.get_mut(&0).unwrap() = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct RedBlackMap<K, V, C = Natural> {
    tree: RedBlackTree<K, V, C>,
}

impl<K, V> RedBlackMap<K, V> {
    /// Constructs a new, empty `RedBlackMap<K, V>` ordered by `Ord`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Constructs a new, empty `RedBlackMap<K, V>` whose nodes are allocated `chunk_size` at a
    /// time.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::with_chunk_size(64);
    /// ```
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackMap {
            tree: RedBlackTree::with_config(Policy::Unique, Natural, chunk_size),
        }
    }
}

impl<K, V, C> RedBlackMap<K, V, C> {
    /// Constructs a new, empty `RedBlackMap<K, V, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// map.insert(1u32, 1).unwrap();
    /// map.insert(2u32, 2).unwrap();
    /// assert_eq!(map.min(), Some(&2));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        RedBlackMap {
            tree: RedBlackTree::with_config(Policy::Unique, comparator, DEFAULT_CHUNK_SIZE),
        }
    }

    /// Inserts a key-value pair into the map. Returns a cursor at the key and whether the pair
    /// was inserted. If the key already exists, the map is left unchanged and the cursor points
    /// at the existing pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert!(map.insert(1, 1).unwrap().1);
    ///
    /// let (cursor, inserted) = map.insert(1, 2).unwrap();
    /// assert!(!inserted);
    /// assert_eq!(cursor.value(), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<(Cursor<'_, K, V, C>, bool)>
    where
        C: Compare<K>,
    {
        let (id, inserted) = self.tree.insert(key, value)?;
        Ok((self.tree.cursor(Some(id)), inserted))
    }

    /// Inserts a key-value pair into the map, replacing the value if the key already exists.
    /// Returns a cursor at the key and whether a new pair was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert!(!map.insert_or_assign(1, 2).unwrap().1);
    /// assert_eq!(map.get(&1), Some(&2));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Result<(Cursor<'_, K, V, C>, bool)>
    where
        C: Compare<K>,
    {
        let (id, inserted) = self.tree.insert_or_assign(key, value)?;
        Ok((self.tree.cursor(Some(id)), inserted))
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.remove(key)
    }

    /// Removes a key-value pair from the map, reporting `Error::KeyNotFound` if the key does not
    /// exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    /// use red_black_collections::Error;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.erase(&1), Ok((1, 1)));
    /// assert_eq!(map.erase(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn erase<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.erase(key)
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.contains(key)
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.find(key).value()
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let id = self.tree.search(key)?;
        self.tree.value_mut(id)
    }

    /// Returns an immutable reference to the value associated with a particular key, reporting
    /// `Error::KeyNotFound` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    /// use red_black_collections::Error;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.at(&1), Ok(&1));
    /// assert_eq!(map.at(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn at<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with a particular key, reporting
    /// `Error::KeyNotFound` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// *map.at_mut(&1).unwrap() += 1;
    /// assert_eq!(map[&1], 2);
    /// assert!(map.at_mut(&2).is_err());
    /// ```
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with a particular key, inserting the
    /// default value first if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map: RedBlackMap<&str, u32> = RedBlackMap::new();
    /// *map.get_or_insert_default("a").unwrap() += 1;
    /// *map.get_or_insert_default("a").unwrap() += 1;
    /// assert_eq!(map["a"], 2);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> Result<&mut V>
    where
        C: Compare<K>,
        V: Default,
    {
        let id = match self.tree.search(&key) {
            Some(id) => id,
            None => self.tree.insert(key, V::default())?.0,
        };
        self.tree.value_mut(id).ok_or(Error::KeyNotFound)
    }

    /// Returns a cursor at a particular key, or the end cursor if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.find(&1).key(), Some(&1));
    /// assert!(map.find(&2) == map.end());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, K, V, C>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.cursor(self.tree.search(key))
    }

    /// Returns a mutable cursor at a particular key, or at the end position if the key does not
    /// exist.
    pub fn find_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, K, V, C>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let position = self.tree.search(key);
        self.tree.cursor_mut(position)
    }

    /// Returns a cursor at the first key that is not less than a particular key.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
    /// assert_eq!(map.lower_bound(&1).key(), Some(&1));
    /// assert_eq!(map.lower_bound(&2).key(), Some(&3));
    /// assert!(map.lower_bound(&4).is_end());
    /// ```
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor<'_, K, V, C>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.cursor(self.tree.lower_bound(key))
    }

    /// Returns a cursor at the first key that is greater than a particular key.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
    /// assert_eq!(map.upper_bound(&1).key(), Some(&3));
    /// assert!(map.upper_bound(&3).is_end());
    /// ```
    pub fn upper_bound<Q>(&self, key: &Q) -> Cursor<'_, K, V, C>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.tree.cursor(self.tree.upper_bound(key))
    }

    /// Returns a cursor at the smallest key, or the end cursor if the map is empty.
    pub fn begin(&self) -> Cursor<'_, K, V, C> {
        self.tree.begin()
    }

    /// Returns the end cursor, one past the largest key.
    pub fn end(&self) -> Cursor<'_, K, V, C> {
        self.tree.end()
    }

    /// Returns a mutable cursor at the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for i in 0..4 {
    ///     map.insert(i, i).unwrap();
    /// }
    ///
    /// let mut cursor = map.cursor_front_mut();
    /// while let Some(key) = cursor.key().cloned() {
    ///     if key % 2 == 0 {
    ///         cursor.remove_current();
    ///     } else {
    ///         cursor.move_next();
    ///     }
    /// }
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &3]);
    /// ```
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, V, C> {
        let first = self.tree.first();
        self.tree.cursor_mut(first)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the largest number of elements the map could hold.
    pub fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchanges the contents of two maps.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// let mut other = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.swap(&mut other);
    /// assert!(map.is_empty());
    /// assert_eq!(other.len(), 1);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Moves every key-value pair of `other` into the map. Pairs whose keys already exist in the
    /// map are dropped, and `other` is empty afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// let mut other = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// other.insert(1, 10).unwrap();
    /// other.insert(2, 20).unwrap();
    ///
    /// map.merge(&mut other).unwrap();
    /// assert_eq!(map.iter().collect::<Vec<_>>(), vec![(&1, &1), (&2, &20)]);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) -> Result<()>
    where
        C: Compare<K>,
    {
        self.tree.merge(&mut other.tree)
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let mut cursor = self.upper_bound(key);
        cursor.move_prev();
        cursor.key()
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.lower_bound(key).key()
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&K> {
        self.begin().key()
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(3, 3).unwrap();
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&K> {
        let mut cursor = self.end();
        cursor.move_prev();
        cursor.key()
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1).unwrap();
    /// map.insert(2, 2).unwrap();
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, K, V, C> {
        self.tree.iter()
    }

    /// Returns an iterator over the keys of the map in order.
    pub fn keys(&self) -> RedBlackMapKeys<'_, K, V, C> {
        RedBlackMapKeys {
            inner: self.tree.iter(),
        }
    }

    /// Returns an iterator over the values of the map in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.values().collect::<Vec<_>>(), vec![&"a", &"b"]);
    /// ```
    pub fn values(&self) -> RedBlackMapValues<'_, K, V, C> {
        RedBlackMapValues {
            inner: self.tree.iter(),
        }
    }

    /// Checks the red black invariants of the underlying tree and returns its black height.
    pub fn validate(&self) -> result::Result<usize, Violation>
    where
        C: Compare<K>,
    {
        self.tree.validate()
    }
}

/// An iterator over the keys of a `RedBlackMap<K, V, C>`.
pub struct RedBlackMapKeys<'a, K, V, C> {
    inner: TreeIter<'a, K, V, C>,
}

impl<'a, K, V, C> Iterator for RedBlackMapKeys<'a, K, V, C>
where
    K: 'a,
    V: 'a,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

impl<'a, K, V, C> DoubleEndedIterator for RedBlackMapKeys<'a, K, V, C>
where
    K: 'a,
    V: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

/// An iterator over the values of a `RedBlackMap<K, V, C>`.
pub struct RedBlackMapValues<'a, K, V, C> {
    inner: TreeIter<'a, K, V, C>,
}

impl<'a, K, V, C> Iterator for RedBlackMapValues<'a, K, V, C>
where
    K: 'a,
    V: 'a,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

impl<'a, K, V, C> DoubleEndedIterator for RedBlackMapValues<'a, K, V, C>
where
    K: 'a,
    V: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V, C> IntoIterator for RedBlackMap<K, V, C> {
    type IntoIter = RedBlackMapIntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a RedBlackMap<K, V, C>
where
    K: 'a,
    V: 'a,
{
    type IntoIter = RedBlackMapIter<'a, K, V, C>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Default for RedBlackMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Clone for RedBlackMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        RedBlackMap {
            tree: self.tree.clone(),
        }
    }
}

impl<K, V, C> fmt::Debug for RedBlackMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> PartialEq for RedBlackMap<K, V, C>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for RedBlackMap<K, V, C>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V, C> Extend<(K, V)> for RedBlackMap<K, V, C>
where
    C: Compare<K>,
{
    /// Inserts every pair, replacing the values of existing keys.
    ///
    /// # Panics
    ///
    /// Panics if a node cannot be allocated.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.tree
                .insert_or_assign(key, value)
                .expect("Error: failed to allocate node.");
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RedBlackMap<K, V>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = RedBlackMap::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, C, Q> Index<&'a Q> for RedBlackMap<K, V, C>
where
    K: Borrow<Q>,
    C: Compare<Q>,
    Q: ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackMap;
    use crate::error::Error;

    #[test]
    fn test_len_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        assert!(map.insert(1, 1).unwrap().1);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_existing() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1).unwrap();
        assert!(!map.insert(1, 3).unwrap().1);
        assert_eq!(map.get(&1), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_insert_or_assign() {
        let mut map = RedBlackMap::new();
        assert!(map.insert_or_assign(1, 1).unwrap().1);
        assert!(!map.insert_or_assign(1, 3).unwrap().1);
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1).unwrap();
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
    }

    #[test]
    fn test_erase_missing() {
        let mut map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.erase(&1), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_at() {
        let mut map = RedBlackMap::new();
        map.insert(String::from("a"), 1).unwrap();
        assert_eq!(map.at("a"), Ok(&1));
        assert_eq!(map.at("b"), Err(Error::KeyNotFound));
    }

    #[test]
    #[should_panic]
    fn test_index_missing() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        let _ = map[&1];
    }

    #[test]
    fn test_min_max() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1).unwrap();
        map.insert(3, 3).unwrap();
        map.insert(5, 5).unwrap();

        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_get_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1).unwrap();
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1).unwrap();
        map.insert(3, 3).unwrap();
        map.insert(5, 5).unwrap();

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_merge() {
        let mut map = RedBlackMap::new();
        let mut other = RedBlackMap::new();
        for key in 1..4 {
            map.insert(key, key).unwrap();
            other.insert(key + 2, 0).unwrap();
        }
        map.merge(&mut other).unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map.get(&3), Some(&3));
        assert!(other.is_empty());
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_clone_then_clear() {
        let mut map = RedBlackMap::new();
        for key in 0..32 {
            map.insert(key, key * 2).unwrap();
        }
        let copy = map.clone();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(copy.len(), 32);
        assert_eq!(copy.keys().cloned().collect::<Vec<u32>>(), (0..32).collect::<Vec<u32>>());
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2).unwrap();
        map.insert(5, 6).unwrap();
        map.insert(3, 4).unwrap();

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2).unwrap();
        map.insert(5, 6).unwrap();
        map.insert(3, 4).unwrap();

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
        assert_eq!(map.keys().rev().collect::<Vec<&u32>>(), vec![&5, &3, &1]);
    }

    #[test]
    fn test_from_iter_and_eq() {
        let map: RedBlackMap<u32, u32> = vec![(2, 2), (1, 1), (2, 3)].into_iter().collect();
        let mut expected = RedBlackMap::new();
        expected.insert(1, 1).unwrap();
        expected.insert(2, 3).unwrap();
        assert_eq!(map, expected);
        assert_eq!(format!("{:?}", map), "{1: 1, 2: 3}");
    }
}
