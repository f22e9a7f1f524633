use crate::red_black_tree::node::NodeId;
use crate::red_black_tree::tree::RedBlackTree;
use std::fmt;
use std::ptr;

/// A read-only position in a `RedBlackTree`.
///
/// A cursor either points at an element or at the end position, one past the largest key. The
/// end position has no element, so every accessor returns an `Option`. Two cursors are equal when
/// they point into the same tree at the same node.
///
/// Moving forward stops at the end position: `move_next` there is a no-op. Moving backward does
/// not stop at the smallest key. `move_prev` from the smallest key reaches the end position, and a
/// further `move_prev` wraps around to the largest key, so a backward walk must check for the end
/// position the same way a forward walk does.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(1, "a").unwrap();
/// map.insert(2, "b").unwrap();
///
/// let mut cursor = map.begin();
/// assert_eq!(cursor.get(), Some((&1, &"a")));
/// cursor.move_next();
/// assert_eq!(cursor.key(), Some(&2));
/// cursor.move_next();
/// assert!(cursor == map.end());
/// cursor.move_prev();
/// assert_eq!(cursor.value(), Some(&"b"));
/// ```
pub struct Cursor<'a, K, V, C> {
    tree: &'a RedBlackTree<K, V, C>,
    node: Option<NodeId>,
}

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    pub(crate) fn new(tree: &'a RedBlackTree<K, V, C>, node: Option<NodeId>) -> Self {
        Cursor { tree, node }
    }

    /// Returns the node the cursor points at, or `None` at the end position.
    pub fn position(&self) -> Option<NodeId> {
        self.node
    }

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        let tree = self.tree;
        self.node.and_then(|id| tree.get_entry(id))
    }

    pub fn key(&self) -> Option<&'a K> {
        self.get().map(|(key, _)| key)
    }

    pub fn value(&self) -> Option<&'a V> {
        self.get().map(|(_, value)| value)
    }

    /// Moves the cursor to the next element in order.
    pub fn move_next(&mut self) {
        if let Some(id) = self.node {
            self.node = self.tree.successor(id);
        }
    }

    /// Moves the cursor to the previous element in order. Moving back from the smallest key
    /// reaches the end position, and moving back from the end position wraps to the largest key.
    pub fn move_prev(&mut self) {
        self.node = match self.node {
            Some(id) => self.tree.predecessor(id),
            None => self.tree.last(),
        };
    }
}

impl<'a, K, V, C> Clone for Cursor<'a, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V, C> Copy for Cursor<'a, K, V, C> {}

impl<'a, K, V, C> PartialEq for Cursor<'a, K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<'a, K, V, C> Eq for Cursor<'a, K, V, C> {}

impl<'a, K, V, C> fmt::Debug for Cursor<'a, K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

/// A position in a `RedBlackTree` that can modify values and remove elements.
///
/// It moves like a `Cursor`: `move_next` stops at the end position, while `move_prev` passes
/// from the smallest key through the end position and wraps around to the largest key.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// for i in 0..5 {
///     map.insert(i, i).unwrap();
/// }
///
/// let mut cursor = map.find_mut(&1);
/// assert_eq!(cursor.remove_current(), Some((1, 1)));
/// assert_eq!(cursor.key(), Some(&2));
/// *cursor.value_mut().unwrap() += 10;
///
/// assert_eq!(map.get(&2), Some(&12));
/// assert_eq!(map.len(), 4);
/// ```
pub struct CursorMut<'a, K, V, C> {
    tree: &'a mut RedBlackTree<K, V, C>,
    node: Option<NodeId>,
}

impl<'a, K, V, C> CursorMut<'a, K, V, C> {
    pub(crate) fn new(tree: &'a mut RedBlackTree<K, V, C>, node: Option<NodeId>) -> Self {
        CursorMut { tree, node }
    }

    pub fn position(&self) -> Option<NodeId> {
        self.node
    }

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    pub fn get(&self) -> Option<(&K, &V)> {
        let tree = &*self.tree;
        self.node.and_then(|id| tree.get_entry(id))
    }

    pub fn key(&self) -> Option<&K> {
        self.get().map(|(key, _)| key)
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        let id = self.node?;
        self.tree.value_mut(id)
    }

    /// Returns a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(&*self.tree, self.node)
    }

    pub fn move_next(&mut self) {
        if let Some(id) = self.node {
            self.node = self.tree.successor(id);
        }
    }

    pub fn move_prev(&mut self) {
        self.node = match self.node {
            Some(id) => self.tree.predecessor(id),
            None => self.tree.last(),
        };
    }

    /// Removes the element under the cursor and moves the cursor to the element that followed
    /// it. Returns `None` without modifying the tree at the end position.
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let id = self.node?;
        let (entry, next) = self.tree.remove_node(id);
        self.node = next;
        Some(entry.into_pair())
    }
}

#[cfg(test)]
mod tests {
    use crate::red_black_tree::{Policy, RedBlackTree};

    fn tree_of(keys: &[u32]) -> RedBlackTree<u32, u32> {
        let mut tree = RedBlackTree::new(Policy::Multi);
        for key in keys {
            tree.insert(*key, *key).unwrap();
        }
        tree
    }

    #[test]
    fn test_walk_forward_and_back() {
        let tree = tree_of(&[2, 1, 3]);
        let mut cursor = tree.begin();
        let mut forward = Vec::new();
        while let Some(key) = cursor.key() {
            forward.push(*key);
            cursor.move_next();
        }
        assert_eq!(forward, vec![1, 2, 3]);
        assert!(cursor.is_end());

        cursor.move_next();
        assert!(cursor.is_end());

        let mut backward = Vec::new();
        cursor.move_prev();
        while let Some(key) = cursor.key() {
            backward.push(*key);
            cursor.move_prev();
        }
        assert_eq!(backward, vec![3, 2, 1]);
    }

    #[test]
    fn test_move_prev_wraps_through_end() {
        let mut tree = tree_of(&[2, 1, 3]);
        let mut cursor = tree.begin();
        cursor.move_prev();
        assert!(cursor == tree.end());
        cursor.move_prev();
        assert_eq!(cursor.key(), Some(&3));

        let first = tree.first();
        let mut cursor = tree.cursor_mut(first);
        cursor.move_prev();
        assert!(cursor.is_end());
        cursor.move_prev();
        assert_eq!(cursor.key(), Some(&3));
    }

    #[test]
    fn test_equality_is_by_node() {
        let tree = tree_of(&[1, 1]);
        let other = tree_of(&[1, 1]);
        let mut first = tree.begin();
        let second = tree.begin();
        assert!(first == second);
        assert!(tree.end() != other.end());
        first.move_next();
        assert!(first != second);
        assert_eq!(first.key(), second.key());
    }

    #[test]
    fn test_end_has_no_element() {
        let tree = tree_of(&[]);
        let cursor = tree.end();
        assert_eq!(cursor.get(), None);
        assert!(tree.begin() == cursor);
    }

    #[test]
    fn test_remove_all_through_cursor() {
        let mut tree = tree_of(&[5, 4, 3, 2, 1, 0]);
        let first = tree.first();
        let mut cursor = tree.cursor_mut(first);
        let mut removed = Vec::new();
        while let Some((key, _)) = cursor.remove_current() {
            removed.push(key);
        }
        assert_eq!(removed, vec![0, 1, 2, 3, 4, 5]);
        assert!(cursor.remove_current().is_none());
        assert!(tree.is_empty());
        assert_eq!(tree.validate(), Ok(0));
    }

    #[test]
    fn test_remove_every_other() {
        let mut tree = tree_of(&(0..50).collect::<Vec<_>>());
        let first = tree.first();
        let mut cursor = tree.cursor_mut(first);
        while !cursor.is_end() {
            cursor.remove_current();
            cursor.move_next();
        }
        assert_eq!(
            tree.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            (0..50).filter(|k| k % 2 == 1).collect::<Vec<_>>(),
        );
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_value_mut() {
        let mut tree = tree_of(&[1, 2]);
        let last = tree.last();
        let mut cursor = tree.cursor_mut(last);
        *cursor.value_mut().unwrap() = 20;
        assert_eq!(cursor.as_cursor().value(), Some(&20));
        cursor.move_prev();
        cursor.move_prev();
        assert!(cursor.value_mut().is_none());
    }
}
