use crate::arena::TypedArena;
use crate::compare::{Compare, Natural};
use crate::entry::Entry;
use crate::error::{Error, Result, Violation};
use crate::red_black_tree::cursor::{Cursor, CursorMut};
use crate::red_black_tree::iter::{TreeIntoIter, TreeIter};
use crate::red_black_tree::node::{Color, Node, NodeId, Side};
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;
use std::result;

/// Number of nodes per arena chunk used when no chunk size is given.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// How a tree treats a key that compares equal to one already stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Equal keys are rejected; the tree behaves like a map or set.
    Unique,
    /// Equal keys are kept next to each other in insertion order; the tree behaves like a
    /// multiset.
    Multi,
}

/// The red-black tree engine shared by `RedBlackMap`, `RedBlackSet` and `RedBlackMultiset`.
///
/// Nodes live in a `TypedArena` and refer to each other through `NodeId` handles, so the parent,
/// left and right links carry no ownership. The end of an in-order sequence is represented by
/// `None` rather than an allocated sentinel node. The tree caches its leftmost and rightmost
/// nodes so that `begin` and `end` are constant time.
///
/// # Examples
///
/// ```
/// use red_black_collections::red_black_tree::{Policy, RedBlackTree};
///
/// let mut tree = RedBlackTree::new(Policy::Multi);
/// tree.insert(2, "b").unwrap();
/// tree.insert(1, "a").unwrap();
/// tree.insert(2, "c").unwrap();
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.count(&2), 2);
/// assert_eq!(
///     tree.iter().collect::<Vec<_>>(),
///     vec![(&1, &"a"), (&2, &"b"), (&2, &"c")],
/// );
/// ```
pub struct RedBlackTree<K, V, C = Natural> {
    arena: TypedArena<Node<K, V>>,
    root: Option<NodeId>,
    min: Option<NodeId>,
    max: Option<NodeId>,
    len: usize,
    policy: Policy,
    comparator: C,
}

impl<K, V> RedBlackTree<K, V> {
    /// Constructs a new, empty tree ordered by `Ord`.
    pub fn new(policy: Policy) -> Self {
        Self::with_comparator(policy, Natural)
    }
}

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Constructs a new, empty tree ordered by `comparator`.
    pub fn with_comparator(policy: Policy, comparator: C) -> Self {
        Self::with_config(policy, comparator, DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty tree ordered by `comparator` whose arena allocates `chunk_size`
    /// nodes at a time.
    pub fn with_config(policy: Policy, comparator: C, chunk_size: usize) -> Self {
        RedBlackTree {
            arena: TypedArena::new(chunk_size),
            root: None,
            min: None,
            max: None,
            len: 0,
            policy,
            comparator,
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the largest number of nodes the tree could ever hold. This is a capacity ceiling,
    /// not a live count.
    pub fn max_size(&self) -> usize {
        isize::max_value() as usize / cmp::max(mem::size_of::<Node<K, V>>(), 1)
    }

    /// Returns the node with the smallest key.
    pub fn first(&self) -> Option<NodeId> {
        self.min
    }

    /// Returns the node with the largest key.
    pub fn last(&self) -> Option<NodeId> {
        self.max
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.arena[id]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.arena[id]
    }

    /// Returns the key-value pair stored at `id`, or `None` if `id` is not a live node.
    pub fn get_entry(&self, id: NodeId) -> Option<(&K, &V)> {
        self.arena.get(&id).map(|node| node.entry.as_pair())
    }

    /// Returns a mutable reference to the value stored at `id`, or `None` if `id` is not a live
    /// node.
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.arena.get_mut(&id).map(|node| &mut node.entry.value)
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.node(id).is_red())
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    // precondition: `child` is a child of `parent`
    fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        if self.node(parent).left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    // Follows `side` links from `id` as far as possible.
    fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(child) = self.node(id).child(side) {
            id = child;
        }
        id
    }

    fn step(&self, id: NodeId, side: Side) -> Option<NodeId> {
        if let Some(child) = self.node(id).child(side) {
            return Some(self.extreme(child, side.opposite()));
        }
        let mut curr = id;
        let mut parent = self.node(curr).parent;
        while let Some(parent_id) = parent {
            if self.node(parent_id).child(side) != Some(curr) {
                break;
            }
            curr = parent_id;
            parent = self.node(parent_id).parent;
        }
        parent
    }

    /// Returns the in-order successor of `id`, or `None` if `id` holds the largest key.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.step(id, Side::Right)
    }

    /// Returns the in-order predecessor of `id`, or `None` if `id` holds the smallest key.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.step(id, Side::Left)
    }

    fn refresh_bounds(&mut self) {
        self.min = self.root.map(|root| self.extreme(root, Side::Left));
        self.max = self.root.map(|root| self.extreme(root, Side::Right));
    }

    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_of(parent, old);
                self.node_mut(parent).set_child(side, new);
            },
        }
    }

    // Moves `pivot` down towards `direction`; the child on the other side takes its place. A
    // left rotation is `rotate(pivot, Side::Left)`.
    fn rotate(&mut self, pivot: NodeId, direction: Side) {
        let child = self
            .node(pivot)
            .child(direction.opposite())
            .expect("Expected rotation child to be `Some`.");
        let inner = self.node(child).child(direction);
        let parent = self.node(pivot).parent;

        self.node_mut(pivot).set_child(direction.opposite(), inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(pivot);
        }

        self.node_mut(child).parent = parent;
        self.replace_child(parent, pivot, Some(child));

        self.node_mut(child).set_child(direction, Some(pivot));
        self.node_mut(pivot).parent = Some(child);
    }

    /// Searches for a node whose key compares equal to `key`. When several nodes match, the
    /// first one in order is returned.
    pub fn search<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let mut curr = self.root;
        let mut found = None;
        while let Some(id) = curr {
            let node = self.node(id);
            match self.comparator.compare(key, node.entry.key.borrow()) {
                Ordering::Less => curr = node.left,
                Ordering::Greater => curr = node.right,
                Ordering::Equal => {
                    found = Some(id);
                    if self.policy == Policy::Unique {
                        break;
                    }
                    curr = node.left;
                },
            }
        }
        found
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.search(key).is_some()
    }

    /// Returns the first node whose key is not less than `key`.
    pub fn lower_bound<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let mut curr = self.root;
        let mut bound = None;
        while let Some(id) = curr {
            let node = self.node(id);
            if self.comparator.compare(key, node.entry.key.borrow()) == Ordering::Greater {
                curr = node.right;
            } else {
                bound = Some(id);
                curr = node.left;
            }
        }
        bound
    }

    /// Returns the first node whose key is greater than `key`.
    pub fn upper_bound<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let mut curr = self.root;
        let mut bound = None;
        while let Some(id) = curr {
            let node = self.node(id);
            if self.comparator.compare(key, node.entry.key.borrow()) == Ordering::Less {
                bound = Some(id);
                curr = node.left;
            } else {
                curr = node.right;
            }
        }
        bound
    }

    /// Returns the half-open range of nodes whose keys compare equal to `key` as a
    /// `(lower_bound, upper_bound)` pair.
    pub fn equal_range<Q>(&self, key: &Q) -> (Option<NodeId>, Option<NodeId>)
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Returns the number of nodes whose keys compare equal to `key`.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let (lower, upper) = self.equal_range(key);
        let mut count = 0;
        let mut curr = lower;
        while let Some(id) = curr {
            if Some(id) == upper {
                break;
            }
            count += 1;
            curr = self.successor(id);
        }
        count
    }

    /// Inserts a key-value pair and returns its node together with whether a node was created.
    ///
    /// Under `Policy::Unique` an equal key leaves the tree untouched and the existing node is
    /// returned with `false`. Under `Policy::Multi` the pair is always inserted after any equal
    /// keys.
    pub fn insert(&mut self, key: K, value: V) -> Result<(NodeId, bool)>
    where
        C: Compare<K>,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = self.node(id);
            side = match self.comparator.compare(&key, &node.entry.key) {
                Ordering::Less => Side::Left,
                Ordering::Equal if self.policy == Policy::Unique => return Ok((id, false)),
                _ => Side::Right,
            };
            parent = Some(id);
            curr = node.child(side);
        }
        self.attach(parent, side, Node::new(key, value))
            .map(|id| (id, true))
    }

    /// Inserts a key-value pair, or replaces the value of the first node with an equal key.
    /// Returns the node and `true` if a node was created.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Result<(NodeId, bool)>
    where
        C: Compare<K>,
    {
        match self.search(&key) {
            Some(id) => {
                self.node_mut(id).entry.value = value;
                Ok((id, false))
            },
            None => self.insert(key, value),
        }
    }

    fn attach(
        &mut self,
        parent: Option<NodeId>,
        side: Side,
        mut node: Node<K, V>,
    ) -> Result<NodeId> {
        if self.len >= self.max_size() {
            return Err(Error::CapacityExceeded);
        }
        node.parent = parent;
        let id = self.arena.allocate(node)?;
        match parent {
            None => {
                self.root = Some(id);
                self.min = Some(id);
                self.max = Some(id);
            },
            Some(parent) => {
                self.node_mut(parent).set_child(side, Some(id));
                if side == Side::Left && self.min == Some(parent) {
                    self.min = Some(id);
                }
                if side == Side::Right && self.max == Some(parent) {
                    self.max = Some(id);
                }
            },
        }
        self.len += 1;
        self.fix_insert(id);
        Ok(id)
    }

    fn fix_insert(&mut self, mut id: NodeId) {
        while let Some(parent) = self.node(id).parent {
            if !self.node(parent).is_red() {
                return;
            }
            // a red node is never the root
            let grandparent = self
                .node(parent)
                .parent
                .expect("Expected a red node to have a parent.");
            let parent_side = self.side_of(grandparent, parent);
            let uncle = self.node(grandparent).child(parent_side.opposite());

            if self.is_red(uncle) {
                trace!("Insert fix-up: recoloring around a red uncle.");
                self.set_color(parent, Color::Black);
                if let Some(uncle) = uncle {
                    self.set_color(uncle, Color::Black);
                }
                self.set_color(grandparent, Color::Red);
                id = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.node(parent).child(parent_side.opposite()) == Some(id) {
                trace!("Insert fix-up: rotating an inner child outward.");
                self.rotate(parent, parent_side);
                parent = id;
            }
            trace!("Insert fix-up: rotating at the grandparent.");
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent_side.opposite());
            return;
        }
        self.set_color(id, Color::Black);
    }

    // Unlinks the node at `id` and returns its entry together with the position of the next
    // node in order. When `id` has two children its in-order successor is spliced out instead
    // and the successor's entry is moved into `id`, so the next position is `id` itself.
    pub(crate) fn remove_node(&mut self, id: NodeId) -> (Entry<K, V>, Option<NodeId>) {
        let (removed, next) = match (self.node(id).left, self.node(id).right) {
            (Some(_), Some(right)) => (self.extreme(right, Side::Left), Some(id)),
            _ => (id, self.successor(id)),
        };

        let (child, parent, color) = {
            let node = self.node(removed);
            (node.left.or(node.right), node.parent, node.color)
        };
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
        self.replace_child(parent, removed, child);

        let Node { mut entry, .. } = self.arena.free(&removed);
        if removed != id {
            mem::swap(&mut self.node_mut(id).entry, &mut entry);
        }
        self.len -= 1;

        if color == Color::Black {
            self.fix_remove(child, parent);
        }
        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
        self.refresh_bounds();
        (entry, next)
    }

    fn fix_remove(&mut self, mut curr: Option<NodeId>, mut parent: Option<NodeId>) {
        while curr != self.root && !self.is_red(curr) {
            let parent_id = match parent {
                Some(parent_id) => parent_id,
                None => break,
            };
            let side = if self.node(parent_id).left == curr {
                Side::Left
            } else {
                Side::Right
            };
            // the double black side has black height of at least one less than its sibling
            let mut sibling = self
                .node(parent_id)
                .child(side.opposite())
                .expect("Expected a double black node to have a sibling.");

            if self.node(sibling).is_red() {
                trace!("Remove fix-up: rotating a red sibling into place.");
                self.set_color(sibling, Color::Black);
                self.set_color(parent_id, Color::Red);
                self.rotate(parent_id, side);
                sibling = self
                    .node(parent_id)
                    .child(side.opposite())
                    .expect("Expected a double black node to have a sibling.");
            }

            let near = self.node(sibling).child(side);
            let far = self.node(sibling).child(side.opposite());
            if !self.is_red(near) && !self.is_red(far) {
                trace!("Remove fix-up: pushing double black up to the parent.");
                self.set_color(sibling, Color::Red);
                curr = Some(parent_id);
                parent = self.node(parent_id).parent;
                continue;
            }

            if !self.is_red(far) {
                trace!("Remove fix-up: rotating a red near child outward.");
                if let Some(near) = near {
                    self.set_color(near, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self
                    .node(parent_id)
                    .child(side.opposite())
                    .expect("Expected a double black node to have a sibling.");
            }

            trace!("Remove fix-up: rotating at the parent.");
            let parent_color = self.node(parent_id).color;
            self.set_color(sibling, parent_color);
            self.set_color(parent_id, Color::Black);
            if let Some(far) = self.node(sibling).child(side.opposite()) {
                self.set_color(far, Color::Black);
            }
            self.rotate(parent_id, side);
            curr = self.root;
            break;
        }
        if let Some(curr) = curr {
            self.set_color(curr, Color::Black);
        }
    }

    /// Removes the node at `id`, returning its key-value pair and the position of the element
    /// that followed it.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a live node of this tree.
    pub fn remove_at(&mut self, id: NodeId) -> ((K, V), Option<NodeId>) {
        let (entry, next) = self.remove_node(id);
        (entry.into_pair(), next)
    }

    /// Removes the first node whose key compares equal to `key`. Returns `None` if no node
    /// matches.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.search(key).map(|id| self.remove_node(id).0.into_pair())
    }

    /// Removes the first node whose key compares equal to `key`, reporting
    /// `Error::KeyNotFound` if no node matches.
    pub fn erase<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.remove(key).ok_or(Error::KeyNotFound)
    }

    /// Removes every node whose key compares equal to `key` and returns how many were removed,
    /// reporting `Error::KeyNotFound` if no node matches.
    pub fn erase_all<Q>(&mut self, key: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let mut removed = 0;
        let mut curr = self.search(key);
        while let Some(id) = curr {
            let ordering = self.comparator.compare(key, self.node(id).entry.key.borrow());
            if ordering != Ordering::Equal {
                break;
            }
            curr = self.remove_node(id).1;
            removed += 1;
        }
        if removed == 0 {
            return Err(Error::KeyNotFound);
        }
        Ok(removed)
    }

    /// Drops every node in the tree.
    pub fn clear(&mut self) {
        debug!("Clearing tree of {} nodes.", self.len);
        self.arena.clear();
        self.root = None;
        self.min = None;
        self.max = None;
        self.len = 0;
    }

    /// Exchanges the contents of two trees, including their comparators and policies.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves every element of `other` into `self` using this tree's insertion policy. Elements
    /// rejected as duplicates are dropped, and `other` is empty afterwards. If the arena cannot
    /// grow, the error is returned and the elements not yet moved remain in `other`.
    pub fn merge(&mut self, other: &mut Self) -> Result<()>
    where
        C: Compare<K>,
    {
        debug!("Merging {} nodes into a tree of {} nodes.", other.len, self.len);
        while let Some(first) = other.min {
            if self.len >= self.max_size() {
                return Err(Error::CapacityExceeded);
            }
            self.arena.reserve(1)?;
            let (key, value) = other.remove_node(first).0.into_pair();
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Returns a structural copy of the tree that preserves every node's color and position.
    pub fn try_clone(&self) -> Result<Self>
    where
        K: Clone,
        V: Clone,
        C: Clone,
    {
        debug!("Cloning tree of {} nodes.", self.len);
        let mut tree =
            Self::with_config(self.policy, self.comparator.clone(), self.arena.chunk_size());
        let root = match self.root {
            Some(root) => root,
            None => return Ok(tree),
        };
        tree.arena.reserve(self.len)?;

        let new_root = tree.arena.allocate(self.node(root).detached_clone())?;
        tree.root = Some(new_root);
        let mut stack = vec![(root, new_root)];
        while let Some((source, target)) = stack.pop() {
            for &side in &[Side::Left, Side::Right] {
                if let Some(child) = self.node(source).child(side) {
                    let mut copy = self.node(child).detached_clone();
                    copy.parent = Some(target);
                    let copy_id = tree.arena.allocate(copy)?;
                    tree.node_mut(target).set_child(side, Some(copy_id));
                    stack.push((child, copy_id));
                }
            }
        }
        tree.len = self.len;
        tree.refresh_bounds();
        Ok(tree)
    }

    /// Returns a cursor at `position`, where `None` is the end position.
    pub fn cursor(&self, position: Option<NodeId>) -> Cursor<'_, K, V, C> {
        Cursor::new(self, position)
    }

    /// Returns a mutable cursor at `position`, where `None` is the end position.
    pub fn cursor_mut(&mut self, position: Option<NodeId>) -> CursorMut<'_, K, V, C> {
        CursorMut::new(self, position)
    }

    /// Returns a cursor at the smallest key, or the end position if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, K, V, C> {
        self.cursor(self.min)
    }

    /// Returns a cursor at the end position, one past the largest key.
    pub fn end(&self) -> Cursor<'_, K, V, C> {
        self.cursor(None)
    }

    /// Returns an iterator over the tree in order.
    pub fn iter(&self) -> TreeIter<'_, K, V, C> {
        TreeIter::new(self, self.min, self.max)
    }

    /// Returns an iterator over the half-open range of nodes from `lower` up to but excluding
    /// `upper`, where `None` is the end position. `lower` must not come after `upper`.
    pub fn range_between(
        &self,
        lower: Option<NodeId>,
        upper: Option<NodeId>,
    ) -> TreeIter<'_, K, V, C> {
        if lower == upper {
            return TreeIter::new(self, None, None);
        }
        let back = match upper {
            Some(upper) => self.predecessor(upper),
            None => self.max,
        };
        TreeIter::new(self, lower, back)
    }

    /// Checks every red-black invariant and returns the black height of the tree.
    pub fn validate(&self) -> result::Result<usize, Violation>
    where
        C: Compare<K>,
    {
        let root = match self.root {
            Some(root) => root,
            None => {
                if self.len != 0 {
                    return Err(Violation::LenMismatch {
                        expected: self.len,
                        actual: 0,
                    });
                }
                if self.min.is_some() || self.max.is_some() {
                    return Err(Violation::StaleBounds);
                }
                return Ok(0);
            },
        };
        if self.node(root).is_red() {
            return Err(Violation::RedRoot);
        }
        if self.node(root).parent.is_some() {
            return Err(Violation::BrokenParentLink);
        }
        let black_height = self.validate_subtree(root)?;

        if self.min != Some(self.extreme(root, Side::Left))
            || self.max != Some(self.extreme(root, Side::Right))
        {
            return Err(Violation::StaleBounds);
        }

        let mut actual = 0;
        let mut prev: Option<NodeId> = None;
        let mut curr = self.min;
        while let Some(id) = curr {
            if let Some(prev) = prev {
                let ordering = self
                    .comparator
                    .compare(&self.node(prev).entry.key, &self.node(id).entry.key);
                match ordering {
                    Ordering::Greater => return Err(Violation::OutOfOrder),
                    Ordering::Equal if self.policy == Policy::Unique => {
                        return Err(Violation::DuplicateKey)
                    },
                    _ => {},
                }
            }
            actual += 1;
            if actual > self.len {
                break;
            }
            prev = Some(id);
            curr = self.successor(id);
        }
        if actual != self.len {
            return Err(Violation::LenMismatch {
                expected: self.len,
                actual,
            });
        }
        Ok(black_height)
    }

    fn validate_subtree(&self, id: NodeId) -> result::Result<usize, Violation> {
        let node = self.node(id);
        let mut heights = [0; 2];
        for (height, &side) in heights.iter_mut().zip(&[Side::Left, Side::Right]) {
            if let Some(child) = node.child(side) {
                let child_node = self.node(child);
                if child_node.parent != Some(id) {
                    return Err(Violation::BrokenParentLink);
                }
                if node.is_red() && child_node.is_red() {
                    return Err(Violation::RedChildOfRed);
                }
                *height = self.validate_subtree(child)?;
            }
        }
        if heights[0] != heights[1] {
            return Err(Violation::BlackHeightMismatch);
        }
        Ok(heights[0] + if node.is_red() { 0 } else { 1 })
    }
}

impl<K, V, C> Clone for RedBlackTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        self.try_clone().expect("Error: failed to allocate while cloning tree.")
    }
}

impl<K, V, C> IntoIterator for RedBlackTree<K, V, C> {
    type IntoIter = TreeIntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        let mut order = Vec::with_capacity(self.len);
        let mut curr = self.min;
        while let Some(id) = curr {
            order.push(id);
            curr = self.successor(id);
        }
        TreeIntoIter::new(self.arena, order)
    }
}

impl<'a, K, V, C> IntoIterator for &'a RedBlackTree<K, V, C>
where
    K: 'a,
    V: 'a,
{
    type IntoIter = TreeIter<'a, K, V, C>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
