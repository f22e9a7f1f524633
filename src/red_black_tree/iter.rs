use crate::arena::TypedArena;
use crate::red_black_tree::node::{Node, NodeId};
use crate::red_black_tree::tree::RedBlackTree;
use std::vec;

/// An iterator over a contiguous in-order range of a `RedBlackTree`.
///
/// The iterator walks successor and predecessor links lazily from both ends and stops once the
/// two ends meet. Cloning it restarts from the current positions.
pub struct TreeIter<'a, K, V, C> {
    tree: &'a RedBlackTree<K, V, C>,
    front: Option<NodeId>,
    back: Option<NodeId>,
}

impl<'a, K, V, C> TreeIter<'a, K, V, C> {
    pub(crate) fn new(
        tree: &'a RedBlackTree<K, V, C>,
        front: Option<NodeId>,
        back: Option<NodeId>,
    ) -> Self {
        match (front, back) {
            (Some(_), Some(_)) => TreeIter { tree, front, back },
            _ => TreeIter {
                tree,
                front: None,
                back: None,
            },
        }
    }

    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl<'a, K, V, C> Clone for TreeIter<'a, K, V, C> {
    fn clone(&self) -> Self {
        TreeIter {
            tree: self.tree,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, K, V, C> Iterator for TreeIter<'a, K, V, C>
where
    K: 'a,
    V: 'a,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let curr = self.front?;
        if self.front == self.back {
            self.finish();
        } else {
            self.front = tree.successor(curr);
        }
        tree.get_entry(curr)
    }
}

impl<'a, K, V, C> DoubleEndedIterator for TreeIter<'a, K, V, C>
where
    K: 'a,
    V: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let curr = self.back?;
        if self.front == self.back {
            self.finish();
        } else {
            self.back = tree.predecessor(curr);
        }
        tree.get_entry(curr)
    }
}

/// An owning iterator over a `RedBlackTree`.
///
/// The in-order sequence of nodes is recorded up front, and each node is freed from the arena as
/// it is yielded. Nodes that are never yielded are dropped with the iterator.
pub struct TreeIntoIter<K, V> {
    arena: TypedArena<Node<K, V>>,
    order: vec::IntoIter<NodeId>,
}

impl<K, V> TreeIntoIter<K, V> {
    pub(crate) fn new(arena: TypedArena<Node<K, V>>, order: Vec<NodeId>) -> Self {
        TreeIntoIter {
            arena,
            order: order.into_iter(),
        }
    }
}

impl<K, V> Iterator for TreeIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let TreeIntoIter {
            ref mut arena,
            ref mut order,
        } = self;
        order.next().map(|id| arena.free(&id).entry.into_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for TreeIntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let TreeIntoIter {
            ref mut arena,
            ref mut order,
        } = self;
        order.next_back().map(|id| arena.free(&id).entry.into_pair())
    }
}

impl<K, V> ExactSizeIterator for TreeIntoIter<K, V> {}
