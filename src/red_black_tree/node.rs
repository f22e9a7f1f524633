use crate::arena::Slot;
use crate::entry::Entry;

/// Handle to a node inside a tree's arena.
pub type NodeId = Slot;

/// An enum representing the color of a node in a red black tree. Absent children are black.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Which child of a node a link refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing an internal node of a red black tree. The links are navigational only;
/// the arena owns every node.
pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub color: Color,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    // Copies the entry and color but none of the links.
    pub fn detached_clone(&self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Node {
            entry: self.entry.clone(),
            color: self.color,
            parent: None,
            left: None,
            right: None,
        }
    }
}
