//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! A single engine, `RedBlackTree`, backs three facades. `RedBlackMap` and `RedBlackSet` reject
//! equal keys, while `RedBlackMultiset` keeps every copy next to the others in insertion order.

mod cursor;
mod iter;
mod map;
mod multiset;
mod node;
mod serialize;
mod set;
mod tree;

pub use self::cursor::{Cursor, CursorMut};
pub use self::iter::{TreeIntoIter, TreeIter};
pub use self::map::{
    RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, RedBlackMapKeys, RedBlackMapValues,
};
pub use self::multiset::RedBlackMultiset;
pub use self::node::NodeId;
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
pub use self::tree::{Policy, RedBlackTree, DEFAULT_CHUNK_SIZE};
