//! Ordered collections backed by an arena-allocated red black tree.

pub mod arena;
pub mod compare;
mod entry;
pub mod error;
pub mod red_black_tree;

pub use crate::compare::{Compare, Natural, Reversed};
pub use crate::error::{Error, Result, Violation};
