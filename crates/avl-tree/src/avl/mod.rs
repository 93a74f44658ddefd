//! AVL tree over an index arena.
//!
//! The free functions operate on `(arena, root)` pairs and return the new
//! subtree root; [`AvlTree`] wraps them with an owned arena.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod height;
pub mod insert;
pub mod remove;
pub mod rotate;
pub mod traverse;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use height::{balance_factor, height, update_height};
pub use insert::insert;
pub use remove::{min_node, remove, Removal};
pub use rotate::{rotate_left, rotate_right};
pub use traverse::{for_each, traverse};
pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, count_key, find, print};
