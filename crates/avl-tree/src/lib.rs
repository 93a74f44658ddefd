//! Arena-backed AVL tree.
//!
//! Keys are a single ordered scalar ([`Key`]). Nodes live in an
//! [`Arena`] and link to their children by `Option<u32>` index; there is
//! no parent link. Insertion and deletion are recursive and return the
//! (possibly rotated) subtree root to the caller, so rebalancing happens
//! as the recursion unwinds.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Key`] and the [`Node`] link trait |
//! [`arena`] | [`Arena`] slot storage with free-list reuse |
//! [`avl::height`] | `height`, `balance_factor`, `update_height` |
//! [`avl::rotate`] | `rotate_left`, `rotate_right` |
//! [`avl::insert`] | recursive insertion with key-directed rebalancing |
//! [`avl::remove`] | recursive deletion with balance-directed rebalancing |
//! [`avl::traverse`] | in-order `traverse` and `for_each` |
//! [`avl::util`] | lookups, `assert_avl_tree`, debug `print` |
//! [`avl::avl_tree`] | [`AvlTree`], the owning facade |
//! [`config`] | [`AvlConfig`] and the [`Duplicates`] policy |
//! [`error`] | [`AvlError`] |

pub mod arena;
pub mod avl;
pub mod config;
pub mod error;
pub mod types;

pub use arena::Arena;
pub use avl::{AvlNode, AvlNodeLike, AvlTree, Removal};
pub use config::{AvlConfig, Duplicates};
pub use error::AvlError;
pub use types::{Key, Node};
