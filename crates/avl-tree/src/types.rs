//! Node trait definitions.
//!
//! Each "pointer" is an `Option<u32>` index into an
//! [`Arena`](crate::arena::Arena). Tree functions take the arena as a slice
//! (or the arena itself when they allocate or release slots) and work with
//! indices.

/// Ordering key stored in every node.
pub type Key = i64;

/// Child links (`l`, `r`).
///
/// There is no parent link: callers walk back up the tree by
/// returning from recursion.
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}
