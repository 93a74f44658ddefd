use crate::arena::Arena;
use crate::types::Key;

use super::height::{balance_factor, update_height};
use super::rotate::{rotate_left, rotate_right};
use super::types::AvlNodeLike;

/// How much of a matching node [`remove`] takes away.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Removal {
    /// One copy: decrement a counted node, destroy it only at count 1.
    #[default]
    One,
    /// The whole node regardless of its count.
    All,
}

/// Leftmost node of the subtree rooted at `node`.
pub fn min_node<N: AvlNodeLike>(arena: &[N], mut node: u32) -> u32 {
    while let Some(l) = arena[node as usize].l() {
        node = l;
    }
    node
}

/// Removes `key` from the subtree rooted at `node` and returns the new
/// subtree root. A missing key leaves the subtree untouched.
///
/// A node with two children takes over its in-order successor's key and
/// count, and the successor is then removed from the right subtree.
///
/// Unlike insertion, the node that went out of balance cannot be told from
/// the key, so each level picks single vs double rotation from the heavy
/// child's own balance factor. Every level on the way back up is checked;
/// a deletion may rotate at all of them.
pub fn remove<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    node: Option<u32>,
    key: Key,
    removal: Removal,
) -> Option<u32> {
    let n = node?;

    let nk = arena[n as usize].key();
    if key < nk {
        let l = arena[n as usize].l();
        let l = remove(arena, l, key, removal);
        arena[n as usize].set_l(l);
    } else if key > nk {
        let r = arena[n as usize].r();
        let r = remove(arena, r, key, removal);
        arena[n as usize].set_r(r);
    } else {
        let cnt = arena[n as usize].count();
        if removal == Removal::One && cnt > 1 {
            arena[n as usize].set_count(cnt - 1);
            return Some(n);
        }

        let (l, r) = (arena[n as usize].l(), arena[n as usize].r());
        match (l, r) {
            (Some(_), Some(r)) => {
                let s = min_node(arena, r);
                let (sk, scnt) = (arena[s as usize].key(), arena[s as usize].count());
                arena[n as usize].set_key(sk);
                arena[n as usize].set_count(scnt);
                let r = remove(arena, Some(r), sk, Removal::All);
                arena[n as usize].set_r(r);
            }
            // The lone child (if any) is already balanced with a correct
            // height, so it simply takes this node's place.
            (child, None) | (None, child) => {
                arena.release(n);
                return child;
            }
        }
    }

    update_height(arena, n);
    let balance = balance_factor(arena, Some(n));

    if balance > 1 {
        let l = arena[n as usize].l().expect("left child exists");
        if balance_factor(arena, Some(l)) >= 0 {
            return Some(rotate_right(arena, n));
        }
        let l = rotate_left(arena, l);
        arena[n as usize].set_l(Some(l));
        return Some(rotate_right(arena, n));
    }

    if balance < -1 {
        let r = arena[n as usize].r().expect("right child exists");
        if balance_factor(arena, Some(r)) <= 0 {
            return Some(rotate_left(arena, n));
        }
        let r = rotate_right(arena, r);
        arena[n as usize].set_r(Some(r));
        return Some(rotate_left(arena, n));
    }

    Some(n)
}
