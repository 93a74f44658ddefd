use crate::arena::Arena;
use crate::config::Duplicates;
use crate::types::Key;

use super::height::{balance_factor, update_height};
use super::rotate::{rotate_left, rotate_right};
use super::types::AvlNodeLike;

/// Inserts `key` into the subtree rooted at `node` and returns the new
/// subtree root.
///
/// A new leaf is created with `new_node` when the search falls off the
/// tree. Keys less than a node go left, everything else goes right, except
/// that [`Duplicates::Counted`] bumps the count of an equal node instead.
///
/// Every ancestor on the way back up recomputes its height and, if it is
/// out of balance, rotates. The single-vs-double decision compares `key`
/// with the heavy child's key, which is the same comparison the descent
/// made at that child.
pub fn insert<N, F>(
    arena: &mut Arena<N>,
    node: Option<u32>,
    key: Key,
    duplicates: Duplicates,
    new_node: &F,
) -> u32
where
    N: AvlNodeLike,
    F: Fn(Key) -> N,
{
    let Some(n) = node else {
        return arena.alloc(new_node(key));
    };

    let nk = arena[n as usize].key();
    if key == nk && duplicates == Duplicates::Counted {
        let cnt = arena[n as usize].count();
        arena[n as usize].set_count(cnt + 1);
        return n;
    }

    if key < nk {
        let l = arena[n as usize].l();
        let l = insert(arena, l, key, duplicates, new_node);
        arena[n as usize].set_l(Some(l));
    } else {
        let r = arena[n as usize].r();
        let r = insert(arena, r, key, duplicates, new_node);
        arena[n as usize].set_r(Some(r));
    }

    update_height(arena, n);
    let balance = balance_factor(arena, Some(n));

    if balance > 1 {
        let l = arena[n as usize].l().expect("left child exists");
        // Left-Left
        if key < arena[l as usize].key() {
            return rotate_right(arena, n);
        }
        // Left-Right
        let l = rotate_left(arena, l);
        arena[n as usize].set_l(Some(l));
        return rotate_right(arena, n);
    }

    if balance < -1 {
        let r = arena[n as usize].r().expect("right child exists");
        // Right-Left
        if key < arena[r as usize].key() {
            let r = rotate_right(arena, r);
            arena[n as usize].set_r(Some(r));
            return rotate_left(arena, n);
        }
        // Right-Right
        return rotate_left(arena, n);
    }

    n
}
