//! Single rotations. Double rotations are composed by the callers.

use log::trace;

use super::height::update_height;
use super::types::AvlNodeLike;

/// Rotates the subtree rooted at `y` to the right and returns the new root
/// (`y`'s former left child).
///
/// ```text
///       y            x
///      / \          / \
///     x   C  ==>   A   y
///    / \              / \
///   A   T2          T2   C
/// ```
///
/// # Panics
///
/// Panics if `y` has no left child.
pub fn rotate_right<N: AvlNodeLike>(arena: &mut [N], y: u32) -> u32 {
    let x = arena[y as usize]
        .l()
        .expect("rotate_right requires a left child");
    let t2 = arena[x as usize].r();

    arena[x as usize].set_r(Some(y));
    arena[y as usize].set_l(t2);

    update_height(arena, y);
    update_height(arena, x);

    trace!(
        "rotate right: {} -> {}",
        arena[y as usize].key(),
        arena[x as usize].key()
    );
    x
}

/// Mirror image of [`rotate_right`]; returns `x`'s former right child.
///
/// # Panics
///
/// Panics if `x` has no right child.
pub fn rotate_left<N: AvlNodeLike>(arena: &mut [N], x: u32) -> u32 {
    let y = arena[x as usize]
        .r()
        .expect("rotate_left requires a right child");
    let t2 = arena[y as usize].l();

    arena[y as usize].set_l(Some(x));
    arena[x as usize].set_r(t2);

    update_height(arena, x);
    update_height(arena, y);

    trace!(
        "rotate left: {} -> {}",
        arena[x as usize].key(),
        arena[y as usize].key()
    );
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::AvlNode;

    fn leaf(k: i64) -> AvlNode {
        AvlNode::new(k)
    }

    #[test]
    fn rotate_right_lifts_left_child() {
        // 3 -> 2 -> 1, all left links.
        let mut arena = vec![leaf(3), leaf(2), leaf(1)];
        arena[0].l = Some(1);
        arena[0].h = 3;
        arena[1].l = Some(2);
        arena[1].h = 2;

        let root = rotate_right(&mut arena, 0);
        assert_eq!(root, 1);
        assert_eq!(arena[1].l, Some(2));
        assert_eq!(arena[1].r, Some(0));
        assert_eq!(arena[0].l, None);
        assert_eq!(arena[0].h, 1);
        assert_eq!(arena[1].h, 2);
    }

    #[test]
    fn rotate_left_moves_inner_grandchild_across() {
        // 1 -> 3 (right), 3 has left 2 and right 4.
        let mut arena = vec![leaf(1), leaf(3), leaf(2), leaf(4)];
        arena[0].r = Some(1);
        arena[0].h = 3;
        arena[1].l = Some(2);
        arena[1].r = Some(3);
        arena[1].h = 2;

        let root = rotate_left(&mut arena, 0);
        assert_eq!(root, 1);
        assert_eq!(arena[1].l, Some(0));
        assert_eq!(arena[1].r, Some(3));
        assert_eq!(arena[0].r, Some(2));
        assert_eq!(arena[0].h, 2);
        assert_eq!(arena[1].h, 3);
    }

    #[test]
    #[should_panic(expected = "left child")]
    fn rotate_right_without_left_child_panics() {
        let mut arena = vec![leaf(1)];
        rotate_right(&mut arena, 0);
    }

    #[test]
    #[should_panic(expected = "right child")]
    fn rotate_left_without_right_child_panics() {
        let mut arena = vec![leaf(1)];
        rotate_left(&mut arena, 0);
    }
}
