//! Cached height and balance-factor helpers. All O(1).

use super::types::AvlNodeLike;

/// Stored height of `node`, 0 when absent.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    node.map_or(0, |i| arena[i as usize].height())
}

/// `height(left) - height(right)`, 0 when absent.
#[inline]
pub fn balance_factor<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    let Some(i) = node else {
        return 0;
    };
    let n = &arena[i as usize];
    height(arena, n.l()) - height(arena, n.r())
}

/// Recomputes the cached height of `i` from its children.
#[inline]
pub fn update_height<N: AvlNodeLike>(arena: &mut [N], i: u32) {
    let (l, r) = {
        let n = &arena[i as usize];
        (n.l(), n.r())
    };
    let h = height(arena, l).max(height(arena, r)) + 1;
    arena[i as usize].set_height(h);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::AvlNode;

    fn node(k: i64, l: Option<u32>, r: Option<u32>, h: i32) -> AvlNode {
        AvlNode {
            l,
            r,
            k,
            cnt: 1,
            h,
        }
    }

    #[test]
    fn absent_node_has_zero_height_and_balance() {
        let arena: Vec<AvlNode> = Vec::new();
        assert_eq!(height(&arena, None), 0);
        assert_eq!(balance_factor(&arena, None), 0);
    }

    #[test]
    fn balance_factor_is_left_minus_right() {
        // 2 has a left chain 1 <- 0 and no right child.
        let arena = vec![
            node(0, None, None, 1),
            node(1, Some(0), None, 2),
            node(2, Some(1), None, 3),
        ];
        assert_eq!(height(&arena, Some(2)), 3);
        assert_eq!(balance_factor(&arena, Some(2)), 2);
        assert_eq!(balance_factor(&arena, Some(1)), 1);
        assert_eq!(balance_factor(&arena, Some(0)), 0);
    }

    #[test]
    fn update_height_uses_taller_child() {
        let mut arena = vec![
            node(0, None, None, 1),
            node(2, None, Some(3), 2),
            node(1, Some(0), Some(1), 0),
            node(3, None, None, 1),
        ];
        update_height(&mut arena, 2);
        assert_eq!(arena[2].h, 3);

        arena[1].r = None;
        update_height(&mut arena, 1);
        assert_eq!(arena[1].h, 1);
    }
}
