use crate::config::Duplicates;
use crate::error::AvlError;
use crate::types::Key;

use super::height::height;
use super::traverse::for_each;
use super::types::AvlNodeLike;

/// Index of a node holding `key`, if any.
pub fn find<N: AvlNodeLike>(arena: &[N], root: Option<u32>, key: Key) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let nk = arena[i as usize].key();
        if key == nk {
            return Some(i);
        }
        curr = if key < nk {
            arena[i as usize].l()
        } else {
            arena[i as usize].r()
        };
    }
    None
}

/// Total multiplicity of `key` in the subtree.
///
/// Separate duplicate nodes may end up on both sides of an equal node after
/// rotations, so an exact hit keeps searching both subtrees.
pub fn count_key<N: AvlNodeLike>(arena: &[N], node: Option<u32>, key: Key) -> usize {
    let Some(i) = node else {
        return 0;
    };
    let n = &arena[i as usize];
    let nk = n.key();
    if key < nk {
        count_key(arena, n.l(), key)
    } else if key > nk {
        count_key(arena, n.r(), key)
    } else {
        n.count() as usize + count_key(arena, n.l(), key) + count_key(arena, n.r(), key)
    }
}

/// Checks cached heights, the AVL balance bound, key order and counts.
///
/// Order is strict under [`Duplicates::Counted`] and non-decreasing under
/// [`Duplicates::Separate`].
pub fn assert_avl_tree<N: AvlNodeLike>(
    arena: &[N],
    root: Option<u32>,
    duplicates: Duplicates,
) -> Result<(), AvlError> {
    let Some(root) = root else {
        return Ok(());
    };

    fn validate_node<N: AvlNodeLike>(arena: &[N], node: u32) -> Result<i32, AvlError> {
        let n = &arena[node as usize];
        let lh = match n.l() {
            Some(l) => validate_node(arena, l)?,
            None => 0,
        };
        let rh = match n.r() {
            Some(r) => validate_node(arena, r)?,
            None => 0,
        };

        let expected = lh.max(rh) + 1;
        if n.height() != expected {
            return Err(AvlError::HeightMismatch {
                key: n.key(),
                expected,
                actual: n.height(),
            });
        }
        let balance = lh - rh;
        if !(-1..=1).contains(&balance) {
            return Err(AvlError::Unbalanced {
                key: n.key(),
                balance,
            });
        }
        if n.count() == 0 {
            return Err(AvlError::EmptyCount { key: n.key() });
        }
        Ok(expected)
    }

    validate_node(arena, root)?;

    let strict = duplicates == Duplicates::Counted;
    let mut keys = Vec::new();
    for_each(arena, Some(root), &mut |_, n: &N| keys.push(n.key()));
    for pair in keys.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev > next || (strict && prev == next) {
            return Err(AvlError::OrderViolated { prev, next });
        }
    }

    Ok(())
}

/// Debug printer.
pub fn print<N: AvlNodeLike>(arena: &[N], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l(), &format!("{tab}  "));
            let right = print(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ k = {}, cnt = {} }}\n{tab}L={left}\n{tab}R={right}",
                height(arena, Some(i)),
                n.key(),
                n.count()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::AvlNode;

    fn node(k: Key, l: Option<u32>, r: Option<u32>, h: i32) -> AvlNode {
        AvlNode {
            l,
            r,
            k,
            cnt: 1,
            h,
        }
    }

    #[test]
    fn empty_tree_is_valid() {
        let arena: Vec<AvlNode> = Vec::new();
        assert_eq!(assert_avl_tree(&arena, None, Duplicates::Separate), Ok(()));
    }

    #[test]
    fn detects_stale_height() {
        let arena = vec![node(1, None, None, 1), node(2, Some(0), None, 1)];
        assert_eq!(
            assert_avl_tree(&arena, Some(1), Duplicates::Separate),
            Err(AvlError::HeightMismatch {
                key: 2,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn detects_imbalance() {
        let arena = vec![
            node(1, None, None, 1),
            node(2, Some(0), None, 2),
            node(3, Some(1), None, 3),
        ];
        assert_eq!(
            assert_avl_tree(&arena, Some(2), Duplicates::Separate),
            Err(AvlError::Unbalanced { key: 3, balance: 2 })
        );
    }

    #[test]
    fn detects_misordered_keys() {
        let arena = vec![node(5, None, None, 1), node(2, Some(0), None, 2)];
        assert_eq!(
            assert_avl_tree(&arena, Some(1), Duplicates::Separate),
            Err(AvlError::OrderViolated { prev: 5, next: 2 })
        );
    }

    #[test]
    fn equal_neighbours_only_allowed_for_separate_duplicates() {
        let arena = vec![node(2, None, None, 1), node(2, None, Some(0), 2)];
        assert_eq!(assert_avl_tree(&arena, Some(1), Duplicates::Separate), Ok(()));
        assert_eq!(
            assert_avl_tree(&arena, Some(1), Duplicates::Counted),
            Err(AvlError::OrderViolated { prev: 2, next: 2 })
        );
    }

    #[test]
    fn detects_zero_count() {
        let mut arena = vec![node(1, None, None, 1)];
        arena[0].cnt = 0;
        assert_eq!(
            assert_avl_tree(&arena, Some(0), Duplicates::Counted),
            Err(AvlError::EmptyCount { key: 1 })
        );
    }

    #[test]
    fn find_and_count_key() {
        // 5 with an equal left child and an equal right child.
        let arena = vec![
            node(5, None, None, 1),
            node(5, Some(0), Some(2), 2),
            node(5, None, None, 1),
        ];
        assert_eq!(find(&arena, Some(1), 5), Some(1));
        assert_eq!(find(&arena, Some(1), 4), None);
        assert_eq!(count_key(&arena, Some(1), 5), 3);
        assert_eq!(count_key(&arena, Some(1), 6), 0);
    }

    #[test]
    fn print_shows_structure() {
        let arena = vec![node(1, None, None, 1), node(2, Some(0), None, 2)];
        assert_eq!(
            print(&arena, Some(1), ""),
            "Node[1] [h=2] { k = 2, cnt = 1 }\nL=Node[0] [h=1] { k = 1, cnt = 1 }\n  L=∅\n  R=∅\nR=∅"
        );
    }
}
