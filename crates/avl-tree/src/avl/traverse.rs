use crate::types::Key;

use super::types::AvlNodeLike;

/// In-order walk calling `f` with each node's index.
pub fn for_each<N, F>(arena: &[N], node: Option<u32>, f: &mut F)
where
    N: AvlNodeLike,
    F: FnMut(u32, &N),
{
    let Some(i) = node else {
        return;
    };
    let n = &arena[i as usize];
    for_each(arena, n.l(), f);
    f(i, n);
    for_each(arena, n.r(), f);
}

/// Keys in ascending order, each repeated by its node's count.
pub fn traverse<N: AvlNodeLike>(arena: &[N], root: Option<u32>) -> Vec<Key> {
    let mut keys = Vec::new();
    for_each(arena, root, &mut |_, n: &N| {
        keys.extend(std::iter::repeat(n.key()).take(n.count() as usize));
    });
    keys
}
