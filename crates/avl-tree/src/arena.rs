use std::ops::{Deref, DerefMut};

/// `Vec`-backed node storage with slot reuse.
///
/// A released slot keeps its stale node until [`Arena::alloc`] overwrites
/// it. Nothing reachable from a tree root may point at a released slot.
#[derive(Clone, Debug)]
pub struct Arena<N> {
    nodes: Vec<N>,
    free: Vec<u32>,
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `node`, reusing the most recently released slot if any.
    pub fn alloc(&mut self, node: N) -> u32 {
        if let Some(idx) = self.free.pop() {
            self.nodes[idx as usize] = node;
            return idx;
        }
        self.nodes.push(node);
        (self.nodes.len() - 1) as u32
    }

    pub fn release(&mut self, idx: u32) {
        self.free.push(idx);
    }

    /// Number of slots currently holding a live node.
    pub fn live(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Deref for Arena<N> {
    type Target = [N];

    fn deref(&self) -> &[N] {
        &self.nodes
    }
}

impl<N> DerefMut for Arena<N> {
    fn deref_mut(&mut self) -> &mut [N] {
        &mut self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_appends_then_reuses_released_slots() {
        let mut arena = Arena::new();
        assert_eq!(arena.alloc('a'), 0);
        assert_eq!(arena.alloc('b'), 1);
        assert_eq!(arena.alloc('c'), 2);
        assert_eq!(arena.live(), 3);

        arena.release(1);
        assert_eq!(arena.live(), 2);
        assert_eq!(arena.alloc('d'), 1);
        assert_eq!(arena[1], 'd');
        assert_eq!(arena.alloc('e'), 3);
        assert_eq!(arena.live(), 4);
    }

    #[test]
    fn clear_drops_everything() {
        let mut arena = Arena::new();
        arena.alloc(1);
        arena.alloc(2);
        arena.release(0);
        arena.clear();
        assert_eq!(arena.live(), 0);
        assert!(arena.is_empty());
        assert_eq!(arena.alloc(3), 0);
    }
}
