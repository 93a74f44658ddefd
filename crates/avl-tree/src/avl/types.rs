use crate::types::{Key, Node};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvlNode {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Key,
    /// Multiplicity, only above 1 under [`Duplicates::Counted`](crate::Duplicates::Counted).
    pub cnt: u32,
    /// Height of the subtree rooted here. A leaf is 1, an absent child 0.
    pub h: i32,
}

impl AvlNode {
    pub fn new(k: Key) -> Self {
        Self {
            l: None,
            r: None,
            k,
            cnt: 1,
            h: 1,
        }
    }
}

impl Node for AvlNode {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike: Node {
    fn key(&self) -> Key;
    fn set_key(&mut self, k: Key);
    fn count(&self) -> u32;
    fn set_count(&mut self, cnt: u32);
    fn height(&self) -> i32;
    fn set_height(&mut self, h: i32);
}

impl AvlNodeLike for AvlNode {
    fn key(&self) -> Key {
        self.k
    }

    fn set_key(&mut self, k: Key) {
        self.k = k;
    }

    fn count(&self) -> u32 {
        self.cnt
    }

    fn set_count(&mut self, cnt: u32) {
        self.cnt = cnt;
    }

    fn height(&self) -> i32 {
        self.h
    }

    fn set_height(&mut self, h: i32) {
        self.h = h;
    }
}
