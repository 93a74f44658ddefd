use std::fmt;

use log::trace;

use crate::arena::Arena;
use crate::config::{AvlConfig, Duplicates};
use crate::error::AvlError;
use crate::types::Key;

use super::height::height;
use super::insert::insert;
use super::remove::{remove, Removal};
use super::traverse::{for_each, traverse};
use super::types::AvlNode;
use super::util::{assert_avl_tree, count_key, find, print};

/// AVL tree of [`Key`]s that owns its node arena.
///
/// Node indices handed out by [`AvlTree::root_index`], [`AvlTree::left`]
/// and friends stay valid until the next mutation.
#[derive(Clone, Debug, Default)]
pub struct AvlTree {
    arena: Arena<AvlNode>,
    root: Option<u32>,
    len: usize,
    config: AvlConfig,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AvlConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &AvlConfig {
        &self.config
    }

    pub fn insert(&mut self, key: Key) {
        self.root = Some(insert(
            &mut self.arena,
            self.root,
            key,
            self.config.duplicates,
            &AvlNode::new,
        ));
        self.len += 1;
    }

    /// Removes one copy of `key`. Returns `false`, leaving the tree as it
    /// was, when the key is absent.
    pub fn delete(&mut self, key: Key) -> bool {
        if self.find(key).is_none() {
            trace!("delete: {key} not present");
            return false;
        }
        self.root = remove(&mut self.arena, self.root, key, Removal::One);
        self.len -= 1;
        true
    }

    /// Removes every copy of `key` and returns how many there were.
    pub fn purge(&mut self, key: Key) -> usize {
        match self.config.duplicates {
            Duplicates::Counted => {
                let Some(i) = self.find(key) else {
                    return 0;
                };
                let cnt = self.arena[i as usize].cnt as usize;
                self.root = remove(&mut self.arena, self.root, key, Removal::All);
                self.len -= cnt;
                cnt
            }
            Duplicates::Separate => {
                let mut removed = 0;
                while self.delete(key) {
                    removed += 1;
                }
                removed
            }
        }
    }

    /// Keys in ascending order, duplicates included.
    pub fn traverse(&self) -> Vec<Key> {
        traverse(&self.arena, self.root)
    }

    pub fn for_each<G: FnMut(u32, &AvlNode)>(&self, mut f: G) {
        for_each(&self.arena, self.root, &mut f);
    }

    pub fn find(&self, key: Key) -> Option<u32> {
        find(&self.arena, self.root, key)
    }

    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// How many copies of `key` the tree holds.
    pub fn count(&self, key: Key) -> usize {
        count_key(&self.arena, self.root, key)
    }

    /// Number of keys, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; 0 for an empty tree, 1 for a single node.
    pub fn height(&self) -> usize {
        height(&self.arena, self.root) as usize
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, idx: u32) -> &AvlNode {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> Key {
        self.node(idx).k
    }

    pub fn left(&self, idx: u32) -> Option<u32> {
        self.node(idx).l
    }

    pub fn right(&self, idx: u32) -> Option<u32> {
        self.node(idx).r
    }

    pub fn assert_valid(&self) -> Result<(), AvlError> {
        assert_avl_tree(&self.arena, self.root, self.config.duplicates)?;

        let mut nodes = 0;
        let mut total = 0;
        self.for_each(|_, n| {
            nodes += 1;
            total += n.cnt as usize;
        });
        if total != self.len {
            return Err(AvlError::LengthMismatch {
                expected: self.len,
                actual: total,
            });
        }
        if nodes != self.arena.live() {
            return Err(AvlError::LeakedNodes {
                live: self.arena.live(),
                reachable: nodes,
            });
        }
        Ok(())
    }

    pub fn print(&self) -> String {
        print(&self.arena, self.root, "")
    }
}

/// Space-separated keys in ascending order.
impl fmt::Display for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut result = Ok(());
        self.for_each(|_, n| {
            for _ in 0..n.cnt {
                if result.is_err() {
                    return;
                }
                result = if first {
                    write!(f, "{}", n.k)
                } else {
                    write!(f, " {}", n.k)
                };
                first = false;
            }
        });
        result
    }
}

impl FromIterator<Key> for AvlTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Key> for AvlTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
