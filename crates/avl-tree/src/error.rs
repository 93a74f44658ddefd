//! Invariant violations reported by tree validation.

use thiserror::Error;

use crate::types::Key;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvlError {
    #[error("height mismatch at key {key}: expected {expected}, got {actual}")]
    HeightMismatch { key: Key, expected: i32, actual: i32 },
    #[error("AVL balance violated at key {key}: balance factor {balance}")]
    Unbalanced { key: Key, balance: i32 },
    #[error("node order violated: {prev} precedes {next}")]
    OrderViolated { prev: Key, next: Key },
    #[error("node with key {key} has a zero count")]
    EmptyCount { key: Key },
    #[error("length mismatch: tree reports {expected} keys, nodes hold {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("arena holds {live} live nodes but only {reachable} are reachable")]
    LeakedNodes { live: usize, reachable: usize },
}
