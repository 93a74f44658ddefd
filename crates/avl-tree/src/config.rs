//! Tree configuration.

use serde::{Deserialize, Serialize};

/// What inserting an already-present key does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Duplicates {
    /// Every insert creates a node; equal keys are routed to the right
    /// subtree. Node counts stay at 1.
    #[default]
    Separate,
    /// Equal keys share one node whose count is bumped on insert and
    /// dropped on delete. The node is removed when its count reaches 0.
    Counted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvlConfig {
    pub duplicates: Duplicates,
}

impl AvlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicates(mut self, duplicates: Duplicates) -> Self {
        self.duplicates = duplicates;
        self
    }
}
