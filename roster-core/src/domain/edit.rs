//! Edit scripts between two ordered snapshots

use std::hash::Hash;

use serde::Serialize;

/// A record with a stable identity, independent of its content
///
/// Content equality is the record's `PartialEq`.
pub trait Identified {
    type Id: Eq + Hash + Copy;

    fn id(&self) -> Self::Id;
}

/// A single positional edit
///
/// Indices refer to the list as it looks right before the operation is
/// applied. `Insert` and `Update` take their content from the new snapshot at
/// the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOp {
    Insert { index: usize },
    Remove { index: usize },
    /// Take the item out at `from`, then put it back at `to`
    Move { from: usize, to: usize },
    Update { index: usize },
}

/// Ordered list of edits turning one snapshot into another
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditScript {
    pub ops: Vec<EditOp>,
}

impl EditScript {
    pub fn new(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.ops.iter()
    }

    pub fn stats(&self) -> EditStats {
        let mut stats = EditStats::default();
        for op in &self.ops {
            match op {
                EditOp::Insert { .. } => stats.inserts += 1,
                EditOp::Remove { .. } => stats.removes += 1,
                EditOp::Move { .. } => stats.moves += 1,
                EditOp::Update { .. } => stats.updates += 1,
            }
        }
        stats
    }

    /// Replay the script on a copy of `old`
    ///
    /// Returns `None` if an operation points outside the list, which only
    /// happens when the script was computed for different snapshots.
    pub fn apply<T: Clone>(&self, old: &[T], new: &[T]) -> Option<Vec<T>> {
        let mut items = old.to_vec();
        for op in &self.ops {
            match *op {
                EditOp::Insert { index } => {
                    if index > items.len() {
                        return None;
                    }
                    items.insert(index, new.get(index)?.clone());
                }
                EditOp::Remove { index } => {
                    if index >= items.len() {
                        return None;
                    }
                    items.remove(index);
                }
                EditOp::Move { from, to } => {
                    if from >= items.len() || to >= items.len() {
                        return None;
                    }
                    let item = items.remove(from);
                    items.insert(to, item);
                }
                EditOp::Update { index } => {
                    let slot = items.get_mut(index)?;
                    *slot = new.get(index)?.clone();
                }
            }
        }
        Some(items)
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Operation counts of an edit script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EditStats {
    pub inserts: usize,
    pub removes: usize,
    pub moves: usize,
    pub updates: usize,
}
