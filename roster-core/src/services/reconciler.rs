//! List reconciler - keyed diff between two ordered snapshots
//!
//! Items are matched by [`Identified::id`]. Matched items that keep their
//! relative order (the longest increasing run of their new positions, found
//! by patience sorting) stay put; every other matched item is moved once.
//! Unmatched old items are removed and unmatched new items inserted, and
//! matched items whose content differs get an update at their new index.
//!
//! Scripts are emitted in four phases so that every index is valid for the
//! list as it looks at that point:
//!
//! 1. removals, highest index first
//! 2. moves, in new order, each item placed right after its new predecessor
//! 3. insertions, lowest index first
//! 4. updates, at final positions

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{EditOp, EditScript, Identified};

/// Receiver of positional list updates, e.g. a list view
pub trait ListUpdateCallback {
    fn on_inserted(&mut self, position: usize);
    fn on_removed(&mut self, position: usize);
    fn on_moved(&mut self, from: usize, to: usize);
    fn on_changed(&mut self, position: usize);
}

/// Compute the edit script turning `old` into `new`
pub fn diff<T>(old: &[T], new: &[T]) -> EditScript
where
    T: Identified + PartialEq,
{
    // Candidate new positions per id, lowest index on top
    let mut slots: HashMap<T::Id, Vec<usize>> = HashMap::with_capacity(new.len());
    for (j, item) in new.iter().enumerate().rev() {
        slots.entry(item.id()).or_default().push(j);
    }

    let mut new_to_old: Vec<Option<usize>> = vec![None; new.len()];
    let mut old_to_new: Vec<Option<usize>> = Vec::with_capacity(old.len());
    for (i, item) in old.iter().enumerate() {
        let slot = slots.get_mut(&item.id()).and_then(Vec::pop);
        if let Some(j) = slot {
            new_to_old[j] = Some(i);
        }
        old_to_new.push(slot);
    }

    let mut ops = Vec::new();

    for (i, slot) in old_to_new.iter().enumerate().rev() {
        if slot.is_none() {
            ops.push(EditOp::Remove { index: i });
        }
    }

    // After the removals the list holds exactly the matched items in old
    // order; track it by their new positions.
    let mut working: Vec<usize> = old_to_new.iter().flatten().copied().collect();

    let mut stable = vec![false; new.len()];
    for j in longest_increasing_subsequence(&working) {
        stable[j] = true;
    }

    let mut predecessor: Option<usize> = None;
    for (j, source) in new_to_old.iter().enumerate() {
        if source.is_none() {
            continue;
        }
        if !stable[j] {
            if let Some(from) = working.iter().position(|&k| k == j) {
                working.remove(from);
                let to = predecessor
                    .and_then(|p| working.iter().position(|&k| k == p))
                    .map_or(0, |q| q + 1);
                working.insert(to, j);
                if from != to {
                    ops.push(EditOp::Move { from, to });
                }
            }
        }
        predecessor = Some(j);
    }

    for (j, source) in new_to_old.iter().enumerate() {
        if source.is_none() {
            ops.push(EditOp::Insert { index: j });
        }
    }

    for (j, source) in new_to_old.iter().enumerate() {
        if let Some(i) = *source {
            if old[i] != new[j] {
                ops.push(EditOp::Update { index: j });
            }
        }
    }

    let script = EditScript::new(ops);
    let stats = script.stats();
    trace!(
        old_len = old.len(),
        new_len = new.len(),
        inserts = stats.inserts,
        removes = stats.removes,
        moves = stats.moves,
        updates = stats.updates,
        "computed edit script"
    );
    script
}

/// Forward every operation of `script` to `callback`, in order
pub fn dispatch_updates_to(script: &EditScript, callback: &mut dyn ListUpdateCallback) {
    for op in script {
        match *op {
            EditOp::Insert { index } => callback.on_inserted(index),
            EditOp::Remove { index } => callback.on_removed(index),
            EditOp::Move { from, to } => callback.on_moved(from, to),
            EditOp::Update { index } => callback.on_changed(index),
        }
    }
}

/// Values of one longest strictly increasing subsequence of `seq`
fn longest_increasing_subsequence(seq: &[usize]) -> Vec<usize> {
    // tails[k] = index in seq of the smallest tail of a run of length k + 1
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; seq.len()];

    for (i, &value) in seq.iter().enumerate() {
        let pile = tails.partition_point(|&t| seq[t] < value);
        if pile > 0 {
            prev[i] = Some(tails[pile - 1]);
        }
        if pile == tails.len() {
            tails.push(i);
        } else {
            tails[pile] = i;
        }
    }

    let mut run = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        run.push(seq[i]);
        cursor = prev[i];
    }
    run.reverse();
    run
}
