//! Diff command - reconcile two roster files

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use roster_core::services::diff;
use roster_core::{EditScript, EditStats, OperationResult, User};
use serde::Serialize;
use serde_json::json;

use crate::output::{self, describe_op};

#[derive(Serialize)]
struct DiffReport {
    stats: EditStats,
    #[serde(flatten)]
    script: EditScript,
}

pub fn run(old_path: &Path, new_path: &Path, json: bool) -> Result<()> {
    let old = read_users(old_path)?;
    let new = read_users(new_path)?;

    for (path, users) in [(old_path, &old), (new_path, &new)] {
        if has_duplicate_ids(users) {
            output::warning(&format!(
                "{:?} repeats user ids; duplicates are paired in order",
                path
            ));
        }
    }

    let script = diff(&old, &new);

    if json {
        let report = DiffReport {
            stats: script.stats(),
            script,
        };
        let context = HashMap::from([
            ("old".to_string(), json!(old_path.display().to_string())),
            ("new".to_string(), json!(new_path.display().to_string())),
        ]);
        let result = OperationResult::ok_with_context(report, context);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if script.is_empty() {
        output::success("Rosters are identical");
        return Ok(());
    }

    for op in &script {
        println!("{}", describe_op(op));
    }

    let stats = script.stats();
    println!();
    println!(
        "{} insert(s), {} removal(s), {} move(s), {} update(s)",
        stats.inserts.to_string().green(),
        stats.removes.to_string().red(),
        stats.moves.to_string().cyan(),
        stats.updates.to_string().yellow()
    );

    Ok(())
}

fn read_users(path: &Path) -> Result<Vec<User>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse roster file {:?} (expected a JSON array of users)",
            path
        )
    })
}

fn has_duplicate_ids(users: &[User]) -> bool {
    let mut seen = HashSet::with_capacity(users.len());
    !users.iter().all(|u| seen.insert(u.id))
}
