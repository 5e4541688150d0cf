//! Apply command - run a sequence of row actions and show the edits

use std::io::{self, Read};

use anyhow::{Context, Result};
use colored::Colorize;
use roster_core::services::{Command, UserRow};
use roster_core::{EditOp, OperationResult};
use serde::Serialize;
use tracing::debug;

use super::{get_context, Screen};
use crate::output::{self, describe_op, rows_table};

#[derive(Serialize)]
struct Step {
    command: Command,
    edits: Vec<EditOp>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    messages: Vec<String>,
}

#[derive(Serialize)]
struct ApplyReport {
    steps: Vec<Step>,
    users: Vec<UserRow>,
}

pub fn run(actions: Vec<String>, json: bool) -> Result<()> {
    // Get actions from arguments or stdin
    let raw_actions: Vec<String> = if actions.is_empty() && atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read actions from stdin")?;
        split_actions(&buffer)
    } else {
        actions
    };

    if raw_actions.is_empty() {
        anyhow::bail!(
            "No actions provided. Pass actions like 'move:2:-1' or pipe them from stdin."
        );
    }

    // Reject the whole batch before touching the roster
    let commands = raw_actions
        .iter()
        .map(|raw| raw.parse::<Command>())
        .collect::<roster_core::Result<Vec<_>>>()?;

    let screen = Screen::open(get_context()?);
    let mut steps = Vec::with_capacity(commands.len());
    for command in commands {
        screen.actions.run(command);
        let edits = screen.take_edits();
        debug!(%command, edits = edits.len(), "applied action");
        steps.push(Step {
            command,
            edits,
            messages: screen.take_messages(),
        });
    }

    let users = screen.adapter.borrow().rows();

    if json {
        let report = ApplyReport { steps, users };
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(report))?);
        return Ok(());
    }

    for step in &steps {
        println!("{}", step.command.to_string().bold());
        for message in &step.messages {
            output::info(&format!("  {}", message));
        }
        if step.edits.is_empty() && step.messages.is_empty() {
            println!("  {}", "no change".dimmed());
        }
        for edit in &step.edits {
            println!("  {}", describe_op(edit));
        }
    }
    println!();
    println!("{}", rows_table(&users));

    Ok(())
}

/// Actions are separated by newlines, commas or whitespace
fn split_actions(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_actions() {
        assert_eq!(
            split_actions("move:2:-1\ndelete:1, fire:3\n\n"),
            vec!["move:2:-1", "delete:1", "fire:3"]
        );
        assert!(split_actions("  \n").is_empty());
    }
}
