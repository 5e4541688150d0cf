//! List command - show the roster as the list screen binds it

use anyhow::Result;
use colored::Colorize;
use roster_core::OperationResult;

use super::{get_context, Screen};
use crate::output::rows_table;

pub fn run(json: bool) -> Result<()> {
    let screen = Screen::open(get_context()?);
    let rows = screen.adapter.borrow().rows();

    if json {
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(rows))?);
        return Ok(());
    }

    println!("{}", "Users".bold());
    println!();
    println!("{}", rows_table(&rows));
    println!();
    println!("{} user(s)", rows.len());

    Ok(())
}
