//! Menu command - show the popup menu a row would offer

use anyhow::Result;
use colored::Colorize;
use roster_core::services::MenuItem;
use roster_core::{Error, OperationResult, UserId};
use serde::Serialize;

use super::{get_context, Screen};
use crate::output;

#[derive(Serialize)]
struct MenuReport {
    user_id: UserId,
    position: usize,
    items: Vec<MenuItem>,
}

pub fn run(user_id: UserId, json: bool) -> Result<()> {
    let screen = Screen::open(get_context()?);
    let adapter = screen.adapter.borrow();

    let Some(position) = adapter.users().iter().position(|u| u.id == user_id) else {
        let err = Error::not_found(format!("user {} is not on the roster", user_id));
        if json {
            let result: OperationResult<MenuReport> = Err(err).into();
            println!("{}", serde_json::to_string_pretty(&result)?);
            std::process::exit(1);
        }
        return Err(err.into());
    };

    let report = MenuReport {
        user_id,
        position,
        items: adapter.menu_for(user_id),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(report))?);
        return Ok(());
    }

    if let Some(row) = adapter.row(position) {
        output::info(&format!("{} ({})", row.name, row.company_label));
    }
    for item in &report.items {
        if item.enabled {
            println!("  {}", item.action.title());
        } else {
            println!("  {}", item.action.title().dimmed());
        }
    }

    Ok(())
}
