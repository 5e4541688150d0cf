//! Shell command - browse the roster and act on rows interactively

use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;
use roster_core::services::{MenuAction, UserRow};
use roster_core::UserId;

use super::{get_context, Screen};
use crate::output::{self, describe_op};

/// What the user picked from a row's menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowChoice {
    Details,
    Menu(MenuAction),
    Back,
}

pub fn run() -> Result<()> {
    if atty::isnt(atty::Stream::Stdin) {
        anyhow::bail!(
            "The shell needs an interactive terminal. Use 'roster apply' for scripted actions."
        );
    }

    let screen = Screen::open(get_context()?);
    let mut cursor = 0;

    loop {
        let rows = screen.adapter.borrow().rows();
        if rows.is_empty() {
            output::warning("The roster is empty");
            return Ok(());
        }

        let mut labels: Vec<String> = rows.iter().map(row_label).collect();
        labels.push("Quit".to_string());

        let picked = Select::new()
            .with_prompt(format!("{} users", rows.len()))
            .items(&labels)
            .default(cursor.min(rows.len() - 1))
            .max_length(15)
            .interact_opt()?;

        let Some(index) = picked.filter(|&i| i < rows.len()) else {
            return Ok(());
        };
        cursor = index;
        let user_id = rows[index].id;

        match pick_row_action(&screen, user_id)? {
            RowChoice::Back => continue,
            RowChoice::Details => {
                // The adapter borrow must end before the action reaches the store
                let click = screen.adapter.borrow().on_click(user_id);
                if let Some((user, action)) = click {
                    action.dispatch(&user, &screen.actions);
                }
            }
            RowChoice::Menu(menu_action) => {
                let selected = screen.adapter.borrow().on_menu_item(user_id, menu_action);
                if let Some((user, action)) = selected {
                    action.dispatch(&user, &screen.actions);
                }
            }
        }

        for message in screen.take_messages() {
            output::info(&message);
        }
        for edit in screen.take_edits() {
            println!("  {}", describe_op(&edit).dimmed());
        }
    }
}

fn pick_row_action(screen: &Screen, user_id: UserId) -> Result<RowChoice> {
    let mut choices = vec![RowChoice::Details];
    choices.extend(
        screen
            .adapter
            .borrow()
            .menu_for(user_id)
            .into_iter()
            .filter(|item| item.enabled)
            .map(|item| RowChoice::Menu(item.action)),
    );
    choices.push(RowChoice::Back);

    let labels: Vec<&str> = choices.iter().map(|c| choice_title(*c)).collect();
    let picked = Select::new().items(&labels).default(0).interact_opt()?;

    Ok(picked
        .and_then(|i| choices.get(i).copied())
        .unwrap_or(RowChoice::Back))
}

fn choice_title(choice: RowChoice) -> &'static str {
    match choice {
        RowChoice::Details => "Details",
        RowChoice::Menu(action) => action.title(),
        RowChoice::Back => "Back",
    }
}

fn row_label(row: &UserRow) -> String {
    format!("{:>4}  {:<24} {}", row.id, row.name, row.company_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_titles() {
        assert_eq!(choice_title(RowChoice::Details), "Details");
        assert_eq!(choice_title(RowChoice::Menu(MenuAction::Fire)), MenuAction::Fire.title());
        assert_eq!(choice_title(RowChoice::Back), "Back");
    }
}
