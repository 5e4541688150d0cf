//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use roster_core::services::{ListUpdateCallback, UserRow};
use roster_core::EditOp;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Table of bound rows, in display order
pub fn rows_table(rows: &[UserRow]) -> Table {
    let mut table = create_table();
    table.set_header(vec!["#", "ID", "Name", "Company", "Photo"]);
    for (position, row) in rows.iter().enumerate() {
        let photo = if row.avatar.is_placeholder() {
            "placeholder"
        } else {
            "remote"
        };
        table.add_row(vec![
            position.to_string(),
            row.id.to_string(),
            row.name.clone(),
            row.company_label.clone(),
            photo.to_string(),
        ]);
    }
    table
}

/// Human-readable form of an edit
pub fn describe_op(op: &EditOp) -> String {
    match *op {
        EditOp::Insert { index } => format!("insert row {}", index),
        EditOp::Remove { index } => format!("remove row {}", index),
        EditOp::Move { from, to } => format!("move row {} -> {}", from, to),
        EditOp::Update { index } => format!("redraw row {}", index),
    }
}

/// List view that records the edits it receives instead of drawing them
#[derive(Debug, Default)]
pub struct EditLog {
    ops: Vec<EditOp>,
}

impl EditLog {
    /// Take the edits received since the last call
    pub fn drain(&mut self) -> Vec<EditOp> {
        std::mem::take(&mut self.ops)
    }
}

impl ListUpdateCallback for EditLog {
    fn on_inserted(&mut self, position: usize) {
        self.ops.push(EditOp::Insert { index: position });
    }

    fn on_removed(&mut self, position: usize) {
        self.ops.push(EditOp::Remove { index: position });
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        self.ops.push(EditOp::Move { from, to });
    }

    fn on_changed(&mut self, position: usize) {
        self.ops.push(EditOp::Update { index: position });
    }
}
