//! The `timequiz validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use timequiz_core::loader::load_file;

pub fn execute(file: PathBuf, list: bool) -> Result<()> {
    let records = load_file(&file).context("invalid quiz file")?;

    println!(
        "Quiz file: {} ({} questions)",
        file.display(),
        records.len()
    );

    if records.is_empty() {
        println!("  WARNING: quiz has no questions and cannot be played");
    }

    if list && !records.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["#", "Question", "Answer"]);
        for (index, record) in records.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(&record.question),
                Cell::new(&record.answer),
            ]);
        }
        println!("{table}");
    }

    println!("Quiz file valid.");
    Ok(())
}
