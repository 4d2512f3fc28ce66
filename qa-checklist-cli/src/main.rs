//! Entry point for the QA checklist workbook generator
//!
//! Builds the seven-sheet workshop checklist workbook from the hardcoded
//! checklist table and writes it to the output path (by default
//! `docs/workshop/QA-Checklist.xlsx`).

mod checklist;
mod cli;
mod export;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use checklist::{required_tools, workshop_checklist};
use cli::Cli;
use export::ChecklistExporter;

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let checklist = workshop_checklist();
    let tools = required_tools();
    let generated = chrono::Local::now().date_naive();

    let exporter = ChecklistExporter::new(checklist, tools, generated);
    let summary = exporter.export_to_excel(&args.output)?;

    println!(
        "QA Checklist generated: {}",
        args.output.display().to_string().cyan()
    );
    println!(
        "  Sheets: {} ({})",
        summary.sheet_names.len(),
        summary.sheet_names.join(", ")
    );
    println!("  Total check items: {}", summary.item_count);
    println!("  Blocks: {}", summary.block_count);
    println!("  Levels: 4 (101, 201, 301, 401)");

    Ok(())
}
