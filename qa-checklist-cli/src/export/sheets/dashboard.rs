//! Dashboard sheet - per-block overview, per-level rollup, grand total

use anyhow::Result;
use chrono::NaiveDate;
use rust_xlsxwriter::*;

use super::super::formatting::*;
use crate::checklist::{ChecklistBlock, Level};

pub const DASHBOARD_SHEET_NAME: &str = "Dashboard";

const HEADERS: [&str; 8] = [
    "Level", "Block", "Badge", "Title", "Items", "Passed", "Failed", "Status",
];
const COLUMN_WIDTHS: [f64; 8] = [12.0, 10.0, 22.0, 45.0, 8.0, 8.0, 8.0, 12.0];

/// Create the dashboard sheet: one row per block plus a per-level summary
/// and a grand total.
pub fn create_dashboard_sheet(
    workbook: &mut Workbook,
    checklist: &[ChecklistBlock],
    generated: NaiveDate,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(DASHBOARD_SHEET_NAME)?;
    sheet.set_tab_color(NAVY);

    let title_format = create_title_format();
    let header_format = create_header_format();
    let badge_format = create_badge_format();
    let body_center = create_body_center_format();
    let body_left = create_body_left_format();

    // Title row
    sheet.merge_range(
        0,
        0,
        0,
        7,
        "QA Checklist — Confluent Cloud Java Developer Workshop",
        &title_format,
    )?;
    sheet.set_row_height(0, 40)?;

    // Info row
    let info_format = create_small_format()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    sheet.merge_range(
        1,
        0,
        1,
        7,
        &format!(
            "Generated: {}  |  Tester: ____________________  |  Total: 19 Blocks, 17 Sporen, 4 Levels",
            generated.format("%Y-%m-%d")
        ),
        &info_format,
    )?;
    sheet.set_row_height(1, 20)?;

    // Column headers
    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(3, col as u16, *header, &header_format)?;
    }

    // One row per block
    let mut row = 4u32;
    for block in checklist {
        let level_cell = body_center
            .clone()
            .set_background_color(block.level.fill_color());

        sheet.write_string_with_format(row, 0, &block.level.sheet_name(), &level_cell)?;
        sheet.write_string_with_format(row, 1, &format!("Block {}", block.number), &level_cell)?;
        sheet.write_string_with_format(row, 2, block.badge, &badge_format)?;
        sheet.write_string_with_format(row, 3, block.title, &body_left)?;
        sheet.write_number_with_format(row, 4, block.items.len() as f64, &body_center)?;

        // Passed/Failed are manual-entry placeholders, never computed
        sheet.write_number_with_format(row, 5, 0.0, &body_center)?;
        sheet.write_number_with_format(row, 6, 0.0, &body_center)?;
        sheet.write_blank(row, 7, &body_center)?;

        row += 1;
    }

    // Per-level summary
    row += 1;
    let section_label = Format::new()
        .set_font_name("Calibri")
        .set_font_size(12)
        .set_bold()
        .set_font_color(HEADER_BLUE);
    sheet.write_string_with_format(row, 0, "SUMMARY", &section_label)?;
    row += 1;

    let motto_format = create_small_format();
    for level in Level::ALL {
        let level_label = Format::new()
            .set_font_name("Calibri")
            .set_font_size(11)
            .set_bold()
            .set_background_color(level.fill_color())
            .set_border(FormatBorder::Thin);
        sheet.write_string_with_format(row, 0, &level.sheet_name(), &level_label)?;
        sheet.merge_range(row, 1, row, 3, level.motto(), &motto_format)?;

        let level_items: usize = checklist
            .iter()
            .filter(|b| b.level == level)
            .map(|b| b.items.len())
            .sum();
        sheet.write_number_with_format(row, 4, level_items as f64, &body_center)?;
        for col in 5..8 {
            sheet.write_blank(row, col, &body_center)?;
        }
        row += 1;
    }

    // Grand total
    row += 1;
    let total_format = Format::new()
        .set_font_name("Calibri")
        .set_font_size(12)
        .set_bold();
    let total_number = total_format
        .clone()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let total_items: usize = checklist.iter().map(|b| b.items.len()).sum();
    sheet.write_string_with_format(row, 0, "GRAND TOTAL", &total_format)?;
    sheet.write_number_with_format(row, 4, total_items as f64, &total_number)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    Ok(())
}
