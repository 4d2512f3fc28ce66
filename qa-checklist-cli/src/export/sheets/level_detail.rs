//! Per-level detail sheets - one row per checklist item, grouped by block
//!
//! Sequence numbers run continuously across blocks within a sheet, and the
//! alternating row shade follows the parity of that running counter, not
//! block boundaries.

use anyhow::Result;
use rust_xlsxwriter::*;

use super::super::formatting::*;
use crate::checklist::{ChecklistBlock, Level};

/// Allowed values for the per-item status dropdown.
pub const STATUS_OPTIONS: [&str; 5] = ["PASS", "FAIL", "SKIP", "BLOCKED", "N/A"];

const HEADERS: [&str; 9] = [
    "#",
    "Block",
    "Step",
    "Command / Action",
    "Expected Result",
    "Status",
    "Actual Result / Notes",
    "Timestamp",
    "Screenshot",
];
const COLUMN_WIDTHS: [f64; 9] = [5.0, 7.0, 30.0, 40.0, 35.0, 10.0, 30.0, 16.0, 12.0];

/// Column index of the status dropdown.
const STATUS_COL: u16 = 5;

/// Dropdown validation shared by the status cells of a detail sheet.
fn status_validation() -> Result<DataValidation> {
    Ok(DataValidation::new()
        .allow_list_strings(&STATUS_OPTIONS)?
        .set_error_title("Invalid Status")?
        .set_error_message("Please select PASS, FAIL, SKIP, BLOCKED, or N/A")?)
}

/// Create the detail sheet for one level, in block declaration order.
pub fn create_level_detail_sheet(
    workbook: &mut Workbook,
    level: Level,
    checklist: &[ChecklistBlock],
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(&level.sheet_name())?;
    sheet.set_tab_color(level.tab_color());

    let title_format = create_title_format();
    let header_format = create_header_format();
    let section_format = create_section_format();
    let badge_format = create_badge_format();

    let body_center = create_body_center_format();
    let body_wrap = create_body_wrap_format();
    let command = create_command_format();
    let small_center = create_small_center_format();
    let timestamp = create_timestamp_format();

    let body_center_alt = with_alt_shading(&body_center);
    let body_wrap_alt = with_alt_shading(&body_wrap);
    let command_alt = with_alt_shading(&command);
    let small_center_alt = with_alt_shading(&small_center);
    let timestamp_alt = with_alt_shading(&timestamp);

    // Title row
    sheet.merge_range(
        0,
        0,
        0,
        8,
        &format!(
            "Level {} — {} ({})",
            level.number(),
            level.motto(),
            level.stage_name()
        ),
        &title_format,
    )?;
    sheet.set_row_height(0, 36)?;

    // Column headers
    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(2, col as u16, *header, &header_format)?;
    }
    sheet.set_row_height(2, 24)?;

    let validation = status_validation()?;

    let mut row = 3u32;
    let mut seq = 1u32;

    for block in checklist.iter().filter(|b| b.level == level) {
        // Block section header
        sheet.merge_range(
            row,
            0,
            row,
            8,
            &format!("Block {} — {}:  {}", block.number, block.badge, block.title),
            &section_format,
        )?;
        sheet.set_row_height(row, 28)?;
        row += 1;

        for item in &block.items {
            let banded = seq % 2 == 0;
            let center = if banded { &body_center_alt } else { &body_center };
            let wrap = if banded { &body_wrap_alt } else { &body_wrap };
            let cmd = if banded { &command_alt } else { &command };
            let small = if banded { &small_center_alt } else { &small_center };
            let stamp = if banded { &timestamp_alt } else { &timestamp };

            sheet.write_number_with_format(row, 0, seq as f64, center)?;
            sheet.write_number_with_format(row, 1, block.number as f64, center)?;
            sheet.write_string_with_format(row, 2, item.step, wrap)?;
            sheet.write_string_with_format(row, 3, item.action, cmd)?;
            sheet.write_string_with_format(row, 4, item.expected, wrap)?;

            sheet.write_blank(row, STATUS_COL, center)?;
            sheet.add_data_validation(row, STATUS_COL, row, STATUS_COL, &validation)?;

            sheet.write_blank(row, 6, wrap)?;
            sheet.write_blank(row, 7, stamp)?;
            sheet.write_blank(row, 8, small)?;

            sheet.set_row_height(row, 36)?;
            seq += 1;
            row += 1;
        }

        // Badge summary row
        sheet.merge_range(
            row,
            0,
            row,
            4,
            &format!("  >>> {} — EARNED?", block.badge),
            &badge_format,
        )?;
        let badge_status = badge_format
            .clone()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
        sheet.write_blank(row, STATUS_COL, &badge_status)?;
        sheet.add_data_validation(row, STATUS_COL, row, STATUS_COL, &validation)?;
        for col in 6..9 {
            sheet.write_blank(row, col, &badge_format)?;
        }
        sheet.set_row_height(row, 28)?;

        // Blank spacer row between blocks
        row += 2;
    }

    // Level mastery row
    let mastery_format = Format::new()
        .set_font_name("Calibri")
        .set_font_size(14)
        .set_bold()
        .set_font_color(BADGE_GOLD)
        .set_background_color(BADGE_CREAM)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    sheet.merge_range(
        row,
        0,
        row,
        8,
        &format!(
            "  Level {} Complete — {} EARNED?     YES / NO",
            level.number(),
            level.mastery_title()
        ),
        &mastery_format,
    )?;
    sheet.set_row_height(row, 40)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    // Keep titles and headers visible while scrolling the item rows
    sheet.set_freeze_panes(3, 0)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_validation_accepts_the_fixed_list() {
        assert!(status_validation().is_ok());
    }

    #[test]
    fn oversized_dropdown_list_is_rejected() {
        // xlsx caps in-formula validation lists at 255 characters; the
        // authoring layer must refuse anything longer.
        let long_entry = "X".repeat(300);
        let options = [long_entry.as_str()];
        assert!(DataValidation::new().allow_list_strings(&options).is_err());
    }
}
