//! Tool verification sheet - one row per required external tool

use anyhow::Result;
use rust_xlsxwriter::*;

use super::super::formatting::*;
use crate::checklist::ToolRequirement;

pub const TOOL_SHEET_NAME: &str = "Tool Verification";

/// Allowed values for the tool status dropdown.
pub const TOOL_STATUS_OPTIONS: [&str; 3] = ["OK", "MISSING", "WRONG VERSION"];

const HEADERS: [&str; 7] = [
    "Tool",
    "Required Version",
    "Verify Command",
    "Installed Version",
    "Status",
    "Install Command",
    "Notes",
];
const COLUMN_WIDTHS: [f64; 7] = [16.0, 14.0, 35.0, 16.0, 14.0, 40.0, 28.0];

const STATUS_COL: u16 = 4;

/// Create the pre-workshop tool verification sheet.
pub fn create_tool_sheet(workbook: &mut Workbook, tools: &[ToolRequirement]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(TOOL_SHEET_NAME)?;
    sheet.set_tab_color(Color::RGB(0x8E44AD));

    let title_format = create_title_format();
    let header_format = create_header_format();
    let body_left = create_body_left_format();
    let body_center = create_body_center_format();
    let command = create_command_format();

    let body_left_alt = with_alt_shading(&body_left);
    let body_center_alt = with_alt_shading(&body_center);
    let command_alt = with_alt_shading(&command);

    sheet.merge_range(0, 0, 0, 6, "Pre-Workshop Tool Verification", &title_format)?;
    sheet.set_row_height(0, 36)?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(2, col as u16, *header, &header_format)?;
    }

    let validation = DataValidation::new().allow_list_strings(&TOOL_STATUS_OPTIONS)?;

    for (idx, tool) in tools.iter().enumerate() {
        let row = 3 + idx as u32;
        let banded = idx % 2 == 0;
        let left = if banded { &body_left_alt } else { &body_left };
        let center = if banded { &body_center_alt } else { &body_center };
        let cmd = if banded { &command_alt } else { &command };

        sheet.write_string_with_format(row, 0, tool.name, left)?;
        sheet.write_string_with_format(row, 1, tool.required_version, left)?;
        sheet.write_string_with_format(row, 2, tool.verify_command, cmd)?;
        sheet.write_blank(row, 3, left)?;

        sheet.write_blank(row, STATUS_COL, center)?;
        sheet.add_data_validation(row, STATUS_COL, row, STATUS_COL, &validation)?;

        sheet.write_string_with_format(row, 5, tool.install_command, left)?;
        sheet.write_string_with_format(row, 6, tool.notes, left)?;
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }
    sheet.set_freeze_panes(3, 0)?;

    Ok(())
}
