//! Notes & issues sheet - pre-allocated blank rows for manual use

use anyhow::Result;
use rust_xlsxwriter::*;

use super::super::formatting::*;

pub const NOTES_SHEET_NAME: &str = "Notes & Issues";

/// Allowed values for the severity dropdown.
pub const SEVERITY_OPTIONS: [&str; 5] = ["Critical", "High", "Medium", "Low", "Info"];
/// Allowed values for the resolution-state dropdown.
pub const RESOLUTION_OPTIONS: [&str; 4] = ["Open", "In Progress", "Resolved", "Won't Fix"];

/// Number of blank rows pre-allocated for manual entries.
pub const NOTE_ROWS: u32 = 50;

const HEADERS: [&str; 6] = [
    "#",
    "Block",
    "Severity",
    "Description",
    "Resolution / Action",
    "Status",
];
const COLUMN_WIDTHS: [f64; 6] = [5.0, 10.0, 12.0, 55.0, 40.0, 14.0];

const SEVERITY_COL: u16 = 2;
const STATUS_COL: u16 = 5;

/// Create the notes sheet: numbered blank rows with severity and
/// resolution dropdowns.
pub fn create_notes_sheet(workbook: &mut Workbook) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(NOTES_SHEET_NAME)?;
    sheet.set_tab_color(Color::RGB(0xE74C3C));

    let title_format = create_title_format();
    let header_format = create_header_format();
    let body_center = create_body_center_format();
    let body_wrap = create_body_wrap_format();

    sheet.merge_range(
        0,
        0,
        0,
        5,
        "Issues, Observations & Improvement Notes",
        &title_format,
    )?;
    sheet.set_row_height(0, 36)?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(2, col as u16, *header, &header_format)?;
    }

    let severity_validation = DataValidation::new().allow_list_strings(&SEVERITY_OPTIONS)?;
    let resolution_validation = DataValidation::new().allow_list_strings(&RESOLUTION_OPTIONS)?;

    for n in 0..NOTE_ROWS {
        let row = 3 + n;
        sheet.write_number_with_format(row, 0, (n + 1) as f64, &body_center)?;
        sheet.write_blank(row, 1, &body_center)?;
        sheet.write_blank(row, 2, &body_center)?;
        sheet.write_blank(row, 3, &body_wrap)?;
        sheet.write_blank(row, 4, &body_wrap)?;
        sheet.write_blank(row, 5, &body_wrap)?;

        sheet.add_data_validation(row, SEVERITY_COL, row, SEVERITY_COL, &severity_validation)?;
        sheet.add_data_validation(row, STATUS_COL, row, STATUS_COL, &resolution_validation)?;
        sheet.set_row_height(row, 24)?;
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }
    sheet.set_freeze_panes(3, 0)?;

    Ok(())
}
