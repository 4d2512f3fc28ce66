//! Excel export for the workshop QA checklist
//!
//! Builds the seven-sheet workbook (dashboard, four level detail sheets,
//! tool verification, notes) in one pass and saves it. Rendering is a pure
//! function of the checklist data, the tool table, and the generation date
//! passed in at construction.

mod formatting;
pub mod sheets;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook};

use crate::checklist::{ChecklistBlock, Level, ToolRequirement};
use sheets::*;

/// Builds and saves the QA checklist workbook.
pub struct ChecklistExporter {
    checklist: Vec<ChecklistBlock>,
    tools: Vec<ToolRequirement>,
    generated: NaiveDate,
}

/// Console-facing summary of a completed export.
pub struct ExportSummary {
    pub sheet_names: Vec<String>,
    pub block_count: usize,
    pub item_count: usize,
}

impl ChecklistExporter {
    pub fn new(
        checklist: Vec<ChecklistBlock>,
        tools: Vec<ToolRequirement>,
        generated: NaiveDate,
    ) -> Self {
        Self {
            checklist,
            tools,
            generated,
        }
    }

    /// Build the full workbook in memory, sheets in fixed order.
    pub fn build_workbook(&self) -> Result<Workbook> {
        let mut workbook = Workbook::new();

        // Pin the document creation timestamp to the generation date so
        // repeated runs over unchanged data produce identical files.
        let created = ExcelDateTime::from_ymd(
            self.generated.year() as u16,
            self.generated.month() as u8,
            self.generated.day() as u8,
        )?;
        workbook.set_properties(
            &DocProperties::new()
                .set_title("QA Checklist — Confluent Cloud Java Developer Workshop")
                .set_creation_datetime(&created),
        );

        create_dashboard_sheet(&mut workbook, &self.checklist, self.generated)?;
        for level in Level::ALL {
            create_level_detail_sheet(&mut workbook, level, &self.checklist)?;
        }
        create_tool_sheet(&mut workbook, &self.tools)?;
        create_notes_sheet(&mut workbook)?;

        Ok(workbook)
    }

    /// Build the workbook and save it to `path`.
    pub fn export_to_excel(&self, path: &Path) -> Result<ExportSummary> {
        let mut workbook = self.build_workbook()?;
        workbook
            .save(path)
            .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

        log::info!("QA checklist workbook written to {}", path.display());
        Ok(self.summary())
    }

    /// Sheet names, block count and item count for the console summary.
    pub fn summary(&self) -> ExportSummary {
        let mut sheet_names = vec![dashboard::DASHBOARD_SHEET_NAME.to_string()];
        sheet_names.extend(Level::ALL.iter().map(|l| l.sheet_name()));
        sheet_names.push(tools::TOOL_SHEET_NAME.to_string());
        sheet_names.push(notes::NOTES_SHEET_NAME.to_string());

        ExportSummary {
            sheet_names,
            block_count: self.checklist.len(),
            item_count: self.checklist.iter().map(|b| b.items.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{required_tools, workshop_checklist};
    use calamine::{Data, Range, Reader, Xlsx, open_workbook};
    use std::fs;
    use std::path::PathBuf;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn exporter() -> ChecklistExporter {
        ChecklistExporter::new(workshop_checklist(), required_tools(), test_date())
    }

    /// Save the workbook to a scratch file and open it with calamine.
    fn saved_workbook(name: &str) -> (PathBuf, Xlsx<std::io::BufReader<fs::File>>) {
        let path = std::env::temp_dir().join(format!("qa-checklist-{name}.xlsx"));
        exporter()
            .export_to_excel(&path)
            .expect("export should succeed");
        let workbook = open_workbook(&path).expect("generated file should open");
        (path, workbook)
    }

    fn cell_string(row: &[Data], col: usize) -> Option<&str> {
        match row.get(col) {
            Some(Data::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    fn cell_number(row: &[Data], col: usize) -> Option<f64> {
        match row.get(col) {
            Some(Data::Float(f)) => Some(*f),
            Some(Data::Int(i)) => Some(*i as f64),
            _ => None,
        }
    }

    /// Item rows are the only rows whose first column is numeric.
    fn item_row_count(range: &Range<Data>) -> usize {
        range
            .rows()
            .filter(|row| cell_number(row, 0).is_some())
            .count()
    }

    #[test]
    fn workbook_has_expected_sheets_in_order() {
        let (path, workbook) = saved_workbook("sheets");
        assert_eq!(
            workbook.sheet_names(),
            vec![
                "Dashboard",
                "Level 101",
                "Level 201",
                "Level 301",
                "Level 401",
                "Tool Verification",
                "Notes & Issues",
            ]
        );
        fs::remove_file(path).ok();
    }

    #[test]
    fn summary_matches_the_data() {
        let summary = exporter().summary();
        assert_eq!(summary.sheet_names.len(), 7);
        assert_eq!(summary.block_count, 19);
        assert_eq!(summary.item_count, 156);
    }

    #[test]
    fn level_101_row_classes() {
        let (path, mut workbook) = saved_workbook("level101");
        let range = workbook.worksheet_range("Level 101").unwrap();

        let mut item_rows = 0;
        let mut section_rows = 0;
        let mut badge_rows = 0;
        let mut mastery_rows = 0;
        let mut sequence = Vec::new();

        for row in range.rows() {
            if let Some(n) = cell_number(row, 0) {
                item_rows += 1;
                sequence.push(n as u32);
            } else if let Some(s) = cell_string(row, 0) {
                if s.starts_with("Block ") {
                    section_rows += 1;
                } else if s.starts_with("  >>>") && s.ends_with("EARNED?") {
                    badge_rows += 1;
                } else if s.contains("Level 101 Complete") {
                    mastery_rows += 1;
                }
            }
        }

        assert_eq!(item_rows, 60);
        assert_eq!(section_rows, 6);
        assert_eq!(badge_rows, 6);
        assert_eq!(mastery_rows, 1);

        // Sequence numbers run 1..=60 with no gaps or resets
        assert_eq!(sequence, (1..=60).collect::<Vec<u32>>());
        fs::remove_file(path).ok();
    }

    #[test]
    fn section_headers_follow_declaration_order() {
        let (path, mut workbook) = saved_workbook("sections");
        for level in Level::ALL {
            let range = workbook.worksheet_range(&level.sheet_name()).unwrap();
            let headers: Vec<String> = range
                .rows()
                .filter_map(|row| cell_string(row, 0))
                .filter(|s| s.starts_with("Block "))
                .map(str::to_string)
                .collect();

            let expected: Vec<String> = workshop_checklist()
                .iter()
                .filter(|b| b.level == level)
                .map(|b| format!("Block {} — {}:  {}", b.number, b.badge, b.title))
                .collect();

            assert_eq!(headers, expected);
        }
        fs::remove_file(path).ok();
    }

    #[test]
    fn dashboard_grand_total_matches_detail_rows() {
        let (path, mut workbook) = saved_workbook("totals");

        let dashboard = workbook.worksheet_range("Dashboard").unwrap();
        let grand_total_row = dashboard
            .rows()
            .find(|row| cell_string(row, 0) == Some("GRAND TOTAL"))
            .expect("dashboard should have a grand total row");
        let grand_total = cell_number(grand_total_row, 4).unwrap();

        let expected: usize = workshop_checklist().iter().map(|b| b.items.len()).sum();
        assert_eq!(grand_total as usize, expected);

        let detail_rows: usize = Level::ALL
            .iter()
            .map(|level| item_row_count(&workbook.worksheet_range(&level.sheet_name()).unwrap()))
            .sum();
        assert_eq!(detail_rows, expected);

        fs::remove_file(path).ok();
    }

    #[test]
    fn dashboard_block_rows_carry_counts_and_placeholders() {
        let (path, mut workbook) = saved_workbook("dashboard-rows");
        let range = workbook.worksheet_range("Dashboard").unwrap();
        let checklist = workshop_checklist();

        let block_rows: Vec<_> = range
            .rows()
            .filter(|row| {
                cell_string(row, 1).is_some_and(|s| s.starts_with("Block "))
            })
            .collect();
        assert_eq!(block_rows.len(), checklist.len());

        for (row, block) in block_rows.iter().zip(&checklist) {
            assert_eq!(cell_string(row, 0), Some(block.level.sheet_name().as_str()));
            assert_eq!(cell_string(row, 2), Some(block.badge));
            assert_eq!(cell_string(row, 3), Some(block.title));
            assert_eq!(cell_number(row, 4), Some(block.items.len() as f64));
            // Passed/Failed are static zero placeholders
            assert_eq!(cell_number(row, 5), Some(0.0));
            assert_eq!(cell_number(row, 6), Some(0.0));
        }

        fs::remove_file(path).ok();
    }

    #[test]
    fn tool_sheet_lists_every_tool() {
        let (path, mut workbook) = saved_workbook("tools");
        let range = workbook.worksheet_range("Tool Verification").unwrap();
        let tools = required_tools();

        let names: Vec<String> = range
            .rows()
            .skip(3)
            .filter_map(|row| cell_string(row, 0))
            .map(str::to_string)
            .collect();
        assert_eq!(
            names,
            tools.iter().map(|t| t.name.to_string()).collect::<Vec<_>>()
        );

        fs::remove_file(path).ok();
    }

    #[test]
    fn notes_sheet_pre_numbers_fifty_rows() {
        let (path, mut workbook) = saved_workbook("notes");
        let range = workbook.worksheet_range("Notes & Issues").unwrap();

        let numbers: Vec<u32> = range
            .rows()
            .filter_map(|row| cell_number(row, 0))
            .map(|n| n as u32)
            .collect();
        assert_eq!(numbers, (1..=50).collect::<Vec<u32>>());

        fs::remove_file(path).ok();
    }

    #[test]
    fn output_is_byte_identical_for_a_fixed_date() {
        let first = exporter()
            .build_workbook()
            .unwrap()
            .save_to_buffer()
            .unwrap();
        let second = exporter()
            .build_workbook()
            .unwrap()
            .save_to_buffer()
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn save_into_a_missing_directory_fails() {
        let dir = std::env::temp_dir().join("qa-checklist-no-such-dir");
        fs::remove_dir_all(&dir).ok();
        let result = exporter().export_to_excel(&dir.join("out.xlsx"));
        assert!(result.is_err());
    }
}
