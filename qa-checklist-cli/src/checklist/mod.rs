//! Data model for the workshop QA checklist
//!
//! The checklist is a fixed table of blocks, each tied to a workshop level
//! and a badge, holding an ordered list of verification steps. Everything
//! here is constructed once at startup and passed into the exporter;
//! nothing is mutated after construction.

mod data;
mod tools;

pub use data::workshop_checklist;
pub use tools::required_tools;

use rust_xlsxwriter::Color;

/// Workshop difficulty tier. Each level owns one detail sheet in the
/// generated workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    L101,
    L201,
    L301,
    L401,
}

impl Level {
    /// All levels, in workbook sheet order.
    pub const ALL: [Level; 4] = [Level::L101, Level::L201, Level::L301, Level::L401];

    /// Numeric tier label (101, 201, 301, 401).
    pub fn number(self) -> u16 {
        match self {
            Level::L101 => 101,
            Level::L201 => 201,
            Level::L301 => 301,
            Level::L401 => 401,
        }
    }

    /// Worksheet name for the level's detail sheet ("Level 101").
    pub fn sheet_name(self) -> String {
        format!("Level {}", self.number())
    }

    /// English stage name shown in the detail sheet title.
    pub fn stage_name(self) -> &'static str {
        match self {
            Level::L101 => "Foundations",
            Level::L201 => "Tool Introduction",
            Level::L301 => "Deep Dive",
            Level::L401 => "Engineering Tuning",
        }
    }

    /// German motto shown in the detail sheet title and the dashboard
    /// rollup rows.
    pub fn motto(self) -> &'static str {
        match self {
            Level::L101 => "Sich die Sporen verdienen",
            Level::L201 => "Das Werkzeug kennen",
            Level::L301 => "Die Werkstatt meistern",
            Level::L401 => "Die Kunst der Optimierung",
        }
    }

    /// Title used in the level's final mastery row.
    pub fn mastery_title(self) -> &'static str {
        match self {
            Level::L101 => "MEISTER-SPORN",
            Level::L201 => "WERKZEUG-MEISTER",
            Level::L301 => "WERKSTATT-MEISTER",
            Level::L401 => "GROSSMEISTER",
        }
    }

    /// Row shading used for this level on the dashboard.
    pub fn fill_color(self) -> Color {
        match self {
            Level::L101 => Color::RGB(0xD4E6F1),
            Level::L201 => Color::RGB(0xD5F5E3),
            Level::L301 => Color::RGB(0xFDEBD0),
            Level::L401 => Color::RGB(0xF5CBA7),
        }
    }

    /// Tab color of the level's detail sheet.
    pub fn tab_color(self) -> Color {
        match self {
            Level::L101 => Color::RGB(0x3498DB),
            Level::L201 => Color::RGB(0x27AE60),
            Level::L301 => Color::RGB(0xE67E22),
            Level::L401 => Color::RGB(0xE74C3C),
        }
    }
}

/// One verification step inside a block.
#[derive(Debug, Clone)]
pub struct ChecklistItem {
    /// Short step name.
    pub step: &'static str,
    /// Command or instruction, rendered in a fixed-width font.
    pub action: &'static str,
    /// Pass criterion for the step.
    pub expected: &'static str,
}

/// One thematic group of checklist items, tied to a level and a badge.
///
/// Block numbers are unique and increase in declaration order across the
/// whole checklist; that is an authoring convention, not something the
/// exporter validates.
#[derive(Debug, Clone)]
pub struct ChecklistBlock {
    pub level: Level,
    pub number: u32,
    pub badge: &'static str,
    pub title: &'static str,
    pub items: Vec<ChecklistItem>,
}

impl ChecklistBlock {
    pub(crate) fn new(
        level: Level,
        number: u32,
        badge: &'static str,
        title: &'static str,
        items: &[(&'static str, &'static str, &'static str)],
    ) -> Self {
        Self {
            level,
            number,
            badge,
            title,
            items: items
                .iter()
                .map(|&(step, action, expected)| ChecklistItem {
                    step,
                    action,
                    expected,
                })
                .collect(),
        }
    }
}

/// External tool that must be available before the workshop starts.
///
/// Installed-version and status are manual-entry cells in the workbook and
/// therefore not part of the data model.
#[derive(Debug, Clone)]
pub struct ToolRequirement {
    pub name: &'static str,
    pub required_version: &'static str,
    pub verify_command: &'static str,
    pub install_command: &'static str,
    pub notes: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_labels() {
        assert_eq!(Level::L101.number(), 101);
        assert_eq!(Level::L101.sheet_name(), "Level 101");
        assert_eq!(Level::L401.sheet_name(), "Level 401");
        assert_eq!(Level::L201.stage_name(), "Tool Introduction");
        assert_eq!(Level::L301.mastery_title(), "WERKSTATT-MEISTER");
    }

    #[test]
    fn block_constructor_preserves_item_order() {
        let block = ChecklistBlock::new(
            Level::L101,
            1,
            "Badge",
            "Title",
            &[("a", "cmd-a", "ok-a"), ("b", "cmd-b", "ok-b")],
        );
        assert_eq!(block.items.len(), 2);
        assert_eq!(block.items[0].step, "a");
        assert_eq!(block.items[1].action, "cmd-b");
        assert_eq!(block.items[1].expected, "ok-b");
    }
}
