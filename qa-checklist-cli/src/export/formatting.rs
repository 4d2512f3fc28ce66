//! Shared cell formats for the checklist workbook
//!
//! One constructor per visual role; sheets clone and extend these where a
//! cell needs an extra fill (level shading, alternating rows).

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

/// Title bars and the dashboard tab.
pub const NAVY: Color = Color::RGB(0x0A2540);
/// Column header rows.
pub const HEADER_BLUE: Color = Color::RGB(0x1A3A5C);
/// Block section-header rows.
pub const SECTION_BLUE: Color = Color::RGB(0xE8F0FE);
/// Badge text.
pub const BADGE_GOLD: Color = Color::RGB(0xB8860B);
/// Badge row fill.
pub const BADGE_CREAM: Color = Color::RGB(0xFFF8DC);
/// Alternating-row shading.
pub const ALT_ROW: Color = Color::RGB(0xF8F9FA);

const BORDER_GREY: Color = Color::RGB(0xD0D0D0);
const SMALL_GREY: Color = Color::RGB(0x666666);

fn bordered(format: Format) -> Format {
    format
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_GREY)
}

/// Sheet title bar: large bold white on navy, merged across the sheet.
pub fn create_title_format() -> Format {
    Format::new()
        .set_font_name("Calibri")
        .set_font_size(18)
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(NAVY)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
}

/// Column header cells: bold white on dark blue.
pub fn create_header_format() -> Format {
    bordered(
        Format::new()
            .set_font_name("Calibri")
            .set_font_size(11)
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(HEADER_BLUE)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap(),
    )
}

/// Block section-header rows in the detail sheets.
pub fn create_section_format() -> Format {
    bordered(
        Format::new()
            .set_font_name("Calibri")
            .set_font_size(12)
            .set_bold()
            .set_font_color(HEADER_BLUE)
            .set_background_color(SECTION_BLUE)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap(),
    )
}

/// Badge cells: bold gold on cream.
pub fn create_badge_format() -> Format {
    bordered(
        Format::new()
            .set_font_name("Calibri")
            .set_font_size(11)
            .set_bold()
            .set_font_color(BADGE_GOLD)
            .set_background_color(BADGE_CREAM)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap(),
    )
}

/// Body cell, centered (sequence numbers, counts, status cells).
pub fn create_body_center_format() -> Format {
    bordered(
        Format::new()
            .set_font_name("Calibri")
            .set_font_size(10)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap(),
    )
}

/// Body cell, left-aligned (titles, tool names).
pub fn create_body_left_format() -> Format {
    bordered(
        Format::new()
            .set_font_name("Calibri")
            .set_font_size(10)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap(),
    )
}

/// Body cell for longer prose: left-aligned, top-anchored, wrapping.
pub fn create_body_wrap_format() -> Format {
    bordered(
        Format::new()
            .set_font_name("Calibri")
            .set_font_size(10)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::Top)
            .set_text_wrap(),
    )
}

/// Command/instruction cells: fixed-width font.
pub fn create_command_format() -> Format {
    bordered(
        Format::new()
            .set_font_name("Consolas")
            .set_font_size(9)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::Top)
            .set_text_wrap(),
    )
}

/// Small italic grey text (info lines, mottos, timestamp/screenshot cells).
pub fn create_small_format() -> Format {
    Format::new()
        .set_font_name("Calibri")
        .set_font_size(9)
        .set_italic()
        .set_font_color(SMALL_GREY)
}

/// Small centered bordered cell (timestamp and screenshot columns).
pub fn create_small_center_format() -> Format {
    bordered(
        create_small_format()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter),
    )
}

/// Timestamp cells: small centered with a date-time number format.
pub fn create_timestamp_format() -> Format {
    create_small_center_format().set_num_format("yyyy-mm-dd hh:mm")
}

/// Clone a format with the alternating-row shade applied.
pub fn with_alt_shading(format: &Format) -> Format {
    format.clone().set_background_color(ALT_ROW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_shading_does_not_mutate_the_base_format() {
        let base = create_body_center_format();
        let shaded = with_alt_shading(&base);
        assert_ne!(format!("{base:?}"), format!("{shaded:?}"));
        assert_eq!(
            format!("{base:?}"),
            format!("{:?}", create_body_center_format())
        );
    }
}
