use courtside_core::AttendanceBand;
use ratatui::style::Color as TuiColor;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

/// Modern borders with a cyan header row.
pub fn styled_table<T: Tabled>(rows: Vec<T>) -> Table {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

pub fn print_table<T: Tabled>(rows: Vec<T>) {
    println!("{}", styled_table(rows));
}

/// One palette for every screen: the tabled colour, then the ratatui one.
fn band_palette(band: AttendanceBand) -> (Color, TuiColor) {
    match band {
        AttendanceBand::Excellent => (Color::FG_GREEN, TuiColor::Green),
        AttendanceBand::Good => (Color::FG_YELLOW, TuiColor::Yellow),
        AttendanceBand::Fair => (Color::FG_MAGENTA, TuiColor::Magenta),
        AttendanceBand::Poor => (Color::FG_RED, TuiColor::Red),
    }
}

pub fn band_color(band: AttendanceBand) -> Color {
    band_palette(band).0
}

pub fn band_tui_color(band: AttendanceBand) -> TuiColor {
    band_palette(band).1
}
