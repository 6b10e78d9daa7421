use courtside_core::{AttendanceLeaderboard, RankingEntry};
use tabled::settings::object::Rows;
use tabled::settings::Modify;
use tabled::{Table, Tabled};

use crate::report::{band_color, styled_table};

#[derive(Tabled)]
struct RankRow {
    #[tabled(rename = "#")]
    rank: String,
    #[tabled(rename = "Player")]
    name: String,
    #[tabled(rename = "Present")]
    present: String,
    #[tabled(rename = "Attendance")]
    percentage: String,
}

pub fn show_leaderboard(board: &AttendanceLeaderboard) {
    if board.total_marked_days == 0 {
        println!("No attendance has been marked yet.");
    }

    print_section(
        &format!("Weekly Rankers (week {})", board.week),
        &board.weekly,
        true,
    );
    print_section(&format!("Monthly Rankers ({})", board.month), &board.monthly, true);
    print_section("All Players", &board.remaining, false);
}

fn print_section(title: &str, entries: &[RankingEntry], numbered: bool) {
    println!("\n\x1b[1;36m{}\x1b[0m", title);
    if entries.is_empty() {
        println!("  (none)");
        return;
    }

    println!("{}", section_table(entries, numbered));
}

/// One row per entry, each coloured by its attendance band.
fn section_table(entries: &[RankingEntry], numbered: bool) -> Table {
    let rows: Vec<RankRow> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| RankRow {
            rank: if numbered { (i + 1).to_string() } else { String::new() },
            name: entry.name.clone(),
            present: format!("{}/{}", entry.summary.present_count, entry.summary.total_days),
            percentage: entry.summary.percentage_label(),
        })
        .collect();

    let mut table = styled_table(rows);

    // Row 0 is the header
    for (i, entry) in entries.iter().enumerate() {
        table.with(Modify::new(Rows::one(i + 1)).with(band_color(entry.summary.band())));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_core::{AttendanceSummary, Player};

    #[test]
    fn test_section_table_lists_every_entry() {
        let entries = vec![
            RankingEntry::new(&Player::new(1, "Rhythm Pawar"), AttendanceSummary::new(4, 4)),
            RankingEntry::new(&Player::new(2, "Kavya Reddy"), AttendanceSummary::new(1, 4)),
        ];
        let rendered = section_table(&entries, true).to_string();
        assert!(rendered.contains("Rhythm Pawar"));
        assert!(rendered.contains("Kavya Reddy"));
        assert!(rendered.contains("4/4"));
        assert!(rendered.contains("1/4"));
    }
}
