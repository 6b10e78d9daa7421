use chrono::NaiveDate;
use courtside_core::usecase::leaderboard::LeaderboardUseCase;
use courtside_core::{AttendanceMark, Roster, YearMonth};
use tabled::Tabled;

use crate::report::print_table;

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Joined")]
    joined: String,
    #[tabled(rename = "Today")]
    today: String,
    #[tabled(rename = "This month")]
    month: String,
    #[tabled(rename = "Overall")]
    overall: String,
}

pub fn mark_icon(mark: AttendanceMark) -> &'static str {
    match mark {
        AttendanceMark::Present => "✔",
        AttendanceMark::Absent => "✖",
        AttendanceMark::Unmarked => "·",
    }
}

pub fn show_players(roster: &Roster, today: NaiveDate) {
    if roster.is_empty() {
        println!("No players found.");
        return;
    }

    let standings = LeaderboardUseCase::new(roster).standings(today, YearMonth::of(today));
    let rows: Vec<PlayerRow> = roster
        .players()
        .iter()
        .zip(standings)
        .map(|(player, standing)| PlayerRow {
            id: player.id,
            name: player.name.clone(),
            position: player.position.clone().unwrap_or_else(|| "-".to_string()),
            joined: player
                .join_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            today: mark_icon(player.mark_on(today)).to_string(),
            month: standing.monthly.percentage_label(),
            overall: standing.overall.percentage_label(),
        })
        .collect();

    print_table(rows);
}
