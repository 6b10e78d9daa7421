use chrono::NaiveDate;
use courtside_core::{Schedule, Tournament};
use tabled::Tabled;

use crate::report::print_table;

#[derive(Tabled)]
struct TournamentRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Tournament")]
    name: String,
    #[tabled(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Venue")]
    venue: String,
}

impl From<&Tournament> for TournamentRow {
    fn from(t: &Tournament) -> Self {
        TournamentRow {
            id: t.id,
            name: t.name.clone(),
            dates: t.date_label(),
            venue: t.venue.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Upcoming tournaments, or the whole calendar with `all`.
pub fn show_tournaments(schedule: &Schedule, today: NaiveDate, all: bool) {
    let entries = if all { schedule.by_date() } else { schedule.upcoming(today) };
    if entries.is_empty() {
        if all || schedule.is_empty() {
            println!("No tournaments scheduled.");
        } else {
            println!("No upcoming tournaments. Use --all to see past ones.");
        }
        return;
    }

    println!("\x1b[1;36m{}\x1b[0m", if all { "Tournaments" } else { "Upcoming Tournaments" });
    print_table(entries.into_iter().map(TournamentRow::from).collect());
}
