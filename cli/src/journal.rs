use chrono::DateTime;
use courtside_core::model::roster::MAX_RATING;
use courtside_core::time::academy_offset;
use courtside_core::usecase::journal::PlayerJournal;
use courtside_core::Player;
use tabled::Tabled;

use crate::report::print_table;

#[derive(Tabled)]
struct NoteRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Note")]
    note: String,
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Metric")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn local_time(at: DateTime<chrono::Utc>) -> String {
    (at + academy_offset()).format("%I:%M %p").to_string()
}

fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_RATING as usize - filled))
}

pub fn show_journal(player: &Player) {
    println!("\x1b[1;36m{}\x1b[0m (ID: {})", player.name, player.id);
    if let Some(rating) = player.rating {
        println!("  Rating: {}", stars(rating));
    }

    let journal = PlayerJournal::new(player);
    if journal.is_empty() {
        println!("No notes or metrics recorded yet.");
        return;
    }

    // Date column: only on the first row of each day
    let mut notes = Vec::new();
    for day in &journal.notes {
        for (i, note) in day.entries.iter().enumerate() {
            notes.push(NoteRow {
                date: if i == 0 { day.date.format("%B %-d, %Y").to_string() } else { String::new() },
                time: local_time(note.recorded_at),
                note: note.note.clone(),
            });
        }
    }

    let mut metrics = Vec::new();
    for day in &journal.metrics {
        for (i, metric) in day.entries.iter().enumerate() {
            metrics.push(MetricRow {
                date: if i == 0 { day.date.format("%B %-d, %Y").to_string() } else { String::new() },
                time: local_time(metric.recorded_at),
                name: metric.name.clone(),
                value: metric.value.clone(),
            });
        }
    }

    if !notes.is_empty() {
        println!("\nCoach notes");
        print_table(notes);
    }
    if !metrics.is_empty() {
        println!("\nMetrics");
        print_table(metrics);
    }
}
