mod chart;
mod fees;
mod journal;
mod players;
mod rankers;
mod report;
mod tournaments;
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use courtside_core::{
    academy_today, parse_attendance_date, parse_human_date, parse_new_player, parse_new_tournament,
    AttendanceMark, FileRosterRepository, FileTournamentRepository, LeaderboardUseCase, RosterAction,
    RosterService, ScheduleAction, TournamentService, YearMonth, TOP_RANKERS,
};

#[derive(Parser)]
#[command(name = "courtside")]
#[command(about = "Roster, attendance and fees for the academy", long_about = None)]
struct Cli {
    /// Directory holding players.json (default: ~/.courtside)
    #[arg(long, global = true, env = "COURTSIDE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List the roster with today's attendance
    Players,
    /// Add a player (usage: add "Player Name" dob:2010-10-20 pos:"Point Guard" contact:... address:...)
    Add {
        /// Player name followed by key:value fields
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Remove a player from the roster
    Remove { id: u32 },
    /// Toggle attendance: unmarked -> present -> absent -> present
    Mark {
        id: u32,
        /// today, yesterday, -3d, mon, 2024-03-01, 01-03-2024
        #[arg(short, long, default_value = "today", allow_hyphen_values = true)]
        date: String,
    },
    /// Weekly and monthly attendance leaders
    Rankers {
        #[command(flatten)]
        month: MonthArgs,
        /// How many leaders per board
        #[arg(long, default_value_t = TOP_RANKERS)]
        top: usize,
    },
    /// Players present per day, as a bar chart
    Chart {
        #[command(flatten)]
        month: MonthArgs,
    },
    /// Monthly fee payments
    Fees {
        #[command(subcommand)]
        command: FeeCommands,
    },
    /// Add a coach's note for a player
    Note {
        id: u32,
        #[arg(trailing_var_arg = true, required = true)]
        text: Vec<String>,
    },
    /// Record a metric for a player (e.g. metric 3 "Free throws" 7/10)
    Metric { id: u32, name: String, value: String },
    /// Rate a player from 1 to 5
    Rate {
        id: u32,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },
    /// Show a player's notes and metrics by day
    Journal { id: u32 },
    /// The academy's tournament calendar
    Tournaments {
        #[command(subcommand)]
        command: Option<TournamentCommands>,
    },
    /// Open the attendance sheet
    Tui,
}

#[derive(clap::Subcommand)]
enum TournamentCommands {
    /// Upcoming tournaments (default)
    List {
        /// Include tournaments that are over
        #[arg(long)]
        all: bool,
    },
    /// Add a tournament (usage: tournaments add "Senior Nationals" from:2024-12-10 to:2024-12-15 venue:Delhi)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Remove a tournament
    Remove { id: u32 },
}

#[derive(clap::Args)]
struct MonthArgs {
    /// Month 1-12 (default: this month)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,
    /// Year (default: this year)
    #[arg(short, long)]
    year: Option<i32>,
}

impl MonthArgs {
    fn resolve(&self, today: NaiveDate) -> YearMonth {
        let current = YearMonth::of(today);
        let year = self.year.unwrap_or(current.year());
        match self.month {
            Some(m) => YearMonth::new(year, m as i32 - 1),
            None => YearMonth::new(year, current.month() as i32),
        }
    }
}

#[derive(clap::Subcommand)]
enum FeeCommands {
    /// Players who have not paid for the month
    Due {
        /// YYYY-MM (default: this month)
        month: Option<String>,
    },
    /// Payments received for the month
    Paid {
        /// YYYY-MM (default: this month)
        month: Option<String>,
    },
    /// Record a payment
    Pay {
        id: u32,
        /// YYYY-MM (default: this month)
        #[arg(short, long)]
        month: Option<String>,
        #[arg(short, long)]
        amount: Option<f64>,
        /// Date received (default: today)
        #[arg(long, allow_hyphen_values = true)]
        on: Option<String>,
    },
    /// A player's payment history
    History { id: u32 },
}

fn fee_month(raw: Option<&str>, today: NaiveDate) -> Result<YearMonth> {
    match raw {
        Some(key) => YearMonth::parse_key(key),
        None => Ok(YearMonth::of(today)),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let repo = FileRosterRepository::new(cli.data_dir.clone())?;
    let mut service = RosterService::load(repo)?;
    let today = academy_today();

    match cli.command {
        Some(Commands::Players) => {
            players::show_players(service.roster(), today);
        }
        Some(Commands::Add { args }) => {
            let (new_player, warnings) = parse_new_player(&args)?;
            for warning in warnings {
                println!("Warning: {}", warning);
            }
            let roster = service.dispatch(RosterAction::AddPlayer {
                player: new_player,
                joined: today,
            })?;
            if let Some(added) = roster.players().last() {
                println!("Player added: {} (ID: {})", added.name, added.id);
                if let Some(position) = &added.position {
                    println!("  Position: {}", position);
                }
                if let Some(dob) = added.dob {
                    println!("  DOB: {}", dob);
                }
            }
        }
        Some(Commands::Remove { id }) => {
            let name = service
                .roster()
                .get(id)
                .map(|p| p.name.clone())
                .unwrap_or_default();
            service.dispatch(RosterAction::DeletePlayer { id })?;
            println!("Removed {} (ID: {})", name, id);
        }
        Some(Commands::Mark { id, date }) => {
            let date = parse_attendance_date(&date, today)?;
            let roster = service.dispatch(RosterAction::ToggleAttendance { id, date })?;
            if let Some(player) = roster.get(id) {
                let mark = match player.mark_on(date) {
                    AttendanceMark::Present => "present",
                    AttendanceMark::Absent => "absent",
                    AttendanceMark::Unmarked => "unmarked",
                };
                println!("{} marked {} on {}", player.name, mark, date);
            }
        }
        Some(Commands::Rankers { month, top }) => {
            let month = month.resolve(today);
            let board = LeaderboardUseCase::new(service.roster()).build(today, month, top);
            rankers::show_leaderboard(&board);
        }
        Some(Commands::Chart { month }) => {
            chart::run(service.roster(), month.resolve(today))?;
        }
        Some(Commands::Fees { command }) => match command {
            FeeCommands::Due { month } => {
                let month = fee_month(month.as_deref(), today)?;
                fees::show_due(service.roster(), month);
            }
            FeeCommands::Paid { month } => {
                let month = fee_month(month.as_deref(), today)?;
                fees::show_paid(service.roster(), month);
            }
            FeeCommands::Pay { id, month, amount, on } => {
                let month = fee_month(month.as_deref(), today)?;
                let paid_on = match on {
                    Some(raw) => parse_human_date(&raw, today)?,
                    None => today,
                };
                let roster = service.dispatch(RosterAction::MarkFeePaid { id, month, paid_on, amount })?;
                if let Some(player) = roster.get(id) {
                    println!("{} paid for {} on {}", player.name, month, paid_on);
                }
            }
            FeeCommands::History { id } => {
                let player = service
                    .roster()
                    .get(id)
                    .with_context(|| format!("Player with ID {} not found", id))?;
                fees::show_history(player);
            }
        },
        Some(Commands::Note { id, text }) => {
            service.dispatch(RosterAction::AddNote {
                id,
                note: text.join(" "),
                recorded_at: Utc::now(),
            })?;
            println!("Note saved.");
        }
        Some(Commands::Metric { id, name, value }) => {
            service.dispatch(RosterAction::AddMetric {
                id,
                name,
                value,
                recorded_at: Utc::now(),
            })?;
            println!("Metric saved.");
        }
        Some(Commands::Rate { id, rating }) => {
            service.dispatch(RosterAction::SetRating { id, rating })?;
            println!("Rating set to {}/5.", rating);
        }
        Some(Commands::Journal { id }) => {
            let player = service
                .roster()
                .get(id)
                .with_context(|| format!("Player with ID {} not found", id))?;
            journal::show_journal(player);
        }
        Some(Commands::Tournaments { command }) => {
            let mut calendar = TournamentService::load(FileTournamentRepository::new(cli.data_dir)?)?;
            match command.unwrap_or(TournamentCommands::List { all: false }) {
                TournamentCommands::List { all } => {
                    tournaments::show_tournaments(calendar.schedule(), today, all);
                }
                TournamentCommands::Add { args } => {
                    let (new_tournament, warnings) = parse_new_tournament(&args)?;
                    for warning in warnings {
                        println!("Warning: {}", warning);
                    }
                    let schedule = calendar.dispatch(ScheduleAction::AddTournament(new_tournament))?;
                    if let Some(added) = schedule.tournaments().last() {
                        println!("Tournament added: {} (ID: {}), {}", added.name, added.id, added.date_label());
                    }
                }
                TournamentCommands::Remove { id } => {
                    let name = calendar
                        .schedule()
                        .get(id)
                        .map(|t| t.name.clone())
                        .unwrap_or_default();
                    calendar.dispatch(ScheduleAction::RemoveTournament { id })?;
                    println!("Removed {} (ID: {})", name, id);
                }
            }
        }
        Some(Commands::Tui) | None => {
            tui::run(service, today)?;
        }
    }
    Ok(())
}
