pub mod model;
pub mod repository;
pub mod input;
pub mod time;
pub mod service;
pub mod usecase;

pub use model::period::{PeriodKind, ReportingPeriod, YearMonth};
pub use model::player::{AttendanceMark, FeePayment, NewPlayer, Player};
pub use model::roster::{Roster, RosterAction};
pub use model::tournament::{NewTournament, Schedule, ScheduleAction, Tournament};
pub use repository::{FileRosterRepository, FileTournamentRepository, RosterRepository, TournamentRepository};
pub use input::{parse_args, expand_key, parse_new_player, parse_new_tournament, ParsedInput};
pub use time::{academy_today, is_markable, parse_attendance_date, parse_date, parse_human_date, week_number};
pub use service::aggregator::{all_marked_dates, compute_attendance, daily_present_counts, rank_players};
pub use service::dto::{AttendanceBand, AttendanceSummary, DailyPresentCount, RankingEntry};
pub use service::roster_service::RosterService;
pub use service::tournament_service::TournamentService;
pub use usecase::leaderboard::{AttendanceLeaderboard, LeaderboardUseCase, TOP_RANKERS};
