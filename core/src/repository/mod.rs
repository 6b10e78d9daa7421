pub mod file;
pub mod traits;

// Re-export
pub use file::{data_dir, FileRosterRepository, FileTournamentRepository};
pub use traits::{RosterRepository, TournamentRepository};
