pub mod journal;
pub mod leaderboard;

#[cfg(test)]
mod leaderboard_test;
