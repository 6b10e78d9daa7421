pub mod period;
pub mod player;
pub mod roster;
pub mod seed;
pub mod tournament;
