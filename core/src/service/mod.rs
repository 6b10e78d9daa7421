pub mod aggregator;
pub mod dto;
pub mod fees;
pub mod roster_service;
pub mod tournament_service;
