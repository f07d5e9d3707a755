pub mod assets;
pub mod catalog;
pub mod event_dates;
pub mod registration;
pub mod verdict_board;
