pub mod event;
pub mod verdict;
