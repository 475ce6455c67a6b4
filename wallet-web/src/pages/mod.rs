pub mod vote;

pub use vote::VotePage;
