//! Weighted lottery selection.
//!
//! Every candidate holds a number of tickets (its weight). A draw runs a
//! number of rounds, each round picks one winner with probability
//! proportional to the tickets still in the pool and removes it, so nobody
//! can win twice.
pub mod candidate;
pub mod lottery;
pub mod odds;
mod source;

pub use candidate::{Candidate, CandidateId, Weight, Weighted};
pub use lottery::{select, select_seeded, Seed, TotalWeight};
pub use odds::first_round_odds;
pub use source::{RandomSource, RngSource};
