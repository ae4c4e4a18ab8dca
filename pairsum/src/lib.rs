#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod census;
pub mod check;
pub mod report;
pub mod search;

pub use census::OccurrenceCounts;
pub use report::PairReport;
pub use search::{PairMatch, find_all_pairs, find_first_pair};
