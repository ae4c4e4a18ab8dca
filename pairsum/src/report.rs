use crate::census::OccurrenceCounts;
use crate::search::PairMatch;
use kata_common::util::console::Console;

pub const DEFAULT_REPORT_LIMIT: usize = 20;

/// Summary of an all-pairs search.
///
/// Each listed match carries the number of times its first value occurs in
/// the input. The count is informational and never filters matches.
#[derive(Debug, Clone)]
pub struct PairReport {
    target: i64,
    matches: Vec<PairMatch>,
    counts: OccurrenceCounts,
}

impl PairReport {
    pub fn new(values: &[i64], target: i64, matches: Vec<PairMatch>) -> Self {
        Self {
            target,
            matches,
            counts: OccurrenceCounts::from_values(values),
        }
    }

    pub fn matches(&self) -> &[PairMatch] {
        &self.matches
    }

    pub fn counts(&self) -> &OccurrenceCounts {
        &self.counts
    }

    pub fn summary(&self) -> String {
        format!(
            "Found {} unique pairs that add up to {}.",
            self.matches.len(),
            self.target
        )
    }

    /// Summary line followed by at most `limit` match lines.
    pub fn lines(&self, limit: usize) -> Vec<String> {
        let mut out = Vec::with_capacity(1 + limit.min(self.matches.len()));
        out.push(self.summary());
        out.extend(
            self.matches
                .iter()
                .take(limit)
                .map(|m| format!("[{}, {}] ({})", m.a, m.b, self.counts.get(m.a))),
        );
        out
    }

    pub fn emit(&self, console: &mut dyn Console, limit: usize) {
        for line in self.lines(limit) {
            console.line(&line);
        }
    }
}

pub fn describe_first(m: &PairMatch, target: i64) -> String {
    format!("Found {} + {} = {} at [{}, {}]", m.a, m.b, target, m.i, m.j)
}
