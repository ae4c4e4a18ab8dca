use std::collections::HashSet;

/// Values at two distinct indices that add up to the target.
///
/// Matches are ordered: `(i, j)` and `(j, i)` are separate results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairMatch {
    pub i: usize,
    pub j: usize,
    pub a: i64,
    pub b: i64,
}

impl PairMatch {
    pub fn indices(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    pub fn values(&self) -> (i64, i64) {
        (self.a, self.b)
    }
}

#[inline]
fn sums_to(a: i64, b: i64, target: i64) -> bool {
    a as i128 + b as i128 == target as i128
}

/// With only positive values, anything `>= target` overshoots with every partner.
fn skips_large(values: &[i64]) -> bool {
    values.iter().all(|&v| v > 0)
}

/// First match in scan order: `i` ascending, then `j` ascending.
///
/// An outer value already scanned at a lower index is not scanned again;
/// its earlier occurrence would have found any partner this one can.
pub fn find_first_pair(values: &[i64], target: i64) -> Option<PairMatch> {
    let skip_large = skips_large(values);
    let mut scanned = HashSet::new();

    for (i, &a) in values.iter().enumerate() {
        if skip_large && a >= target {
            continue;
        }
        if !scanned.insert(a) {
            log::trace!("Skipping repeated value {} at {}", a, i);
            continue;
        }

        for (j, &b) in values.iter().enumerate() {
            if i != j && sums_to(a, b, target) {
                log::debug!("First pair for {}: [{}, {}]", target, i, j);
                return Some(PairMatch { i, j, a, b });
            }
        }
    }
    None
}

/// Every ordered index pair `(i, j)`, `i != j`, whose values add up to `target`,
/// in ascending `i` then ascending `j`.
///
/// Equal values at different indices are reported separately; nothing is
/// deduplicated by value.
pub fn find_all_pairs(values: &[i64], target: i64) -> Vec<PairMatch> {
    let skip_large = skips_large(values);
    let mut found = Vec::new();

    for (i, &a) in values.iter().enumerate() {
        if skip_large && a >= target {
            continue;
        }
        for (j, &b) in values.iter().enumerate() {
            if i != j && sums_to(a, b, target) {
                found.push(PairMatch { i, j, a, b });
            }
        }
    }

    log::debug!(
        "Found {} pairs summing to {} among {} values",
        found.len(),
        target,
        values.len()
    );
    found
}
