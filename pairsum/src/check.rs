use crate::search::PairMatch;

pub fn verify_pairs(values: &[i64], target: i64, matches: &[PairMatch]) -> Result<(), String> {
    let mut previous: Option<(usize, usize)> = None;

    for m in matches {
        if m.i >= values.len() || m.j >= values.len() {
            return Err(format!(
                "pair [{}, {}] is out of bounds for {} values",
                m.i,
                m.j,
                values.len()
            ));
        }
        if m.i == m.j {
            return Err(format!("pair [{}, {}] reuses one index", m.i, m.j));
        }
        if values[m.i] != m.a || values[m.j] != m.b {
            return Err(format!(
                "pair [{}, {}] reports values ({}, {}) but input holds ({}, {})",
                m.i, m.j, m.a, m.b, values[m.i], values[m.j]
            ));
        }
        if m.a as i128 + m.b as i128 != target as i128 {
            return Err(format!("{} + {} does not add up to {}", m.a, m.b, target));
        }
        if let Some(prev) = previous
            && prev >= m.indices()
        {
            return Err(format!(
                "pair [{}, {}] follows [{}, {}] out of scan order",
                m.i, m.j, prev.0, prev.1
            ));
        }
        previous = Some(m.indices());
    }

    log::debug!("Verified {} pairs for target {}", matches.len(), target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::find_all_pairs;

    fn m(i: usize, j: usize, a: i64, b: i64) -> PairMatch {
        PairMatch { i, j, a, b }
    }

    #[test]
    fn search_output_passes() {
        let values = [1, 9, 1, 5, 5, 4, 6];
        assert!(verify_pairs(&values, 10, &find_all_pairs(&values, 10)).is_ok());
    }

    #[test]
    fn catches_bad_matches() {
        let values = [1, 9, 5];
        assert!(verify_pairs(&values, 10, &[m(0, 3, 1, 9)]).is_err());
        assert!(verify_pairs(&values, 10, &[m(2, 2, 5, 5)]).is_err());
        assert!(verify_pairs(&values, 10, &[m(0, 1, 1, 8)]).is_err());
        assert!(verify_pairs(&values, 11, &[m(0, 1, 1, 9)]).is_err());
        assert!(verify_pairs(&values, 10, &[m(1, 0, 9, 1), m(0, 1, 1, 9)]).is_err());
        assert!(verify_pairs(&values, 10, &[m(0, 1, 1, 9), m(0, 1, 1, 9)]).is_err());
    }
}
