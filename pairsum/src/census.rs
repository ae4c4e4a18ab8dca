use std::collections::BTreeMap;

/// How often each value occurs in an input array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccurrenceCounts {
    counts: BTreeMap<i64, usize>,
}

impl OccurrenceCounts {
    pub fn from_values(values: &[i64]) -> Self {
        let mut counts = BTreeMap::new();
        for &v in values {
            *counts.entry(v).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, value: i64) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.counts.iter().map(|(&v, &c)| (v, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let counts = OccurrenceCounts::from_values(&[3, 1, 3, 3, -2]);
        assert_eq!(counts.get(3), 3);
        assert_eq!(counts.get(1), 1);
        assert_eq!(counts.get(-2), 1);
        assert_eq!(counts.get(7), 0);
        assert_eq!(counts.distinct(), 3);
        assert_eq!(
            counts.iter().collect::<Vec<_>>(),
            vec![(-2, 1), (1, 1), (3, 3)]
        );
    }

    #[test]
    fn empty() {
        let counts = OccurrenceCounts::from_values(&[]);
        assert_eq!(counts.distinct(), 0);
        assert_eq!(counts, OccurrenceCounts::default());
    }
}
