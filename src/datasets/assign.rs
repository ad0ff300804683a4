use rand::{seq::SliceRandom, Rng};

use super::split::DatasetSplit;

/// Items of one run partitioned into train and test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitAssignment {
    pub train: Vec<String>,
    pub test: Vec<String>,
}

impl SplitAssignment {
    pub fn get(&self, split: DatasetSplit) -> &[String] {
        match split {
            DatasetSplit::Train => &self.train,
            DatasetSplit::Test => &self.test,
        }
    }

    pub fn total(&self) -> usize {
        self.train.len() + self.test.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DatasetSplit, &[String])> + '_ {
        DatasetSplit::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// `floor(count * ratio)`, clamped to `count`.
pub fn split_point(count: usize, ratio: f64) -> usize {
    ((count as f64) * ratio).floor().clamp(0.0, count as f64) as usize
}

/// Shuffles `items` with `rng` and cuts the permutation at
/// [`split_point`]; the head becomes train, the tail test.
pub fn assign<R: Rng + ?Sized>(mut items: Vec<String>, ratio: f64, rng: &mut R) -> SplitAssignment {
    items.shuffle(rng);
    let test = items.split_off(split_point(items.len(), ratio));
    SplitAssignment { train: items, test }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img_{i:03}.jpg")).collect()
    }

    #[test]
    fn split_point_is_floor() {
        assert_eq!(split_point(10, 0.7), 7);
        assert_eq!(split_point(3, 0.5), 1);
        assert_eq!(split_point(0, 0.7), 0);
        assert_eq!(split_point(5, 0.01), 0);
        assert_eq!(split_point(5, 0.99), 4);
        assert_eq!(split_point(1000, 0.999), 999);
        for count in 0..200 {
            for ratio in [0.1, 0.25, 0.3, 0.5, 0.7, 0.8, 0.9] {
                assert_eq!(split_point(count, ratio), ((count as f64) * ratio) as usize);
            }
        }
    }

    #[test]
    fn partition_is_disjoint_and_exhaustive() {
        let mut rng = StdRng::seed_from_u64(0);
        for count in [0, 1, 2, 10, 37] {
            let a = assign(names(count), 0.7, &mut rng);
            assert_eq!(a.total(), count);
            assert_eq!(a.train.len(), split_point(count, 0.7));

            let train: HashSet<_> = a.train.iter().collect();
            let test: HashSet<_> = a.test.iter().collect();
            assert!(train.is_disjoint(&test));
            let all: HashSet<_> = train.union(&test).map(|s| s.to_string()).collect();
            assert_eq!(all, names(count).into_iter().collect());
        }
    }

    #[test]
    fn same_seed_same_split() {
        let a = assign(names(50), 0.8, &mut StdRng::seed_from_u64(42));
        let b = assign(names(50), 0.8, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let c = assign(names(50), 0.8, &mut StdRng::seed_from_u64(43));
        assert_eq!(c.train.len(), a.train.len());
        assert_ne!(a, c);
    }

    #[test]
    fn extreme_ratios_leave_one_side_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = assign(names(10), 0.05, &mut rng);
        assert!(a.train.is_empty());
        assert_eq!(a.test.len(), 10);

        let a = assign(names(10), 0.9999, &mut rng);
        assert_eq!(a.train.len(), 9);
        assert_eq!(a.test.len(), 1);

        let a = assign(names(3), 0.999, &mut rng);
        assert_eq!(a.train.len(), 2);
    }

    #[test]
    fn iter_visits_both_splits() {
        let a = assign(names(4), 0.5, &mut StdRng::seed_from_u64(9));
        let sizes: Vec<_> = a.iter().map(|(s, items)| (s, items.len())).collect();
        assert_eq!(sizes, [(DatasetSplit::Train, 2), (DatasetSplit::Test, 2)]);
    }
}
