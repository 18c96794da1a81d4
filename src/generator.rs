//! Random instance generation after Pisinger, "Where are the hard knapsack
//! problems?" (2005), Section 3.
//!
//! Weights are drawn uniformly from `[lower, upper]`; profits are derived from
//! them according to the correlation class. Generated instances have no
//! capacity set, so callers pick one (typically a fraction of the weight sum).

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{KnapsackError, KnapsackResult};
use crate::instance::Instance;

/// Correlation class between weights and profits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceKind {
    Uncorrelated,
    WeaklyCorrelated,
    StronglyCorrelated,
    AlmostStronglyCorrelated,
    InverselyStronglyCorrelated,
    SubsetSum,
    UniformSimilarWeights,
}

impl InstanceKind {
    pub const ALL: [InstanceKind; 7] = [
        InstanceKind::Uncorrelated,
        InstanceKind::WeaklyCorrelated,
        InstanceKind::StronglyCorrelated,
        InstanceKind::AlmostStronglyCorrelated,
        InstanceKind::InverselyStronglyCorrelated,
        InstanceKind::SubsetSum,
        InstanceKind::UniformSimilarWeights,
    ];

    /// Short name used in files and on the command line.
    pub fn label(self) -> &'static str {
        match self {
            InstanceKind::Uncorrelated => "uncorr",
            InstanceKind::WeaklyCorrelated => "wcorr",
            InstanceKind::StronglyCorrelated => "scorr",
            InstanceKind::AlmostStronglyCorrelated => "ascorr",
            InstanceKind::InverselyStronglyCorrelated => "invscorr",
            InstanceKind::SubsetSum => "ss",
            InstanceKind::UniformSimilarWeights => "usw",
        }
    }
}

impl fmt::Display for InstanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InstanceKind {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstanceKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| KnapsackError::InvalidGenerator(format!("unknown instance kind '{s}'")))
    }
}

/// Draw an instance of `n` items with values in `[lower, upper]`.
pub fn generate<R: Rng>(
    rng: &mut R,
    n: usize,
    lower: u64,
    upper: u64,
    kind: InstanceKind,
) -> KnapsackResult<Instance> {
    if n == 0 {
        return Err(KnapsackError::InvalidGenerator("need at least one item".into()));
    }
    if lower == 0 || upper < lower {
        return Err(KnapsackError::InvalidGenerator(format!(
            "range [{lower}, {upper}] must be non-empty and positive"
        )));
    }

    let r10 = (upper as f64 / 10.0).round() as u64;
    let r500 = (upper as f64 / 500.0).round() as u64;
    let mut weights: Vec<u64> = (0..n).map(|_| rng.gen_range(lower..=upper)).collect();

    let profits: Vec<u64> = match kind {
        InstanceKind::Uncorrelated => (0..n).map(|_| rng.gen_range(lower..=upper)).collect(),
        InstanceKind::WeaklyCorrelated => weights
            .iter()
            .map(|&w| {
                // the draw may fall below 1 before clamping
                let (w, r10) = (w as i64, r10 as i64);
                rng.gen_range(w - r10..=w + r10).max(1) as u64
            })
            .collect(),
        InstanceKind::StronglyCorrelated => weights.iter().map(|&w| w + r10).collect(),
        InstanceKind::AlmostStronglyCorrelated => weights
            .iter()
            .map(|&w| rng.gen_range(w + r10 - r500..=w + r10 + r500))
            .collect(),
        InstanceKind::InverselyStronglyCorrelated => {
            let profits: Vec<u64> = (0..n).map(|_| rng.gen_range(lower..=upper)).collect();
            weights = profits.iter().map(|&p| p + r10).collect();
            profits
        }
        InstanceKind::SubsetSum => weights.clone(),
        InstanceKind::UniformSimilarWeights => {
            weights = (0..n).map(|_| rng.gen_range(100_000..=100_100)).collect();
            (0..n).map(|_| rng.gen_range(1..=1_000)).collect()
        }
    };

    Instance::new(None, weights, profits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn labels_round_trip_through_from_str() {
        for kind in InstanceKind::ALL {
            assert_eq!(kind.to_string().parse::<InstanceKind>().unwrap(), kind);
        }
        assert!("nope".parse::<InstanceKind>().is_err());
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(&mut rng, 0, 1, 10, InstanceKind::Uncorrelated).is_err());
        assert!(generate(&mut rng, 5, 0, 10, InstanceKind::Uncorrelated).is_err());
        assert!(generate(&mut rng, 5, 11, 10, InstanceKind::Uncorrelated).is_err());
    }

    #[test]
    fn correlation_classes_hold() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 200;
        let (lo, hi) = (1u64, 100u64);

        let kpi = generate(&mut rng, n, lo, hi, InstanceKind::Uncorrelated).unwrap();
        assert_eq!(kpi.item_count(), n);
        assert_eq!(kpi.declared_capacity(), None);
        assert!(kpi.items().all(|(w, p)| (lo..=hi).contains(&w) && (lo..=hi).contains(&p)));

        let kpi = generate(&mut rng, n, lo, hi, InstanceKind::WeaklyCorrelated).unwrap();
        assert!(kpi.items().all(|(w, p)| p >= 1 && p + 10 >= w && p <= w + 10));

        let kpi = generate(&mut rng, n, lo, hi, InstanceKind::StronglyCorrelated).unwrap();
        assert!(kpi.items().all(|(w, p)| p == w + 10));

        // R500 rounds to 0 for R = 100
        let kpi = generate(&mut rng, n, lo, hi, InstanceKind::AlmostStronglyCorrelated).unwrap();
        assert!(kpi.items().all(|(w, p)| p == w + 10));

        let kpi =
            generate(&mut rng, n, lo, hi, InstanceKind::InverselyStronglyCorrelated).unwrap();
        assert!(kpi.items().all(|(w, p)| w == p + 10 && (lo..=hi).contains(&p)));

        let kpi = generate(&mut rng, n, lo, hi, InstanceKind::SubsetSum).unwrap();
        assert!(kpi.items().all(|(w, p)| w == p));

        let kpi = generate(&mut rng, n, lo, hi, InstanceKind::UniformSimilarWeights).unwrap();
        assert!(kpi
            .items()
            .all(|(w, p)| (100_000..=100_100).contains(&w) && (1..=1_000).contains(&p)));
    }

    #[test]
    fn weak_correlation_clamps_low_draws_to_one() {
        // R10 = 10: light items draw from ranges reaching below 1, and each
        // such draw lands on 1; about 3% of all profits in expectation
        let mut rng = StdRng::seed_from_u64(21);
        let kpi = generate(&mut rng, 5_000, 1, 100, InstanceKind::WeaklyCorrelated).unwrap();
        assert!(kpi.items().all(|(w, p)| p >= 1 && p + 10 >= w && p <= w + 10));
        let ones = kpi.profits().iter().filter(|&&p| p == 1).count();
        assert!(ones > 110, "only {ones} profits clamped to 1");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate(&mut StdRng::seed_from_u64(3), 30, 1, 50, InstanceKind::Uncorrelated);
        let b = generate(&mut StdRng::seed_from_u64(3), 30, 1, 50, InstanceKind::Uncorrelated);
        assert_eq!(a.unwrap(), b.unwrap());
    }
}
