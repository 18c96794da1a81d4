use std::collections::BTreeSet;

use kp_optima::generator::{generate, InstanceKind};
use kp_optima::{solve_by_weight, Instance, WbResult};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn assert_enumeration_consistent(res: &WbResult<'_>) {
    let kpi = res.instance();
    let all = res.all_optima();
    assert_eq!(all.len() as u128, res.optima_count());

    let distinct: BTreeSet<&Vec<usize>> = all.iter().collect();
    assert_eq!(distinct.len(), all.len(), "duplicate packing enumerated");
    for packing in &all {
        assert!(packing.windows(2).all(|w| w[0] < w[1]));
        assert!(kpi.weight_sum(Some(packing)) <= res.capacity());
        assert_eq!(kpi.profit_sum(Some(packing)), res.optimal_profit());
    }
}

#[test]
fn tied_optima_with_different_weights() {
    // {0}, {1,2}, {1,3}, {2,3} all reach profit 8 with weights 10, 9, 7, 8
    let kpi = Instance::new(Some(10), vec![10, 4, 5, 3], vec![8, 4, 4, 4]).unwrap();
    let res = solve_by_weight(&kpi, None).unwrap();
    assert_eq!(res.optimal_profit(), 8);
    assert_eq!(res.optima_count(), 4);
    let mut all = res.all_optima();
    all.sort();
    assert_eq!(all, vec![vec![0], vec![1, 2], vec![1, 3], vec![2, 3]]);
    assert_enumeration_consistent(&res);
}

#[test]
fn mixed_weight_ties_yield_two_optima() {
    let kpi = Instance::new(Some(6), vec![6, 3, 2, 4], vec![6, 3, 3, 1]).unwrap();
    let res = solve_by_weight(&kpi, None).unwrap();
    let all: BTreeSet<Vec<usize>> = res.all_optima().into_iter().collect();
    assert_eq!(all, BTreeSet::from([vec![0], vec![1, 2]]));
    for packing in &all {
        assert_eq!(kpi.profit_sum(Some(packing)), 6);
    }
}

#[test]
fn all_items_fit() {
    let mut rng = StdRng::seed_from_u64(5);
    let kpi = generate(&mut rng, 10, 1, 100, InstanceKind::Uncorrelated).unwrap();
    let capacity = kpi.weight_sum(None);
    let res = solve_by_weight(&kpi, Some(capacity)).unwrap();
    assert_eq!(res.table().rows(), kpi.item_count() + 1);
    assert_eq!(res.table().width() as u64, capacity + 1);
    let sol = res.single_optimum();
    assert_eq!(sol, (0..kpi.item_count()).collect::<Vec<_>>());
    assert_eq!(res.optimal_profit(), kpi.profit_sum(Some(&sol)));
}

#[test]
fn enumeration_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(9);
    let kpi = generate(&mut rng, 12, 1, 3, InstanceKind::Uncorrelated).unwrap();
    let capacity = kpi.weight_sum(None) / 2;
    let res = solve_by_weight(&kpi, Some(capacity)).unwrap();
    let first: BTreeSet<Vec<usize>> = res.all_optima().into_iter().collect();
    let second: BTreeSet<Vec<usize>> = res.all_optima().into_iter().collect();
    assert_eq!(first, second);
    assert_enumeration_consistent(&res);
}

proptest! {
    #[test]
    fn tables_are_monotone_and_counts_positive(
        items in prop::collection::vec((1u64..6, 0u64..6), 0..8),
        capacity in 0u64..20,
    ) {
        let (weights, profits) = items.into_iter().unzip();
        let kpi = Instance::new(Some(capacity), weights, profits).unwrap();
        let res = solve_by_weight(&kpi, None).unwrap();
        let n = kpi.item_count();
        let cap = capacity as usize;
        for i in 0..=n {
            for c in 0..=cap {
                prop_assert!(res.count_at(i, c) >= 1);
                if c > 0 {
                    prop_assert!(res.profit_at(i, c) >= res.profit_at(i, c - 1));
                }
                if i > 0 {
                    prop_assert!(res.profit_at(i, c) >= res.profit_at(i - 1, c));
                }
            }
        }
    }

    #[test]
    fn count_agrees_with_enumeration(
        items in prop::collection::vec((1u64..4, 0u64..4), 0..12),
        capacity in 0u64..16,
    ) {
        let (weights, profits) = items.into_iter().unzip();
        let kpi = Instance::new(Some(capacity), weights, profits).unwrap();
        let res = solve_by_weight(&kpi, None).unwrap();
        assert_enumeration_consistent(&res);
    }
}
