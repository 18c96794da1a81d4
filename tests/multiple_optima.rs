use std::collections::BTreeSet;

use kp_optima::generator::{generate, InstanceKind};
use kp_optima::{solve_by_weight, Instance, WeightIndexed};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn identical_unit_items_count_binomially() {
    let kpi = Instance::new(Some(3), vec![1; 10], vec![1; 10]).unwrap();
    let res = solve_by_weight(&kpi, None).unwrap();
    assert_eq!(res.optimal_profit(), 3);
    assert_eq!(res.optima_count(), 120);

    let all = res.all_optima();
    assert_eq!(all.len(), 120);
    assert!(all.iter().all(|p| p.len() == 3));
    let distinct: BTreeSet<_> = all.into_iter().collect();
    assert_eq!(distinct.len(), 120);
}

#[test]
fn bounded_enumeration_stops_early() {
    let kpi = Instance::new(Some(3), vec![1; 10], vec![1; 10]).unwrap();
    let res = WeightIndexed::new(&kpi).solve().unwrap();
    let some = res.all_optima_bounded(7);
    assert_eq!(some.len(), 7);
    assert!(some.iter().all(|p| kpi.profit_sum(Some(p)) == 3));
    assert_eq!(res.all_optima_bounded(500).len(), 120);
}

#[test]
fn roomy_capacity_has_a_single_optimum() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..25 {
        let kpi = generate(&mut rng, 10, 1, 1, InstanceKind::Uncorrelated).unwrap();
        let res = solve_by_weight(&kpi, Some(1000)).unwrap();
        assert_eq!(res.optima_count(), 1);
        assert_eq!(res.all_optima().len(), 1);
        assert_eq!(res.single_optimum().len(), 10);
    }
}

#[test]
fn counts_match_enumeration_on_narrow_ranges() {
    let mut rng = StdRng::seed_from_u64(8);
    for kind in [
        InstanceKind::Uncorrelated,
        InstanceKind::StronglyCorrelated,
        InstanceKind::SubsetSum,
    ] {
        for _ in 0..10 {
            let kpi = generate(&mut rng, 14, 1, 4, kind).unwrap();
            let capacity = kpi.weight_sum(None) / 2;
            let res = solve_by_weight(&kpi, Some(capacity)).unwrap();
            let all = res.all_optima();
            assert_eq!(all.len() as u128, res.optima_count(), "{kind}");
            assert!(all.iter().all(|p| kpi.weight_sum(Some(p)) <= capacity));
        }
    }
}
