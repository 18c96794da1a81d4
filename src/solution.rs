//! Engine-agnostic view over solved tables.
//!
//! Both engines answer "give me one optimal packing". Only the weight-indexed
//! table can count and enumerate optima, so that capability is reached through
//! [`Solution::as_weight_indexed`] rather than a partial shared interface.

use crate::problems::profit_indexed::PbResult;
use crate::problems::weight_indexed::WbResult;

/// Capability shared by every solved table.
pub trait Optimum {
    /// One optimal packing as ascending item indices.
    fn single_optimum(&self) -> Vec<usize>;

    /// Caller-visible (unscaled) profit of [`single_optimum`](Self::single_optimum).
    fn optimal_profit(&self) -> u64;
}

impl Optimum for WbResult<'_> {
    fn single_optimum(&self) -> Vec<usize> {
        WbResult::single_optimum(self)
    }

    fn optimal_profit(&self) -> u64 {
        WbResult::optimal_profit(self)
    }
}

impl Optimum for PbResult<'_> {
    fn single_optimum(&self) -> Vec<usize> {
        PbResult::single_optimum(self)
    }

    fn optimal_profit(&self) -> u64 {
        PbResult::optimal_profit(self)
    }
}

/// A solved instance from either engine.
#[derive(Debug, Clone)]
pub enum Solution<'a> {
    ByWeight(WbResult<'a>),
    ByProfit(PbResult<'a>),
}

impl<'a> Solution<'a> {
    /// The weight-indexed result, if this solution carries one.
    pub fn as_weight_indexed(&self) -> Option<&WbResult<'a>> {
        match self {
            Solution::ByWeight(res) => Some(res),
            Solution::ByProfit(_) => None,
        }
    }

    pub fn as_profit_indexed(&self) -> Option<&PbResult<'a>> {
        match self {
            Solution::ByWeight(_) => None,
            Solution::ByProfit(res) => Some(res),
        }
    }

    /// Number of optima, when the engine can count them.
    pub fn optima_count(&self) -> Option<u128> {
        self.as_weight_indexed().map(WbResult::optima_count)
    }

    /// All optimal packings, when the engine can enumerate them.
    pub fn all_optima(&self) -> Option<Vec<Vec<usize>>> {
        self.as_weight_indexed().map(WbResult::all_optima)
    }
}

impl Optimum for Solution<'_> {
    fn single_optimum(&self) -> Vec<usize> {
        match self {
            Solution::ByWeight(res) => res.single_optimum(),
            Solution::ByProfit(res) => res.single_optimum(),
        }
    }

    fn optimal_profit(&self) -> u64 {
        match self {
            Solution::ByWeight(res) => res.optimal_profit(),
            Solution::ByProfit(res) => res.optimal_profit(),
        }
    }
}

impl<'a> From<WbResult<'a>> for Solution<'a> {
    fn from(res: WbResult<'a>) -> Self {
        Solution::ByWeight(res)
    }
}

impl<'a> From<PbResult<'a>> for Solution<'a> {
    fn from(res: PbResult<'a>) -> Self {
        Solution::ByProfit(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solve_by_profit, solve_by_weight, Instance};

    #[test]
    fn capabilities_depend_on_engine() {
        let kpi = Instance::new(Some(6), vec![6, 3, 2, 4], vec![6, 3, 3, 1]).unwrap();
        let wb: Solution = solve_by_weight(&kpi, None).unwrap().into();
        let pb: Solution = solve_by_profit(&kpi, None, None).unwrap().into();

        assert_eq!(wb.optima_count(), Some(2));
        assert_eq!(wb.all_optima().map(|all| all.len()), Some(2));
        assert!(wb.as_profit_indexed().is_none());

        assert_eq!(pb.optima_count(), None);
        assert!(pb.all_optima().is_none());
        assert!(pb.as_profit_indexed().is_some());

        for sol in [&wb, &pb] {
            assert_eq!(sol.optimal_profit(), 6);
            assert_eq!(kpi.profit_sum(Some(&sol.single_optimum())), 6);
        }
    }
}
