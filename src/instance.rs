//! Immutable 0-1 knapsack instances.
//!
//! An [`Instance`] owns per-item weights and profits plus an optional
//! capacity. Every transform (new capacity, rescaled profits) returns a new
//! instance; nothing is mutated after construction.

use crate::error::{KnapsackError, KnapsackResult};

/// A 0-1 knapsack problem description.
///
/// Invariants established by [`Instance::new`]:
/// - `weights.len() == profits.len()`,
/// - every weight is positive,
/// - the total weight and the total profit both fit in a `u64`, so every
///   subset sum below is overflow-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    capacity: Option<u64>,
    weights: Vec<u64>,
    profits: Vec<u64>,
}

impl Instance {
    /// Build an instance. `capacity = None` means "use the full weight sum".
    pub fn new(capacity: Option<u64>, weights: Vec<u64>, profits: Vec<u64>) -> KnapsackResult<Self> {
        if weights.len() != profits.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                profits: profits.len(),
            });
        }
        if let Some(index) = weights.iter().position(|&w| w == 0) {
            return Err(KnapsackError::ZeroWeight { index });
        }
        checked_total(&weights)?;
        checked_total(&profits)?;
        Ok(Self {
            capacity,
            weights,
            profits,
        })
    }

    /// Number of items `N`.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Effective capacity: the declared one, or the total weight when unset.
    pub fn capacity(&self) -> u64 {
        self.capacity.unwrap_or_else(|| self.weight_sum(None))
    }

    /// Capacity exactly as passed to the constructor.
    pub fn declared_capacity(&self) -> Option<u64> {
        self.capacity
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn profits(&self) -> &[u64] {
        &self.profits
    }

    /// `(weight, profit)` pairs in item order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = (u64, u64)> + '_ {
        self.weights.iter().copied().zip(self.profits.iter().copied())
    }

    /// Largest single-item profit (0 for an empty instance).
    pub fn max_profit(&self) -> u64 {
        self.profits.iter().copied().max().unwrap_or(0)
    }

    /// Total weight of `subset` (item indices), or of all items when `None`.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn weight_sum(&self, subset: Option<&[usize]>) -> u64 {
        subset_sum(&self.weights, subset)
    }

    /// Total profit of `subset` (item indices), or of all items when `None`.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn profit_sum(&self, subset: Option<&[usize]>) -> u64 {
        subset_sum(&self.profits, subset)
    }

    /// `(weight, profit)` of a packing.
    pub fn evaluate(&self, subset: &[usize]) -> (u64, u64) {
        (
            self.weight_sum(Some(subset)),
            self.profit_sum(Some(subset)),
        )
    }

    /// Profit-to-weight ratio of every item.
    pub fn efficiencies(&self) -> Vec<f64> {
        self.items().map(|(w, p)| p as f64 / w as f64).collect()
    }

    /// Indicator vector of `subset` over all `N` items.
    pub fn to_bitstring(&self, subset: &[usize]) -> Vec<bool> {
        let mut bits = vec![false; self.item_count()];
        for &i in subset {
            bits[i] = true;
        }
        bits
    }

    /// Same items, different capacity.
    pub fn with_capacity(&self, capacity: u64) -> Self {
        Self {
            capacity: Some(capacity),
            ..self.clone()
        }
    }

    /// Copy where items heavier than the capacity carry profit 0.
    ///
    /// Every feasible packing keeps its profit.
    pub fn clip_to_capacity(&self) -> Self {
        let capacity = self.capacity();
        Self {
            capacity: self.capacity,
            weights: self.weights.clone(),
            profits: self
                .items()
                .map(|(w, p)| if w <= capacity { p } else { 0 })
                .collect(),
        }
    }

    /// Profit-scaled copy used by the FPTAS.
    ///
    /// Each profit `p` becomes `floor(p / K)` with `K = epsilon * max_profit / N`.
    /// Weights and capacity are unchanged. An instance whose profits are all
    /// zero is returned as-is since there is nothing to scale.
    pub fn rescale_profits(&self, epsilon: f64) -> KnapsackResult<Self> {
        check_epsilon(epsilon)?;
        if self.is_empty() {
            return Err(KnapsackError::EmptyInstance);
        }
        let pmax = self.max_profit();
        if pmax == 0 {
            return Ok(self.clone());
        }
        let k = epsilon * pmax as f64 / self.item_count() as f64;
        let profits = self
            .profits
            .iter()
            .map(|&p| (p as f64 / k).floor() as u64)
            .collect();
        Ok(Self {
            capacity: self.capacity,
            weights: self.weights.clone(),
            profits,
        })
    }
}

/// Indices of the set bits of an indicator vector.
pub fn subset_from_bitstring(bits: &[bool]) -> Vec<usize> {
    bits.iter()
        .enumerate()
        .filter_map(|(i, &b)| b.then_some(i))
        .collect()
}

pub(crate) fn check_epsilon(epsilon: f64) -> KnapsackResult<()> {
    if epsilon > 0.0 && epsilon < 1.0 {
        Ok(())
    } else {
        Err(KnapsackError::EpsilonOutOfRange(epsilon))
    }
}

fn checked_total(values: &[u64]) -> KnapsackResult<u64> {
    values
        .iter()
        .try_fold(0u64, |acc, &v| acc.checked_add(v))
        .ok_or(KnapsackError::SumOverflow)
}

fn subset_sum(values: &[u64], subset: Option<&[usize]>) -> u64 {
    match subset {
        Some(idx) => idx.iter().map(|&i| values[i]).sum(),
        None => values.iter().sum(),
    }
}
