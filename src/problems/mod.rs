//! The two dual knapsack formulations.
//!
//! Both implement [`LayeredTable`](crate::traits::LayeredTable) and are filled
//! by the same engine:
//! - [`weight_indexed`] : max profit per (prefix, capacity), with optimum counts
//!   and enumeration of every optimal packing.
//! - [`profit_indexed`] : min weight per (prefix, exact profit), with the
//!   profit-scaling FPTAS.

pub mod profit_indexed;
pub mod weight_indexed;
