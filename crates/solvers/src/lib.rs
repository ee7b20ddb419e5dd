//! Solvers for the Lapidary toolkit.
//!
//! # Solvers
//!
//! - [`knapsack`] — budget-constrained portfolio selection where each item may
//!   be chosen any number of times

pub mod knapsack;
