//! Core traits and types for the Lapidary toolkit.
//!
//! This crate defines the shared abstractions that pricing providers, solvers,
//! and observers build on:
//!
//! - [`Item`] — a priced item with a validated non-negative price and cost
//! - [`Allocation`] — a positional count of units selected per item
//! - [`OptimizationResult`] — an allocation paired with the value it achieves
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`PricingProvider`] — turns raw item descriptors into priced [`Item`]s

mod allocation;
mod item;
mod observer;
mod pricing;

pub use allocation::{Allocation, OptimizationResult};
pub use item::{Item, ItemError};
pub use observer::Observer;
pub use pricing::PricingProvider;
