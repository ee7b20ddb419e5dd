//! Reusable observers for Lapidary solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasValue`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — reports solver progress through `tracing`
//! - [`StopAtValue`] — stops a solver once a target value is reached
//!
//! [`Observer`]: lapidary_core::Observer
//! [`HasValue`]: traits::HasValue
//! [`CanStopEarly`]: traits::CanStopEarly

mod log;
mod stop;

pub mod traits;

pub use log::LogObserver;
pub use stop::StopAtValue;
