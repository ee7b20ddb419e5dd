//! Material cost tables and linear market pricing for Lapidary.
//!
//! [`LinearPricing`] is a [`PricingProvider`] that prices each [`RawItem`] as
//! its material cost plus a market premium predicted from social reach:
//!
//! ```text
//! cost  = weight × unit_cost(material, carat)
//! price = cost + α_likes × likes + α_followers × followers + α_constant
//! ```
//!
//! Coefficients come from [`MarketParameters`]; fitting them is left to the
//! caller. A [`PricingConfig`] bundles the parameters with a [`MaterialTable`]
//! and can be loaded from TOML.
//!
//! [`PricingProvider`]: lapidary_core::PricingProvider

mod config;
mod descriptor;
mod error;
mod linear;
mod market;
mod material;

pub use config::{ConfigError, PricingConfig};
pub use descriptor::RawItem;
pub use error::PricingError;
pub use linear::LinearPricing;
pub use market::MarketParameters;
pub use material::{Carat, Material, MaterialProfile, MaterialTable, MaterialTableError};
