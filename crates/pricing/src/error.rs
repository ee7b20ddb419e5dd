use thiserror::Error;

use lapidary_core::ItemError;

use crate::{Carat, Material};

/// Errors that can occur while pricing raw items.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// The material table has no unit cost for this material and carat.
    #[error("no unit cost for {material:?} at {carat:?}")]
    UnknownTier { material: Material, carat: Carat },

    /// The computed price or cost is not a valid item.
    #[error("item `{id}` priced to an invalid item")]
    InvalidItem {
        id: String,
        #[source]
        source: ItemError,
    },
}
