use crate::Item;

/// Produces priced items from raw item descriptors.
///
/// A provider is free to compute prices any way it likes (a fitted model, a
/// fixed table, manual entry). Solvers only rely on the returned [`Item`]s,
/// which are positional: the item at index `i` prices `descriptors[i]`, and
/// the output has the same length as the input.
pub trait PricingProvider {
    type Descriptor;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Prices a batch of descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if any descriptor cannot be priced or yields an
    /// invalid price or cost.
    fn price(&self, descriptors: &[Self::Descriptor]) -> Result<Vec<Item>, Self::Error>;
}
