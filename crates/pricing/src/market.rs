use serde::Deserialize;

/// Coefficients of the linear market premium model.
///
/// The premium is what the market pays above material cost, predicted from an
/// item's social reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct MarketParameters {
    pub alpha_likes: f64,
    pub alpha_followers: f64,
    pub alpha_constant: f64,
}

impl MarketParameters {
    #[must_use]
    pub fn new(alpha_likes: f64, alpha_followers: f64, alpha_constant: f64) -> Self {
        Self {
            alpha_likes,
            alpha_followers,
            alpha_constant,
        }
    }

    /// Predicts the market premium for the given likes and followers.
    #[must_use]
    pub fn premium(&self, likes: f64, followers: f64) -> f64 {
        self.alpha_likes * likes + self.alpha_followers * followers + self.alpha_constant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn premium_is_linear() {
        let params = MarketParameters::new(0.5, 0.01, 20.0);
        assert_relative_eq!(params.premium(0.0, 0.0), 20.0);
        assert_relative_eq!(params.premium(10.0, 1000.0), 35.0);
    }
}
