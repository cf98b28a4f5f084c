use crate::domain::model::HypeLevelTable;

pub const HYPE_MIDPOINT: f64 = 0.3;
pub const HYPE_STEEPNESS: f64 = 12.0;

/// Returned by [`HypeLevelTable::label`] when no band applies.
pub const NO_LEVEL: &str = "-";

/// Logistic curve centred at 30% keyword density.
pub fn hype(percent: f64) -> f64 {
    1.0 / (1.0 + ((-percent + HYPE_MIDPOINT) * HYPE_STEEPNESS).exp())
}

impl HypeLevelTable {
    /// First band, scanning from the highest lower bound, whose bound is `<= hype`.
    pub fn label(&self, hype: f64) -> &str {
        self.levels()
            .iter()
            .find(|level| hype >= level.lower_bound)
            .map(|level| level.label.as_str())
            .unwrap_or(NO_LEVEL)
    }
}
