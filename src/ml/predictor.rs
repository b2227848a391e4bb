// ============================================================
// Layer 5 — Predictor
// ============================================================
// Feeds a finished feature vector to the model and converts
// the log-scale output back to a price in TND.
//
// The target was log1p-transformed before training, so the
// inverse is expm1:
//
//   price = exp(y) - 1
//
// No bounds checking on the output — a strange vector can
// produce a negative or implausible price and that is shown
// as-is rather than masked.

use anyhow::Result;

use crate::data::features::FeatureVector;
use crate::domain::traits::PriceModel;

/// Undo the log1p target transform applied during training.
/// For y = 0 this returns exactly 0.
pub fn inverse_log_transform(y: f64) -> f64 {
    y.exp_m1()
}

/// Wraps a model and turns vectors into original-unit prices.
pub struct Predictor<'a, M: PriceModel> {
    model: &'a M,
}

impl<'a, M: PriceModel> Predictor<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self { model }
    }

    /// Run one inference and inverse-transform the result.
    pub fn predict_price(&self, vector: &FeatureVector) -> Result<f64> {
        let log_pred = self.model.predict(vector.values())?;
        let price = inverse_log_transform(log_pred);

        tracing::debug!("log prediction {log_pred:.4} → price {price:.0} TND");
        Ok(price)
    }
}
