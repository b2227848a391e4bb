// ============================================================
// Layer 5 — Linear Regression Model
// ============================================================
// The trained model as it exists on disk: a name per feature,
// a coefficient per feature, and an intercept. The training
// run that produced it is out of scope — this code treats the
// numbers as opaque and only replays the inference step:
//
//   y = intercept + Σ coefficient[i] * value[i]
//
// The output is on the log1p scale the target was trained on;
// the predictor applies the inverse transform.
//
// Reference: Rust Book §10 (Traits)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::domain::traits::PriceModel;

/// A linear regression over a fixed, named feature space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Feature names in the exact order the model was fitted on
    feature_names: Vec<String>,

    /// One coefficient per feature, same order as `feature_names`
    coefficients: Vec<f64>,

    /// Constant term added to every prediction
    intercept: f64,
}

impl LinearModel {
    /// Build a model from its parameters, rejecting a
    /// name/coefficient length mismatch up front.
    pub fn new(feature_names: Vec<String>, coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        let model = Self { feature_names, coefficients, intercept };
        model.validate()?;
        Ok(model)
    }

    /// Structural checks run after deserialisation.
    pub fn validate(&self) -> Result<()> {
        if self.feature_names.len() != self.coefficients.len() {
            bail!(
                "model declares {} features but carries {} coefficients",
                self.feature_names.len(),
                self.coefficients.len()
            );
        }
        if self.feature_names.is_empty() {
            bail!("model declares no features");
        }
        Ok(())
    }
}

impl PriceModel for LinearModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, values: &[f64]) -> Result<f64> {
        if values.len() != self.coefficients.len() {
            bail!(
                "feature vector has {} values but the model expects {}",
                values.len(),
                self.coefficients.len()
            );
        }

        let weighted: f64 = self
            .coefficients
            .iter()
            .zip(values)
            .map(|(c, v)| c * v)
            .sum();

        Ok(self.intercept + weighted)
    }
}
