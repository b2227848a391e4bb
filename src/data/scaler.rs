// ============================================================
// Layer 4 — Standard Scaler
// ============================================================
// The fitted standardisation the model's numeric features went
// through during training: subtract the column mean, divide by
// the column scale. The parameters come from the scaler artifact
// on disk — this code never fits anything, it only replays a
// transform that was fitted elsewhere.
//
// The artifact stores three parallel arrays:
//
//   columns: ["superficie", "nb_pieces"]
//   mean:    [145.2, 3.4]
//   scale:   [88.7,  1.6]
//
// validate() checks the arrays line up before the scaler is
// ever applied, so a truncated or hand-edited file fails at
// load time instead of producing silently wrong predictions.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::data::features::FeatureVector;
use crate::domain::traits::NumericTransform;

/// A fitted subtract-mean, divide-by-scale transform over a
/// small set of named numeric columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    columns: Vec<String>,
    mean:    Vec<f64>,
    scale:   Vec<f64>,
}

impl StandardScaler {
    /// Build a scaler from fitted parameters, rejecting
    /// mismatched array lengths and zero scales up front.
    pub fn new(columns: Vec<String>, mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { columns, mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Structural checks run after deserialisation.
    pub fn validate(&self) -> Result<()> {
        if self.columns.len() != self.mean.len() || self.columns.len() != self.scale.len() {
            bail!(
                "scaler arrays disagree: {} columns, {} means, {} scales",
                self.columns.len(),
                self.mean.len(),
                self.scale.len()
            );
        }
        for (name, &s) in self.columns.iter().zip(&self.scale) {
            if s == 0.0 || !s.is_finite() {
                bail!("scaler column '{name}' has unusable scale {s}");
            }
        }
        Ok(())
    }

    /// Standardise every fitted column of the vector in place.
    /// Errors if the vector lacks one of the scaler's columns —
    /// that means the model and scaler artifacts don't belong
    /// to the same training run.
    pub fn apply(&self, vector: &mut FeatureVector) -> Result<()> {
        for name in &self.columns {
            match vector.get(name) {
                Some(raw) => vector.set(name, self.transform(name, raw)?)?,
                None => bail!("feature vector has no column '{name}' for the scaler to transform"),
            }
        }
        Ok(())
    }
}

impl NumericTransform for StandardScaler {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn transform(&self, column: &str, value: f64) -> Result<f64> {
        match self.columns.iter().position(|c| c == column) {
            Some(i) => Ok((value - self.mean[i]) / self.scale[i]),
            None => bail!("scaler was not fitted on column '{column}'"),
        }
    }
}
