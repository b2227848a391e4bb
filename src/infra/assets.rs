// ============================================================
// Layer 6 — Asset Store
// ============================================================
// Loads the two trained artifacts the estimator depends on:
//
//   assets/
//     model.json   ← feature names, coefficients, intercept
//     scaler.json  ← columns, means, scales
//
// Both files are produced by the training side and consumed
// here as opaque parameter blobs. Loading fails loudly if a
// file is missing, unparsable, or structurally inconsistent
// (mismatched array lengths, a scaler column the model never
// declared) — a broken artifact must halt the process, not
// leak into a silently wrong price.
//
// The loaded pair is cached in a OnceLock for the process
// lifetime: the first successful load wins and repeated
// invocations reuse it without touching the disk again.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §16 (OnceLock and shared state)

use anyhow::{bail, Context, Result};
use std::{fs, path::Path, sync::OnceLock};

use crate::data::scaler::StandardScaler;
use crate::domain::traits::{NumericTransform, PriceModel};
use crate::ml::model::LinearModel;

/// File name of the model artifact inside the assets directory.
pub const MODEL_FILE: &str = "model.json";

/// File name of the scaler artifact inside the assets directory.
pub const SCALER_FILE: &str = "scaler.json";

/// Process-lifetime cache — populated on the first successful load.
static CACHE: OnceLock<Assets> = OnceLock::new();

/// The loaded model/scaler pair, validated to belong together.
#[derive(Debug, Clone)]
pub struct Assets {
    pub model:  LinearModel,
    pub scaler: StandardScaler,
}

impl Assets {
    /// Load and validate both artifacts from a directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let model_path = dir.join(MODEL_FILE);
        let json = fs::read_to_string(&model_path).with_context(|| {
            format!(
                "cannot read model artifact '{}'. \
                 Make sure the trained .json artifacts sit in the assets directory.",
                model_path.display()
            )
        })?;
        let model: LinearModel = serde_json::from_str(&json)
            .with_context(|| format!("model artifact '{}' is corrupt", model_path.display()))?;
        model
            .validate()
            .with_context(|| format!("model artifact '{}' is inconsistent", model_path.display()))?;

        let scaler_path = dir.join(SCALER_FILE);
        let json = fs::read_to_string(&scaler_path).with_context(|| {
            format!("cannot read scaler artifact '{}'", scaler_path.display())
        })?;
        let scaler: StandardScaler = serde_json::from_str(&json)
            .with_context(|| format!("scaler artifact '{}' is corrupt", scaler_path.display()))?;
        scaler
            .validate()
            .with_context(|| format!("scaler artifact '{}' is inconsistent", scaler_path.display()))?;

        // The pair must come from the same training run: every column
        // the scaler was fitted on has to exist in the model's feature set.
        for column in scaler.columns() {
            if !model.feature_names().iter().any(|f| f == column) {
                bail!(
                    "scaler column '{column}' is not among the model's features — \
                     '{}' and '{}' don't belong to the same training run",
                    MODEL_FILE,
                    SCALER_FILE
                );
            }
        }

        tracing::info!(
            "loaded model ({} features) and scaler ({} columns) from '{}'",
            model.feature_names().len(),
            scaler.columns().len(),
            dir.display()
        );

        Ok(Self { model, scaler })
    }

    /// Load through the process-lifetime cache.
    /// The first successful load is kept for good; later calls
    /// return the cached pair even if they name another directory.
    pub fn cached(dir: &Path) -> Result<&'static Assets> {
        if let Some(assets) = CACHE.get() {
            return Ok(assets);
        }
        let assets = Self::load(dir)?;
        Ok(CACHE.get_or_init(|| assets))
    }
}
