// ============================================================
// Layer 2 — Estimate Use Case
// ============================================================
// Orchestrates the full estimation pipeline in order:
//
//   Step 1: Validate the input        (Layer 3 - domain)
//   Step 2: Zero-fill the vector      (Layer 4 - data)
//   Step 3: Write the numeric columns (Layer 4 - data)
//   Step 4: Apply the scaler          (Layer 4 - data)
//   Step 5: One-hot the location      (Layer 3/4)
//   Step 6: Predict + inverse log     (Layer 5 - ml)
//
// The location step never fails: a neighborhood whose derived
// column is absent from the model's feature set contributes no
// signal and the pipeline carries on. That fallback is flagged
// with a warning because it can also hide a catalog/model
// mismatch, but intent-wise it mirrors how the model was
// trained — reference categories have no column of their own.

use anyhow::{anyhow, Result};

use crate::data::features::FeatureVector;
use crate::domain::listing::{EstimateInput, NB_PIECES_COL, SUPERFICIE_COL};
use crate::domain::locations::{is_known, location_column};
use crate::domain::traits::PriceModel;
use crate::infra::assets::Assets;
use crate::ml::predictor::Predictor;

/// The outcome of one estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Predicted sale price in TND, back in original units
    pub price: f64,

    /// The neighborhood the user selected
    pub ville: String,

    /// Whether that neighborhood mapped to a model column.
    /// When false the price was computed with no location signal.
    pub location_matched: bool,
}

pub struct EstimateUseCase<'a> {
    assets: &'a Assets,
}

impl<'a> EstimateUseCase<'a> {
    pub fn new(assets: &'a Assets) -> Self {
        Self { assets }
    }

    /// Run the whole pipeline for one set of raw inputs.
    /// `ville` is an Option so that "nothing selected" is caught
    /// here, before any vector work happens.
    pub fn estimate(
        &self,
        superficie: f64,
        nb_pieces: u32,
        ville: Option<&str>,
    ) -> Result<Estimate> {
        let ville = ville
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| anyhow!("no location selected — pick a neighborhood from the list"))?;

        let input = EstimateInput::new(superficie, nb_pieces, ville)?;
        let (vector, location_matched) = self.build_vector(&input)?;

        let predictor = Predictor::new(&self.assets.model);
        let price = predictor.predict_price(&vector)?;

        tracing::info!(
            "estimated {:.0} TND for {} m², {} rooms in {}",
            price,
            input.superficie,
            input.nb_pieces,
            input.ville
        );

        Ok(Estimate {
            price,
            ville: input.ville,
            location_matched,
        })
    }

    /// Build the exact vector the model expects from a validated
    /// input. Returns the vector and whether the location mapped
    /// to a one-hot column.
    pub fn build_vector(&self, input: &EstimateInput) -> Result<(FeatureVector, bool)> {
        // Step 2: all-zero row over the model's declared feature set
        let mut vector = FeatureVector::zeros(self.assets.model.feature_names());

        // Step 3: raw numeric values into their named columns
        vector.set(SUPERFICIE_COL, input.superficie)?;
        vector.set(NB_PIECES_COL, f64::from(input.nb_pieces))?;

        // Step 4: standardise exactly the scaler's fitted columns
        self.assets.scaler.apply(&mut vector)?;

        // Step 5: one-hot the location, silently skipping unknown columns
        let column = location_column(&input.ville);
        let matched = vector.set_if_present(&column, 1.0);
        if !matched {
            tracing::warn!(
                "location '{}' has no model column '{column}'{} — predicting without location signal",
                input.ville,
                if is_known(&input.ville) { "" } else { " (not in the catalog either)" }
            );
        }

        Ok((vector, matched))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::scaler::StandardScaler;
    use crate::ml::model::LinearModel;
    use crate::ml::predictor::inverse_log_transform;

    /// In-memory assets shaped like a real training run:
    /// two scaled numeric columns plus two one-hot locations.
    fn assets() -> Assets {
        let feature_names: Vec<String> = [
            "superficie",
            "nb_pieces",
            "ville_region_tunis",
            "ville_region_la marsa",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Assets {
            model: LinearModel::new(feature_names, vec![0.6, 0.15, 0.25, 0.4], 12.0).unwrap(),
            scaler: StandardScaler::new(
                vec!["superficie".to_string(), "nb_pieces".to_string()],
                vec![120.0, 3.0],
                vec![60.0, 1.5],
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_end_to_end_tunis_scenario() {
        let assets = assets();
        let use_case = EstimateUseCase::new(&assets);

        let input = EstimateInput::new(120.0, 3, "Tunis").unwrap();
        let (vector, matched) = use_case.build_vector(&input).unwrap();

        // superficie and nb_pieces sit exactly at the scaler means
        assert_eq!(vector.get("superficie"), Some(0.0));
        assert_eq!(vector.get("nb_pieces"), Some(0.0));
        assert!(matched);
        assert_eq!(vector.get("ville_region_tunis"), Some(1.0));
        assert_eq!(vector.get("ville_region_la marsa"), Some(0.0));

        // y = 12 + 0.25, price = expm1(y)
        let estimate = use_case.estimate(120.0, 3, Some("Tunis")).unwrap();
        assert_eq!(estimate.price, inverse_log_transform(12.25));
        assert!(estimate.location_matched);
    }

    #[test]
    fn test_scaled_values_follow_the_scaler() {
        let assets = assets();
        let use_case = EstimateUseCase::new(&assets);

        let input = EstimateInput::new(180.0, 6, "Tunis").unwrap();
        let (vector, _) = use_case.build_vector(&input).unwrap();

        assert_eq!(vector.get("superficie"), Some((180.0 - 120.0) / 60.0));
        assert_eq!(vector.get("nb_pieces"), Some((6.0 - 3.0) / 1.5));
    }

    #[test]
    fn test_unmatched_location_leaves_all_indicators_zero() {
        let assets = assets();
        let use_case = EstimateUseCase::new(&assets);

        // "Gammarth" is in the catalog but this model has no column for it
        let input = EstimateInput::new(120.0, 3, "Gammarth").unwrap();
        let (vector, matched) = use_case.build_vector(&input).unwrap();

        assert!(!matched);
        assert_eq!(vector.get("ville_region_tunis"), Some(0.0));
        assert_eq!(vector.get("ville_region_la marsa"), Some(0.0));

        // the prediction still goes through
        let estimate = use_case.estimate(120.0, 3, Some("Gammarth")).unwrap();
        assert!(!estimate.location_matched);
        assert_eq!(estimate.price, inverse_log_transform(12.0));
    }

    #[test]
    fn test_exactly_one_location_column_is_set() {
        let assets = assets();
        let use_case = EstimateUseCase::new(&assets);

        let input = EstimateInput::new(120.0, 3, "La Marsa").unwrap();
        let (vector, _) = use_case.build_vector(&input).unwrap();

        let ones: usize = vector
            .columns()
            .iter()
            .filter(|c| c.starts_with("ville_region_"))
            .filter(|c| vector.get(c) == Some(1.0))
            .count();
        assert_eq!(ones, 1);
        assert_eq!(vector.get("ville_region_la marsa"), Some(1.0));
    }

    #[test]
    fn test_missing_location_is_a_validation_error() {
        let assets = assets();
        let use_case = EstimateUseCase::new(&assets);

        assert!(use_case.estimate(120.0, 3, None).is_err());
        assert!(use_case.estimate(120.0, 3, Some("  ")).is_err());
    }

    #[test]
    fn test_out_of_bounds_input_is_rejected() {
        let assets = assets();
        let use_case = EstimateUseCase::new(&assets);

        assert!(use_case.estimate(10.0, 3, Some("Tunis")).is_err());
        assert!(use_case.estimate(120.0, 12, Some("Tunis")).is_err());
    }

    #[test]
    fn test_builder_is_idempotent() {
        let assets = assets();
        let use_case = EstimateUseCase::new(&assets);

        let input = EstimateInput::new(250.0, 5, "La Marsa").unwrap();
        let (first, _) = use_case.build_vector(&input).unwrap();
        let (second, _) = use_case.build_vector(&input).unwrap();
        assert_eq!(first, second);
    }
}
