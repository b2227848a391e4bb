// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - LinearModel implements PriceModel
//   - A future GradientBoostedModel could also implement it
//   - The predictor only sees PriceModel and works with both
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

// ─── PriceModel ───────────────────────────────────────────────────────────────
/// Any regression model that predicts a log-scale sale price
/// from a fixed, named feature space.
///
/// Implementations:
///   - LinearModel → coefficients + intercept loaded from disk
pub trait PriceModel {
    /// The exact ordered set of feature names this model expects.
    /// The feature vector must be built over this set, in this order.
    fn feature_names(&self) -> &[String];

    /// Predict from feature values given in `feature_names()` order.
    /// The output is on the log1p scale the model was trained on —
    /// callers apply the inverse transform to get a price.
    fn predict(&self, values: &[f64]) -> Result<f64>;
}

// ─── NumericTransform ─────────────────────────────────────────────────────────
/// A fitted, per-column numeric transform applied to raw inputs
/// before they reach the model.
///
/// Implementations:
///   - StandardScaler → subtract mean, divide by scale
pub trait NumericTransform {
    /// The columns this transform was fitted on.
    fn columns(&self) -> &[String];

    /// Transform one raw value from a named column.
    /// Errors if the column was not part of the fit.
    fn transform(&self, column: &str, value: f64) -> Result<f64>;
}
