// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer turns validated user input into the exact numeric
// vector the model expects.
//
// The pipeline flows in this order:
//
//   EstimateInput (domain)
//       │
//       ▼
//   FeatureVector     → zero-filled row over the model's columns
//       │
//       ▼
//   StandardScaler    → standardises the two numeric columns
//       │
//       ▼
//   one-hot location  → sets the matching ville_region_* column
//       │
//       ▼
//   Predictor (ml)    → consumes the finished vector
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §8 (Collections)

/// The named, zero-initialised, single-row feature vector
pub mod features;

/// The fitted mean/scale transform for the numeric columns
pub mod scaler;
