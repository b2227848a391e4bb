// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// Everything that knows the model is a regression lives here.
// No other layer does model math — they only see the
// PriceModel trait and a finished price.
//
// What's in this layer:
//
//   model.rs     — The linear regression model
//                  A coefficient per named feature plus an
//                  intercept, deserialised from the model
//                  artifact. Prediction is one dot product.
//
//   predictor.rs — The invocation wrapper
//                  Feeds a finished feature vector to the
//                  model and undoes the log1p target
//                  transform (exp(y) - 1) to get TND.
//
// Reference: Rust Book §10 (Traits)

/// The linear regression model loaded from disk
pub mod model;

/// Model invocation and log-target inverse transform
pub mod predictor;
