// ============================================================
// Layer 4 — Feature Vector
// ============================================================
// A single row of named numeric values whose column set is
// fixed by the model at load time and defaults to all zeros.
//
// Two write paths exist on purpose:
//
//   set()             — for columns that MUST exist
//                       (the numeric ones: superficie, nb_pieces).
//                       An unknown name here means the artifacts
//                       are broken, so it is an error.
//
//   set_if_present()  — for one-hot location columns.
//                       A neighborhood with no matching column is
//                       valid input; the vector just stays zero
//                       and the model sees no location signal.
//
// Reference: Rust Book §8 (HashMaps)

use anyhow::{bail, Result};
use std::collections::HashMap;

/// One row over a fixed set of named columns, all-zero by default.
/// Column order is the order the model declared its features in,
/// so `values()` can be fed straight into the model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    /// Column names in the model's declared order
    columns: Vec<String>,

    /// Column name → position in `values`
    index: HashMap<String, usize>,

    /// One value per column, same order as `columns`
    values: Vec<f64>,
}

impl FeatureVector {
    /// Build an all-zero vector over the given column set.
    pub fn zeros(columns: &[String]) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Self {
            columns: columns.to_vec(),
            index,
            values: vec![0.0; columns.len()],
        }
    }

    /// Column names, in model order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All values, in model order — this is what the model consumes.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Read one column's value, if the column exists.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&i| self.values[i])
    }

    /// Write a column that must exist. Errors on an unknown name,
    /// because the caller expected it to be part of the model.
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match self.index.get(name) {
            Some(&i) => {
                self.values[i] = value;
                Ok(())
            }
            None => bail!("model has no feature column named '{name}'"),
        }
    }

    /// Write a column that may or may not exist.
    /// Returns true if the column was found and written.
    pub fn set_if_present(&mut self, name: &str, value: f64) -> bool {
        match self.index.get(name) {
            Some(&i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_starts_all_zero() {
        let v = FeatureVector::zeros(&columns(&["a", "b", "c"]));
        assert_eq!(v.values(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_set_known_column() {
        let mut v = FeatureVector::zeros(&columns(&["a", "b"]));
        v.set("b", 2.5).unwrap();
        assert_eq!(v.get("b"), Some(2.5));
        assert_eq!(v.get("a"), Some(0.0));
    }

    #[test]
    fn test_set_unknown_column_is_error() {
        let mut v = FeatureVector::zeros(&columns(&["a"]));
        assert!(v.set("missing", 1.0).is_err());
    }

    #[test]
    fn test_set_if_present_reports_match() {
        let mut v = FeatureVector::zeros(&columns(&["a", "b"]));
        assert!(v.set_if_present("a", 1.0));
        assert!(!v.set_if_present("missing", 1.0));
        // the miss changed nothing
        assert_eq!(v.values(), &[1.0, 0.0]);
    }

    #[test]
    fn test_values_follow_column_order() {
        let mut v = FeatureVector::zeros(&columns(&["x", "y", "z"]));
        v.set("z", 3.0).unwrap();
        v.set("x", 1.0).unwrap();
        assert_eq!(v.values(), &[1.0, 0.0, 3.0]);
    }
}
