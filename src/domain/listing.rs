// ============================================================
// Layer 3 — Listing Input
// ============================================================
// The validated set of property attributes the user enters:
// surface area, room count and neighborhood name.
//
// Bounds come from the form the model was trained behind —
// the estimator has never seen a 5 m² studio or a 40-room
// palace, so it refuses to extrapolate to one.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Result};

/// Model column holding the surface area in m².
pub const SUPERFICIE_COL: &str = "superficie";

/// Model column holding the room count.
pub const NB_PIECES_COL: &str = "nb_pieces";

/// Accepted surface area range in m², inclusive.
pub const SUPERFICIE_RANGE: (f64, f64) = (20.0, 800.0);

/// Accepted room count range, inclusive.
pub const NB_PIECES_RANGE: (u32, u32) = (1, 10);

/// A validated estimation request.
/// Constructing one through `new` guarantees the numeric
/// attributes are inside the ranges the model was trained on.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateInput {
    /// Living surface in m², within [20, 800]
    pub superficie: f64,

    /// Number of rooms, within [1, 10]
    pub nb_pieces: u32,

    /// Selected neighborhood name, as it appears in the catalog
    pub ville: String,
}

impl EstimateInput {
    /// Validate and build an estimation request.
    /// Out-of-bounds values are rejected before any asset is
    /// touched, so a bad request never reaches the model.
    pub fn new(superficie: f64, nb_pieces: u32, ville: impl Into<String>) -> Result<Self> {
        let (lo, hi) = SUPERFICIE_RANGE;
        if !superficie.is_finite() || superficie < lo || superficie > hi {
            bail!("surface area must be between {lo} and {hi} m², got {superficie}");
        }

        let (lo, hi) = NB_PIECES_RANGE;
        if nb_pieces < lo || nb_pieces > hi {
            bail!("room count must be between {lo} and {hi}, got {nb_pieces}");
        }

        Ok(Self {
            superficie,
            nb_pieces,
            ville: ville.into(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_in_bounds_input() {
        let input = EstimateInput::new(120.0, 3, "Tunis").unwrap();
        assert_eq!(input.superficie, 120.0);
        assert_eq!(input.nb_pieces, 3);
        assert_eq!(input.ville, "Tunis");
    }

    #[test]
    fn test_accepts_boundary_values() {
        assert!(EstimateInput::new(20.0, 1, "Tunis").is_ok());
        assert!(EstimateInput::new(800.0, 10, "Tunis").is_ok());
    }

    #[test]
    fn test_rejects_surface_out_of_bounds() {
        assert!(EstimateInput::new(19.9, 3, "Tunis").is_err());
        assert!(EstimateInput::new(800.1, 3, "Tunis").is_err());
        assert!(EstimateInput::new(f64::NAN, 3, "Tunis").is_err());
    }

    #[test]
    fn test_rejects_room_count_out_of_bounds() {
        assert!(EstimateInput::new(120.0, 0, "Tunis").is_err());
        assert!(EstimateInput::new(120.0, 11, "Tunis").is_err());
    }
}
