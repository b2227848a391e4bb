// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `estimate` and `locations`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → f64, u32, etc.)
//
// `--ville` is deliberately optional at the clap level: the
// "no location selected" check is business validation and
// belongs to the use case, not to argument parsing.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the sale price of a property
    Estimate(EstimateArgs),

    /// List the neighborhoods the estimator knows about
    Locations,
}

/// All arguments for the `estimate` command.
/// Defaults mirror the original form: 120 m², 3 rooms.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Living surface in m², between 20 and 800
    #[arg(long, default_value_t = 120.0)]
    pub superficie: f64,

    /// Number of rooms, between 1 and 10
    #[arg(long, default_value_t = 3)]
    pub pieces: u32,

    /// Neighborhood name — see the `locations` command for the list
    #[arg(long)]
    pub ville: Option<String>,

    /// Directory holding model.json and scaler.json
    #[arg(long, default_value = "assets")]
    pub assets_dir: String,
}
