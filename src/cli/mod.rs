// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `estimate`  — predicts a sale price from the attributes
//   2. `locations` — lists the known neighborhoods
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EstimateArgs};
use std::path::Path;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "immo-estimator",
    version = "0.1.0",
    about = "Estimate Grand Tunis property sale prices with a trained regression model."
)]
pub struct Cli {
    /// The subcommand to run (estimate or locations)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    /// The match moves the args out of `self.command`, so the handlers
    /// are associated functions rather than methods — they never need
    /// the partially-moved `self` anyway.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Estimate(args) => Self::run_estimate(args),
            Commands::Locations      => Self::run_locations(),
        }
    }

    /// Handles the `estimate` subcommand.
    /// Loads the cached assets and hands the raw values to Layer 2.
    fn run_estimate(args: EstimateArgs) -> Result<()> {
        use crate::application::estimate_use_case::EstimateUseCase;
        use crate::infra::assets::Assets;

        let assets   = Assets::cached(Path::new(&args.assets_dir))?;
        let use_case = EstimateUseCase::new(assets);

        let estimate = use_case.estimate(args.superficie, args.pieces, args.ville.as_deref())?;

        println!("\nEstimated sale price: {} TND", format_price(estimate.price));
        if estimate.location_matched {
            println!("Location taken into account: {}", estimate.ville);
        } else {
            println!(
                "Location '{}' carries no signal in this model; the estimate ignores it.",
                estimate.ville
            );
        }
        Ok(())
    }

    /// Handles the `locations` subcommand.
    /// Prints the sorted, deduplicated catalog, one name per line.
    fn run_locations() -> Result<()> {
        use crate::domain::locations::catalog;

        for name in catalog() {
            println!("{name}");
        }
        Ok(())
    }
}

/// Render a price rounded to whole TND with thousand separators,
/// e.g. 245012.7 → "245,013". Negative outputs are possible (the
/// model's output is not filtered) and keep their sign.
fn format_price(price: f64) -> String {
    let rounded = price.round();
    let negative = rounded < 0.0;

    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Parse real argv and run the dispatch end to end.
    /// `run` consumes `self` and the match moves the args out, so the
    /// whole Estimate arm has to work without touching `self` again.
    #[test]
    fn test_run_dispatches_estimate() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("model.json"),
            r#"{
                "feature_names": ["superficie", "nb_pieces", "ville_region_tunis"],
                "coefficients": [0.5, 0.1, 0.3],
                "intercept": 12.0
            }"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("scaler.json"),
            r#"{
                "columns": ["superficie", "nb_pieces"],
                "mean": [120.0, 3.0],
                "scale": [60.0, 1.5]
            }"#,
        )
        .unwrap();

        let assets_dir = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "immo-estimator",
            "estimate",
            "--ville",
            "Tunis",
            "--assets-dir",
            assets_dir,
        ])
        .unwrap();

        cli.run().unwrap();
    }

    #[test]
    fn test_run_dispatches_locations() {
        let cli = Cli::try_parse_from(["immo-estimator", "locations"]).unwrap();
        cli.run().unwrap();
    }

    #[test]
    fn test_formats_thousand_separators() {
        assert_eq!(format_price(245012.7), "245,013");
        assert_eq!(format_price(1_000_000.0), "1,000,000");
    }

    #[test]
    fn test_formats_small_values() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.4), "999");
    }

    #[test]
    fn test_keeps_negative_sign() {
        assert_eq!(format_price(-1234.0), "-1,234");
    }
}
