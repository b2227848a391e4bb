// Writes a small, structurally valid model.json / scaler.json pair
// into assets/ so the estimator can be exercised without the real
// training artifacts. The coefficients are illustrative constants,
// not a trained model — prices coming out of them mean nothing.
//
// Self-contained on purpose: it only needs serde_json, and it
// mirrors the artifact shapes the estimator deserialises.

use serde_json::json;
use std::fs;

fn main() {
    // Neighborhoods that keep a one-hot column in this sample model.
    // A real training run drops rare categories; the estimator must
    // cope with catalog names that have no column, so the sample
    // model intentionally covers only a slice of the catalog.
    let locations = [
        ("tunis", 0.25),
        ("la marsa", 0.45),
        ("carthage", 0.50),
        ("ennasr", 0.35),
        ("ariana", 0.20),
        ("le bardo", 0.10),
        ("ben arous", 0.05),
        ("rades", 0.08),
    ];

    let mut feature_names: Vec<String> = vec!["superficie".into(), "nb_pieces".into()];
    let mut coefficients: Vec<f64> = vec![0.62, 0.14];

    for (name, coef) in locations {
        feature_names.push(format!("ville_region_{name}"));
        coefficients.push(coef);
    }

    let model = json!({
        "feature_names": feature_names,
        "coefficients": coefficients,
        // ln(1 + 250_000) — a mid-range Grand Tunis price at the feature means
        "intercept": 12.429220196836383,
    });

    let scaler = json!({
        "columns": ["superficie", "nb_pieces"],
        "mean":    [132.4, 3.6],
        "scale":   [71.8, 1.7],
    });

    fs::create_dir_all("assets").expect("cannot create assets directory");
    fs::write(
        "assets/model.json",
        serde_json::to_string_pretty(&model).expect("serialise model"),
    )
    .expect("write assets/model.json");
    fs::write(
        "assets/scaler.json",
        serde_json::to_string_pretty(&scaler).expect("serialise scaler"),
    )
    .expect("write assets/scaler.json");

    println!(
        "Wrote sample model ({} features) and scaler to assets/",
        feature_names.len()
    );
}
