// ============================================================
// Layer 3 — Location Catalog
// ============================================================
// The fixed list of Grand Tunis neighborhoods the estimator
// knows about, plus the naming rule that maps a neighborhood
// to its one-hot column in the model's feature space.
//
// The rule is pure string manipulation:
//
//   "La Marsa"  →  "ville_region_la marsa"
//   "Séjoumi"   →  "ville_region_séjoumi"
//
// Whether that column actually exists in the model's feature
// set is decided at prediction time — a name with no matching
// column simply contributes no location signal.
//
// Reference: Rust Book §8 (Strings in Rust)

/// Prefix shared by every one-hot location column in the model.
pub const LOCATION_PREFIX: &str = "ville_region_";

/// Every neighborhood the selection list offers, grouped roughly
/// by governorate. The raw list may repeat spelling variants
/// ("Marsa" vs "La Marsa") — `catalog()` dedups and sorts.
const GRAND_TUNIS: &[&str] = &[
    // Tunis
    "Tunis", "Lafayette", "Mutuelleville", "Montplaisir", "Centre Urbain Nord",
    "El Menzah", "El Menzah 1", "El Menzah 5", "El Menzah 6", "Ennasr",
    "El Omrane", "El Omrane Supérieur", "El Ouardia", "El Khadra",
    "Bab Souika", "Bab Bhar", "La Kasbah", "La Medina",
    "Sijoumi", "Séjoumi", "Cité Olympique", "Cité Jardins", "Bardo", "Le Bardo",
    // Ariana
    "Ariana", "Ariana Ville", "Ariana Superieur", "Ghazela", "Cite Ghazela",
    "Raoued", "Raoued Plage", "Borj Louzir", "La Soukra", "Sokra",
    "Chotrana 1", "Chotrana 2", "Chotrana 3", "Ennkhilet",
    // Northern coast
    "La Marsa", "Marsa", "Sidi Daoud", "Gammarth", "Gammarth Supérieur",
    "Gammarth Village", "Cité des Pins", "Sidi Bou Said",
    "Carthage", "Carthage Byrsa", "Carthage Salambo",
    "Le Kram", "Krame", "Lac 1", "Lac 2", "Les Berges du Lac", "Jardins de Carthage",
    // Ben Arous
    "Ben Arous", "Mourouj 1", "Mourouj 2", "Mourouj 3", "Mourouj 4", "Mourouj 5", "Mourouj 6",
    "Megrine", "Megrine Jawhara", "Megrine Chaker",
    "Rades", "Rades Plage", "Ezzahra", "Boumhel", "Fouchana",
    "Hammam Lif", "Hammam Chatt", "Medina El Jadida",
    // Manouba
    "Manouba", "Oued Ellil", "Den Den", "Mornaguia", "Douar Hicher",
];

/// The catalog as shown to the user: deduplicated and sorted.
pub fn catalog() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = GRAND_TUNIS.to_vec();
    names.sort_unstable();
    names.dedup();
    names
}

/// True if `name` is one of the known neighborhoods (exact match).
pub fn is_known(name: &str) -> bool {
    GRAND_TUNIS.contains(&name)
}

/// Derive the one-hot column name for a neighborhood.
/// Unicode lowercasing matters here — several names carry
/// accented characters ("Séjoumi", "El Omrane Supérieur").
pub fn location_column(name: &str) -> String {
    format!("{LOCATION_PREFIX}{}", name.to_lowercase())
}
