// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the one cross-cutting concern this system has:
//
//   assets.rs — Loading the trained artifacts from disk
//               Reads model.json and scaler.json, validates
//               that they fit together, and caches the pair
//               for the rest of the process lifetime.
//
// Why is this a separate layer?
//   File paths, JSON parsing and process-wide caching are
//   not domain concepts. Keeping them here means the data
//   and ml layers can be tested with in-memory values and
//   never touch the filesystem.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Artifact loading, validation and process-lifetime caching
pub mod assets;
