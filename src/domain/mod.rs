// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O or serde-file concerns
//   - NO CLI or printing code
//   - Only plain Rust structs, constants, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no artifacts on disk needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A validated set of property attributes entered by the user
pub mod listing;

// The fixed Grand Tunis neighborhood catalog and one-hot naming rule
pub mod locations;

// Core abstractions (traits) that other layers implement
pub mod traits;
