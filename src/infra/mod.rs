// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence that doesn't belong to any one
// business layer:
//
//   config_store.rs : reads/writes RagConfig as JSON
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// RagConfig JSON persistence
pub mod config_store;
