//! # Tessera
//!
//! Re-exports the Tessera crates for convenience.

/// Keyed resource registry containers.
pub use tessera_registry;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use tessera_registry::prelude::*;
}
