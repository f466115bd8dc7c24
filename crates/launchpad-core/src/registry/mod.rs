//! # Registries
//!
//! Process-wide indices shared by every creation. Each registry sits behind
//! a single lock; the uniqueness check and the insert happen under the same
//! write guard.

pub mod coin_registry;
pub mod metadata_registry;

pub use coin_registry::CoinRegistry;
pub use metadata_registry::MetadataRegistry;
