//! # Launchpad Core - Symbol Registry and Bonding-Curve Exchange
//!
//! This crate issues tokens keyed by short Unicode symbols and trades them
//! against a base currency on a constant-product curve. It provides:
//!
//! - Globally unique symbol and metadata registries
//! - Coin objects holding reserves and their mint/burn capability
//! - Buy and sell operations that either apply fully or not at all
//! - Metadata records with an ordered attribute map
//!
//! The engine is synchronous and performs no I/O except config loading.
//! Identity allocation and notification delivery are supplied by the host
//! through [`IdAllocator`] and [`EventSink`].

pub mod balance;
pub mod coin;
pub mod config;
pub mod constants;
pub mod curve;
pub mod errors;
pub mod events;
pub mod exchange;
pub mod host;
pub mod launchpad;
pub mod math;
pub mod metadata;
pub mod position;
pub mod registry;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use balance::Balance;
pub use coin::{Coin, CoinInfo, TokenBalance, TreasuryCap};
pub use config::{FeeSchedule, LaunchpadConfig, MetadataUpdatePolicy};
pub use constants::*;
pub use errors::{LaunchpadError, LaunchpadResult};
pub use events::{
    CoinCreated, EventSink, LaunchpadEvent, MemoryEventSink, MetadataUpdated, TracingEventSink,
    TradeExecuted, TradeSide,
};
pub use host::{IdAllocator, SequentialIdAllocator};
pub use launchpad::{CreatedCoin, Launchpad};
pub use metadata::{Metadata, MetadataFields};
pub use position::{Position, PositionInfo};
pub use types::{Address, ObjectId, TxContext};
pub use validation::{is_valid_symbol, validate_symbol};
