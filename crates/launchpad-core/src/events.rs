//! Event definitions and sinks
//!
//! One notification is emitted per committed operation. Delivery beyond
//! that is the sink's business.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::{Address, ObjectId};

/// Emitted when a coin and its metadata are published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinCreated {
    pub symbol: String,
    pub creator: Address,
    pub coin_id: ObjectId,
    pub metadata_id: ObjectId,
    pub name: String,
    pub timestamp_ms: u64,
}

/// Emitted when a metadata field changes. `field` is `"description"` or
/// `"custom_attribute"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataUpdated {
    pub metadata_id: ObjectId,
    pub field: String,
    pub updated_by: Address,
    pub timestamp_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Emitted on every executed buy or sell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeExecuted {
    pub coin_id: ObjectId,
    pub trader: Address,
    pub side: TradeSide,
    /// Base currency paid in (buy) or paid out (sell)
    pub sui_amount: u64,
    /// Tokens minted (buy) or burned (sell)
    pub token_amount: u64,
    /// Price after the trade, scaled by the price scale
    pub new_price: u64,
    pub timestamp_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LaunchpadEvent {
    CoinCreated(CoinCreated),
    MetadataUpdated(MetadataUpdated),
    Trade(TradeExecuted),
}

impl LaunchpadEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CoinCreated(_) => "coin_created",
            Self::MetadataUpdated(_) => "metadata_updated",
            Self::Trade(_) => "trade",
        }
    }
}

/// Receiver of structured notifications
pub trait EventSink: Send + Sync {
    fn emit(&self, event: LaunchpadEvent);
}

/// Keeps every event in memory, in emission order
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<LaunchpadEvent>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LaunchpadEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn last(&self) -> Option<LaunchpadEvent> {
        self.events.lock().last().cloned()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&self) -> Vec<LaunchpadEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventSink for MemoryEventSink {
    fn emit(&self, event: LaunchpadEvent) {
        self.events.lock().push(event);
    }
}

/// Logs each event as JSON on the `launchpad::events` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: LaunchpadEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => info!(target: "launchpad::events", kind = event.kind(), %payload),
            Err(e) => info!(target: "launchpad::events", kind = event.kind(), error = %e, "unserializable event"),
        }
    }
}
