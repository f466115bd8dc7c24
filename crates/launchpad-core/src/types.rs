//! # Core Types
//!
//! Identities handed out by the host and the per-operation context it
//! supplies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Globally unique identity of a created object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(u64);

impl ObjectId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

/// Account address of a caller or owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; 32]);

impl Address {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Address whose low eight bytes hold `value` (big-endian)
    pub fn from_low_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Caller identity and trusted time for one atomic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxContext {
    pub sender: Address,
    pub timestamp_ms: u64,
}

impl TxContext {
    pub fn new(sender: Address, timestamp_ms: u64) -> Self {
        Self {
            sender,
            timestamp_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ObjectId::new(255).to_string(), "0x00000000000000ff");

        let addr = Address::from_low_u64(0xabcd);
        let rendered = addr.to_string();
        assert_eq!(rendered.len(), 2 + 64);
        assert!(rendered.ends_with("abcd"));
    }

    #[test]
    fn test_address_ordering_follows_low_bytes() {
        assert!(Address::from_low_u64(1) < Address::from_low_u64(2));
        assert_ne!(Address::from_low_u64(1), Address::from_low_u64(2));
    }
}
