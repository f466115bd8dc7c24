//! # Mathematical Functions
//!
//! Checked integer arithmetic shared by the curve and the coin bookkeeping.

pub mod safe_math;

pub use safe_math::*;
