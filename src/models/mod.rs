//! Data models for wa-direct.
//!
//! This module defines the data structures shared across the application:
//!
//! - [`ContactRecord`] - one remembered chat attempt in the recent list
//! - [`Tone`] - target register for AI message refinement
//!
//! [`ContactRecord`] uses serde with camelCase wire names so the persisted
//! history file keeps a stable, readable layout.

pub mod contact;
pub mod tone;

pub use contact::ContactRecord;
pub use tone::Tone;
