//! Resource limit enforcement.

pub mod quota;

pub use quota::QuotaTracker;
