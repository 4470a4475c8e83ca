//! Utility modules for rule implementations.

pub mod allowance;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use allowance::{check_allow_comment, check_allow_with_reason, AllowCheck, AllowState};
