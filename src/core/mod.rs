//! Core business logic abstractions

pub mod backend;
pub mod config;
pub mod finance;
pub mod format;
pub mod log;
pub mod records;
pub mod requests;

// Re-export main types for cleaner imports
pub use backend::BankBackend;
pub use finance::{CompoundInterestInput, EmiInput, RateBasis, ZeroRateEmi};
pub use format::Amount;
