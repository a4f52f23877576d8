//! Shared types for the mint-console workspace.
//!
//! This crate provides the foundational types used across multiple crates in
//! the workspace, breaking circular dependency chains.
//!
//! ## Core Types
//!
//! - [`MintPhase`] - the resolved sale phase of the drop contract
//! - [`PhaseFlags`] - the raw phase flags as read from the chain
//! - [`SupplyCounters`] - collection supply and per-wallet mint counts
//! - [`PhaseEconomics`] - per-unit cost and per-wallet ceiling for a phase
//! - [`MintRequest`] / [`TransactionResult`] - the submission round-trip

pub mod address;
pub mod economics;
pub mod env_utils;
pub mod fsio;
pub mod outcome;
pub mod phase;
pub mod supply;
pub mod units;

// Re-export commonly used types at crate root
pub use economics::{MintLimits, MintRequest, PhaseEconomics};
pub use outcome::TransactionResult;
pub use phase::{MintPhase, PhaseFlags};
pub use supply::SupplyCounters;
