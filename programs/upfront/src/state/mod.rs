// =============================================================================
// State Module
// =============================================================================
// This module exports the two account structures the UPFRONT escrow stores
// on-chain: the PoolConfig singleton and the per-depositor Position.
// =============================================================================

pub mod config;
pub mod position;

pub use config::*;
pub use position::*;
