// =============================================================================
// Instructions Module
// =============================================================================
// This module exports all instructions for the UPFRONT escrow.
//
// Instructions are the "API" of the Solana program - each one represents
// an action that can be taken by calling the program.
// =============================================================================

// Depositor operations
pub mod deposit_collateral;
pub mod request_withdrawal;
pub mod request_withdrawal_early;
pub mod withdraw_collateral;

// Admin operations
pub mod admin_liquidity;
pub mod initialize;
pub mod prepare_withdrawal;
pub mod update_config;

// Re-export everything from each module
// The #[derive(Accounts)] macro generates helper types that need to be at crate root
pub use admin_liquidity::*;
pub use deposit_collateral::*;
pub use initialize::*;
pub use prepare_withdrawal::*;
pub use request_withdrawal::*;
pub use request_withdrawal_early::*;
pub use update_config::*;
pub use withdraw_collateral::*;
