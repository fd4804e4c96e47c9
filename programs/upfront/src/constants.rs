// =============================================================================
// UPFRONT Protocol Constants
// =============================================================================
// This file contains all the magic numbers and policy values for the UPFRONT
// escrow. Runtime-tunable parameters (rates, bounds, permitted periods) live
// in the PoolConfig account; everything here is fixed at build time.
// =============================================================================

use anchor_lang::prelude::*;

// =============================================================================
// ADMINISTRATIVE IDENTITY
// =============================================================================

/// The only wallet accepted as signer for admin instructions.
/// Baked in at build time; redeploy to rotate it.
pub const ADMIN_AUTHORITY: Pubkey = pubkey!("3kVsECmV7KeA9K9yeR7kPafMYK3CAVTv4sKCqsiaiJGw");

// =============================================================================
// RATE ARITHMETIC (rates enter in basis points - 1 BPS = 0.01%)
// =============================================================================

/// Total basis points (100%) - denominator for all external rate fields
/// Example: commission = amount * commission_bps / BPS_DENOMINATOR
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Internal rate scale for the interest engine (1.0 = 1,000,000).
/// Basis-point inputs are lifted by x100 on entry so the period pro-ration
/// and present-value division keep two extra digits before truncating.
pub const RATE_PRECISION: u128 = 1_000_000;

// =============================================================================
// INTEREST TIERING
// =============================================================================

/// One interest token in base units (6 decimals, USDC-style)
pub const INTEREST_UNIT: u64 = 1_000_000;

/// Valuation threshold for the volume-discount schedule (10M USD-equivalent,
/// in interest base units). Value up to the threshold earns the full base
/// rate; value above it earns the reduced rate.
pub const TIER_THRESHOLD: u64 = 10_000_000 * INTEREST_UNIT;

/// Spread between the base rate and the above-threshold rate.
/// With a 21.32% base rate the overflow tier pays 14.32%.
pub const TIER_RATE_SPREAD_BPS: u64 = 700;

/// Worst-case APY floor used when solving for the minimum risk buffer.
/// The conservative (post-commission, post-buffer) return must not fall
/// under this rate.
pub const WORST_CASE_APY_BPS: u64 = 300;

// =============================================================================
// EARLY-EXIT POLICY
// =============================================================================

/// Weighting applied to the unused-time fraction of the upfront payout when
/// a depositor exits before maturity: refund = interest_received
/// * remaining/total * 50%.
pub const EARLY_REFUND_FACTOR_BPS: u64 = 5_000;

// =============================================================================
// CHAIN TIME
// =============================================================================

/// Slots per 30-day month at 400ms per slot
/// 30 * 24 * 60 * 60 * 1000 / 400 = 6,480,000
pub const SLOTS_PER_MONTH: u64 = 6_480_000;

/// Slots per year, defined as exactly 12 months so month-multiple lock
/// periods pro-rate without remainder
pub const SLOTS_PER_YEAR: u64 = 12 * SLOTS_PER_MONTH;

// =============================================================================
// PDA SEEDS
// =============================================================================
// PDAs (Program Derived Addresses) are special addresses that only this
// program can sign for. Same seeds = same address, which is how clients and
// the program agree on where every account lives.
// =============================================================================

/// Seed for the PoolConfig singleton PDA
/// Full seed: ["pool_config"]
pub const CONFIG_SEED: &[u8] = b"pool_config";

/// Seed for the vault authority PDA (owns all three vaults, holds no data)
/// Full seed: ["authority"]
pub const AUTHORITY_SEED: &[u8] = b"authority";

/// Seed for the collateral vault token account (active principal)
/// Full seed: ["collateral_pool", collateral_mint_pubkey]
pub const COLLATERAL_VAULT_SEED: &[u8] = b"collateral_pool";

/// Seed for the interest vault token account (funds upfront payouts)
/// Full seed: ["interest_pool", interest_mint_pubkey]
pub const INTEREST_VAULT_SEED: &[u8] = b"interest_pool";

/// Seed for the withdrawal vault token account (principal staged for
/// matured requests)
/// Full seed: ["withdrawal_pool", collateral_mint_pubkey]
pub const WITHDRAWAL_VAULT_SEED: &[u8] = b"withdrawal_pool";

// A Position PDA is seeded by the depositor's own pubkey, nothing else:
// one live Position per wallet by construction.

// =============================================================================
// ACCOUNT LIMITS
// =============================================================================

/// Maximum number of permitted lock periods the config can hold.
/// Bounds the PoolConfig account size.
pub const MAX_DEPOSIT_PERIODS: usize = 8;
