// =============================================================================
// PoolConfig State Account
// =============================================================================
// The PoolConfig account is the single runtime-tunable configuration record
// for the UPFRONT escrow: which two tokens are in play, the reference APY,
// the collateral-to-USD conversion factor, and the admin-set bounds every
// deposit must satisfy.
//
// There is exactly one PoolConfig per deployment, at the PDA
// ["pool_config"]. Only the baked-in admin identity can create or update it.
// =============================================================================

use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_DEPOSIT_PERIODS};
use crate::error::UpfrontError;

/// Runtime configuration for the escrow.
///
/// Every instruction handler receives this account fresh from the ledger;
/// nothing is cached between instructions.
#[account]
#[derive(InitSpace)]
pub struct PoolConfig {
    // =========================================================================
    // Token Identities
    // =========================================================================

    /// The SPL mint of the stable token used for upfront interest payouts
    /// (6 decimals, USDC-style)
    pub interest_mint: Pubkey,

    /// The SPL mint of the wrapped-BTC collateral token (8 decimals)
    pub collateral_mint: Pubkey,

    // =========================================================================
    // Interest Parameters
    // =========================================================================

    /// Annualized reference APY in basis points (e.g. 2132 = 21.32%).
    /// This is the rate paid on valuation up to the tier threshold; the
    /// engine derives the above-threshold rate from it.
    pub base_interest_rate: u64,

    /// Conversion factor from collateral base units to interest base units.
    /// Example: 1000 maps 8-decimal BTC units to 6-decimal USD units at
    /// 100,000 USD per BTC.
    pub price_factor: u64,

    // =========================================================================
    // Deposit Bounds (inclusive on both ends)
    // =========================================================================

    /// Lowest commission a depositor may choose, in basis points
    pub min_commission_rate: u64,

    /// Highest commission a depositor may choose, in basis points
    pub max_commission_rate: u64,

    /// Smallest accepted deposit, in collateral base units
    pub min_deposit_amount: u64,

    /// Largest accepted deposit, in collateral base units
    pub max_deposit_amount: u64,

    // =========================================================================
    // Lock Periods
    // =========================================================================

    /// Permitted lock-period lengths in slots. A deposit must pick one of
    /// these exactly.
    #[max_len(MAX_DEPOSIT_PERIODS)]
    pub deposit_periods: Vec<u64>,

    // =========================================================================
    // PDA Bumps (stored to avoid recalculation)
    // =========================================================================

    /// Bump seed for the PoolConfig PDA itself
    pub bump: u8,

    /// Bump seed for the vault authority PDA
    pub authority_bump: u8,

    /// Bump seed for the collateral vault token account
    pub collateral_vault_bump: u8,

    /// Bump seed for the interest vault token account
    pub interest_vault_bump: u8,

    /// Bump seed for the withdrawal vault token account
    pub withdrawal_vault_bump: u8,
}

impl PoolConfig {
    /// Validate the whole parameter set at once.
    ///
    /// Called after initialize and after every update, so a multi-field
    /// update that moves both ends of a bound pair is judged on the final
    /// values, not the intermediate ones.
    pub fn validate(&self) -> Result<()> {
        require!(self.price_factor > 0, UpfrontError::InvalidPriceFactor);
        require!(
            self.min_commission_rate <= self.max_commission_rate,
            UpfrontError::InvalidRateBounds
        );
        require!(
            self.max_commission_rate <= BPS_DENOMINATOR,
            UpfrontError::InvalidRateBounds
        );
        require!(
            self.min_deposit_amount <= self.max_deposit_amount,
            UpfrontError::InvalidDepositBounds
        );
        require!(!self.deposit_periods.is_empty(), UpfrontError::NoDepositPeriods);
        require!(
            self.deposit_periods.len() <= MAX_DEPOSIT_PERIODS,
            UpfrontError::TooManyDepositPeriods
        );
        require!(
            self.deposit_periods.iter().all(|period| *period > 0),
            UpfrontError::InvalidDepositPeriod
        );
        Ok(())
    }

    /// Check a deposit amount against the configured inclusive bounds
    pub fn check_deposit_amount(&self, amount: u64) -> Result<()> {
        require!(
            amount >= self.min_deposit_amount,
            UpfrontError::BelowMinimumDeposit
        );
        require!(
            amount <= self.max_deposit_amount,
            UpfrontError::ExceedsMaximumDeposit
        );
        Ok(())
    }

    /// Check a chosen commission against the configured inclusive bounds
    pub fn check_commission_rate(&self, commission_rate: u64) -> Result<()> {
        require!(
            commission_rate >= self.min_commission_rate
                && commission_rate <= self.max_commission_rate,
            UpfrontError::CommissionOutOfBounds
        );
        Ok(())
    }

    /// Check that a chosen lock period is one of the permitted lengths
    pub fn check_deposit_period(&self, period_slots: u64) -> Result<()> {
        require!(
            self.deposit_periods.contains(&period_slots),
            UpfrontError::PeriodNotPermitted
        );
        Ok(())
    }
}
