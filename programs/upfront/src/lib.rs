// =============================================================================
// UPFRONT - BTC Escrow With Day-One Interest
// =============================================================================
//
// "Lock the coin. Pocket the yield. Collect at maturity." ₿
//
// UPFRONT is a custodial escrow on Solana where:
// - Users lock wrapped BTC for a fixed term
// - The whole term's interest is paid immediately in a stable token,
//   discounted to present value
// - Principal comes back at maturity, or early with a partial clawback
//
// This is the main entry point for the UPFRONT Anchor program.
// =============================================================================

// Module declarations - these tell Rust where to find our code
pub mod constants;
pub mod error;
pub mod instructions;
pub mod interest;
pub mod state;

// Import everything from Anchor's prelude (common types and macros)
use anchor_lang::prelude::*;

// Re-export our modules so users of this crate can access them
pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("76nsuH9UoqkK49xohyqWJ3xmmuLHQN2z1ruSZEgPuHBa");

/// The UPFRONT program module
///
/// This is where we define all the instruction handlers that users can call.
/// Each function here corresponds to an instruction that can be sent to the program.
#[program]
pub mod upfront {
    use super::*;

    // =========================================================================
    // Bootstrap
    // =========================================================================

    /// Initialize the escrow (admin only, once per deployment)
    ///
    /// Creates:
    /// - PoolConfig account (rates, bounds, permitted periods)
    /// - Vault authority PDA
    /// - Collateral, interest and withdrawal vault token accounts
    ///
    /// # Arguments
    /// * `base_interest_rate` - Reference APY in basis points (e.g. 2132)
    /// * `price_factor` - Collateral-to-valuation conversion constant
    /// * `min_commission_rate` / `max_commission_rate` - Inclusive commission
    ///   bounds in basis points
    /// * `min_deposit_amount` / `max_deposit_amount` - Inclusive deposit
    ///   bounds in collateral base units
    /// * `deposit_periods` - Permitted lock lengths in slots (max 8)
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        ctx: Context<Initialize>,
        base_interest_rate: u64,
        price_factor: u64,
        min_commission_rate: u64,
        max_commission_rate: u64,
        min_deposit_amount: u64,
        max_deposit_amount: u64,
        deposit_periods: Vec<u64>,
    ) -> Result<()> {
        instructions::initialize::handler_initialize(
            ctx,
            base_interest_rate,
            price_factor,
            min_commission_rate,
            max_commission_rate,
            min_deposit_amount,
            max_deposit_amount,
            deposit_periods,
        )
    }

    /// Update escrow parameters (admin only)
    ///
    /// Every field is independently optional: pass Some(value) for the
    /// fields to change, None for the rest. The resulting configuration is
    /// validated as a whole, so bound pairs can be moved together in one
    /// call.
    #[allow(clippy::too_many_arguments)]
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        base_interest_rate: Option<u64>,
        price_factor: Option<u64>,
        min_commission_rate: Option<u64>,
        max_commission_rate: Option<u64>,
        min_deposit_amount: Option<u64>,
        max_deposit_amount: Option<u64>,
        deposit_periods: Option<Vec<u64>>,
    ) -> Result<()> {
        instructions::update_config::handler_update_config(
            ctx,
            base_interest_rate,
            price_factor,
            min_commission_rate,
            max_commission_rate,
            min_deposit_amount,
            max_deposit_amount,
            deposit_periods,
        )
    }

    // =========================================================================
    // Depositor Operations
    // =========================================================================

    /// Lock collateral and receive the whole term's interest now
    ///
    /// # Arguments
    /// * `amount` - Collateral to lock (base units, inclusive bounds apply)
    /// * `deposit_period` - Lock length in slots; must be a configured value
    /// * `commission_rate` - Chosen commission in basis points, inside the
    ///   configured inclusive bounds
    ///
    /// Pays `value * rate / (1 + rate)` from the interest vault, where the
    /// rate is the tiered APY pro-rated over the period and net of
    /// commission.
    pub fn deposit_collateral(
        ctx: Context<DepositCollateral>,
        amount: u64,
        deposit_period: u64,
        commission_rate: u64,
    ) -> Result<()> {
        instructions::deposit_collateral::handler_deposit_collateral(
            ctx,
            amount,
            deposit_period,
            commission_rate,
        )
    }

    /// Ask for the principal back after maturity
    ///
    /// Valid once the unlock slot has passed. Moves the position to
    /// WithdrawRequested; the admin stages funds with prepare_withdrawal
    /// before the principal can be collected.
    pub fn request_withdrawal(ctx: Context<RequestWithdrawal>) -> Result<()> {
        instructions::request_withdrawal::handler_request_withdrawal(ctx)
    }

    /// Exit before maturity, returning part of the upfront interest
    ///
    /// The clawback is proportional to the unused lock time, weighted by
    /// the early-refund policy factor (50%). After the refund settles the
    /// principal is claimable immediately via withdraw_collateral.
    pub fn request_withdrawal_early(ctx: Context<RequestWithdrawalEarly>) -> Result<()> {
        instructions::request_withdrawal_early::handler_request_withdrawal_early(ctx)
    }

    /// Collect the principal and close the position
    ///
    /// Pays from the withdrawal vault (matured path) or the collateral
    /// vault (early path), zeroes the record and returns its rent to the
    /// depositor.
    pub fn withdraw_collateral(ctx: Context<WithdrawCollateral>) -> Result<()> {
        instructions::withdraw_collateral::handler_withdraw_collateral(ctx)
    }

    // =========================================================================
    // Admin Operations
    // =========================================================================

    /// Sweep the whole collateral vault to the admin (admin only)
    ///
    /// Idle principal earns yield off-platform; this is the outbound leg.
    /// Early exits pay from the collateral vault, so the admin keeps
    /// enough liquidity back via return_collateral.
    pub fn invest_collateral(ctx: Context<InvestCollateral>) -> Result<()> {
        instructions::admin_liquidity::handler_invest_collateral(ctx)
    }

    /// Return swept principal to the collateral vault (admin only)
    ///
    /// # Arguments
    /// * `amount` - Collateral base units to bring back
    pub fn return_collateral(ctx: Context<ReturnCollateral>, amount: u64) -> Result<()> {
        instructions::admin_liquidity::handler_return_collateral(ctx, amount)
    }

    /// Top up the interest vault that funds upfront payouts (admin only)
    ///
    /// # Arguments
    /// * `amount` - Interest base units to deposit
    pub fn deposit_interest(ctx: Context<DepositInterest>, amount: u64) -> Result<()> {
        instructions::admin_liquidity::handler_deposit_interest(ctx, amount)
    }

    /// Drain surplus from the interest vault (admin only)
    ///
    /// # Arguments
    /// * `amount` - Interest base units to withdraw
    pub fn withdraw_interest(ctx: Context<WithdrawInterest>, amount: u64) -> Result<()> {
        instructions::admin_liquidity::handler_withdraw_interest(ctx, amount)
    }

    /// Stage principal for a matured withdrawal request (admin only)
    ///
    /// Transfers the position's principal from the admin's account into
    /// the withdrawal vault and moves the position to WithdrawReady, after
    /// which the depositor collects with withdraw_collateral.
    pub fn prepare_withdrawal(ctx: Context<PrepareWithdrawal>) -> Result<()> {
        instructions::prepare_withdrawal::handler_prepare_withdrawal(ctx)
    }
}

#[cfg(test)]
mod tests;
