// =============================================================================
// Update Config Instruction
// =============================================================================
// Lets the admin retune the escrow without redeploying. Every parameter is
// independently optional in a single call: pass Some(value) for the fields
// to change, None for the rest.
//
// Validation runs on the final state after all changes are applied, so a
// call that moves both ends of a bound pair (say min and max deposit) is
// judged on the new pair, not against the old values.
// =============================================================================

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::UpfrontError;
use crate::state::PoolConfig;

/// Accounts required for the update_config instruction
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// The administrator; the only signer this instruction accepts
    #[account(
        constraint = admin.key() == ADMIN_AUTHORITY @ UpfrontError::Unauthorized
    )]
    pub admin: Signer<'info>,

    /// The PoolConfig singleton to mutate
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, PoolConfig>,
}

/// Handler for the update_config instruction
#[allow(clippy::too_many_arguments)]
pub fn handler_update_config(
    ctx: Context<UpdateConfig>,
    base_interest_rate: Option<u64>,
    price_factor: Option<u64>,
    min_commission_rate: Option<u64>,
    max_commission_rate: Option<u64>,
    min_deposit_amount: Option<u64>,
    max_deposit_amount: Option<u64>,
    deposit_periods: Option<Vec<u64>>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    if let Some(rate) = base_interest_rate {
        msg!("Base interest rate: {} -> {} bps", config.base_interest_rate, rate);
        config.base_interest_rate = rate;
    }

    if let Some(factor) = price_factor {
        msg!("Price factor: {} -> {}", config.price_factor, factor);
        config.price_factor = factor;
    }

    if let Some(rate) = min_commission_rate {
        msg!("Min commission: {} -> {} bps", config.min_commission_rate, rate);
        config.min_commission_rate = rate;
    }

    if let Some(rate) = max_commission_rate {
        msg!("Max commission: {} -> {} bps", config.max_commission_rate, rate);
        config.max_commission_rate = rate;
    }

    if let Some(amount) = min_deposit_amount {
        msg!("Min deposit: {} -> {}", config.min_deposit_amount, amount);
        config.min_deposit_amount = amount;
    }

    if let Some(amount) = max_deposit_amount {
        msg!("Max deposit: {} -> {}", config.max_deposit_amount, amount);
        config.max_deposit_amount = amount;
    }

    if let Some(periods) = deposit_periods {
        msg!("Deposit periods: {} entries", periods.len());
        config.deposit_periods = periods;
    }

    // Judge the final parameter set as a whole
    config.validate()?;

    msg!("Config updated");

    Ok(())
}
