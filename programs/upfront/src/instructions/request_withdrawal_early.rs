// =============================================================================
// Request Early Withdrawal Instruction
// =============================================================================
// Exit before the unlock slot, at a price. The depositor was already paid
// the whole term's interest on day one; leaving early means part of that
// payout was never earned, so a clawback goes back into the interest vault:
//
//   refund = interest_received * remaining_slots / total_slots * 50%
//
// After the refund settles, the position moves to EarlyUnlocked and the
// principal is claimable immediately from the collateral vault via
// withdraw_collateral - no admin staging step on this path.
// =============================================================================

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::UpfrontError;
use crate::state::{PoolConfig, Position, PositionState};

/// Accounts required for the request_withdrawal_early instruction
#[derive(Accounts)]
pub struct RequestWithdrawalEarly<'info> {
    /// The position owner; signs the refund transfer
    pub depositor: Signer<'info>,

    /// The PoolConfig singleton
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, PoolConfig>,

    /// The position exiting early
    #[account(
        mut,
        seeds = [depositor.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == depositor.key() @ UpfrontError::Unauthorized
    )]
    pub position: Account<'info, Position>,

    /// Depositor's interest token account (source of the refund)
    #[account(
        mut,
        constraint = depositor_interest_account.mint == config.interest_mint @ UpfrontError::InvalidInterestMint,
        constraint = depositor_interest_account.owner == depositor.key() @ UpfrontError::InvalidTokenAccountOwner
    )]
    pub depositor_interest_account: Account<'info, TokenAccount>,

    /// The refund flows back into the vault that paid the interest out
    #[account(
        mut,
        seeds = [INTEREST_VAULT_SEED, config.interest_mint.as_ref()],
        bump = config.interest_vault_bump
    )]
    pub interest_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Handler for the request_withdrawal_early instruction
pub fn handler_request_withdrawal_early(ctx: Context<RequestWithdrawalEarly>) -> Result<()> {
    let position = &ctx.accounts.position;

    require!(
        position.state == PositionState::Deposited,
        UpfrontError::InvalidPositionState
    );

    let clock = Clock::get()?;
    require!(
        clock.slot < position.unlock_slot,
        UpfrontError::AlreadyUnlocked
    );

    // =========================================================================
    // Compute and Collect the Clawback
    // =========================================================================

    let refund = position.refund_due(clock.slot)?;
    require!(
        ctx.accounts.depositor_interest_account.amount >= refund,
        UpfrontError::InsufficientRefundBalance
    );

    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.depositor_interest_account.to_account_info(),
            to: ctx.accounts.interest_vault.to_account_info(),
            authority: ctx.accounts.depositor.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, refund)?;

    // =========================================================================
    // Unlock the Principal
    // =========================================================================

    let position = &mut ctx.accounts.position;
    position.state = PositionState::EarlyUnlocked;

    msg!(
        "Early exit at slot {} ({} slots before unlock)",
        clock.slot,
        position.unlock_slot - clock.slot
    );
    msg!("Interest refunded: {}", refund);
    msg!("Position state: Deposited -> EarlyUnlocked");

    Ok(())
}
