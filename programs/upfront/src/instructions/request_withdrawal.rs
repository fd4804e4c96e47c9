// =============================================================================
// Request Withdrawal Instruction
// =============================================================================
// A matured depositor signals they want their principal back. No tokens
// move here: the request and the funding are deliberately separate steps,
// so principal that is out earning yield can be brought back by the admin
// (prepare_withdrawal) before the depositor collects.
// =============================================================================

use anchor_lang::prelude::*;

use crate::error::UpfrontError;
use crate::state::{Position, PositionState};

/// Accounts required for the request_withdrawal instruction
#[derive(Accounts)]
pub struct RequestWithdrawal<'info> {
    /// The position owner
    pub depositor: Signer<'info>,

    /// The position asking for its principal back
    #[account(
        mut,
        seeds = [depositor.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == depositor.key() @ UpfrontError::Unauthorized
    )]
    pub position: Account<'info, Position>,
}

/// Handler for the request_withdrawal instruction
pub fn handler_request_withdrawal(ctx: Context<RequestWithdrawal>) -> Result<()> {
    let position = &mut ctx.accounts.position;

    require!(
        position.state == PositionState::Deposited,
        UpfrontError::InvalidPositionState
    );

    let clock = Clock::get()?;
    require!(
        clock.slot >= position.unlock_slot,
        UpfrontError::NotYetUnlocked
    );

    position.state = PositionState::WithdrawRequested;

    msg!(
        "Withdrawal requested for {} at slot {} (unlocked at {})",
        position.owner,
        clock.slot,
        position.unlock_slot
    );

    Ok(())
}
