// =============================================================================
// Prepare Withdrawal Instruction
// =============================================================================
// The admin-mediated step between a matured withdrawal request and the
// depositor pulling their principal.
//
// Flow:
// 1. Depositor calls request_withdrawal (Deposited -> WithdrawRequested)
// 2. Admin moves the position's principal from their own account into the
//    withdrawal vault and flips the state here
//    (WithdrawRequested -> WithdrawReady)
// 3. Depositor calls withdraw_collateral to collect
//
// The split exists because principal may be out earning yield when the
// request lands; the admin settles requests as liquidity comes back.
// =============================================================================

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::UpfrontError;
use crate::state::{PoolConfig, Position, PositionState};

/// Accounts required for the prepare_withdrawal instruction
#[derive(Accounts)]
pub struct PrepareWithdrawal<'info> {
    /// The administrator; signs the staging transfer
    #[account(
        constraint = admin.key() == ADMIN_AUTHORITY @ UpfrontError::Unauthorized
    )]
    pub admin: Signer<'info>,

    /// The PoolConfig singleton
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, PoolConfig>,

    /// The depositor whose request is being settled. Not a signer - the
    /// admin settles requests on their own schedule.
    /// CHECK: only used as the Position PDA seed
    pub depositor: UncheckedAccount<'info>,

    /// The position being readied for payout
    #[account(
        mut,
        seeds = [depositor.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == depositor.key() @ UpfrontError::Unauthorized
    )]
    pub position: Account<'info, Position>,

    /// Admin's collateral token account (source of the staged principal)
    #[account(
        mut,
        constraint = admin_collateral_account.mint == config.collateral_mint @ UpfrontError::InvalidCollateralMint,
        constraint = admin_collateral_account.owner == admin.key() @ UpfrontError::InvalidTokenAccountOwner
    )]
    pub admin_collateral_account: Account<'info, TokenAccount>,

    /// Destination: principal staged here is claimable by the depositor
    #[account(
        mut,
        seeds = [WITHDRAWAL_VAULT_SEED, config.collateral_mint.as_ref()],
        bump = config.withdrawal_vault_bump
    )]
    pub withdrawal_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Handler for the prepare_withdrawal instruction
pub fn handler_prepare_withdrawal(ctx: Context<PrepareWithdrawal>) -> Result<()> {
    let position = &ctx.accounts.position;

    require!(
        position.state == PositionState::WithdrawRequested,
        UpfrontError::InvalidPositionState
    );

    let amount = position.amount;
    require!(
        ctx.accounts.admin_collateral_account.amount >= amount,
        UpfrontError::InsufficientBalance
    );

    // Stage the principal: admin -> withdrawal vault
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.admin_collateral_account.to_account_info(),
            to: ctx.accounts.withdrawal_vault.to_account_info(),
            authority: ctx.accounts.admin.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    let position = &mut ctx.accounts.position;
    position.state = PositionState::WithdrawReady;

    msg!("Staged {} collateral units for {}", amount, position.owner);
    msg!("Position state: WithdrawRequested -> WithdrawReady");

    Ok(())
}
