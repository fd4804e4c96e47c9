// =============================================================================
// Withdraw Collateral Instruction
// =============================================================================
// The terminal step of both withdrawal paths: the depositor collects their
// principal and the Position account is closed (rent back to the owner).
//
// Source vault depends on how the position got here:
// - WithdrawReady:  principal was staged by the admin -> withdrawal vault
// - EarlyUnlocked:  clawback already settled -> straight from the
//                   collateral vault
//
// Once the transfer lands the record is gone, and the wallet is free to
// open a fresh position.
// =============================================================================

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::UpfrontError;
use crate::state::{PoolConfig, Position, PositionState};

/// Accounts required for the withdraw_collateral instruction
#[derive(Accounts)]
pub struct WithdrawCollateral<'info> {
    // =========================================================================
    // Signers
    // =========================================================================

    /// The position owner; receives the principal and the account rent
    #[account(mut)]
    pub depositor: Signer<'info>,

    // =========================================================================
    // Escrow Accounts
    // =========================================================================

    /// The PoolConfig singleton
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, PoolConfig>,

    /// The vault authority PDA that signs the payout
    /// CHECK: validated by seed derivation, used only as a token authority
    #[account(
        seeds = [AUTHORITY_SEED],
        bump = config.authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// The position being paid out
    ///
    /// close = depositor: when the instruction succeeds this account is
    /// closed and the rent is returned to the depositor
    #[account(
        mut,
        seeds = [depositor.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == depositor.key() @ UpfrontError::Unauthorized,
        close = depositor
    )]
    pub position: Account<'info, Position>,

    // =========================================================================
    // Token Accounts
    // =========================================================================

    /// Depositor's collateral token account (destination of the principal)
    #[account(
        mut,
        constraint = depositor_collateral_account.mint == config.collateral_mint @ UpfrontError::InvalidCollateralMint,
        constraint = depositor_collateral_account.owner == depositor.key() @ UpfrontError::InvalidTokenAccountOwner
    )]
    pub depositor_collateral_account: Account<'info, TokenAccount>,

    /// Pays matured withdrawals (WithdrawReady)
    #[account(
        mut,
        seeds = [WITHDRAWAL_VAULT_SEED, config.collateral_mint.as_ref()],
        bump = config.withdrawal_vault_bump
    )]
    pub withdrawal_vault: Account<'info, TokenAccount>,

    /// Pays early exits (EarlyUnlocked)
    #[account(
        mut,
        seeds = [COLLATERAL_VAULT_SEED, config.collateral_mint.as_ref()],
        bump = config.collateral_vault_bump
    )]
    pub collateral_vault: Account<'info, TokenAccount>,

    // =========================================================================
    // Programs
    // =========================================================================

    pub token_program: Program<'info, Token>,
}

/// Handler for the withdraw_collateral instruction
pub fn handler_withdraw_collateral(ctx: Context<WithdrawCollateral>) -> Result<()> {
    let position = &ctx.accounts.position;
    let amount = position.amount;

    // Pick the source vault by how this position reached payout
    let source = match position.state {
        PositionState::WithdrawReady => &ctx.accounts.withdrawal_vault,
        PositionState::EarlyUnlocked => &ctx.accounts.collateral_vault,
        _ => return Err(error!(UpfrontError::InvalidPositionState)),
    };

    require!(source.amount >= amount, UpfrontError::InsufficientVaultBalance);

    msg!(
        "Paying out {} collateral units from {}",
        amount,
        source.key()
    );

    // =========================================================================
    // Transfer Principal: Vault -> Depositor
    // =========================================================================

    let authority_seeds = &[AUTHORITY_SEED, &[ctx.accounts.config.authority_bump]];
    let signer_seeds = &[&authority_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: source.to_account_info(),
            to: ctx.accounts.depositor_collateral_account.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    // =========================================================================
    // Close Out the Position
    // =========================================================================

    // The account closes when the handler returns; the zeroed amount and
    // terminal state are what the logs record
    let position = &mut ctx.accounts.position;
    position.amount = 0;
    position.state = PositionState::WithdrawCompleted;

    msg!("Withdrawal complete for {}", position.owner);
    msg!("Position closed, rent returned");

    Ok(())
}
