// =============================================================================
// Admin Liquidity Instructions
// =============================================================================
// The four vault-liquidity operations only the admin can perform:
//
// - invest_collateral:  sweep the whole collateral vault to the admin so
//                       idle principal can earn yield off-platform
// - return_collateral:  bring swept principal back into the collateral
//                       vault (the early-exit path pays from it)
// - deposit_interest:   top up the interest vault that funds payouts
// - withdraw_interest:  drain surplus from the interest vault
//
// Every handler moves tokens between exactly one vault and the admin's own
// token account, nothing else. Depositor positions are never touched here.
// =============================================================================

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::UpfrontError;
use crate::state::PoolConfig;

// =============================================================================
// Invest Collateral (vault -> admin)
// =============================================================================

/// Accounts required for the invest_collateral instruction
#[derive(Accounts)]
pub struct InvestCollateral<'info> {
    /// The administrator; the only signer this instruction accepts
    #[account(
        constraint = admin.key() == ADMIN_AUTHORITY @ UpfrontError::Unauthorized
    )]
    pub admin: Signer<'info>,

    /// The PoolConfig singleton (supplies mint identities and bumps)
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, PoolConfig>,

    /// The vault authority PDA that signs the outbound transfer
    /// CHECK: validated by seed derivation, used only as a token authority
    #[account(
        seeds = [AUTHORITY_SEED],
        bump = config.authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Source of the sweep
    #[account(
        mut,
        seeds = [COLLATERAL_VAULT_SEED, config.collateral_mint.as_ref()],
        bump = config.collateral_vault_bump
    )]
    pub collateral_vault: Account<'info, TokenAccount>,

    /// Admin's collateral token account (destination of the sweep)
    #[account(
        mut,
        constraint = admin_collateral_account.mint == config.collateral_mint @ UpfrontError::InvalidCollateralMint,
        constraint = admin_collateral_account.owner == admin.key() @ UpfrontError::InvalidTokenAccountOwner
    )]
    pub admin_collateral_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Handler for the invest_collateral instruction.
/// Sweeps the full vault balance; partial sweeps are not a thing, the
/// venue allocation is managed off-platform.
pub fn handler_invest_collateral(ctx: Context<InvestCollateral>) -> Result<()> {
    let amount = ctx.accounts.collateral_vault.amount;
    require!(amount > 0, UpfrontError::InvalidAmount);

    let authority_seeds = &[AUTHORITY_SEED, &[ctx.accounts.config.authority_bump]];
    let signer_seeds = &[&authority_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.collateral_vault.to_account_info(),
            to: ctx.accounts.admin_collateral_account.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    msg!("Swept {} collateral units to admin for investment", amount);

    Ok(())
}

// =============================================================================
// Return Collateral (admin -> vault)
// =============================================================================

/// Accounts required for the return_collateral instruction
#[derive(Accounts)]
pub struct ReturnCollateral<'info> {
    /// The administrator; signs the inbound transfer
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

    /// Destination of the returned principal
    #[account(
        mut,
        seeds = [COLLATERAL_VAULT_SEED, config.collateral_mint.as_ref()],
        bump = config.collateral_vault_bump
    )]
    pub collateral_vault: Account<'info, TokenAccount>,

    /// Admin's collateral token account (source)
    #[account(
        mut,
        constraint = admin_collateral_account.mint == config.collateral_mint @ UpfrontError::InvalidCollateralMint,
        constraint = admin_collateral_account.owner == admin.key() @ UpfrontError::InvalidTokenAccountOwner
    )]
    pub admin_collateral_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Handler for the return_collateral instruction
pub fn handler_return_collateral(ctx: Context<ReturnCollateral>, amount: u64) -> Result<()> {
    require!(amount > 0, UpfrontError::InvalidAmount);
    require!(
        ctx.accounts.admin_collateral_account.amount >= amount,
        UpfrontError::InsufficientBalance
    );

    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.admin_collateral_account.to_account_info(),
            to: ctx.accounts.collateral_vault.to_account_info(),
            authority: ctx.accounts.admin.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    msg!("Returned {} collateral units to the vault", amount);

    Ok(())
}

// =============================================================================
// Deposit Interest (admin -> vault)
// =============================================================================

/// Accounts required for the deposit_interest instruction
#[derive(Accounts)]
pub struct DepositInterest<'info> {
    /// The administrator; signs the inbound transfer
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

    /// The vault that funds upfront payouts
    #[account(
        mut,
        seeds = [INTEREST_VAULT_SEED, config.interest_mint.as_ref()],
        bump = config.interest_vault_bump
    )]
    pub interest_vault: Account<'info, TokenAccount>,

    /// Admin's interest token account (source)
    #[account(
        mut,
        constraint = admin_interest_account.mint == config.interest_mint @ UpfrontError::InvalidInterestMint,
        constraint = admin_interest_account.owner == admin.key() @ UpfrontError::InvalidTokenAccountOwner
    )]
    pub admin_interest_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Handler for the deposit_interest instruction
pub fn handler_deposit_interest(ctx: Context<DepositInterest>, amount: u64) -> Result<()> {
    require!(amount > 0, UpfrontError::InvalidAmount);
    require!(
        ctx.accounts.admin_interest_account.amount >= amount,
        UpfrontError::InsufficientBalance
    );

    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.admin_interest_account.to_account_info(),
            to: ctx.accounts.interest_vault.to_account_info(),
            authority: ctx.accounts.admin.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    msg!("Deposited {} interest units into the vault", amount);

    Ok(())
}

// =============================================================================
// Withdraw Interest (vault -> admin)
// =============================================================================

/// Accounts required for the withdraw_interest instruction
#[derive(Accounts)]
pub struct WithdrawInterest<'info> {
    /// The administrator; the only signer this instruction accepts
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

    /// The vault authority PDA that signs the outbound transfer
    /// CHECK: validated by seed derivation, used only as a token authority
    #[account(
        seeds = [AUTHORITY_SEED],
        bump = config.authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Source of the withdrawal
    #[account(
        mut,
        seeds = [INTEREST_VAULT_SEED, config.interest_mint.as_ref()],
        bump = config.interest_vault_bump
    )]
    pub interest_vault: Account<'info, TokenAccount>,

    /// Admin's interest token account (destination)
    #[account(
        mut,
        constraint = admin_interest_account.mint == config.interest_mint @ UpfrontError::InvalidInterestMint,
        constraint = admin_interest_account.owner == admin.key() @ UpfrontError::InvalidTokenAccountOwner
    )]
    pub admin_interest_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Handler for the withdraw_interest instruction
pub fn handler_withdraw_interest(ctx: Context<WithdrawInterest>, amount: u64) -> Result<()> {
    require!(amount > 0, UpfrontError::InvalidAmount);
    require!(
        ctx.accounts.interest_vault.amount >= amount,
        UpfrontError::InsufficientVaultBalance
    );

    let authority_seeds = &[AUTHORITY_SEED, &[ctx.accounts.config.authority_bump]];
    let signer_seeds = &[&authority_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.interest_vault.to_account_info(),
            to: ctx.accounts.admin_interest_account.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    msg!("Withdrew {} interest units from the vault", amount);

    Ok(())
}
