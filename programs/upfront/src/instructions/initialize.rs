// =============================================================================
// Initialize Instruction
// =============================================================================
// One-time bootstrap of the UPFRONT escrow. Creates:
// - PoolConfig account (the runtime configuration singleton)
// - Vault authority PDA (owns all three vaults, holds no data)
// - Collateral vault (active principal)
// - Interest vault (funds upfront payouts)
// - Withdrawal vault (principal staged for matured requests)
//
// Only the baked-in admin identity can call this, and the PDA seeds make a
// second call fail: the config address already exists.
// =============================================================================

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::UpfrontError;
use crate::state::PoolConfig;

/// Accounts required for the initialize instruction
#[derive(Accounts)]
pub struct Initialize<'info> {
    // =========================================================================
    // Signers
    // =========================================================================

    /// The administrator bootstrapping the escrow; pays rent for every
    /// account created here
    #[account(
        mut,
        constraint = admin.key() == ADMIN_AUTHORITY @ UpfrontError::Unauthorized
    )]
    pub admin: Signer<'info>,

    // =========================================================================
    // Config Account (PDA - created by this instruction)
    // =========================================================================

    /// The PoolConfig singleton to create
    #[account(
        init,
        payer = admin,
        space = 8 + PoolConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, PoolConfig>,

    /// The PDA that owns all three vaults. Never holds data; it exists so
    /// the program can sign vault transfers with one set of seeds.
    /// CHECK: validated by seed derivation, used only as a token authority
    #[account(
        seeds = [AUTHORITY_SEED],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    // =========================================================================
    // Token Mints
    // =========================================================================

    /// The stable token paid out as upfront interest (e.g. USDC, 6 decimals)
    pub interest_mint: Account<'info, Mint>,

    /// The wrapped-BTC collateral token (e.g. zBTC, 8 decimals)
    pub collateral_mint: Account<'info, Mint>,

    // =========================================================================
    // Vault Token Accounts (PDAs - created by this instruction)
    // =========================================================================

    /// Holds all locked principal
    #[account(
        init,
        payer = admin,
        token::mint = collateral_mint,
        token::authority = vault_authority,
        seeds = [COLLATERAL_VAULT_SEED, collateral_mint.key().as_ref()],
        bump
    )]
    pub collateral_vault: Account<'info, TokenAccount>,

    /// Funds every upfront payout; replenished only by the admin
    #[account(
        init,
        payer = admin,
        token::mint = interest_mint,
        token::authority = vault_authority,
        seeds = [INTEREST_VAULT_SEED, interest_mint.key().as_ref()],
        bump
    )]
    pub interest_vault: Account<'info, TokenAccount>,

    /// Holds principal the admin has staged for matured withdrawal requests
    #[account(
        init,
        payer = admin,
        token::mint = collateral_mint,
        token::authority = vault_authority,
        seeds = [WITHDRAWAL_VAULT_SEED, collateral_mint.key().as_ref()],
        bump
    )]
    pub withdrawal_vault: Account<'info, TokenAccount>,

    // =========================================================================
    // Programs
    // =========================================================================

    /// The System Program - required for creating accounts
    pub system_program: Program<'info, System>,

    /// The Token Program - required for creating token accounts
    pub token_program: Program<'info, Token>,
}

/// Handler for the initialize instruction
#[allow(clippy::too_many_arguments)]
pub fn handler_initialize(
    ctx: Context<Initialize>,
    base_interest_rate: u64,
    price_factor: u64,
    min_commission_rate: u64,
    max_commission_rate: u64,
    min_deposit_amount: u64,
    max_deposit_amount: u64,
    deposit_periods: Vec<u64>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    // =========================================================================
    // Store token identities
    // =========================================================================

    config.interest_mint = ctx.accounts.interest_mint.key();
    config.collateral_mint = ctx.accounts.collateral_mint.key();

    // =========================================================================
    // Store interest parameters and deposit bounds
    // =========================================================================

    config.base_interest_rate = base_interest_rate;
    config.price_factor = price_factor;
    config.min_commission_rate = min_commission_rate;
    config.max_commission_rate = max_commission_rate;
    config.min_deposit_amount = min_deposit_amount;
    config.max_deposit_amount = max_deposit_amount;
    config.deposit_periods = deposit_periods;

    // =========================================================================
    // Store PDA bumps
    // =========================================================================

    config.bump = ctx.bumps.config;
    config.authority_bump = ctx.bumps.vault_authority;
    config.collateral_vault_bump = ctx.bumps.collateral_vault;
    config.interest_vault_bump = ctx.bumps.interest_vault;
    config.withdrawal_vault_bump = ctx.bumps.withdrawal_vault;

    // Reject inverted bounds, zero price factor, bad period lists
    config.validate()?;

    msg!("UPFRONT escrow initialized");
    msg!("Config: {}", config.key());
    msg!("Interest Mint: {}", config.interest_mint);
    msg!("Collateral Mint: {}", config.collateral_mint);
    msg!("Collateral Vault: {}", ctx.accounts.collateral_vault.key());
    msg!("Interest Vault: {}", ctx.accounts.interest_vault.key());
    msg!("Withdrawal Vault: {}", ctx.accounts.withdrawal_vault.key());
    msg!("Base Interest Rate: {} bps", config.base_interest_rate);
    msg!("Price Factor: {}", config.price_factor);

    Ok(())
}
