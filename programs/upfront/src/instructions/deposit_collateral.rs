// =============================================================================
// Deposit Collateral Instruction
// =============================================================================
// The entry point of the escrow. A depositor locks wrapped-BTC principal
// for one of the permitted periods and is paid the whole term's interest
// immediately, discounted to present value.
//
// Flow:
// 1. Validate amount, commission and period against the config
// 2. Reject the call if the wallet already has a live Position
// 3. Compute the upfront payout (tiered APY, pro-ration, commission,
//    present-value discount)
// 4. Transfer collateral: depositor -> collateral vault
// 5. Transfer interest: interest vault -> depositor (PDA-signed)
// 6. Write the Position record stamped with the current slot
//
// The payout is checked against the interest vault's balance before any
// tokens move, so a deposit the vault cannot fund aborts cleanly.
// =============================================================================

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::UpfrontError;
use crate::interest;
use crate::state::{PoolConfig, Position, PositionState};

/// Accounts required for the deposit_collateral instruction
#[derive(Accounts)]
pub struct DepositCollateral<'info> {
    // =========================================================================
    // Signers
    // =========================================================================

    /// The user locking collateral
    /// Must sign to authorize the transfer, and pays the Position rent
    #[account(mut)]
    pub depositor: Signer<'info>,

    // =========================================================================
    // Escrow Accounts
    // =========================================================================

    /// The PoolConfig singleton (bounds, rates, mint identities, bumps)
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, PoolConfig>,

    /// The vault authority PDA that signs the interest payout
    /// CHECK: validated by seed derivation, used only as a token authority
    #[account(
        seeds = [AUTHORITY_SEED],
        bump = config.authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// The depositor's Position record, seeded by their own pubkey.
    ///
    /// init_if_needed: a wallet whose previous Position completed and was
    /// closed gets a fresh account here; a wallet with a live Position is
    /// rejected in the handler by the fresh-owner check.
    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + Position::INIT_SPACE,
        seeds = [depositor.key().as_ref()],
        bump
    )]
    pub position: Account<'info, Position>,

    // =========================================================================
    // Token Accounts
    // =========================================================================

    /// Depositor's collateral token account (source of the principal)
    #[account(
        mut,
        constraint = depositor_collateral_account.mint == config.collateral_mint @ UpfrontError::InvalidCollateralMint,
        constraint = depositor_collateral_account.owner == depositor.key() @ UpfrontError::InvalidTokenAccountOwner
    )]
    pub depositor_collateral_account: Account<'info, TokenAccount>,

    /// Depositor's interest token account (destination of the payout)
    #[account(
        mut,
        constraint = depositor_interest_account.mint == config.interest_mint @ UpfrontError::InvalidInterestMint,
        constraint = depositor_interest_account.owner == depositor.key() @ UpfrontError::InvalidTokenAccountOwner
    )]
    pub depositor_interest_account: Account<'info, TokenAccount>,

    /// Destination of the locked principal
    #[account(
        mut,
        seeds = [COLLATERAL_VAULT_SEED, config.collateral_mint.as_ref()],
        bump = config.collateral_vault_bump
    )]
    pub collateral_vault: Account<'info, TokenAccount>,

    /// Source of the upfront payout
    #[account(
        mut,
        seeds = [INTEREST_VAULT_SEED, config.interest_mint.as_ref()],
        bump = config.interest_vault_bump
    )]
    pub interest_vault: Account<'info, TokenAccount>,

    // =========================================================================
    // Programs
    // =========================================================================

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

/// Handler for the deposit_collateral instruction
///
/// # Arguments
/// * `amount` - Collateral to lock, in collateral base units
/// * `deposit_period` - Lock length in slots; must be a configured period
/// * `commission_rate` - Chosen commission in basis points; must sit inside
///   the configured inclusive bounds
pub fn handler_deposit_collateral(
    ctx: Context<DepositCollateral>,
    amount: u64,
    deposit_period: u64,
    commission_rate: u64,
) -> Result<()> {
    let config = &ctx.accounts.config;

    // =========================================================================
    // Input Validation
    // =========================================================================

    config.check_deposit_amount(amount)?;
    config.check_commission_rate(commission_rate)?;
    config.check_deposit_period(deposit_period)?;

    // One live Position per wallet. A freshly created account still has the
    // zero pubkey as owner; anything else means a live position exists.
    require!(
        ctx.accounts.position.owner == Pubkey::default(),
        UpfrontError::PositionAlreadyExists
    );

    require!(
        ctx.accounts.depositor_collateral_account.amount >= amount,
        UpfrontError::InsufficientBalance
    );

    // =========================================================================
    // Compute the Upfront Payout
    // =========================================================================

    let payout = interest::upfront_interest(
        amount,
        config.price_factor,
        config.base_interest_rate,
        deposit_period,
        commission_rate,
        0,
    )?;

    // The vault must be able to fund the payout before anything moves
    require!(
        ctx.accounts.interest_vault.amount >= payout,
        UpfrontError::InsufficientVaultBalance
    );

    msg!(
        "Depositing {} collateral units for {} slots at {} bps commission",
        amount,
        deposit_period,
        commission_rate
    );

    // =========================================================================
    // Transfer Collateral: Depositor -> Vault
    // =========================================================================

    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.depositor_collateral_account.to_account_info(),
            to: ctx.accounts.collateral_vault.to_account_info(),
            authority: ctx.accounts.depositor.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    // =========================================================================
    // Pay Upfront Interest: Vault -> Depositor
    // =========================================================================

    // The interest vault is owned by the authority PDA, so the program
    // signs with the authority seeds
    let authority_seeds = &[AUTHORITY_SEED, &[ctx.accounts.config.authority_bump]];
    let signer_seeds = &[&authority_seeds[..]];

    let payout_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.interest_vault.to_account_info(),
            to: ctx.accounts.depositor_interest_account.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(payout_ctx, payout)?;

    // =========================================================================
    // Write the Position
    // =========================================================================

    let clock = Clock::get()?;
    let unlock_slot = clock
        .slot
        .checked_add(deposit_period)
        .ok_or(error!(UpfrontError::MathOverflow))?;

    let depositor_key = ctx.accounts.depositor.key();
    let position_bump = ctx.bumps.position;

    let position = &mut ctx.accounts.position;
    position.owner = depositor_key;
    position.amount = amount;
    position.deposit_slot = clock.slot;
    position.unlock_slot = unlock_slot;
    position.interest_received = payout;
    position.commission_rate = commission_rate;
    position.state = PositionState::Deposited;
    position.bump = position_bump;

    // =========================================================================
    // Log Results
    // =========================================================================

    msg!("Deposit locked");
    msg!("Principal: {}", position.amount);
    msg!("Upfront interest paid: {}", position.interest_received);
    msg!("Deposit slot: {}", position.deposit_slot);
    msg!("Unlock slot: {}", position.unlock_slot);

    Ok(())
}
