// =============================================================================
// UPFRONT Error Codes
// =============================================================================
// Custom errors that the UPFRONT program can return. Each error has a unique
// code and a human-readable message. The error code is what lands on-chain;
// the message is for developers reading transaction logs.
// =============================================================================

use anchor_lang::prelude::*;

/// All possible errors that the UPFRONT program can return.
///
/// Anchor assigns numeric codes starting from 6000 in declaration order.
/// When a transaction fails, match the code in the logs against this enum.
#[error_code]
pub enum UpfrontError {
    // =========================================================================
    // Authorization Errors
    // =========================================================================

    /// Signer is not the baked-in administrative identity, or a depositor
    /// tried to touch a Position they do not own
    #[msg("Unauthorized - signer does not have permission")]
    Unauthorized,

    // =========================================================================
    // Configuration Errors
    // =========================================================================

    /// Commission bounds are inverted or exceed 100%
    #[msg("Invalid commission bounds - min must not exceed max, max must not exceed 100%")]
    InvalidRateBounds,

    /// Deposit bounds are inverted
    #[msg("Invalid deposit bounds - min must not exceed max")]
    InvalidDepositBounds,

    /// The collateral-to-valuation conversion factor cannot be zero
    #[msg("Price factor must be greater than zero")]
    InvalidPriceFactor,

    /// The permitted-period list cannot be empty
    #[msg("At least one deposit period must be configured")]
    NoDepositPeriods,

    /// The permitted-period list exceeds the account's capacity
    #[msg("Too many deposit periods configured")]
    TooManyDepositPeriods,

    /// A permitted period of zero slots would unlock immediately
    #[msg("Deposit periods must be greater than zero slots")]
    InvalidDepositPeriod,

    // =========================================================================
    // Deposit Validation Errors
    // =========================================================================

    /// Trying to move 0 tokens - that's not allowed
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    /// Deposit is below the configured minimum
    #[msg("Amount is below minimum deposit")]
    BelowMinimumDeposit,

    /// Deposit is above the configured maximum
    #[msg("Amount exceeds maximum deposit")]
    ExceedsMaximumDeposit,

    /// Chosen commission is outside the configured inclusive bounds
    #[msg("Commission rate is outside the configured bounds")]
    CommissionOutOfBounds,

    /// Chosen lock period is not in the configured set
    #[msg("Deposit period is not permitted")]
    PeriodNotPermitted,

    /// The caller already has a live Position; withdraw it first
    #[msg("Position already exists for this depositor")]
    PositionAlreadyExists,

    // =========================================================================
    // Lifecycle Errors
    // =========================================================================

    /// The Position's current state does not permit this instruction
    #[msg("Position state does not permit this operation")]
    InvalidPositionState,

    /// Maturity withdrawal requested before the unlock slot
    #[msg("Position has not reached its unlock slot")]
    NotYetUnlocked,

    /// Early exit requested at or after the unlock slot - use the normal path
    #[msg("Position is already unlocked - request a normal withdrawal")]
    AlreadyUnlocked,

    // =========================================================================
    // Balance Errors
    // =========================================================================

    /// Wallet doesn't hold enough tokens for this operation
    #[msg("Insufficient balance for operation")]
    InsufficientBalance,

    /// The source vault cannot cover the transfer
    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    /// Wallet doesn't hold enough interest tokens to pay the early-exit
    /// refund
    #[msg("Insufficient balance to return the required refund")]
    InsufficientRefundBalance,

    // =========================================================================
    // Math & Overflow Errors
    // =========================================================================

    /// A calculation would overflow - this should never happen in normal
    /// operation
    #[msg("Math overflow - calculation exceeded maximum value")]
    MathOverflow,

    /// A calculation would underflow - trying to subtract more than available
    #[msg("Math underflow - result would be negative")]
    MathUnderflow,

    /// Division by zero - usually means a zero-length lock period slipped in
    #[msg("Division by zero")]
    DivisionByZero,

    // =========================================================================
    // Account Validation Errors
    // =========================================================================

    /// The collateral token account doesn't use the configured collateral
    /// mint
    #[msg("Invalid collateral mint - must match the configured collateral token")]
    InvalidCollateralMint,

    /// The interest token account doesn't use the configured interest mint
    #[msg("Invalid interest mint - must match the configured interest token")]
    InvalidInterestMint,

    /// Token account owner doesn't match expected owner
    #[msg("Invalid token account owner")]
    InvalidTokenAccountOwner,
}
