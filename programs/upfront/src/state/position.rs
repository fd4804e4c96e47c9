// =============================================================================
// Position State Account
// =============================================================================
// The Position account tracks a single depositor's escrowed principal and
// the upfront interest they were already paid for it. Each wallet gets at
// most one live Position, at the PDA seeded by the wallet's own pubkey.
//
// The record is created by deposit_collateral, walks the withdrawal state
// machine, and is closed (rent refunded to the depositor) when
// withdraw_collateral completes - after which the wallet may deposit again.
// =============================================================================

use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, EARLY_REFUND_FACTOR_BPS};
use crate::error::UpfrontError;

/// Lifecycle state of a Position.
///
/// Variants only ever advance:
/// Deposited -> WithdrawRequested -> WithdrawReady -> WithdrawCompleted on
/// the matured path, or Deposited -> EarlyUnlocked -> WithdrawCompleted on
/// the penalized early-exit path.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum PositionState {
    /// Principal locked, upfront interest paid out
    Deposited,

    /// Maturity reached and the depositor asked for their principal back;
    /// waiting for the admin to stage funds in the withdrawal vault
    WithdrawRequested,

    /// Principal staged in the withdrawal vault, claimable now
    WithdrawReady,

    /// Principal returned; the record is closed in the same instruction
    WithdrawCompleted,

    /// Early exit settled: the refund was clawed back and the principal is
    /// claimable directly from the collateral vault
    EarlyUnlocked,
}

impl Default for PositionState {
    fn default() -> Self {
        PositionState::Deposited
    }
}

/// One depositor's escrow position.
///
/// This account is a PDA derived from [owner_pubkey]. One Position per
/// wallet; re-depositing requires completing the previous withdrawal first.
#[account]
#[derive(InitSpace)]
pub struct Position {
    // =========================================================================
    // Identity
    // =========================================================================

    /// The wallet that owns this position (same key used as the PDA seed)
    pub owner: Pubkey,

    // =========================================================================
    // Principal & Payout
    // =========================================================================

    /// Collateral principal locked, in collateral base units.
    /// Fixed at deposit time; zeroed when the final withdrawal pays out.
    pub amount: u64,

    /// Slot at which the lock began
    pub deposit_slot: u64,

    /// First slot at which the position may exit without penalty
    /// (deposit_slot + chosen period)
    pub unlock_slot: u64,

    /// Upfront interest already transferred to the owner, in interest base
    /// units. Written exactly once, at deposit.
    pub interest_received: u64,

    /// Commission chosen at deposit time, in basis points. Frozen for the
    /// life of the position.
    pub commission_rate: u64,

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Current state in the withdrawal state machine
    pub state: PositionState,

    /// Bump seed for this Position PDA
    pub bump: u8,
}

impl Position {
    /// Interest the owner must return to exit before the unlock slot.
    ///
    /// The clawback covers the unused part of the lock, weighted by the
    /// early-refund policy factor:
    ///
    ///   refund = interest_received * remaining_slots / total_slots * 50%
    ///
    /// computed as a single u128 ratio so truncation happens once, on the
    /// final amount. Returns 0 at or after the unlock slot.
    pub fn refund_due(&self, current_slot: u64) -> Result<u64> {
        if current_slot >= self.unlock_slot {
            return Ok(0);
        }

        let total_slots = self
            .unlock_slot
            .checked_sub(self.deposit_slot)
            .ok_or(error!(UpfrontError::MathUnderflow))?;
        let remaining_slots = self
            .unlock_slot
            .checked_sub(current_slot)
            .ok_or(error!(UpfrontError::MathUnderflow))?;

        let numerator = (self.interest_received as u128)
            .checked_mul(remaining_slots as u128)
            .ok_or(error!(UpfrontError::MathOverflow))?
            .checked_mul(EARLY_REFUND_FACTOR_BPS as u128)
            .ok_or(error!(UpfrontError::MathOverflow))?;

        let denominator = (total_slots as u128)
            .checked_mul(BPS_DENOMINATOR as u128)
            .ok_or(error!(UpfrontError::MathOverflow))?;

        let refund = numerator
            .checked_div(denominator)
            .ok_or(error!(UpfrontError::DivisionByZero))?;

        Ok(refund as u64)
    }
}
