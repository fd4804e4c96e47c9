use super::*;
use anchor_lang::prelude::*;

fn test_config() -> PoolConfig {
    PoolConfig {
        interest_mint: Pubkey::new_unique(),
        collateral_mint: Pubkey::new_unique(),
        base_interest_rate: 2_132,
        price_factor: 1_000,
        min_commission_rate: 1_000,
        max_commission_rate: 5_000,
        min_deposit_amount: 100_000,
        max_deposit_amount: 10_000_000_000,
        deposit_periods: vec![SLOTS_PER_MONTH, 3 * SLOTS_PER_MONTH, 6 * SLOTS_PER_MONTH],
        bump: 255,
        authority_bump: 255,
        collateral_vault_bump: 255,
        interest_vault_bump: 255,
        withdrawal_vault_bump: 255,
    }
}

fn open_position(
    config: &PoolConfig,
    owner: Pubkey,
    amount: u64,
    period_slots: u64,
    commission_rate: u64,
    deposit_slot: u64,
) -> Position {
    let payout = interest::upfront_interest(
        amount,
        config.price_factor,
        config.base_interest_rate,
        period_slots,
        commission_rate,
        0,
    )
    .unwrap();

    Position {
        owner,
        amount,
        deposit_slot,
        unlock_slot: deposit_slot + period_slots,
        interest_received: payout,
        commission_rate,
        state: PositionState::Deposited,
        bump: 254,
    }
}

#[test]
fn config_validation_accepts_equal_bounds() {
    let mut config = test_config();
    config.min_commission_rate = 2_000;
    config.max_commission_rate = 2_000;
    config.min_deposit_amount = 500_000;
    config.max_deposit_amount = 500_000;

    assert!(config.validate().is_ok());
}

#[test]
fn config_validation_rejects_inverted_bounds() {
    let mut config = test_config();
    config.min_commission_rate = 3_000;
    config.max_commission_rate = 1_000;
    assert!(config.validate().is_err());

    let mut config = test_config();
    config.min_deposit_amount = 2_000_000;
    config.max_deposit_amount = 1_000_000;
    assert!(config.validate().is_err());

    let mut config = test_config();
    config.max_commission_rate = BPS_DENOMINATOR + 1;
    assert!(config.validate().is_err());

    let mut config = test_config();
    config.price_factor = 0;
    assert!(config.validate().is_err());
}

#[test]
fn config_validation_polices_the_period_list() {
    let mut config = test_config();
    config.deposit_periods = vec![];
    assert!(config.validate().is_err());

    let mut config = test_config();
    config.deposit_periods = vec![SLOTS_PER_MONTH, 0];
    assert!(config.validate().is_err());

    let mut config = test_config();
    config.deposit_periods = vec![SLOTS_PER_MONTH; MAX_DEPOSIT_PERIODS + 1];
    assert!(config.validate().is_err());

    let mut config = test_config();
    config.deposit_periods = vec![SLOTS_PER_MONTH; MAX_DEPOSIT_PERIODS];
    assert!(config.validate().is_ok());
}

#[test]
fn deposit_bounds_are_inclusive() {
    let config = test_config();

    assert!(config.check_deposit_amount(config.min_deposit_amount).is_ok());
    assert!(config.check_deposit_amount(config.max_deposit_amount).is_ok());
    assert!(config
        .check_deposit_amount(config.min_deposit_amount - 1)
        .is_err());
    assert!(config
        .check_deposit_amount(config.max_deposit_amount + 1)
        .is_err());
}

#[test]
fn commission_bounds_are_inclusive() {
    let config = test_config();

    assert!(config
        .check_commission_rate(config.min_commission_rate)
        .is_ok());
    assert!(config
        .check_commission_rate(config.max_commission_rate)
        .is_ok());
    assert!(config
        .check_commission_rate(config.min_commission_rate - 1)
        .is_err());
    assert!(config
        .check_commission_rate(config.max_commission_rate + 1)
        .is_err());
}

#[test]
fn only_configured_periods_are_accepted() {
    let config = test_config();

    assert!(config.check_deposit_period(SLOTS_PER_MONTH).is_ok());
    assert!(config.check_deposit_period(3 * SLOTS_PER_MONTH).is_ok());
    assert!(config.check_deposit_period(2 * SLOTS_PER_MONTH).is_err());
    assert!(config.check_deposit_period(SLOTS_PER_MONTH + 1).is_err());
    assert!(config.check_deposit_period(0).is_err());
}

#[test]
fn matured_lifecycle_conserves_every_token() {
    let config = test_config();
    let owner = Pubkey::new_unique();

    let amount = 20_000_000u64;
    let period = 3 * SLOTS_PER_MONTH;
    let deposit_slot = 1_000u64;

    // token ledgers, one entry per holder
    let mut wallet_collateral = amount;
    let mut wallet_interest = 0u64;
    let mut collateral_vault = 0u64;
    let mut interest_vault = 1_000_000_000u64;
    let mut withdrawal_vault = 0u64;
    let mut admin_collateral = 0u64;
    let mut admin_interest = 0u64;

    let collateral_supply =
        wallet_collateral + collateral_vault + withdrawal_vault + admin_collateral;
    let interest_supply = wallet_interest + interest_vault + admin_interest;

    // deposit: principal in, upfront interest out
    let mut position = open_position(&config, owner, amount, period, 2_000, deposit_slot);
    assert_eq!(position.interest_received, 817_923_732);

    wallet_collateral -= amount;
    collateral_vault += amount;
    interest_vault -= position.interest_received;
    wallet_interest += position.interest_received;

    assert_eq!(position.state, PositionState::Deposited);
    assert_eq!(
        wallet_collateral + collateral_vault + withdrawal_vault + admin_collateral,
        collateral_supply
    );
    assert_eq!(
        wallet_interest + interest_vault + admin_interest,
        interest_supply
    );

    // admin sweeps the idle principal off-platform
    admin_collateral += collateral_vault;
    collateral_vault = 0;

    // maturity: no refund is owed once the unlock slot is reached
    assert_eq!(position.refund_due(position.unlock_slot).unwrap(), 0);
    position.state = PositionState::WithdrawRequested;

    // admin stages the principal for collection
    admin_collateral -= position.amount;
    withdrawal_vault += position.amount;
    position.state = PositionState::WithdrawReady;

    // depositor collects from the withdrawal vault
    withdrawal_vault -= position.amount;
    wallet_collateral += position.amount;
    position.amount = 0;
    position.state = PositionState::WithdrawCompleted;

    assert_eq!(wallet_collateral, amount);
    assert_eq!(wallet_interest, 817_923_732);
    assert_eq!(withdrawal_vault, 0);
    assert_eq!(
        wallet_collateral + collateral_vault + withdrawal_vault + admin_collateral,
        collateral_supply
    );
    assert_eq!(
        wallet_interest + interest_vault + admin_interest,
        interest_supply
    );
}

#[test]
fn early_exit_refunds_half_the_unused_interest() {
    let owner = Pubkey::new_unique();
    let mut position = Position {
        owner,
        amount: 200_000,
        deposit_slot: 0,
        unlock_slot: 1_000_000,
        interest_received: 600_000,
        commission_rate: 2_000,
        state: PositionState::Deposited,
        bump: 254,
    };

    // halfway through the lock, half the interest is unused; the policy
    // claws back half of that
    let refund = position.refund_due(500_000).unwrap();
    assert_eq!(refund, 150_000);

    // ledgers around the early exit
    let mut wallet_interest = position.interest_received;
    let mut interest_vault = 0u64;
    let mut collateral_vault = position.amount;
    let mut wallet_collateral = 0u64;

    wallet_interest -= refund;
    interest_vault += refund;
    position.state = PositionState::EarlyUnlocked;

    assert_eq!(wallet_interest, 450_000);
    assert_eq!(interest_vault, 150_000);

    // principal comes straight from the collateral vault
    collateral_vault -= position.amount;
    wallet_collateral += position.amount;
    position.amount = 0;
    position.state = PositionState::WithdrawCompleted;

    assert_eq!(wallet_collateral, 200_000);
    assert_eq!(collateral_vault, 0);
}

#[test]
fn refund_shrinks_as_the_lock_runs_down() {
    let position = Position {
        owner: Pubkey::new_unique(),
        amount: 200_000,
        deposit_slot: 0,
        unlock_slot: 1_000_000,
        interest_received: 600_000,
        commission_rate: 2_000,
        state: PositionState::Deposited,
        bump: 254,
    };

    // immediately after depositing the whole lock is unused, so the
    // clawback is exactly half of what was paid
    assert_eq!(position.refund_due(0).unwrap(), 300_000);

    let mut last = u64::MAX;
    for slot in [0u64, 100_000, 250_000, 500_000, 750_000, 999_999, 1_000_000] {
        let refund = position.refund_due(slot).unwrap();
        assert!(refund <= position.interest_received);
        assert!(refund <= last, "refund rose at slot {}", slot);
        last = refund;
    }

    assert_eq!(position.refund_due(1_000_000).unwrap(), 0);
    assert_eq!(position.refund_due(u64::MAX).unwrap(), 0);
}
