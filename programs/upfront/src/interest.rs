// =============================================================================
// Interest & Discount Engine
// =============================================================================
// Pure arithmetic for the UPFRONT payout model. No accounts, no side
// effects - every function here maps numbers to numbers so the deposit
// handler, clients previewing a payout, and the unit tests all run the
// exact same code.
//
// Pipeline for a deposit:
// 1. Valuation:   value = amount * price_factor        (interest base units)
// 2. Tiered APY:  full rate up to the threshold, reduced rate above it
// 3. Pro-ration:  apy * period_slots / slots_per_year
// 4. Commission:  rate * (1 - commission)
// 5. Risk buffer: rate * (1 - buffer), optional caller-side haircut
// 6. Discounting: payout = value * rate / (1 + rate)
//
// Step 6 is what makes the payout "upfront": principal plus the discounted
// interest, reinvested at the period rate, reconstructs the full nominal
// return at maturity.
//
// All rates travel as u128 scaled by RATE_PRECISION (1.0 = 1,000,000);
// basis-point inputs lift by x100 on entry. Every step truncates toward
// zero, so the vault never pays out more than the real-valued formula.
// =============================================================================

use anchor_lang::prelude::*;

use crate::constants::{
    BPS_DENOMINATOR, RATE_PRECISION, SLOTS_PER_YEAR, TIER_RATE_SPREAD_BPS, TIER_THRESHOLD,
    WORST_CASE_APY_BPS,
};
use crate::error::UpfrontError;

/// Lift a basis-point rate onto the engine's internal scale.
/// Widening to u128 first makes the multiply unable to overflow.
pub fn rate_from_bps(rate_bps: u64) -> u128 {
    rate_bps as u128 * (RATE_PRECISION / BPS_DENOMINATOR as u128)
}

/// USD-like valuation of a collateral amount, in interest base units
pub fn collateral_value(amount: u64, price_factor: u64) -> Result<u128> {
    (amount as u128)
        .checked_mul(price_factor as u128)
        .ok_or(error!(UpfrontError::MathOverflow))
}

/// Annualized rate for a given valuation, on the internal scale.
///
/// Valuation up to TIER_THRESHOLD earns the full base rate. Above it, the
/// first threshold's worth still earns the full rate and only the excess
/// earns the reduced rate, so the blended APY is monotonically
/// non-increasing in the valuation:
///
///   apy = (T * r_hi + (value - T) * r_lo) / value
pub fn tiered_apy(value: u128, base_rate_bps: u64) -> Result<u128> {
    let full_rate = rate_from_bps(base_rate_bps);
    let threshold = TIER_THRESHOLD as u128;

    if value <= threshold {
        return Ok(full_rate);
    }

    let reduced_rate = rate_from_bps(base_rate_bps.saturating_sub(TIER_RATE_SPREAD_BPS));
    let above_threshold = value
        .checked_sub(threshold)
        .ok_or(error!(UpfrontError::MathUnderflow))?;

    let weighted = threshold
        .checked_mul(full_rate)
        .ok_or(error!(UpfrontError::MathOverflow))?
        .checked_add(
            above_threshold
                .checked_mul(reduced_rate)
                .ok_or(error!(UpfrontError::MathOverflow))?,
        )
        .ok_or(error!(UpfrontError::MathOverflow))?;

    weighted
        .checked_div(value)
        .ok_or(error!(UpfrontError::DivisionByZero))
}

/// Pro-rate an annualized rate over a lock period measured in slots.
/// Month-multiple periods divide the year exactly, so the common
/// configurations (1, 3, 6, 12 months) lose nothing to truncation here.
pub fn period_rate(apy: u128, period_slots: u64) -> Result<u128> {
    apy.checked_mul(period_slots as u128)
        .ok_or(error!(UpfrontError::MathOverflow))?
        .checked_div(SLOTS_PER_YEAR as u128)
        .ok_or(error!(UpfrontError::DivisionByZero))
}

/// Scale a rate down by a basis-point haircut: rate * (1 - cut).
/// Used twice per deposit: once for the commission, once for the voluntary
/// risk buffer.
pub fn apply_haircut(rate: u128, cut_bps: u64) -> Result<u128> {
    let kept_bps = BPS_DENOMINATOR
        .checked_sub(cut_bps)
        .ok_or(error!(UpfrontError::MathUnderflow))?;

    rate.checked_mul(kept_bps as u128)
        .ok_or(error!(UpfrontError::MathOverflow))?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(error!(UpfrontError::DivisionByZero))
}

/// Discount a nominal return to its present value:
///
///   payout = value * rate / (1 + rate)
///
/// Truncates on the final division. A zero valuation or zero rate pays
/// zero without ever dividing.
pub fn present_value(value: u128, rate: u128) -> Result<u64> {
    if value == 0 || rate == 0 {
        return Ok(0);
    }

    let denominator = RATE_PRECISION
        .checked_add(rate)
        .ok_or(error!(UpfrontError::MathOverflow))?;

    let payout = value
        .checked_mul(rate)
        .ok_or(error!(UpfrontError::MathOverflow))?
        .checked_div(denominator)
        .ok_or(error!(UpfrontError::DivisionByZero))?;

    u64::try_from(payout).map_err(|_| error!(UpfrontError::MathOverflow))
}

/// The whole deposit pipeline: how much upfront interest a deposit earns.
///
/// `buffer_bps` is the depositor's voluntary risk buffer; the escrow itself
/// always deposits with a zero buffer and leaves the haircut to
/// payout-preview tooling.
pub fn upfront_interest(
    amount: u64,
    price_factor: u64,
    base_rate_bps: u64,
    period_slots: u64,
    commission_bps: u64,
    buffer_bps: u64,
) -> Result<u64> {
    let value = collateral_value(amount, price_factor)?;
    if value == 0 {
        return Ok(0);
    }

    let apy = tiered_apy(value, base_rate_bps)?;
    let rate = period_rate(apy, period_slots)?;
    let rate = apply_haircut(rate, commission_bps)?;
    let rate = apply_haircut(rate, buffer_bps)?;

    present_value(value, rate)
}

/// Smallest risk buffer (basis points) that keeps the conservative return
/// at or above the worst-case APY floor:
///
///   min_buffer = clamp(1 - worst / (apy * (1 - commission)), 0, 1)
///
/// `apy` is on the internal scale (pass `tiered_apy` output, or
/// `rate_from_bps` for a raw rate). The kept share is rounded up, which
/// rounds the buffer down, so the buffered return never dips under the
/// floor. Returns 0 when even a zero buffer cannot reach the floor.
pub fn min_risk_buffer_bps(apy: u128, commission_bps: u64) -> Result<u64> {
    let net = apply_haircut(apy, commission_bps)?;
    if net == 0 {
        return Ok(0);
    }

    let floor = rate_from_bps(WORST_CASE_APY_BPS);
    if floor >= net {
        return Ok(0);
    }

    let scaled = floor
        .checked_mul(BPS_DENOMINATOR as u128)
        .ok_or(error!(UpfrontError::MathOverflow))?;
    let kept_bps = scaled
        .checked_add(net - 1)
        .ok_or(error!(UpfrontError::MathOverflow))?
        .checked_div(net)
        .ok_or(error!(UpfrontError::DivisionByZero))?;

    Ok((BPS_DENOMINATOR as u128).saturating_sub(kept_bps) as u64)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SLOTS_PER_MONTH;

    /// 0.2 BTC in 8-decimal base units
    const AMOUNT: u64 = 20_000_000;
    /// Maps 8-decimal BTC to 6-decimal USD at 100,000 USD/BTC
    const PRICE_FACTOR: u64 = 1_000;
    /// 21.32% reference APY
    const BASE_RATE_BPS: u64 = 2_132;

    fn usd(whole: u128) -> u128 {
        whole * 1_000_000
    }

    #[test]
    fn flat_rate_at_or_below_tier_threshold() {
        assert_eq!(tiered_apy(usd(5_000_000), BASE_RATE_BPS).unwrap(), 213_200);
        assert_eq!(tiered_apy(usd(10_000_000), BASE_RATE_BPS).unwrap(), 213_200);
        assert_eq!(tiered_apy(0, BASE_RATE_BPS).unwrap(), 213_200);
    }

    #[test]
    fn tier_blend_matches_weighted_average() {
        // 15M: first 10M at 21.32%, the 5M above at 14.32%
        let apy = tiered_apy(usd(15_000_000), BASE_RATE_BPS).unwrap();
        assert_eq!(apy, 189_866);

        let reference = (10.0 * 0.2132 + 5.0 * 0.1432) / 15.0 * 1_000_000.0;
        assert!((apy as f64 - reference).abs() <= 1.0);
    }

    #[test]
    fn tier_blend_monotone_non_increasing() {
        let mut last = tiered_apy(usd(10_000_000), BASE_RATE_BPS).unwrap();
        for millions in [11_u128, 12, 15, 20, 50, 100] {
            let apy = tiered_apy(usd(millions * 1_000_000), BASE_RATE_BPS).unwrap();
            assert!(apy <= last, "APY rose at {}M", millions);
            last = apy;
        }
    }

    #[test]
    fn period_rate_prorates_exactly_for_month_multiples() {
        let apy = rate_from_bps(BASE_RATE_BPS);
        assert_eq!(period_rate(apy, 3 * SLOTS_PER_MONTH).unwrap(), 53_300);
        assert_eq!(period_rate(apy, 6 * SLOTS_PER_MONTH).unwrap(), 106_600);
        assert_eq!(period_rate(apy, 12 * SLOTS_PER_MONTH).unwrap(), 213_200);
    }

    #[test]
    fn upfront_payout_matches_discount_formula() {
        // 21.32% APY, 3-month lock, 20% commission, no buffer.
        // payout = V * r / (1 + r) with r = 0.2132 * 0.25 * 0.8 = 0.04264
        let payout = upfront_interest(
            AMOUNT,
            PRICE_FACTOR,
            BASE_RATE_BPS,
            3 * SLOTS_PER_MONTH,
            2_000,
            0,
        )
        .unwrap();
        assert_eq!(payout, 817_923_732);

        let value = (AMOUNT as f64) * (PRICE_FACTOR as f64);
        let rate = 0.2132 * 0.25 * 0.8;
        let reference = value * rate / (1.0 + rate);
        assert!((payout as f64 - reference).abs() <= 2.0);
    }

    #[test]
    fn zero_value_or_zero_rate_pays_zero() {
        let period = 3 * SLOTS_PER_MONTH;
        assert_eq!(
            upfront_interest(0, PRICE_FACTOR, BASE_RATE_BPS, period, 2_000, 0).unwrap(),
            0
        );
        assert_eq!(
            upfront_interest(AMOUNT, 0, BASE_RATE_BPS, period, 2_000, 0).unwrap(),
            0
        );
        assert_eq!(
            upfront_interest(AMOUNT, PRICE_FACTOR, 0, period, 2_000, 0).unwrap(),
            0
        );
    }

    #[test]
    fn full_commission_pays_zero() {
        let payout = upfront_interest(
            AMOUNT,
            PRICE_FACTOR,
            BASE_RATE_BPS,
            3 * SLOTS_PER_MONTH,
            BPS_DENOMINATOR,
            0,
        )
        .unwrap();
        assert_eq!(payout, 0);
    }

    #[test]
    fn present_value_truncates_toward_zero() {
        // real value just under 1 must pay 0, never 1
        assert_eq!(present_value(1_000_000, 1).unwrap(), 0);
    }

    #[test]
    fn minimum_buffer_holds_the_worst_case_floor() {
        let apy = rate_from_bps(BASE_RATE_BPS);
        let buffer = min_risk_buffer_bps(apy, 2_000).unwrap();
        assert_eq!(buffer, 8_241);

        // conservative return at that buffer sits on the floor: never
        // below it, and within one basis-point step above it
        let net = apply_haircut(apy, 2_000).unwrap();
        let conservative = apply_haircut(net, buffer).unwrap();
        let floor = rate_from_bps(WORST_CASE_APY_BPS);
        assert!(conservative >= floor);
        assert!(conservative - floor <= net / BPS_DENOMINATOR as u128 + 1);
    }

    #[test]
    fn minimum_buffer_is_zero_when_floor_unreachable() {
        // net APY already below the floor: no buffer can help
        let apy = rate_from_bps(WORST_CASE_APY_BPS);
        assert_eq!(min_risk_buffer_bps(apy, 1_000).unwrap(), 0);
        // degenerate: 100% commission nets to zero
        assert_eq!(min_risk_buffer_bps(apy, BPS_DENOMINATOR).unwrap(), 0);
    }

    #[test]
    fn buffered_conservative_return_stays_above_floor_across_commissions() {
        let apy = rate_from_bps(BASE_RATE_BPS);
        let floor = rate_from_bps(WORST_CASE_APY_BPS);
        for commission_bps in [0_u64, 500, 1_000, 2_000, 5_000, 8_000] {
            let net = apply_haircut(apy, commission_bps).unwrap();
            let buffer = min_risk_buffer_bps(apy, commission_bps).unwrap();
            if net > floor {
                let conservative = apply_haircut(net, buffer).unwrap();
                assert!(
                    conservative >= floor,
                    "floor broken at commission {}",
                    commission_bps
                );
            } else {
                assert_eq!(buffer, 0);
            }
        }
    }
}
