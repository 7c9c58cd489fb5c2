//! Fixed-point reward math.
//!
//! Both helpers are pure: they read nothing from storage and never mutate
//! state. All divisions truncate toward zero, and the order of operations in
//! [`accrue`] is part of its contract. Reordering the steps changes rounding
//! by a few base units.

/// Scale of the elapsed fraction: parts per million.
pub const PPM: u64 = 1_000_000;

/// Divisor turning an integer percent into a ratio.
pub const PERCENT: i128 = 100;

/// Fraction of the staking window, in parts per million, that has elapsed
/// since `user_start`.
///
/// Before `pool_end` the fraction follows `now`. From `pool_end` onward it is
/// measured against `pool_end` itself, so it stops growing once the window
/// has closed. A baseline at or after the point of measurement yields 0, as
/// does a zero `pool_duration`.
pub fn normalized_elapsed(now: u64, user_start: u64, pool_end: u64, pool_duration: u64) -> u64 {
    if pool_duration == 0 {
        return 0;
    }

    let measured_until = if now < pool_end { now } else { pool_end };
    let elapsed = measured_until
        .saturating_sub(user_start)
        .min(pool_duration);
    let remaining = pool_duration - elapsed;

    // (duration - remaining) * PPM fits in u128 for every u64 duration.
    let fraction = (pool_duration - remaining) as u128 * PPM as u128 / pool_duration as u128;
    fraction as u64
}

/// Reward owed on `amount` at `apy` percent after `elapsed_ppm` of the
/// window, added to whatever was already banked.
///
/// Evaluated strictly as
/// `amount * apy / 100 * elapsed_ppm / 1_000_000 + previously_accrued`,
/// left to right. Returns `None` if any step overflows.
pub fn accrue(
    amount: i128,
    apy: u32,
    elapsed_ppm: u64,
    previously_accrued: i128,
) -> Option<i128> {
    amount
        .checked_mul(apy as i128)?
        .checked_div(PERCENT)?
        .checked_mul(elapsed_ppm as i128)?
        .checked_div(PPM as i128)?
        .checked_add(previously_accrued)
}
