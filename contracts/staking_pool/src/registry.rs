use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

// Per-participant persistent storage uses tuple keys: (prefix, participant)
const STAKE_PREFIX: Symbol = symbol_short!("STK_INFO");

const DAY_IN_LEDGERS: u32 = 17_280;
const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
const TTL_EXTEND_TO: u32 = 60 * DAY_IN_LEDGERS;

// ── Types ────────────────────────────────────────────────────────────────────

/// A participant's single stake in the pool.
///
/// `amount == 0` means "no active stake". A withdraw removes the record
/// outright through [`clear`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeInfo {
    /// Principal currently staked.
    pub amount: i128,
    /// Baseline from which the unbanked reward is measured.
    pub user_start_time: u64,
    /// Reward already computed and banked but not yet paid.
    pub rewards_to_claim: i128,
    /// Earliest timestamp at which the principal may be withdrawn.
    pub lockup_end_time: u64,
}

impl StakeInfo {
    pub fn is_active(&self) -> bool {
        self.amount > 0
    }

    pub fn is_lockup_over(&self, now: u64) -> bool {
        now >= self.lockup_end_time
    }
}

// ── Storage helpers ──────────────────────────────────────────────────────────

fn stake_key(participant: &Address) -> (Symbol, Address) {
    (STAKE_PREFIX, participant.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn store(env: &Env, participant: &Address, info: &StakeInfo) {
    let key = stake_key(participant);
    env.storage().persistent().set(&key, info);
    extend_ttl(env, &key);
}

// ── Registry operations ──────────────────────────────────────────────────────

/// Returns the stake record of `participant`, if one exists.
pub fn get(env: &Env, participant: &Address) -> Option<StakeInfo> {
    let key = stake_key(participant);
    let info: Option<StakeInfo> = env.storage().persistent().get(&key);
    if info.is_some() {
        extend_ttl(env, &key);
    }
    info
}

/// Records a deposit of `added_amount` at `now`.
///
/// A new stake starts with no banked reward. For an existing stake the caller
/// must already have banked the reward accrued under the old baseline via
/// [`bank_reward`]; this only adds the principal and restarts the baseline
/// and the lockup for the combined balance.
///
/// Returns the stored record. The caller has already checked that
/// `added_amount` keeps `amount` within the pool cap, which bounds it far
/// below `i128::MAX`.
pub fn upsert_on_deposit(
    env: &Env,
    participant: &Address,
    added_amount: i128,
    now: u64,
    lockup_duration: u64,
) -> StakeInfo {
    let lockup_end_time = now.saturating_add(lockup_duration);
    let info = match get(env, participant) {
        Some(existing) if existing.is_active() => StakeInfo {
            amount: existing.amount.saturating_add(added_amount),
            user_start_time: now,
            rewards_to_claim: existing.rewards_to_claim,
            lockup_end_time,
        },
        _ => StakeInfo {
            amount: added_amount,
            user_start_time: now,
            rewards_to_claim: 0,
            lockup_end_time,
        },
    };
    store(env, participant, &info);
    info
}

/// Overwrites the banked reward and moves the accrual baseline to `now`.
///
/// `new_rewards_to_claim` must already include the reward accrued up to
/// `now`, otherwise that interval is lost.
pub fn bank_reward(env: &Env, participant: &Address, new_rewards_to_claim: i128, now: u64) {
    if let Some(mut info) = get(env, participant) {
        info.rewards_to_claim = new_rewards_to_claim;
        info.user_start_time = now;
        store(env, participant, &info);
    }
}

/// Removes the stake record, returning `participant` to the no-stake state.
pub fn clear(env: &Env, participant: &Address) {
    env.storage().persistent().remove(&stake_key(participant));
}
