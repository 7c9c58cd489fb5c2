use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const STATE: Symbol = symbol_short!("STATE");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");

const DAY_IN_LEDGERS: u32 = 17_280;
const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
const TTL_EXTEND_TO: u32 = 60 * DAY_IN_LEDGERS;

// ── Types ────────────────────────────────────────────────────────────────────

/// Parameters fixed by `initialize`. Only `admin` may change afterwards,
/// through the two-step hand-over.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub admin: Address,
    pub staking_token: Address,
    /// Integer percent earned over a full staking window.
    pub apy: u32,
    /// Seconds a deposit stays locked.
    pub lockup_duration: u64,
    /// Seconds between `start_time` and `end_time`.
    pub staking_duration: u64,
    /// Upper bound on `total_staked`.
    pub cap: i128,
}

/// Mutable pool-wide accounting.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// One-way latch set by `start_staking`.
    pub started: bool,
    pub start_time: u64,
    pub end_time: u64,
    pub total_staked: i128,
}

// ── Storage helpers ──────────────────────────────────────────────────────────

/// Extends the TTL of the instance storage, which holds every pool-wide key.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn get_config(env: &Env) -> Option<PoolConfig> {
    env.storage().instance().get(&CONFIG)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&CONFIG, config);
    extend_instance_ttl(env);
}

/// Returns the pool accounting, or the unstarted default if none is stored.
pub fn get_state(env: &Env) -> PoolState {
    env.storage().instance().get(&STATE).unwrap_or_default()
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&STATE, state);
    extend_instance_ttl(env);
}

pub fn get_pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_ADMIN)
}

pub fn set_pending_admin(env: &Env, successor: &Address) {
    env.storage().instance().set(&PENDING_ADMIN, successor);
    extend_instance_ttl(env);
}

/// Removes and returns the nominated successor, if any.
pub fn take_pending_admin(env: &Env) -> Option<Address> {
    let pending = get_pending_admin(env)?;
    env.storage().instance().remove(&PENDING_ADMIN);
    Some(pending)
}

/// Makes `successor` the admin in `config` and clears the nomination.
pub fn install_admin(env: &Env, mut config: PoolConfig, successor: &Address) {
    config.admin = successor.clone();
    set_config(env, &config);
    env.storage().instance().remove(&PENDING_ADMIN);
}
