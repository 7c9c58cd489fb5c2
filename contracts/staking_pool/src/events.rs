#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is configured.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub staking_token: Address,
    pub apy: u32,
    pub lockup_duration: u64,
    pub staking_duration: u64,
    pub cap: i128,
    pub timestamp: u64,
}

/// Fired once when the admin opens the staking window.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingStartedEvent {
    pub admin: Address,
    pub start_time: u64,
    pub end_time: u64,
}

/// Fired when a participant deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub participant: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub lockup_end_time: u64,
    pub timestamp: u64,
}

/// Fired when a participant is paid a non-zero reward by `claim_reward`.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub participant: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a participant withdraws principal and reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub participant: Address,
    pub principal: i128,
    pub reward: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired at each step of the admin hand-over. `admin` is the admin after the
/// step and `pending` the successor still waiting to accept, if any.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminHandoverEvent {
    pub admin: Address,
    pub pending: Option<Address>,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    staking_token: Address,
    apy: u32,
    lockup_duration: u64,
    staking_duration: u64,
    cap: i128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            staking_token,
            apy,
            lockup_duration,
            staking_duration,
            cap,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staking_started(env: &Env, admin: Address, start_time: u64, end_time: u64) {
    env.events().publish(
        (symbol_short!("STARTED"),),
        StakingStartedEvent {
            admin,
            start_time,
            end_time,
        },
    );
}

pub fn publish_staked(
    env: &Env,
    participant: Address,
    amount: i128,
    new_total_staked: i128,
    lockup_end_time: u64,
) {
    env.events().publish(
        (symbol_short!("STAKED"), participant.clone()),
        StakedEvent {
            participant,
            amount,
            new_total_staked,
            lockup_end_time,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, participant: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLMD"), participant.clone()),
        RewardClaimedEvent {
            participant,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    participant: Address,
    principal: i128,
    reward: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), participant.clone()),
        WithdrawnEvent {
            participant,
            principal,
            reward,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_handover(env: &Env, admin: Address, pending: Option<Address>) {
    env.events().publish(
        (symbol_short!("ADMIN"), admin.clone()),
        AdminHandoverEvent {
            admin,
            pending,
            timestamp: env.ledger().timestamp(),
        },
    );
}
