#![no_std]

//! Single-pool token staking with a fixed annual rate and a per-deposit
//! lockup.
//!
//! Participants deposit the pool's staking token, accrue a simple
//! (non-compounding) reward proportional to the share of the staking window
//! that has elapsed since their baseline, and withdraw principal plus reward
//! once their lockup has passed. The pool pays rewards out of its own token
//! balance, which the admin is expected to pre-fund.

pub mod events;
pub mod pool;
pub mod registry;
pub mod rewards;

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

pub use pool::{PoolConfig, PoolState};
pub use registry::StakeInfo;

// ── Units ────────────────────────────────────────────────────────────────────

/// Seconds per lockup unit passed to `initialize`. Five units make one hour.
pub const LOCKUP_UNIT_SECONDS: u64 = 720;

/// Length of the staking window: 365 days.
pub const STAKING_DURATION: u64 = 365 * 24 * 60 * 60;

// ── Contract errors ──────────────────────────────────────────────────────────

/// Every failure aborts the invocation and rolls back its writes and
/// transfers.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle, auth and input      |
/// | 10 – 19 | Staking window                 |
/// | 20 – 29 | Participant stake              |
/// | 30 – 39 | Token ledger                   |
/// | 40 – 49 | Arithmetic                     |
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the pool admin.
    AccessDenied = 3,
    InvalidInput = 4,

    /// `start_staking` was already called.
    AlreadyStarted = 10,
    /// The operation needs the staking window to be open.
    PoolNotStarted = 11,

    ZeroAmount = 20,
    /// The deposit would push `total_staked` above the cap.
    CapExceeded = 21,
    NoActiveStake = 22,
    LockupNotOver = 23,

    /// The participant has not approved the pool for the deposit amount.
    InsufficientAllowance = 30,
    /// The participant's token balance is below the deposit amount.
    InsufficientBalance = 31,
    /// The pool's own token balance cannot cover the payout.
    PoolInsufficientFunds = 32,

    Overflow = 40,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingPoolContract;

#[contractimpl]
impl StakingPoolContract {
    // ── Lifecycle ───────────────────────────────────────────────────────────

    /// Configure the pool.
    ///
    /// * `staking_token` – token contract that is staked and paid out.
    /// * `apy`           – integer percent earned over a full staking window.
    /// * `lockup_units`  – lockup length in units of [`LOCKUP_UNIT_SECONDS`].
    /// * `cap`           – maximum cumulative principal held by the pool.
    pub fn initialize(
        env: Env,
        admin: Address,
        staking_token: Address,
        apy: u32,
        lockup_units: u64,
        cap: i128,
    ) -> Result<(), ContractError> {
        if pool::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if cap <= 0 {
            return Err(ContractError::InvalidInput);
        }
        let lockup_duration = lockup_units
            .checked_mul(LOCKUP_UNIT_SECONDS)
            .ok_or(ContractError::InvalidInput)?;

        let config = PoolConfig {
            admin: admin.clone(),
            staking_token: staking_token.clone(),
            apy,
            lockup_duration,
            staking_duration: STAKING_DURATION,
            cap,
        };
        pool::set_config(&env, &config);
        pool::set_state(&env, &PoolState::default());

        log!(&env, "pool initialized", admin, apy, lockup_duration, cap);
        events::publish_initialized(
            &env,
            admin,
            staking_token,
            apy,
            lockup_duration,
            STAKING_DURATION,
            cap,
        );

        Ok(())
    }

    /// Open the staking window at the current ledger time. Admin only, once.
    pub fn start_staking(env: Env, caller: Address) -> Result<(), ContractError> {
        let config = Self::load_config(&env)?;
        caller.require_auth();
        Self::require_admin(&config, &caller)?;

        let mut state = pool::get_state(&env);
        if state.started {
            return Err(ContractError::AlreadyStarted);
        }

        let now = env.ledger().timestamp();
        state.started = true;
        state.start_time = now;
        state.end_time = now
            .checked_add(config.staking_duration)
            .ok_or(ContractError::Overflow)?;
        pool::set_state(&env, &state);

        log!(&env, "staking started", state.start_time, state.end_time);
        events::publish_staking_started(&env, caller, state.start_time, state.end_time);

        Ok(())
    }

    // ── Participant operations ──────────────────────────────────────────────

    /// Stake `amount` tokens pulled from `participant` with `transfer_from`.
    ///
    /// The participant must have approved the pool for at least `amount`.
    /// Depositing on top of an active stake banks the reward accrued so far,
    /// then restarts both the accrual baseline and the lockup for the
    /// combined balance.
    pub fn deposit(env: Env, participant: Address, amount: i128) -> Result<(), ContractError> {
        let config = Self::load_config(&env)?;
        participant.require_auth();

        let now = env.ledger().timestamp();
        let mut state = Self::load_started_state(&env)?;

        if amount == 0 {
            return Err(ContractError::ZeroAmount);
        }
        if amount < 0 {
            return Err(ContractError::InvalidInput);
        }

        // Cap check and total update happen in this one invocation.
        let new_total = state
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        if new_total > config.cap {
            return Err(ContractError::CapExceeded);
        }

        let token = token::Client::new(&env, &config.staking_token);
        let pool_address = env.current_contract_address();
        if token.allowance(&participant, &pool_address) < amount {
            return Err(ContractError::InsufficientAllowance);
        }
        if token.balance(&participant) < amount {
            return Err(ContractError::InsufficientBalance);
        }

        // Bank what the old balance earned before the baseline moves.
        if let Some(existing) = registry::get(&env, &participant) {
            if existing.is_active() {
                let banked = Self::accrued_reward(&config, &state, &existing, now)?;
                registry::bank_reward(&env, &participant, banked, now);
            }
        }

        token.transfer_from(&pool_address, &participant, &pool_address, &amount);

        let info = registry::upsert_on_deposit(
            &env,
            &participant,
            amount,
            now,
            config.lockup_duration,
        );
        state.total_staked = new_total;
        pool::set_state(&env, &state);

        log!(&env, "deposit", participant, amount, info.amount, new_total);
        events::publish_staked(&env, participant, amount, new_total, info.lockup_end_time);

        Ok(())
    }

    /// Pay out the reward accrued so far and move the baseline to now.
    ///
    /// Returns the amount paid, which is 0 when nothing accrued since the
    /// last claim. The lockup is not affected.
    pub fn claim_reward(env: Env, participant: Address) -> Result<i128, ContractError> {
        let config = Self::load_config(&env)?;
        participant.require_auth();

        let now = env.ledger().timestamp();
        let state = Self::load_started_state(&env)?;
        let info = Self::load_active_stake(&env, &participant)?;

        let reward = Self::accrued_reward(&config, &state, &info, now)?;
        let token = token::Client::new(&env, &config.staking_token);
        Self::ensure_pool_covers(&env, &token, reward)?;

        registry::bank_reward(&env, &participant, 0, now);

        if reward > 0 {
            token.transfer(&env.current_contract_address(), &participant, &reward);
            events::publish_reward_claimed(&env, participant.clone(), reward);
        }
        log!(&env, "reward claimed", participant, reward);

        Ok(reward)
    }

    /// Return principal plus accrued reward and close the stake.
    ///
    /// Fails with `LockupNotOver` before the stake's lockup end. Returns the
    /// total amount paid.
    pub fn withdraw(env: Env, participant: Address) -> Result<i128, ContractError> {
        let config = Self::load_config(&env)?;
        participant.require_auth();

        let now = env.ledger().timestamp();
        let mut state = Self::load_started_state(&env)?;
        let info = Self::load_active_stake(&env, &participant)?;

        if !info.is_lockup_over(now) {
            return Err(ContractError::LockupNotOver);
        }

        let reward = Self::accrued_reward(&config, &state, &info, now)?;
        let payout = info
            .amount
            .checked_add(reward)
            .ok_or(ContractError::Overflow)?;
        let token = token::Client::new(&env, &config.staking_token);
        Self::ensure_pool_covers(&env, &token, payout)?;

        // Clear state before the transfer (checks-effects-interactions).
        registry::clear(&env, &participant);
        state.total_staked = state.total_staked.saturating_sub(info.amount);
        pool::set_state(&env, &state);

        token.transfer(&env.current_contract_address(), &participant, &payout);

        log!(&env, "withdraw", participant, info.amount, reward);
        events::publish_withdrawn(&env, participant, info.amount, reward, state.total_staked);

        Ok(payout)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Reward `participant` would receive if they claimed now. Never mutates
    /// state; 0 when there is no active stake.
    pub fn reward_of(env: Env, participant: Address) -> Result<i128, ContractError> {
        let config = Self::load_config(&env)?;
        let state = Self::load_started_state(&env)?;

        match registry::get(&env, &participant) {
            Some(info) if info.is_active() => {
                Self::accrued_reward(&config, &state, &info, env.ledger().timestamp())
            }
            _ => Ok(0),
        }
    }

    /// Stake record of `participant`; all fields are zero when there is none.
    pub fn stake_info_of(env: Env, participant: Address) -> StakeInfo {
        registry::get(&env, &participant).unwrap_or(StakeInfo {
            amount: 0,
            user_start_time: 0,
            rewards_to_claim: 0,
            lockup_end_time: 0,
        })
    }

    pub fn start_time(env: Env) -> Result<u64, ContractError> {
        Self::load_config(&env)?;
        Ok(Self::load_started_state(&env)?.start_time)
    }

    pub fn end_time(env: Env) -> Result<u64, ContractError> {
        Self::load_config(&env)?;
        Ok(Self::load_started_state(&env)?.end_time)
    }

    pub fn staking_duration(env: Env) -> Result<u64, ContractError> {
        Ok(Self::load_config(&env)?.staking_duration)
    }

    pub fn get_total_staked(env: Env) -> i128 {
        pool::get_state(&env).total_staked
    }

    /// Principal currently held across all active stakes.
    pub fn total_staked(env: Env) -> Result<i128, ContractError> {
        Self::load_config(&env)?;
        Ok(pool::get_state(&env).total_staked)
    }

    pub fn cap(env: Env) -> Result<i128, ContractError> {
        Ok(Self::load_config(&env)?.cap)
    }

    pub fn apy(env: Env) -> Result<u32, ContractError> {
        Ok(Self::load_config(&env)?.apy)
    }

    /// Lockup length in seconds.
    pub fn lockup_duration(env: Env) -> Result<u64, ContractError> {
        Ok(Self::load_config(&env)?.lockup_duration)
    }

    pub fn staking_token(env: Env) -> Result<Address, ContractError> {
        Ok(Self::load_config(&env)?.staking_token)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, ContractError> {
        Self::load_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        Ok(Self::load_config(&env)?.admin)
    }

    pub fn is_initialized(env: Env) -> bool {
        pool::has_config(&env)
    }

    pub fn is_started(env: Env) -> bool {
        pool::get_state(&env).started
    }

    // ── Admin hand-over ─────────────────────────────────────────────────────

    /// Nominate `successor` as the next pool admin. The nomination replaces
    /// any earlier one and takes effect only once the successor accepts.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        successor: Address,
    ) -> Result<(), ContractError> {
        let config = Self::load_config(&env)?;
        current_admin.require_auth();
        Self::require_admin(&config, &current_admin)?;

        pool::set_pending_admin(&env, &successor);

        log!(&env, "admin nominated", successor);
        events::publish_admin_handover(&env, config.admin, Some(successor));

        Ok(())
    }

    /// Called by the nominated successor to take over the pool.
    pub fn accept_admin(env: Env, successor: Address) -> Result<(), ContractError> {
        let config = Self::load_config(&env)?;
        successor.require_auth();

        let pending = pool::get_pending_admin(&env).ok_or(ContractError::InvalidInput)?;
        if successor != pending {
            return Err(ContractError::AccessDenied);
        }
        pool::install_admin(&env, config, &successor);

        log!(&env, "admin accepted", successor);
        events::publish_admin_handover(&env, successor, None);

        Ok(())
    }

    /// Drop the outstanding nomination. Admin only.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        let config = Self::load_config(&env)?;
        current_admin.require_auth();
        Self::require_admin(&config, &current_admin)?;

        pool::take_pending_admin(&env).ok_or(ContractError::InvalidInput)?;

        events::publish_admin_handover(&env, config.admin, None);

        Ok(())
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        pool::get_pending_admin(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn load_config(env: &Env) -> Result<PoolConfig, ContractError> {
        pool::get_config(env).ok_or(ContractError::NotInitialized)
    }

    fn load_started_state(env: &Env) -> Result<PoolState, ContractError> {
        let state = pool::get_state(env);
        if !state.started {
            return Err(ContractError::PoolNotStarted);
        }
        Ok(state)
    }

    fn load_active_stake(env: &Env, participant: &Address) -> Result<StakeInfo, ContractError> {
        registry::get(env, participant)
            .filter(StakeInfo::is_active)
            .ok_or(ContractError::NoActiveStake)
    }

    fn require_admin(config: &PoolConfig, caller: &Address) -> Result<(), ContractError> {
        if *caller != config.admin {
            return Err(ContractError::AccessDenied);
        }
        Ok(())
    }

    /// Banked reward plus what `info.amount` earned between its baseline and
    /// `now`, frozen at the end of the staking window.
    fn accrued_reward(
        config: &PoolConfig,
        state: &PoolState,
        info: &StakeInfo,
        now: u64,
    ) -> Result<i128, ContractError> {
        let elapsed_ppm = rewards::normalized_elapsed(
            now,
            info.user_start_time,
            state.end_time,
            config.staking_duration,
        );
        rewards::accrue(info.amount, config.apy, elapsed_ppm, info.rewards_to_claim)
            .ok_or(ContractError::Overflow)
    }

    fn ensure_pool_covers(
        env: &Env,
        token: &token::Client,
        payout: i128,
    ) -> Result<(), ContractError> {
        if token.balance(&env.current_contract_address()) < payout {
            return Err(ContractError::PoolInsufficientFunds);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;
