use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ProrataError;
use crate::events::{PauseChanged, PoolCreated};
use crate::state::{PoolState, WeightPolicy};
use crate::{
    CloseConfig, CreatePool, CreatePoolAuto, InitializeConfig, InitializePoolRegistry, SetPause,
};

pub fn initialize_config(ctx: Context<InitializeConfig>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    cfg.admin = ctx.accounts.admin.key();
    cfg.bump = ctx.bumps.config;
    cfg.paused = false;
    cfg.version = INITIAL_VERSION;

    Ok(())
}

pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), ProrataError::Unauthorized);
    cfg.paused = paused;

    emit!(PauseChanged { paused });

    Ok(())
}

pub fn close_config(_ctx: Context<CloseConfig>) -> Result<()> {
    // The account closing is handled by the `close = admin` constraint in the context.
    Ok(())
}

pub fn initialize_pool_registry(
    ctx: Context<InitializePoolRegistry>,
    start_pool_id: u64,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(cfg.admin, ctx.accounts.admin.key(), ProrataError::Unauthorized);

    let registry = &mut ctx.accounts.pool_registry;
    registry.admin = cfg.admin;
    registry.bump = ctx.bumps.pool_registry;
    registry.next_pool_id = start_pool_id;
    registry.version = INITIAL_VERSION;

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn create_pool(
    ctx: Context<CreatePool>,
    pool_id: u64,
    policy: WeightPolicy,
    total: u64,
    max_participants: u16,
    min_stake: u64,
    settle_threshold: u64,
    deadline_ts: i64,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, ProrataError::Paused);
    require!(
        max_participants as usize <= MAX_PARTICIPANTS,
        ProrataError::InvalidCapacity
    );
    require!(deadline_ts >= 0, ProrataError::InvalidDeadline);

    let current_slot = Clock::get()?.slot;

    let pool = &mut ctx.accounts.pool;
    pool.pool_id = pool_id;
    pool.bump = ctx.bumps.pool;
    pool.state = PoolState::Open as u8;

    pool.authority = ctx.accounts.authority.key();
    pool.policy = policy;
    pool.total = total;

    pool.max_participants = max_participants;
    pool.min_stake = min_stake;
    pool.settle_threshold = settle_threshold;
    pool.deadline_ts = deadline_ts;

    pool.created_slot = current_slot;
    pool.settled_slot = 0;

    pool.fallback_recipient = Pubkey::default();
    pool.total_weight = 0;
    pool.remainder = 0;
    pool.participants = Vec::new();
    pool.payouts = Vec::new();

    pool.version = INITIAL_VERSION;

    emit!(PoolCreated {
        pool_id,
        authority: pool.authority,
        policy,
        total,
        max_participants,
        deadline_ts,
    });

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn create_pool_auto(
    ctx: Context<CreatePoolAuto>,
    policy: WeightPolicy,
    total: u64,
    max_participants: u16,
    min_stake: u64,
    settle_threshold: u64,
    deadline_ts: i64,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, ProrataError::Paused);
    require!(
        max_participants as usize <= MAX_PARTICIPANTS,
        ProrataError::InvalidCapacity
    );
    require!(deadline_ts >= 0, ProrataError::InvalidDeadline);

    let current_slot = Clock::get()?.slot;

    let registry = &mut ctx.accounts.pool_registry;
    let pool_id = registry.next_pool_id;

    let pool = &mut ctx.accounts.pool;
    pool.pool_id = pool_id;
    pool.bump = ctx.bumps.pool;
    pool.state = PoolState::Open as u8;

    pool.authority = ctx.accounts.authority.key();
    pool.policy = policy;
    pool.total = total;

    pool.max_participants = max_participants;
    pool.min_stake = min_stake;
    pool.settle_threshold = settle_threshold;
    pool.deadline_ts = deadline_ts;

    pool.created_slot = current_slot;
    pool.settled_slot = 0;

    pool.fallback_recipient = Pubkey::default();
    pool.total_weight = 0;
    pool.remainder = 0;
    pool.participants = Vec::new();
    pool.payouts = Vec::new();

    pool.version = INITIAL_VERSION;

    registry.next_pool_id = registry
        .next_pool_id
        .checked_add(1)
        .ok_or(ProrataError::MathOverflow)?;

    emit!(PoolCreated {
        pool_id,
        authority: pool.authority,
        policy,
        total,
        max_participants,
        deadline_ts,
    });

    Ok(())
}
