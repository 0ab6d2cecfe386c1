use anchor_lang::prelude::*;

use crate::errors::ProrataError;
use crate::events::{PoolFunded, PoolSettled};
use crate::state::AllocationSummary;
use crate::{ClosePool, FundPool, GetResult, SettlePool};

pub fn fund_pool(ctx: Context<FundPool>, pool_id: u64, amount: u64) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, ProrataError::Paused);

    let pool = &mut ctx.accounts.pool;
    require!(pool.pool_id == pool_id, ProrataError::PoolIdMismatch);
    require_keys_eq!(
        pool.authority,
        ctx.accounts.authority.key(),
        ProrataError::Unauthorized
    );

    if amount == 0 {
        return Ok(());
    }

    pool.fund(amount)?;

    emit!(PoolFunded {
        pool_id,
        amount,
        new_total: pool.total,
    });

    Ok(())
}

pub fn settle_pool(
    ctx: Context<SettlePool>,
    pool_id: u64,
    fallback_recipient: Pubkey,
) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, ProrataError::Paused);

    let pool = &mut ctx.accounts.pool;
    require!(pool.pool_id == pool_id, ProrataError::PoolIdMismatch);
    require_keys_eq!(
        pool.authority,
        ctx.accounts.authority.key(),
        ProrataError::Unauthorized
    );

    let current_slot = Clock::get()?.slot;
    pool.settle(fallback_recipient, current_slot)?;

    let summary = pool.summary()?;
    msg!(
        "Pool {} settled: paid {} across {} participants, remainder {}",
        pool_id,
        summary.paid_total,
        summary.participant_count,
        summary.remainder
    );

    emit!(PoolSettled {
        pool_id,
        total: summary.total,
        total_weight: summary.total_weight,
        paid_total: summary.paid_total,
        remainder: summary.remainder,
        participant_count: summary.participant_count,
        fallback_recipient,
    });

    Ok(())
}

pub fn get_result(ctx: Context<GetResult>, pool_id: u64) -> Result<AllocationSummary> {
    let pool = &ctx.accounts.pool;
    require!(pool.pool_id == pool_id, ProrataError::PoolIdMismatch);

    pool.summary()
}

pub fn close_pool(ctx: Context<ClosePool>, pool_id: u64) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require!(!cfg.paused, ProrataError::Paused);

    let pool = &ctx.accounts.pool;
    require!(pool.pool_id == pool_id, ProrataError::PoolIdMismatch);
    require_keys_eq!(
        pool.authority,
        ctx.accounts.authority.key(),
        ProrataError::Unauthorized
    );

    // Rent comes back only once the stored result is final.
    require!(!pool.is_open(), ProrataError::NotSettled);

    // The account closing is handled by the `close = authority` constraint.
    Ok(())
}
