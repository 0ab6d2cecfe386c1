use anchor_lang::prelude::*;

use crate::errors::ProrataError;
use crate::events::{AttributeUpdated, ParticipantRegistered};
use crate::{RegisterParticipant, UpdateAttribute};

pub fn register_participant(
    ctx: Context<RegisterParticipant>,
    pool_id: u64,
    participant: Pubkey,
    attribute: u64,
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
    pool.register_entry(participant, attribute, current_slot)?;

    emit!(ParticipantRegistered {
        pool_id,
        participant,
        attribute,
    });

    Ok(())
}

pub fn update_attribute(
    ctx: Context<UpdateAttribute>,
    pool_id: u64,
    participant: Pubkey,
    attribute: u64,
    submitted: bool,
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

    pool.update_entry(&participant, attribute, submitted)?;

    emit!(AttributeUpdated {
        pool_id,
        participant,
        attribute,
        submitted,
    });

    Ok(())
}
