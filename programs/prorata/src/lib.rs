use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use math::*;
pub use state::*;

use solana_security_txt::security_txt;

security_txt! {
    // Required fields
    name: "Prorata Engine",
    project_url: "https://prorata.dev",
    contacts: "email:security@prorata.dev,link:https://github.com/prorata-labs/prorata/issues",
    policy: "https://github.com/prorata-labs/prorata/blob/main/SECURITY.md",

    // Optional fields
    preferred_languages: "en",
    source_code: "https://github.com/prorata-labs/prorata"
}

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod prorata {
    use super::*;
    use crate::instructions::{admin, estimate, participant, settle};

    pub fn initialize_config(ctx: Context<InitializeConfig>) -> Result<()> {
        admin::initialize_config(ctx)
    }

    pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
        admin::set_pause(ctx, paused)
    }

    pub fn close_config(ctx: Context<CloseConfig>) -> Result<()> {
        admin::close_config(ctx)
    }

    pub fn initialize_pool_registry(
        ctx: Context<InitializePoolRegistry>,
        start_pool_id: u64,
    ) -> Result<()> {
        admin::initialize_pool_registry(ctx, start_pool_id)
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
        admin::create_pool(
            ctx,
            pool_id,
            policy,
            total,
            max_participants,
            min_stake,
            settle_threshold,
            deadline_ts,
        )
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
        admin::create_pool_auto(
            ctx,
            policy,
            total,
            max_participants,
            min_stake,
            settle_threshold,
            deadline_ts,
        )
    }

    // core
    pub fn register_participant(
        ctx: Context<RegisterParticipant>,
        pool_id: u64,
        participant: Pubkey,
        attribute: u64,
    ) -> Result<()> {
        participant::register_participant(ctx, pool_id, participant, attribute)
    }

    pub fn update_attribute(
        ctx: Context<UpdateAttribute>,
        pool_id: u64,
        participant: Pubkey,
        attribute: u64,
        submitted: bool,
    ) -> Result<()> {
        participant::update_attribute(ctx, pool_id, participant, attribute, submitted)
    }

    pub fn fund_pool(ctx: Context<FundPool>, pool_id: u64, amount: u64) -> Result<()> {
        settle::fund_pool(ctx, pool_id, amount)
    }

    pub fn settle_pool(
        ctx: Context<SettlePool>,
        pool_id: u64,
        fallback_recipient: Pubkey,
    ) -> Result<()> {
        settle::settle_pool(ctx, pool_id, fallback_recipient)
    }

    pub fn get_result(ctx: Context<GetResult>, pool_id: u64) -> Result<AllocationSummary> {
        settle::get_result(ctx, pool_id)
    }

    pub fn close_pool(ctx: Context<ClosePool>, pool_id: u64) -> Result<()> {
        settle::close_pool(ctx, pool_id)
    }

    // advisory, read-only
    pub fn estimate_yield_split(
        ctx: Context<EstimateYield>,
        principal: u128,
        annual_rate_bps: u64,
        duration_seconds: u64,
        split_bps: u64,
    ) -> Result<YieldSplit> {
        estimate::estimate_yield_split(ctx, principal, annual_rate_bps, duration_seconds, split_bps)
    }
}
