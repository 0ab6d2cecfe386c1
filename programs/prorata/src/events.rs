use anchor_lang::prelude::*;

use crate::state::WeightPolicy;

// --- ADMIN ---

#[event]
pub struct PauseChanged {
    pub paused: bool,
}

// --- POOL LIFECYCLE ---

#[event]
pub struct PoolCreated {
    pub pool_id: u64,
    pub authority: Pubkey,
    pub policy: WeightPolicy,
    pub total: u64,
    pub max_participants: u16,
    pub deadline_ts: i64,
}

#[event]
pub struct ParticipantRegistered {
    pub pool_id: u64,
    pub participant: Pubkey,
    pub attribute: u64,
}

#[event]
pub struct AttributeUpdated {
    pub pool_id: u64,
    pub participant: Pubkey,
    pub attribute: u64,
    pub submitted: bool,
}

#[event]
pub struct PoolFunded {
    pub pool_id: u64,
    pub amount: u64,
    pub new_total: u64,
}

// --- SETTLEMENT ---

#[event]
pub struct PoolSettled {
    pub pool_id: u64,
    pub total: u64,
    pub total_weight: u128,
    pub paid_total: u64,
    pub remainder: u64,
    pub participant_count: u16,
    pub fallback_recipient: Pubkey,
}

// --- ESTIMATOR ---

#[event]
pub struct YieldEstimated {
    pub principal: u128,
    pub annual_rate_bps: u64,
    pub duration_seconds: u64,
    pub split_bps: u64,
    pub total_yield: u128,
    pub donation: u128,
    pub credit: u128,
    pub remainder: u128,
}
