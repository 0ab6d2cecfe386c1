use anchor_lang::prelude::*;

use crate::constants::{MAX_PARTICIPANTS, MAX_RATING};
use crate::errors::ProrataError;
use crate::math::{allocate, effective_weight, AllocationEntry};

#[account]
#[derive(InitSpace)]
pub struct Config {
    pub admin: Pubkey,
    pub bump: u8,
    pub paused: bool,
    pub version: u16,
}

#[account]
#[derive(InitSpace)]
pub struct PoolRegistry {
    pub admin: Pubkey,
    pub bump: u8,
    pub next_pool_id: u64,
    pub version: u16,
}

#[repr(u8)]
pub enum PoolState {
    Open = 0,
    Settled = 1,
}

/// How a participant's stored attribute turns into a settlement weight.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum WeightPolicy {
    /// Weight = staked amount, gated on work having been submitted.
    StakeWeighted,
    /// Weight = 0-5 peer rating, gated on work having been submitted.
    RatingWeighted,
    /// Weight = configured integer, always eligible.
    StaticWeighted,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct ParticipantEntry {
    pub key: Pubkey,
    /// Interpreted per the pool policy: stake amount, rating, or static weight.
    pub attribute: u64,
    pub submitted: bool,
    pub joined_slot: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct PayoutEntry {
    pub key: Pubkey,
    pub amount: u64,
}

/// Compact settlement readout, small enough for return data.
/// The full payout table is read from the pool account itself.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationSummary {
    pub pool_id: u64,
    pub total: u64,
    pub total_weight: u128,
    pub paid_total: u64,
    pub remainder: u64,
    pub participant_count: u16,
    pub fallback_recipient: Pubkey,
}

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub pool_id: u64,
    pub bump: u8,
    pub state: u8,

    /// Creator; the only signer allowed to mutate this pool.
    pub authority: Pubkey,
    pub policy: WeightPolicy,

    /// Pool value in smallest indivisible units.
    pub total: u64,

    /// Per-pool participant cap; 0 = bounded only by MAX_PARTICIPANTS.
    pub max_participants: u16,
    /// Registration gate for stake-weighted pools.
    pub min_stake: u64,
    /// Settlement refused while total is below this.
    pub settle_threshold: u64,
    /// Stored for callers; never consulted by the engine.
    pub deadline_ts: i64,

    pub created_slot: u64,
    pub settled_slot: u64,

    /// Receives the remainder; recorded at settlement.
    pub fallback_recipient: Pubkey,
    pub total_weight: u128,
    pub remainder: u64,

    #[max_len(MAX_PARTICIPANTS)]
    pub participants: Vec<ParticipantEntry>,
    #[max_len(MAX_PARTICIPANTS)]
    pub payouts: Vec<PayoutEntry>,

    pub version: u16,
}

impl Pool {
    pub fn is_open(&self) -> bool {
        self.state == PoolState::Open as u8
    }

    pub fn find_participant(&self, key: &Pubkey) -> Option<usize> {
        self.participants.iter().position(|p| p.key == *key)
    }

    fn validate_attribute(&self, attribute: u64) -> Result<()> {
        match self.policy {
            WeightPolicy::StakeWeighted => {
                require!(attribute >= self.min_stake, ProrataError::StakeBelowMinimum);
            }
            WeightPolicy::RatingWeighted => {
                require!(attribute <= MAX_RATING, ProrataError::InvalidWeight);
            }
            WeightPolicy::StaticWeighted => {}
        }
        Ok(())
    }

    /// Inserts a new participant. Submission starts false; for static pools
    /// the flag is irrelevant (the weight counts regardless).
    pub fn register_entry(
        &mut self,
        key: Pubkey,
        attribute: u64,
        current_slot: u64,
    ) -> Result<()> {
        require!(self.is_open(), ProrataError::PoolNotOpen);
        require!(
            self.find_participant(&key).is_none(),
            ProrataError::DuplicateParticipant
        );
        require!(
            self.participants.len() < MAX_PARTICIPANTS,
            ProrataError::CapacityExceeded
        );
        if self.max_participants > 0 {
            require!(
                self.participants.len() < self.max_participants as usize,
                ProrataError::CapacityExceeded
            );
        }
        self.validate_attribute(attribute)?;

        self.participants.push(ParticipantEntry {
            key,
            attribute,
            submitted: false,
            joined_slot: current_slot,
        });
        Ok(())
    }

    /// The only pre-settlement mutation path: records a submission or
    /// replaces the weight-determining attribute (e.g. a reviewer's rating).
    pub fn update_entry(&mut self, key: &Pubkey, attribute: u64, submitted: bool) -> Result<()> {
        require!(self.is_open(), ProrataError::PoolNotOpen);
        let idx = self
            .find_participant(key)
            .ok_or(ProrataError::UnknownParticipant)?;
        self.validate_attribute(attribute)?;

        let entry = &mut self.participants[idx];
        entry.attribute = attribute;
        entry.submitted = submitted;
        Ok(())
    }

    /// Adds value to the pool while it is still open.
    pub fn fund(&mut self, amount: u64) -> Result<()> {
        require!(self.is_open(), ProrataError::PoolNotOpen);
        self.total = self
            .total
            .checked_add(amount)
            .ok_or(ProrataError::MathOverflow)?;
        Ok(())
    }

    /// Effective (key, weight) set in registration order, derived from each
    /// participant's attribute as it stands right now.
    pub fn weight_snapshot(&self) -> Vec<AllocationEntry> {
        self.participants
            .iter()
            .map(|p| AllocationEntry {
                key: p.key,
                weight: effective_weight(self.policy, p),
            })
            .collect()
    }

    /// One-shot settlement: snapshots weights, computes the payout table and
    /// flips the pool to Settled. A second call fails with PoolNotOpen and
    /// cannot touch the stored result.
    pub fn settle(&mut self, fallback_recipient: Pubkey, current_slot: u64) -> Result<()> {
        require!(self.is_open(), ProrataError::PoolNotOpen);
        require!(
            self.total >= self.settle_threshold,
            ProrataError::SettleBelowThreshold
        );

        let entries = self.weight_snapshot();
        let outcome = allocate(self.total as u128, &entries)?;

        // Build the full table before committing anything.
        let mut payouts = Vec::with_capacity(outcome.payouts.len());
        for payout in &outcome.payouts {
            let amount =
                u64::try_from(payout.amount).map_err(|_| ProrataError::MathOverflow)?;
            payouts.push(PayoutEntry {
                key: payout.key,
                amount,
            });
        }
        let remainder =
            u64::try_from(outcome.remainder).map_err(|_| ProrataError::MathOverflow)?;

        self.payouts = payouts;
        self.remainder = remainder;
        self.total_weight = outcome.total_weight;
        self.fallback_recipient = fallback_recipient;
        self.settled_slot = current_slot;
        self.state = PoolState::Settled as u8;
        Ok(())
    }

    /// The stored Allocation Result, available only once settled.
    pub fn allocation(&self) -> Result<(&[PayoutEntry], u64)> {
        require!(!self.is_open(), ProrataError::NotSettled);
        Ok((&self.payouts, self.remainder))
    }

    /// Settled payout for one key; a registered-but-ineligible participant
    /// reads as 0, same as an unknown key.
    pub fn payout_of(&self, key: &Pubkey) -> Result<u64> {
        let (payouts, _) = self.allocation()?;
        Ok(payouts
            .iter()
            .find(|p| p.key == *key)
            .map(|p| p.amount)
            .unwrap_or(0))
    }

    pub fn summary(&self) -> Result<AllocationSummary> {
        let (payouts, remainder) = self.allocation()?;
        let paid_total: u64 = payouts.iter().map(|p| p.amount).sum();
        Ok(AllocationSummary {
            pool_id: self.pool_id,
            total: self.total,
            total_weight: self.total_weight,
            paid_total,
            remainder,
            participant_count: payouts.len() as u16,
            fallback_recipient: self.fallback_recipient,
        })
    }
}
