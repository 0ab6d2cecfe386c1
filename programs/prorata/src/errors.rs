use anchor_lang::prelude::*;

#[error_code]
pub enum ProrataError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Protocol paused")]
    Paused,

    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Invalid weight attribute for the pool's policy")]
    InvalidWeight,
    #[msg("Invalid basis points (must be <= 10000)")]
    InvalidBps,

    #[msg("Pool is not open")]
    PoolNotOpen,
    #[msg("Participant already registered for this pool")]
    DuplicateParticipant,
    #[msg("Participant not registered for this pool")]
    UnknownParticipant,
    #[msg("Pool participant capacity reached")]
    CapacityExceeded,
    #[msg("Pool not settled yet")]
    NotSettled,

    #[msg("Invalid participant capacity")]
    InvalidCapacity,
    #[msg("Stake below the pool minimum")]
    StakeBelowMinimum,
    #[msg("Pool total below the settlement threshold")]
    SettleBelowThreshold,
    #[msg("Invalid deadline")]
    InvalidDeadline,

    #[msg("Pool PDA mismatch")]
    PoolIdMismatch,
}
