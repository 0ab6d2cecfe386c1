// Centralized Protocol Constants

// -----------------
// Seeds
// -----------------
pub const CONFIG_SEED: &[u8] = b"config_v1";
pub const POOL_REGISTRY_SEED: &[u8] = b"pool_registry_v1";
pub const POOL_SEED: &[u8] = b"pool_v1";

// Limits & Scales
// ===============

/// Hard cap on participants per pool. The pool account stores its participant
/// set and payout table inline, so account size (fixed at init) bounds the
/// entry count no matter what per-pool cap the creator picks.
pub const MAX_PARTICIPANTS: usize = 64;

/// Discrete peer-review scale for rating-weighted pools: 0 (no credit) to 5.
pub const MAX_RATING: u64 = 5;

/// Basis-point denominator. 10000 = 100%.
pub const BPS_SCALE: u64 = 10_000;

/// 365-day year; the basis annual rates are quoted against.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;
