use anchor_lang::prelude::*;

use crate::events::YieldEstimated;
use crate::math::{self, YieldSplit};
use crate::EstimateYield;

/// Advisory only: previews the yield split for a principal/rate/duration with
/// no commitment and no state mutation.
pub fn estimate_yield_split(
    _ctx: Context<EstimateYield>,
    principal: u128,
    annual_rate_bps: u64,
    duration_seconds: u64,
    split_bps: u64,
) -> Result<YieldSplit> {
    let split =
        math::estimate_yield_split(principal, annual_rate_bps, duration_seconds, split_bps)?;

    emit!(YieldEstimated {
        principal,
        annual_rate_bps,
        duration_seconds,
        split_bps,
        total_yield: split.total_yield,
        donation: split.donation,
        credit: split.credit,
        remainder: split.remainder,
    });

    Ok(split)
}
