use anchor_lang::prelude::*;

use crate::constants::{BPS_SCALE, SECONDS_PER_YEAR};
use crate::errors::ProrataError;
use crate::state::{ParticipantEntry, WeightPolicy};

// Synthetic allocator keys for the two legs of the advisory yield split.
const DONATION_LEG: Pubkey = Pubkey::new_from_array([0u8; 32]);
const CREDIT_LEG: Pubkey = Pubkey::new_from_array([1u8; 32]);

/// One claim on a pool: an opaque identity and its non-negative weight.
/// Order matters; entries are processed in registration order.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationEntry {
    pub key: Pubkey,
    pub weight: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payout {
    pub key: Pubkey,
    pub amount: u128,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationOutcome {
    /// Integer payout per entry, same order as the input.
    pub payouts: Vec<Payout>,
    /// Floor-truncation leftover, owed to the pool's fallback recipient.
    pub remainder: u128,
    pub total_weight: u128,
}

/// Advisory split of a projected yield between a donation leg and a
/// participant-credit leg.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct YieldSplit {
    pub total_yield: u128,
    pub donation: u128,
    pub credit: u128,
    pub remainder: u128,
}

/// Weight a participant actually settles with, derived from the final
/// attribute under the pool's policy. Unsubmitted work zeroes the claim for
/// stake- and rating-weighted pools; static weights always count.
pub fn effective_weight(policy: WeightPolicy, entry: &ParticipantEntry) -> u64 {
    match policy {
        WeightPolicy::StakeWeighted | WeightPolicy::RatingWeighted => {
            if entry.submitted {
                entry.attribute
            } else {
                0
            }
        }
        WeightPolicy::StaticWeighted => entry.attribute,
    }
}

/// Splits `total` across `entries` proportionally to weight.
///
/// Exact integer math: each payout is `total * weight / total_weight` with a
/// u128 multiply before the divide, so `sum(payouts) + remainder == total`
/// always holds. With `total_weight == 0` nobody is entitled to anything and
/// the whole pool becomes the remainder. Pure: no state, no clock.
pub fn allocate(total: u128, entries: &[AllocationEntry]) -> Result<AllocationOutcome> {
    let mut total_weight: u128 = 0;
    for entry in entries {
        total_weight = total_weight
            .checked_add(entry.weight as u128)
            .ok_or(ProrataError::MathOverflow)?;
    }

    if total_weight == 0 {
        let payouts = entries
            .iter()
            .map(|entry| Payout {
                key: entry.key,
                amount: 0,
            })
            .collect();
        return Ok(AllocationOutcome {
            payouts,
            remainder: total,
            total_weight: 0,
        });
    }

    let mut payouts = Vec::with_capacity(entries.len());
    let mut paid: u128 = 0;
    for entry in entries {
        let amount = total
            .checked_mul(entry.weight as u128)
            .ok_or(ProrataError::MathOverflow)?
            .checked_div(total_weight)
            .ok_or(ProrataError::MathOverflow)?;
        paid = paid
            .checked_add(amount)
            .ok_or(ProrataError::MathOverflow)?;
        payouts.push(Payout {
            key: entry.key,
            amount,
        });
    }

    // Strictly the accumulated floor truncation: in [0, entries.len() - 1].
    let remainder = total
        .checked_sub(paid)
        .ok_or(ProrataError::MathOverflow)?;

    Ok(AllocationOutcome {
        payouts,
        remainder,
        total_weight,
    })
}

/// Projected yield of `principal` at `annual_rate_bps` over
/// `duration_seconds`: `principal * rate * duration / (10000 * year)`,
/// floored. The rate is conventionally <= 10000 bps but not capped here.
pub fn estimate_yield(
    principal: u128,
    annual_rate_bps: u64,
    duration_seconds: u64,
) -> Result<u128> {
    let total_yield = principal
        .checked_mul(annual_rate_bps as u128)
        .ok_or(ProrataError::MathOverflow)?
        .checked_mul(duration_seconds as u128)
        .ok_or(ProrataError::MathOverflow)?
        .checked_div((BPS_SCALE as u128) * (SECONDS_PER_YEAR as u128))
        .ok_or(ProrataError::MathOverflow)?;

    Ok(total_yield)
}

/// Projects a yield and splits it `split_bps : (10000 - split_bps)` between
/// the donation and credit legs, through the same allocator as settlement, so
/// `donation + credit + remainder == total_yield` exactly. Advisory only.
pub fn estimate_yield_split(
    principal: u128,
    annual_rate_bps: u64,
    duration_seconds: u64,
    split_bps: u64,
) -> Result<YieldSplit> {
    require!(split_bps <= BPS_SCALE, ProrataError::InvalidBps);

    let total_yield = estimate_yield(principal, annual_rate_bps, duration_seconds)?;

    let entries = [
        AllocationEntry {
            key: DONATION_LEG,
            weight: split_bps,
        },
        AllocationEntry {
            key: CREDIT_LEG,
            weight: BPS_SCALE - split_bps,
        },
    ];
    let outcome = allocate(total_yield, &entries)?;

    Ok(YieldSplit {
        total_yield,
        donation: outcome.payouts[0].amount,
        credit: outcome.payouts[1].amount,
        remainder: outcome.remainder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(weights: &[u64]) -> Vec<AllocationEntry> {
        weights
            .iter()
            .map(|&weight| AllocationEntry {
                key: Pubkey::new_unique(),
                weight,
            })
            .collect()
    }

    fn assert_conserves(total: u128, entries: &[AllocationEntry]) -> AllocationOutcome {
        let outcome = allocate(total, entries).expect("allocate");
        let paid: u128 = outcome.payouts.iter().map(|p| p.amount).sum();
        assert_eq!(paid + outcome.remainder, total);
        outcome
    }

    #[test]
    fn equal_weights_split_with_unit_remainder() {
        let e = entries(&[1, 1, 1]);
        let outcome = assert_conserves(1000, &e);
        for payout in &outcome.payouts {
            assert_eq!(payout.amount, 333);
        }
        assert_eq!(outcome.remainder, 1);
    }

    #[test]
    fn zero_weight_entry_gets_nothing() {
        let e = entries(&[0, 10]);
        let outcome = assert_conserves(1000, &e);
        assert_eq!(outcome.payouts[0].amount, 0);
        assert_eq!(outcome.payouts[1].amount, 1000);
        assert_eq!(outcome.remainder, 0);
    }

    #[test]
    fn all_zero_weights_roll_back_to_remainder() {
        let e = entries(&[0, 0, 0, 0]);
        let outcome = assert_conserves(12_345, &e);
        assert!(outcome.payouts.iter().all(|p| p.amount == 0));
        assert_eq!(outcome.remainder, 12_345);
        assert_eq!(outcome.total_weight, 0);
    }

    #[test]
    fn empty_entry_set_is_all_remainder() {
        let outcome = assert_conserves(777, &[]);
        assert!(outcome.payouts.is_empty());
        assert_eq!(outcome.remainder, 777);
    }

    #[test]
    fn conservation_grid() {
        let totals: [u128; 4] = [0, 1, 10_000, (1u128 << 53) - 1];
        for &total in &totals {
            for n in 1..=50usize {
                // zero, one and a deterministic pseudo-random weight mix
                let weights: Vec<u64> = (0..n)
                    .map(|i| match i % 3 {
                        0 => 0,
                        1 => 1,
                        _ => (i as u64).wrapping_mul(2_654_435_761) % 9_973 + 1,
                    })
                    .collect();
                let e = entries(&weights);
                let outcome = assert_conserves(total, &e);
                if outcome.total_weight > 0 {
                    assert!(outcome.remainder < n as u128);
                }
            }
        }
    }

    #[test]
    fn raising_a_weight_never_lowers_its_payout() {
        let total = 999_983u128;
        let mut prev = 0u128;
        for w in [1u64, 5, 13, 50, 500, 5_000] {
            let e = entries(&[7, 13, w, 1]);
            let outcome = assert_conserves(total, &e);
            assert!(outcome.payouts[2].amount >= prev);
            prev = outcome.payouts[2].amount;
        }
    }

    #[test]
    fn heavier_weight_never_pays_less() {
        let weights = [3u64, 9, 9, 27, 1, 0];
        let e = entries(&weights);
        let outcome = assert_conserves(1_000_000_007, &e);
        for i in 0..weights.len() {
            for j in 0..weights.len() {
                if weights[i] <= weights[j] {
                    assert!(outcome.payouts[i].amount <= outcome.payouts[j].amount);
                }
            }
        }
    }

    #[test]
    fn insertion_order_is_preserved() {
        let e = entries(&[5, 2, 8]);
        let outcome = allocate(100, &e).unwrap();
        let got: Vec<Pubkey> = outcome.payouts.iter().map(|p| p.key).collect();
        let expected: Vec<Pubkey> = e.iter().map(|p| p.key).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn product_overflow_is_rejected() {
        let e = vec![
            AllocationEntry {
                key: Pubkey::new_unique(),
                weight: u64::MAX,
            },
            AllocationEntry {
                key: Pubkey::new_unique(),
                weight: 1,
            },
        ];
        assert!(allocate(u128::MAX, &e).is_err());
    }

    #[test]
    fn unsubmitted_work_zeroes_the_weight() {
        let mut entry = ParticipantEntry {
            key: Pubkey::new_unique(),
            attribute: 500,
            submitted: false,
            joined_slot: 0,
        };
        assert_eq!(effective_weight(WeightPolicy::StakeWeighted, &entry), 0);
        assert_eq!(effective_weight(WeightPolicy::RatingWeighted, &entry), 0);
        assert_eq!(effective_weight(WeightPolicy::StaticWeighted, &entry), 500);

        entry.submitted = true;
        assert_eq!(effective_weight(WeightPolicy::StakeWeighted, &entry), 500);
        assert_eq!(effective_weight(WeightPolicy::RatingWeighted, &entry), 500);
    }

    #[test]
    fn yield_formula_matches_reference_values() {
        // 1000 tokens at 18 decimals, 6% APR, 90 days, 25% donation split
        let principal: u128 = 1_000 * 10u128.pow(18);
        let total = estimate_yield(principal, 600, 7_776_000).unwrap();
        assert_eq!(total, 14_794_520_547_945_205_479);

        let split = estimate_yield_split(principal, 600, 7_776_000, 2_500).unwrap();
        assert_eq!(split.total_yield, total);
        assert_eq!(split.donation, 3_698_630_136_986_301_369);
        assert_eq!(split.credit, 11_095_890_410_958_904_109);
        assert_eq!(split.donation + split.credit + split.remainder, total);
    }

    #[test]
    fn zero_principal_or_duration_yields_nothing() {
        assert_eq!(estimate_yield(1_000_000, 600, 0).unwrap(), 0);
        assert_eq!(estimate_yield(0, 600, 3_600).unwrap(), 0);
    }

    #[test]
    fn full_split_sends_everything_one_way() {
        let split =
            estimate_yield_split(10_000_000, 1_000, SECONDS_PER_YEAR, BPS_SCALE).unwrap();
        assert_eq!(split.total_yield, 1_000_000);
        assert_eq!(split.donation, split.total_yield);
        assert_eq!(split.credit, 0);
        assert_eq!(split.remainder, 0);
    }

    #[test]
    fn split_bps_above_scale_is_rejected() {
        assert!(estimate_yield_split(1_000, 600, 86_400, BPS_SCALE + 1).is_err());
    }

    #[test]
    fn estimator_overflow_is_rejected() {
        assert!(estimate_yield(u128::MAX, 2, 1).is_err());
    }
}
