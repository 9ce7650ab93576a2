//! Statutory share calculation.
//!
//! Step 1 splits the estate between the spouse and the blood heirs according
//! to the governing blood rank. Step 2 divides the blood share into equal
//! divisions: each direct heir is one division and each line of substitutes
//! (same original heir) is one division, split equally among its members.
//! Step 3 halves the portion of a half-blood sibling or sibling line at
//! rank 3, relative to a full-blood sibling. When every sibling shares the
//! same blood relation there is nothing to halve against and step 3 is
//! skipped.
//!
//! Step 3 is applied to each heir independently, so when full-blood and
//! half-blood siblings are mixed the shares do not add up to the blood
//! share. That shortfall is reported by the result assembler and is not
//! renormalized here.

use std::collections::BTreeMap;

use crate::numeric::{checked_mul, Fraction};
use crate::types::{EvalError, Heir, Rank};

/// Spouse and blood-heir portions of the estate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstateSplit {
    pub spouse: Option<Fraction>,
    pub blood: Option<Fraction>,
}

/// Select the spouse/blood split for the governing blood rank.
pub fn estate_split(has_spouse: bool, blood_rank: Option<Rank>) -> EstateSplit {
    let (spouse, blood) = match blood_rank {
        None => (Fraction::WHOLE, None),
        Some(_) if !has_spouse => (Fraction::ZERO, Some(Fraction::WHOLE)),
        Some(Rank::First) => (Fraction::new(1, 2), Some(Fraction::new(1, 2))),
        Some(Rank::Second) => (Fraction::new(2, 3), Some(Fraction::new(1, 3))),
        Some(Rank::Third) | Some(Rank::Spouse) => {
            (Fraction::new(3, 4), Some(Fraction::new(1, 4)))
        }
    };
    EstateSplit {
        spouse: has_spouse.then_some(spouse),
        blood,
    }
}

/// Set every heir's share in place.
///
/// Blood heirs are expected to come from a single rank, as produced by the
/// rank cascade. An empty heir list (escheat) is left untouched.
pub fn calculate_shares(heirs: &mut [Heir]) -> Result<(), EvalError> {
    let has_spouse = heirs.iter().any(|h| h.rank == Rank::Spouse);
    let blood_rank = heirs.iter().find(|h| h.rank.is_blood()).map(|h| h.rank);
    if !has_spouse && blood_rank.is_none() {
        return Ok(());
    }

    let split = estate_split(has_spouse, blood_rank);
    tracing::debug!(
        blood_rank = blood_rank.map(Rank::as_str),
        spouse_share = ?split.spouse,
        blood_share = ?split.blood,
        "estate split selected"
    );

    if let Some(share) = split.spouse {
        for heir in heirs.iter_mut().filter(|h| h.rank == Rank::Spouse) {
            heir.share_numerator = share.numerator;
            heir.share_denominator = share.denominator;
        }
    }
    if let Some(share) = split.blood {
        distribute_blood_share(heirs, share)?;
    }
    Ok(())
}

/// Divide the blood share among divisions and substitution groups.
fn distribute_blood_share(heirs: &mut [Heir], total: Fraction) -> Result<(), EvalError> {
    let mut direct = 0u64;
    let mut group_sizes: BTreeMap<String, u64> = BTreeMap::new();
    for heir in heirs.iter().filter(|h| h.rank.is_blood()) {
        if heir.is_substitute {
            *group_sizes.entry(heir.division_key().to_string()).or_insert(0) += 1;
        } else {
            direct += 1;
        }
    }

    let divisions = direct + group_sizes.len() as u64;
    if divisions == 0 {
        return Ok(());
    }
    let base_denominator = checked_mul(total.denominator, divisions, "base denominator")?;
    let has_full_blood = heirs
        .iter()
        .any(|h| h.rank == Rank::Third && !h.is_half_blood());
    tracing::debug!(
        divisions,
        substitution_groups = group_sizes.len(),
        base_denominator,
        has_full_blood,
        "blood share divided"
    );

    for heir in heirs.iter_mut().filter(|h| h.rank.is_blood()) {
        let mut denominator = base_denominator;
        if has_full_blood && heir.is_half_blood() {
            denominator = checked_mul(denominator, 2, "half-blood denominator")?;
        }
        if heir.is_substitute {
            let group_size = group_sizes
                .get(heir.division_key())
                .copied()
                .unwrap_or(1);
            denominator = checked_mul(denominator, group_size, "substitution group denominator")?;
        }
        heir.share_numerator = total.numerator;
        heir.share_denominator = denominator;
    }
    Ok(())
}
