//! Heirship evaluator -- accepts a family-relationship record for a deceased
//! person, determines the statutory heirs and computes each heir's share.
//!
//! The evaluator is pure: it takes one record and returns one result, with
//! no I/O and no shared state. Independent cases can be evaluated in
//! parallel without coordination.
//!
//! Pipeline:
//! 1. Assemble the case from JSON (required fields, defaults)
//! 2. Resolve the spouse
//! 3. Run the rank cascade (with representation) for blood heirs
//! 4. Calculate shares
//! 5. Assemble the output record

pub mod assemble;
pub mod locale;
pub mod numeric;
pub mod rank;
pub mod result;
pub mod shares;
pub mod spouse;
pub mod substitution;
pub mod types;

pub use locale::Locale;
pub use numeric::Fraction;
pub use result::{ErrorEnvelope, HeirReport, InheritanceResult};
pub use types::{BloodRelation, EvalError, Heir, InheritanceCase, PersonRef, PersonStatus, Rank};

/// Evaluation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Language of labels, notes and error envelopes.
    pub locale: Locale,
}

/// Evaluate an inheritance record with default options.
///
/// # Arguments
/// * `record` - Inheritance record JSON (serde_json::Value)
///
/// # Returns
/// * `InheritanceResult` with the heirs and their shares, or an `EvalError`
pub fn calculate(record: &serde_json::Value) -> Result<InheritanceResult, EvalError> {
    calculate_with(record, &EvalOptions::default())
}

/// Evaluate an inheritance record with explicit options.
pub fn calculate_with(
    record: &serde_json::Value,
    options: &EvalOptions,
) -> Result<InheritanceResult, EvalError> {
    let case = assemble::assemble_case(record)?;
    calculate_case(&case, options)
}

/// Evaluate an already assembled case.
pub fn calculate_case(
    case: &InheritanceCase,
    options: &EvalOptions,
) -> Result<InheritanceResult, EvalError> {
    let heirs = determine_heirs(case)?;
    result::assemble_result(case, &heirs, options.locale)
}

/// Determine the heirs of a case with their shares set.
///
/// The spouse (if eligible) comes first, followed by the blood heirs of the
/// governing rank in the order they appear in the record.
pub fn determine_heirs(case: &InheritanceCase) -> Result<Vec<Heir>, EvalError> {
    let mut heirs = Vec::new();
    if let Some(spouse) = spouse::resolve_spouse(case.spouse.as_ref()) {
        heirs.push(spouse);
    }
    heirs.extend(rank::determine_blood_heirs(case)?);
    shares::calculate_shares(&mut heirs)?;
    Ok(heirs)
}

// ──────────────────────────────────────────────
// Integration tests
// ──────────────────────────────────────────────
