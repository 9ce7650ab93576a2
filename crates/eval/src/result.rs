//! Result assembly.
//!
//! Turns the computed heir list into the output record: localized labels,
//! unreduced fraction strings, percentages, and the advisory notes. Also
//! builds the error envelope callers print when evaluation fails.

use serde::Serialize;

use crate::locale::Locale;
use crate::numeric::Fraction;
use crate::types::{EvalError, Heir, InheritanceCase};

/// One heir as rendered in the output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeirReport {
    pub name: String,
    pub rank: String,
    pub is_substitute: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_heir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_relation: Option<String>,
    pub inheritance_share_fraction: String,
    pub inheritance_share_percentage: String,
}

/// The output record for one inheritance case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InheritanceResult {
    pub deceased_name: String,
    pub has_legal_heirs: bool,
    pub note: String,
    pub heirs: Vec<HeirReport>,
    /// Exact sum of all shares, reduced. Anything other than "1" means the
    /// half-blood rule left part of the estate unallocated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares_total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub important_notes: Vec<String>,
}

/// Failure output: `{error, message, suggestion}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub message: String,
    pub suggestion: String,
}

impl EvalError {
    pub fn envelope(&self, locale: Locale) -> ErrorEnvelope {
        let (kind, suggestion) = if self.is_input_error() {
            (locale.input_error_kind(), locale.input_error_suggestion())
        } else {
            (
                locale.calculation_error_kind(),
                locale.calculation_error_suggestion(),
            )
        };
        ErrorEnvelope {
            error: kind.to_string(),
            message: self.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}

/// Build the output record from the final heir list.
pub fn assemble_result(
    case: &InheritanceCase,
    heirs: &[Heir],
    locale: Locale,
) -> Result<InheritanceResult, EvalError> {
    let mut note = String::new();
    if case.has_simultaneous_death {
        note.push_str(locale.simultaneous_death_note());
    }

    if heirs.is_empty() {
        tracing::debug!(deceased = %case.deceased_name, "no legal heirs, estate escheats");
        note.push_str(locale.no_heirs_note());
        return Ok(InheritanceResult {
            deceased_name: case.deceased_name.clone(),
            has_legal_heirs: false,
            note,
            heirs: Vec::new(),
            shares_total: None,
            summary: Some(locale.escheat_summary().to_string()),
            important_notes: Vec::new(),
        });
    }

    let mut total = Fraction::ZERO;
    let mut reports = Vec::with_capacity(heirs.len());
    for heir in heirs {
        let share = Fraction::new(heir.share_numerator, heir.share_denominator);
        total = total.checked_add(share)?;
        reports.push(HeirReport {
            name: heir.name.clone(),
            rank: locale.rank_label(heir.rank).to_string(),
            is_substitute: heir.is_substitute,
            original_heir: if heir.is_substitute {
                heir.original_heir_name.clone()
            } else {
                None
            },
            blood_relation: heir
                .blood_relation
                .map(|r| locale.blood_relation_label(r).to_string()),
            inheritance_share_fraction: share.to_fraction_string(),
            inheritance_share_percentage: share.to_percentage_string()?,
        });
    }

    if !total.is_whole() {
        tracing::warn!(
            deceased = %case.deceased_name,
            total = %total.to_fraction_string(),
            "shares do not sum to the whole estate"
        );
    }

    Ok(InheritanceResult {
        deceased_name: case.deceased_name.clone(),
        has_legal_heirs: true,
        note,
        heirs: reports,
        shares_total: Some(total.to_fraction_string()),
        summary: None,
        important_notes: locale
            .important_notes()
            .iter()
            .map(|n| n.to_string())
            .collect(),
    })
}
