//! Input record and heir types for the inheritance evaluator.
//!
//! The evaluator consumes a family-relationship record (`InheritanceCase`)
//! deserialized from JSON and builds a flat list of `Heir`s from it. Person
//! identities are taken as given; nothing here attempts name matching.

use serde::{Deserialize, Deserializer};

// ──────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────

/// Errors that can occur during evaluation.
///
/// Every error is local and deterministic: resubmitting the same record
/// reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A required top-level field is absent from the record.
    #[error("required field '{field}' not found")]
    MissingField { field: String },

    /// A value the evaluator must discriminate on is outside its recognized set.
    #[error("invalid value '{value}' for '{field}' (expected one of: {})", expected.join(", "))]
    InvalidEnumValue {
        field: String,
        value: String,
        expected: Vec<String>,
    },

    /// The record (or a nested person entry) could not be read.
    #[error("malformed inheritance record: {message}")]
    Malformed { message: String },

    /// Checked share arithmetic overflowed.
    #[error("share arithmetic overflow: {message}")]
    Overflow { message: String },
}

impl EvalError {
    /// True for errors caused by the shape or content of the input record,
    /// as opposed to failures of the calculation itself.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, EvalError::Overflow { .. })
    }
}

// ──────────────────────────────────────────────
// Enumerations
// ──────────────────────────────────────────────

/// Life status of a person in the family tree.
///
/// Anything other than the three recognized statuses (including a missing
/// or null status) reads as `Unknown`, which excludes the person from
/// heirship without raising an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonStatus {
    Alive,
    Deceased,
    SimultaneousDeath,
    #[default]
    Unknown,
}

impl PersonStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "alive" => PersonStatus::Alive,
            "deceased" => PersonStatus::Deceased,
            "simultaneous_death" => PersonStatus::SimultaneousDeath,
            _ => PersonStatus::Unknown,
        }
    }

    /// Died before (or together with) the deceased, so representation may apply.
    pub fn is_predeceased(self) -> bool {
        matches!(self, PersonStatus::Deceased | PersonStatus::SimultaneousDeath)
    }
}

/// Inheritance rank of an heir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Spouse,
    /// Children and their representatives.
    First,
    /// Lineal ascendants.
    Second,
    /// Siblings and their children.
    Third,
}

impl Rank {
    pub fn is_blood(self) -> bool {
        !matches!(self, Rank::Spouse)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Spouse => "spouse",
            Rank::First => "first",
            Rank::Second => "second",
            Rank::Third => "third",
        }
    }
}

/// Whether a sibling shares both parents with the deceased or only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BloodRelation {
    Full,
    Half,
}

pub const BLOOD_RELATION_FIELD: &str = "blood_relation";

impl BloodRelation {
    const VARIANTS: &'static [&'static str] = &["full", "half"];

    /// Read a sibling's blood relation. An absent value means full blood.
    pub fn from_field(value: Option<&str>) -> Result<Self, EvalError> {
        match value {
            None | Some("full") => Ok(BloodRelation::Full),
            Some("half") => Ok(BloodRelation::Half),
            Some(other) => Err(EvalError::InvalidEnumValue {
                field: BLOOD_RELATION_FIELD.to_string(),
                value: other.to_string(),
                expected: Self::VARIANTS.iter().map(|v| v.to_string()).collect(),
            }),
        }
    }
}

// ──────────────────────────────────────────────
// Input record
// ──────────────────────────────────────────────

/// A named party in the family tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRef {
    pub name: String,
    #[serde(default, deserialize_with = "status_or_unknown")]
    pub status: PersonStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub renounced: bool,
    /// The person's own descendants; only consulted for representation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<PersonRef>,
    /// Raw blood-relation tag, only meaningful on sibling entries. Kept as
    /// text so an unrecognized tag only fails when the evaluator needs it.
    #[serde(default, alias = "bloodRelation")]
    pub blood_relation: Option<String>,
}

impl PersonRef {
    /// Alive and has not renounced: inherits in their own right.
    pub fn is_eligible(&self) -> bool {
        self.status == PersonStatus::Alive && !self.renounced
    }

    /// Predeceased and has not renounced: their line may be represented.
    pub fn is_representable(&self) -> bool {
        self.status.is_predeceased() && !self.renounced
    }
}

/// The family-relationship record for one deceased person.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InheritanceCase {
    #[serde(alias = "deceasedName")]
    pub deceased_name: String,
    #[serde(alias = "hasSimultaneousDeath")]
    pub has_simultaneous_death: bool,
    #[serde(default)]
    pub spouse: Option<PersonRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<PersonRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parents: Vec<PersonRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub siblings: Vec<PersonRef>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn status_or_unknown<'de, D>(deserializer: D) -> Result<PersonStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .map(PersonStatus::parse)
        .unwrap_or_default())
}

// ──────────────────────────────────────────────
// Heirs
// ──────────────────────────────────────────────

/// A legally recognized heir, with an unreduced share once the share
/// calculator has run (0/1 before that).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heir {
    pub name: String,
    pub rank: Rank,
    pub is_substitute: bool,
    /// The direct heir this person stands in for. Substitutes with the same
    /// original heir share one division.
    pub original_heir_name: Option<String>,
    pub blood_relation: Option<BloodRelation>,
    pub share_numerator: u64,
    pub share_denominator: u64,
}

impl Heir {
    pub fn direct(name: &str, rank: Rank) -> Self {
        Heir {
            name: name.to_string(),
            rank,
            is_substitute: false,
            original_heir_name: None,
            blood_relation: None,
            share_numerator: 0,
            share_denominator: 1,
        }
    }

    pub fn substitute(name: &str, rank: Rank, original_heir: &str) -> Self {
        Heir {
            is_substitute: true,
            original_heir_name: Some(original_heir.to_string()),
            ..Heir::direct(name, rank)
        }
    }

    pub fn with_blood_relation(mut self, relation: BloodRelation) -> Self {
        self.blood_relation = Some(relation);
        self
    }

    /// Key of the division this heir belongs to.
    pub fn division_key(&self) -> &str {
        self.original_heir_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_half_blood(&self) -> bool {
        self.rank == Rank::Third && self.blood_relation == Some(BloodRelation::Half)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
