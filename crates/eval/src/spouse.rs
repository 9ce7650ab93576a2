//! Spouse eligibility.
//!
//! A spouse inherits only when alive and not renounced. Representation never
//! applies to a spouse: a predeceased spouse's children inherit (if at all)
//! as children of the deceased, not in the spouse's place.

use crate::types::{Heir, PersonRef, Rank};

/// Resolve the spouse entry into a spouse-rank heir, if eligible.
pub fn resolve_spouse(spouse: Option<&PersonRef>) -> Option<Heir> {
    let spouse = spouse?;
    if spouse.is_eligible() {
        tracing::debug!(name = %spouse.name, "spouse inherits");
        Some(Heir::direct(&spouse.name, Rank::Spouse))
    } else {
        tracing::debug!(
            name = %spouse.name,
            status = ?spouse.status,
            renounced = spouse.renounced,
            "spouse excluded"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PersonStatus;

    fn spouse(status: PersonStatus, renounced: bool) -> PersonRef {
        PersonRef {
            name: "Hanako".to_string(),
            status,
            renounced,
            children: Vec::new(),
            blood_relation: None,
        }
    }

    #[test]
    fn alive_spouse_inherits() {
        let heir = resolve_spouse(Some(&spouse(PersonStatus::Alive, false))).unwrap();
        assert_eq!(heir.name, "Hanako");
        assert_eq!(heir.rank, Rank::Spouse);
        assert!(!heir.is_substitute);
    }

    #[test]
    fn no_spouse_entry() {
        assert!(resolve_spouse(None).is_none());
    }

    #[test]
    fn renounced_spouse_excluded() {
        assert!(resolve_spouse(Some(&spouse(PersonStatus::Alive, true))).is_none());
    }

    #[test]
    fn predeceased_spouse_never_substituted() {
        let mut s = spouse(PersonStatus::Deceased, false);
        s.children.push(PersonRef {
            name: "Step child".to_string(),
            status: PersonStatus::Alive,
            renounced: false,
            children: Vec::new(),
            blood_relation: None,
        });
        assert!(resolve_spouse(Some(&s)).is_none());
        assert!(resolve_spouse(Some(&spouse(PersonStatus::SimultaneousDeath, false))).is_none());
    }

    #[test]
    fn unknown_status_spouse_excluded() {
        assert!(resolve_spouse(Some(&spouse(PersonStatus::Unknown, false))).is_none());
    }
}
