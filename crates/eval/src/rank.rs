//! Blood-heir rank cascade.
//!
//! Ranks are tried in order: descendants, then ascendants, then collaterals.
//! The first rank that yields at least one heir (direct or by representation)
//! wins and lower ranks are never evaluated. If no rank yields an heir the
//! blood side contributes nothing.

use crate::substitution::{resolve_descendants, resolve_nephews_nieces};
use crate::types::{BloodRelation, EvalError, Heir, InheritanceCase, PersonRef, Rank};

/// Cascade position while searching for the governing blood rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CascadeState {
    TryRank1,
    TryRank2,
    TryRank3,
    NoBloodHeirs,
}

/// Determine the blood heirs of the governing rank.
///
/// Every returned heir has the same rank. An empty result means no blood
/// heirs exist.
pub fn determine_blood_heirs(case: &InheritanceCase) -> Result<Vec<Heir>, EvalError> {
    let mut state = CascadeState::TryRank1;
    loop {
        let (heirs, next) = match state {
            CascadeState::TryRank1 => (first_rank(&case.children), CascadeState::TryRank2),
            CascadeState::TryRank2 => (second_rank(&case.parents), CascadeState::TryRank3),
            CascadeState::TryRank3 => (third_rank(&case.siblings)?, CascadeState::NoBloodHeirs),
            CascadeState::NoBloodHeirs => {
                tracing::debug!("no blood heirs at any rank");
                return Ok(Vec::new());
            }
        };

        if let Some(first) = heirs.first() {
            tracing::debug!(
                rank = first.rank.as_str(),
                count = heirs.len(),
                "blood rank satisfied"
            );
            return Ok(heirs);
        }
        state = next;
    }
}

/// Rank 1: children, with representation of predeceased children to any depth.
///
/// A renounced child is treated as never having been an heir, so their
/// descendants do not represent them.
fn first_rank(children: &[PersonRef]) -> Vec<Heir> {
    let mut heirs = Vec::new();
    for child in children {
        if child.is_eligible() {
            heirs.push(Heir::direct(&child.name, Rank::First));
        } else if child.is_representable() {
            heirs.extend(resolve_descendants(child));
        }
    }
    heirs
}

/// Rank 2: living parents only. The ascendant line has no representation.
fn second_rank(parents: &[PersonRef]) -> Vec<Heir> {
    parents
        .iter()
        .filter(|p| p.is_eligible())
        .map(|p| Heir::direct(&p.name, Rank::Second))
        .collect()
}

/// Rank 3: siblings, with one generation of representation.
fn third_rank(siblings: &[PersonRef]) -> Result<Vec<Heir>, EvalError> {
    let mut heirs = Vec::new();
    for sibling in siblings {
        if sibling.is_eligible() {
            let relation = BloodRelation::from_field(sibling.blood_relation.as_deref())?;
            heirs.push(Heir::direct(&sibling.name, Rank::Third).with_blood_relation(relation));
        } else if sibling.is_representable() {
            // The tag is only read once a nephew or niece actually inherits.
            if !sibling.children.iter().any(PersonRef::is_eligible) {
                continue;
            }
            let relation = BloodRelation::from_field(sibling.blood_relation.as_deref())?;
            heirs.extend(resolve_nephews_nieces(sibling, relation));
        }
    }
    Ok(heirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PersonStatus;

    fn person(name: &str, status: PersonStatus) -> PersonRef {
        PersonRef {
            name: name.to_string(),
            status,
            renounced: false,
            children: Vec::new(),
            blood_relation: None,
        }
    }

    fn case(
        children: Vec<PersonRef>,
        parents: Vec<PersonRef>,
        siblings: Vec<PersonRef>,
    ) -> InheritanceCase {
        InheritanceCase {
            deceased_name: "Taro".to_string(),
            has_simultaneous_death: false,
            spouse: None,
            children,
            parents,
            siblings,
        }
    }

    #[test]
    fn children_exclude_parents_and_siblings() {
        let c = case(
            vec![person("Ichiro", PersonStatus::Alive)],
            vec![person("Father", PersonStatus::Alive)],
            vec![person("Jiro", PersonStatus::Alive)],
        );
        let heirs = determine_blood_heirs(&c).unwrap();
        assert_eq!(heirs.len(), 1);
        assert_eq!(heirs[0].name, "Ichiro");
        assert_eq!(heirs[0].rank, Rank::First);
    }

    #[test]
    fn represented_child_still_satisfies_rank1() {
        let mut child = person("Ichiro", PersonStatus::Deceased);
        child.children.push(person("Ken", PersonStatus::Alive));
        let c = case(vec![child], vec![person("Father", PersonStatus::Alive)], Vec::new());
        let heirs = determine_blood_heirs(&c).unwrap();
        assert_eq!(heirs.len(), 1);
        assert_eq!(heirs[0].name, "Ken");
        assert!(heirs[0].is_substitute);
    }

    #[test]
    fn renounced_child_falls_through_to_parents() {
        let mut child = person("Ichiro", PersonStatus::Alive);
        child.renounced = true;
        child.children.push(person("Ken", PersonStatus::Alive));
        let c = case(vec![child], vec![person("Mother", PersonStatus::Alive)], Vec::new());
        let heirs = determine_blood_heirs(&c).unwrap();
        assert_eq!(heirs.len(), 1);
        assert_eq!(heirs[0].name, "Mother");
        assert_eq!(heirs[0].rank, Rank::Second);
    }

    #[test]
    fn deceased_parent_not_represented() {
        let mut father = person("Father", PersonStatus::Deceased);
        father.children.push(person("Jiro", PersonStatus::Alive));
        let c = case(Vec::new(), vec![father], vec![person("Saburo", PersonStatus::Alive)]);
        let heirs = determine_blood_heirs(&c).unwrap();
        assert_eq!(heirs.len(), 1);
        assert_eq!(heirs[0].name, "Saburo");
        assert_eq!(heirs[0].rank, Rank::Third);
        assert_eq!(heirs[0].blood_relation, Some(BloodRelation::Full));
    }

    #[test]
    fn unknown_status_everywhere_yields_no_heirs() {
        let c = case(
            vec![person("A", PersonStatus::Unknown)],
            vec![person("B", PersonStatus::Unknown)],
            vec![person("C", PersonStatus::Unknown)],
        );
        assert!(determine_blood_heirs(&c).unwrap().is_empty());
    }

    #[test]
    fn invalid_blood_relation_on_eligible_sibling_fails() {
        let mut sibling = person("Jiro", PersonStatus::Alive);
        sibling.blood_relation = Some("adopted".to_string());
        let err = determine_blood_heirs(&case(Vec::new(), Vec::new(), vec![sibling])).unwrap_err();
        assert!(matches!(err, EvalError::InvalidEnumValue { .. }));
    }

    #[test]
    fn invalid_blood_relation_ignored_when_not_needed() {
        let mut sibling = person("Jiro", PersonStatus::Unknown);
        sibling.blood_relation = Some("adopted".to_string());
        let c = case(Vec::new(), Vec::new(), vec![sibling, person("Saburo", PersonStatus::Alive)]);
        let heirs = determine_blood_heirs(&c).unwrap();
        assert_eq!(heirs.len(), 1);
        assert_eq!(heirs[0].name, "Saburo");
    }

    #[test]
    fn invalid_blood_relation_on_represented_sibling_fails() {
        let mut sibling = person("Jiro", PersonStatus::Deceased);
        sibling.blood_relation = Some("step".to_string());
        sibling.children.push(person("Nana", PersonStatus::Alive));
        let err = determine_blood_heirs(&case(Vec::new(), Vec::new(), vec![sibling])).unwrap_err();
        assert_eq!(
            err,
            EvalError::InvalidEnumValue {
                field: "blood_relation".to_string(),
                value: "step".to_string(),
                expected: vec!["full".to_string(), "half".to_string()],
            }
        );
    }

    #[test]
    fn invalid_blood_relation_ignored_without_eligible_nephews() {
        let mut sibling = person("Jiro", PersonStatus::Deceased);
        sibling.blood_relation = Some("step".to_string());
        sibling.children.push(person("Nana", PersonStatus::Deceased));
        let c = case(Vec::new(), Vec::new(), vec![sibling, person("Saburo", PersonStatus::Alive)]);
        let heirs = determine_blood_heirs(&c).unwrap();
        assert_eq!(heirs.len(), 1);
        assert_eq!(heirs[0].name, "Saburo");
    }

    #[test]
    fn nephew_inherits_sibling_blood_relation() {
        let mut sibling = person("Jiro", PersonStatus::Deceased);
        sibling.blood_relation = Some("half".to_string());
        sibling.children.push(person("Nana", PersonStatus::Alive));
        let heirs = determine_blood_heirs(&case(Vec::new(), Vec::new(), vec![sibling])).unwrap();
        assert_eq!(heirs.len(), 1);
        assert_eq!(heirs[0].blood_relation, Some(BloodRelation::Half));
        assert_eq!(heirs[0].original_heir_name.as_deref(), Some("Jiro"));
    }
}
