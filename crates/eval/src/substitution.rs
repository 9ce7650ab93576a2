//! Representation (substitution) of predeceased heirs.
//!
//! At rank 1 a predeceased child's line is represented by their living
//! descendants to any depth. At rank 3 a predeceased sibling is represented
//! by their living children only; a sibling's grandchildren never inherit.
//!
//! Every substitute is tagged with the name of the head of its chain (the
//! child or sibling of the deceased) so the share calculator can treat the
//! whole line as one division.

use crate::types::{BloodRelation, Heir, PersonRef, Rank};

/// Collect the living representatives of a predeceased descendant.
///
/// `head` must be predeceased and not renounced; callers check this. A
/// renounced person anywhere below cuts off their whole branch.
pub fn resolve_descendants(head: &PersonRef) -> Vec<Heir> {
    let mut substitutes = Vec::new();
    descend(head, &head.name, &mut substitutes);
    tracing::debug!(
        original_heir = %head.name,
        count = substitutes.len(),
        "descendant representation resolved"
    );
    substitutes
}

fn descend(person: &PersonRef, head: &str, out: &mut Vec<Heir>) {
    for child in &person.children {
        if child.is_eligible() {
            out.push(Heir::substitute(&child.name, Rank::First, head));
        } else if child.is_representable() {
            descend(child, head, out);
        }
    }
}

/// Collect the living children of a predeceased sibling, one generation only.
///
/// Nephews and nieces take the sibling's blood relation.
pub fn resolve_nephews_nieces(sibling: &PersonRef, relation: BloodRelation) -> Vec<Heir> {
    sibling
        .children
        .iter()
        .filter(|nn| nn.is_eligible())
        .map(|nn| {
            Heir::substitute(&nn.name, Rank::Third, &sibling.name).with_blood_relation(relation)
        })
        .collect()
}
