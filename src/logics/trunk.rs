//! Trunk builders: the linear node prefix built from the argument before
//! any rule fires (spec §3 "Trunk", §4.4).
//!
//! One function per combination of designation/modal, since
//! [`super::Logic::build_trunk`] is a plain function pointer rather than a
//! closure — a logic's trunk shape never varies at runtime, so there is
//! nothing to capture.

use crate::predicates::Argument;
use crate::tableau::{NodeBuilder, Tableau, TableauError};

/// Bivalent, non-modal (CPL, CFOL): premises as-is, then the negated
/// conclusion — refuting the argument means closing every branch of
/// `premises..., ¬conclusion`.
pub fn build_trunk_classical(tableau: &mut Tableau, argument: &Argument) -> Result<(), TableauError> {
    let root = tableau.root();
    for premise in &argument.premises {
        tableau.append(root, NodeBuilder::new().sentence(premise.clone()))?;
    }
    tableau.append(root, NodeBuilder::new().sentence(argument.conclusion.negate()))?;
    Ok(())
}

/// Bivalent, modal (K, D, T, S4, S5): the classical trunk, every node
/// additionally stamped at world 0.
pub fn build_trunk_modal(tableau: &mut Tableau, argument: &Argument) -> Result<(), TableauError> {
    let root = tableau.root();
    for premise in &argument.premises {
        tableau.append(root, NodeBuilder::new().sentence(premise.clone()).world(0))?;
    }
    tableau.append(root, NodeBuilder::new().sentence(argument.conclusion.negate()).world(0))?;
    Ok(())
}

/// Many-valued, non-modal (FDE, K3, LP, …): premises designated, the
/// conclusion itself — not its negation — left undesignated. Designation
/// already carries the refutation semantics a negation carries in the
/// bivalent case, so the conclusion is never negated here.
pub fn build_trunk_many_valued(tableau: &mut Tableau, argument: &Argument) -> Result<(), TableauError> {
    let root = tableau.root();
    for premise in &argument.premises {
        tableau.append(root, NodeBuilder::new().sentence(premise.clone()).designated(true))?;
    }
    tableau.append(root, NodeBuilder::new().sentence(argument.conclusion.clone()).designated(false))?;
    Ok(())
}

/// Many-valued, modal (the FDE/K3 crosses over K/D/T/S4/S5): designation
/// and world 0, combined.
pub fn build_trunk_modal_many_valued(tableau: &mut Tableau, argument: &Argument) -> Result<(), TableauError> {
    let root = tableau.root();
    for premise in &argument.premises {
        tableau.append(
            root,
            NodeBuilder::new().sentence(premise.clone()).designated(true).world(0),
        )?;
    }
    tableau.append(
        root,
        NodeBuilder::new().sentence(argument.conclusion.clone()).designated(false).world(0),
    )?;
    Ok(())
}
