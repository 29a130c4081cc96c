//! Quantifier rules: Existential and Universal (spec §4.3).
//!
//! Both rules read a node's effective quantifier — its own if the sentence
//! isn't negated, or the De Morgan dual (`¬∀x.A ~ ∃x.¬A`) if it is — and
//! its designation status exactly as the propositional rules do
//! (`status_of`, unused by classical logics since `designated` is never
//! set there, making the "undesignated" branch of each rule dead code in
//! the classical case rather than a separately-coded path).
//!
//! Neither rule ticks its source node (spec §4.3: "Existential … (non-
//! ticking)"); both instead use per-(node, constant) bookkeeping on
//! [`crate::tableau::Branch`] to avoid refiring, which is what the
//! invariant actually needs to hold.

use crate::lexicon::{Parameter, Quantifier, Sentence};
use crate::rules::{unticked_nodes, Rule, Target};
use crate::tableau::{BranchId, Node, NodeBuilder, Tableau, TableauError};

fn status_of(node: &Node) -> bool {
    node.designated.unwrap_or(true)
}

/// `(effective_quantifier, variable, effective_body)` — folding the
/// De Morgan dual in when the sentence is itself a negation.
fn effective(sentence: &Sentence) -> Option<(Quantifier, crate::lexicon::Variable, Sentence)> {
    if let Some(q) = sentence.quantifier() {
        let v = sentence.bound_variable().unwrap();
        return Some((q, v, sentence.quantified_body().unwrap().clone()));
    }
    let inner = sentence.negatum()?;
    let q = inner.quantifier()?;
    let v = inner.bound_variable().unwrap();
    Some((q.dual(), v, inner.quantified_body().unwrap().negate()))
}

fn stamp(node: &Node, sentence: Sentence, status: bool, designation: bool) -> NodeBuilder {
    let mut b = NodeBuilder::new().sentence(sentence);
    if designation {
        b = b.designated(status);
    }
    if let Some(w) = node.world {
        b = b.world(w);
    }
    b
}

fn find_quantified(tableau: &Tableau, branch: BranchId, want: Quantifier) -> Vec<(crate::tableau::NodeId, Sentence)> {
    unticked_nodes(tableau, branch)
        .filter_map(|n| {
            let sentence = tableau.node(n).sentence.as_ref()?;
            let (q, _, _) = effective(sentence)?;
            (q == want).then(|| (n, sentence.clone()))
        })
        .collect()
}

/// Matches `∃x.A` and (via the dual) `¬∀x.A`.
#[derive(Debug)]
pub struct ExistentialRule {
    pub designation: bool,
}

impl Rule for ExistentialRule {
    fn name(&self) -> &'static str {
        "Existential"
    }

    fn ticking(&self) -> bool {
        false
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        find_quantified(tableau, branch, Quantifier::Existential)
            .into_iter()
            .filter_map(|(n, sentence)| {
                let node = tableau.node(n);
                let status = status_of(node);
                if status {
                    // +∃: one fresh constant, fire once.
                    if tableau.has_existential_fired(branch, n) {
                        return None;
                    }
                    Some(Target::new(branch).node(n).new_constant(tableau.new_constant(branch)))
                } else {
                    // -∃: every constant on the branch must witness falsity.
                    let _ = sentence;
                    tableau
                        .branch(branch)
                        .constants()
                        .iter()
                        .find(|&&c| !tableau.has_universal_fired(branch, n, c))
                        .map(|&c| Target::new(branch).node(n).new_constant(c))
                }
            })
            .collect()
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let node_id = target.node.expect("ExistentialRule targets always name a node");
        let node = tableau.node(node_id).clone();
        let sentence = node.sentence.as_ref().unwrap().clone();
        let (_, variable, body) = effective(&sentence).expect("target matched an existential sentence");
        let constant = target.new_constant.expect("ExistentialRule targets always carry a constant");
        let status = status_of(&node);
        let instance = body.substitute(variable, Parameter::Constant(constant));
        tableau.append(target.branch, stamp(&node, instance, status, self.designation))?;
        if status {
            tableau.mark_existential_fired(target.branch, node_id)?;
        } else {
            tableau.mark_universal_fired(target.branch, node_id, constant)?;
        }
        Ok(vec![target.branch])
    }
}

/// Matches `∀x.A` and (via the dual) `¬∃x.A`.
#[derive(Debug)]
pub struct UniversalRule {
    pub designation: bool,
}

impl Rule for UniversalRule {
    fn name(&self) -> &'static str {
        "Universal"
    }

    fn ticking(&self) -> bool {
        false
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        find_quantified(tableau, branch, Quantifier::Universal)
            .into_iter()
            .filter_map(|(n, _)| {
                let node = tableau.node(n);
                let status = status_of(node);
                if status {
                    tableau
                        .branch(branch)
                        .constants()
                        .iter()
                        .find(|&&c| !tableau.has_universal_fired(branch, n, c))
                        .map(|&c| Target::new(branch).node(n).new_constant(c))
                } else {
                    if tableau.has_existential_fired(branch, n) {
                        return None;
                    }
                    Some(Target::new(branch).node(n).new_constant(tableau.new_constant(branch)))
                }
            })
            .collect()
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let node_id = target.node.expect("UniversalRule targets always name a node");
        let node = tableau.node(node_id).clone();
        let sentence = node.sentence.as_ref().unwrap().clone();
        let (_, variable, body) = effective(&sentence).expect("target matched a universal sentence");
        let constant = target.new_constant.expect("UniversalRule targets always carry a constant");
        let status = status_of(&node);
        let instance = body.substitute(variable, Parameter::Constant(constant));
        tableau.append(target.branch, stamp(&node, instance, status, self.designation))?;
        if status {
            tableau.mark_universal_fired(target.branch, node_id, constant)?;
        } else {
            tableau.mark_existential_fired(target.branch, node_id)?;
        }
        Ok(vec![target.branch])
    }
}
