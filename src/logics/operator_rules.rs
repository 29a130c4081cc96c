//! Shared structural decomposition rules for the propositional connectives.
//!
//! These rules are identical across every logic in the FDE family (CPL,
//! FDE, K3, LP and their many-valued relatives) — they differ only in
//! whether nodes carry a designation marker (`designation: bool`, set from
//! the owning logic's [`super::Meta`]) and in which closure rule is paired
//! with them. Modal variants need no separate code: whenever the source
//! node carries a `world`, every node a rule appends inherits the same
//! world stamp (spec §4.4's mixin recipe), so these same rule structs are
//! reused unchanged by `K`/`D`/`T`/`S4`/`S5` and their many-valued crosses.
//!
//! Conditional/Biconditional share the Material* rules: this is a
//! recorded simplification (see `DESIGN.md`) rather than a genuine
//! per-logic conditional truth table — every logic in this crate treats
//! `A ⊃ B` as `¬A ∨ B`.

use crate::lexicon::Sentence;
use crate::rules::{unticked_nodes, Rule, Target};
use crate::tableau::{BranchId, Node, NodeBuilder, Tableau, TableauError};

fn status_of(node: &Node) -> bool {
    node.designated.unwrap_or(true)
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

/// What one decomposition produces: either every listed `(sentence,
/// status)` pair lands on the same branch, or each inner `Vec` names the
/// content of one sibling branch.
enum Decomposition {
    NonBranching(Vec<(Sentence, bool)>),
    Branching(Vec<Vec<(Sentence, bool)>>),
}

fn decompose_conjunction_like(status: bool, negated: bool, left: Sentence, right: Sentence) -> Decomposition {
    let (left, right) = if negated {
        (left.negate(), right.negate())
    } else {
        (left, right)
    };
    if status != negated {
        // +∧ or -¬∧: both conjuncts land together on the same branch.
        Decomposition::NonBranching(vec![(left, status), (right, status)])
    } else {
        // -∧ or +¬∧: branch, either conjunct suffices.
        Decomposition::Branching(vec![vec![(left, status)], vec![(right, status)]])
    }
}

fn decompose_disjunction_like(status: bool, negated: bool, left: Sentence, right: Sentence) -> Decomposition {
    let (left, right) = if negated {
        (left.negate(), right.negate())
    } else {
        (left, right)
    };
    if status != negated {
        // +∨ or -¬∨: branch, either disjunct suffices.
        Decomposition::Branching(vec![vec![(left, status)], vec![(right, status)]])
    } else {
        // -∨ or +¬∨: both disjuncts fail together on the same branch.
        Decomposition::NonBranching(vec![(left, status), (right, status)])
    }
}

fn apply_decomposition(
    tableau: &mut Tableau,
    source_branch: BranchId,
    source_node_id: crate::tableau::NodeId,
    decomposition: Decomposition,
    designation: bool,
) -> Result<Vec<BranchId>, TableauError> {
    let source = tableau.node(source_node_id).clone();
    match decomposition {
        Decomposition::NonBranching(items) => {
            for (sentence, status) in items {
                tableau.append(source_branch, stamp(&source, sentence, status, designation))?;
            }
            tableau.tick(source_branch, source_node_id)?;
            Ok(vec![source_branch])
        }
        Decomposition::Branching(branches) => {
            let mut result = Vec::with_capacity(branches.len());
            for (i, items) in branches.into_iter().enumerate() {
                let branch_id = if i == 0 {
                    source_branch
                } else {
                    tableau.fork_branch(source_branch)?
                };
                for (sentence, status) in items {
                    tableau.append(branch_id, stamp(&source, sentence, status, designation))?;
                }
                tableau.tick(branch_id, source_node_id)?;
                result.push(branch_id);
            }
            Ok(result)
        }
    }
}

fn find_targets(tableau: &Tableau, branch: BranchId, matches: impl Fn(&Sentence) -> bool) -> Vec<Target> {
    unticked_nodes(tableau, branch)
        .filter(|&n| {
            tableau
                .node(n)
                .sentence
                .as_ref()
                .is_some_and(|s| matches(s))
        })
        .map(|n| Target::new(branch).node(n))
        .collect()
}

/// Matches `A ∧ B` and `¬(A ∧ B)`.
#[derive(Debug)]
pub struct ConjunctionRule {
    pub designation: bool,
}

impl Rule for ConjunctionRule {
    fn name(&self) -> &'static str {
        "Conjunction"
    }

    fn branching(&self) -> u32 {
        1
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        find_targets(tableau, branch, |s| {
            s.operator() == Some(crate::lexicon::Operator::Conjunction)
                || s.negatum().and_then(|n| n.operator()) == Some(crate::lexicon::Operator::Conjunction)
        })
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let node_id = target.node.expect("ConjunctionRule targets always name a node");
        let node = tableau.node(node_id).clone();
        let sentence = node.sentence.clone().unwrap();
        let negated = sentence.is_negated();
        let inner = if negated { sentence.negatum().unwrap().clone() } else { sentence };
        let operands = inner.operands();
        let decomposition = decompose_conjunction_like(
            status_of(&node),
            negated,
            operands[0].clone(),
            operands[1].clone(),
        );
        apply_decomposition(tableau, target.branch, node_id, decomposition, self.designation)
    }
}

/// Matches `A ∨ B` and `¬(A ∨ B)`.
#[derive(Debug)]
pub struct DisjunctionRule {
    pub designation: bool,
}

impl Rule for DisjunctionRule {
    fn name(&self) -> &'static str {
        "Disjunction"
    }

    fn branching(&self) -> u32 {
        1
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        find_targets(tableau, branch, |s| {
            s.operator() == Some(crate::lexicon::Operator::Disjunction)
                || s.negatum().and_then(|n| n.operator()) == Some(crate::lexicon::Operator::Disjunction)
        })
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let node_id = target.node.expect("DisjunctionRule targets always name a node");
        let node = tableau.node(node_id).clone();
        let sentence = node.sentence.clone().unwrap();
        let negated = sentence.is_negated();
        let inner = if negated { sentence.negatum().unwrap().clone() } else { sentence };
        let operands = inner.operands();
        let decomposition = decompose_disjunction_like(
            status_of(&node),
            negated,
            operands[0].clone(),
            operands[1].clone(),
        );
        apply_decomposition(tableau, target.branch, node_id, decomposition, self.designation)
    }
}

fn is_conditional(op: crate::lexicon::Operator) -> bool {
    matches!(
        op,
        crate::lexicon::Operator::MaterialConditional | crate::lexicon::Operator::Conditional
    )
}

fn is_biconditional(op: crate::lexicon::Operator) -> bool {
    matches!(
        op,
        crate::lexicon::Operator::MaterialBiconditional | crate::lexicon::Operator::Biconditional
    )
}

/// Matches `A ⊃ B` and `¬(A ⊃ B)`, treating `⊃` as `¬A ∨ B` (see module
/// docs — `Conditional` shares this rule with `MaterialConditional`).
#[derive(Debug)]
pub struct ConditionalRule {
    pub designation: bool,
}

impl Rule for ConditionalRule {
    fn name(&self) -> &'static str {
        "Conditional"
    }

    fn branching(&self) -> u32 {
        1
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        find_targets(tableau, branch, |s| {
            s.operator().is_some_and(is_conditional) || s.negatum().and_then(|n| n.operator()).is_some_and(is_conditional)
        })
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let node_id = target.node.expect("ConditionalRule targets always name a node");
        let node = tableau.node(node_id).clone();
        let sentence = node.sentence.clone().unwrap();
        let negated = sentence.is_negated();
        let inner = if negated { sentence.negatum().unwrap().clone() } else { sentence };
        let operands = inner.operands();
        let decomposition = decompose_disjunction_like(
            status_of(&node),
            negated,
            operands[0].negate(),
            operands[1].clone(),
        );
        apply_decomposition(tableau, target.branch, node_id, decomposition, self.designation)
    }
}

/// Matches `A ≡ B` and `¬(A ≡ B)`, via `(A ⊃ B) ∧ (B ⊃ A)` (`Biconditional`
/// shares this rule with `MaterialBiconditional`).
#[derive(Debug)]
pub struct BiconditionalRule {
    pub designation: bool,
}

impl Rule for BiconditionalRule {
    fn name(&self) -> &'static str {
        "Biconditional"
    }

    fn branching(&self) -> u32 {
        1
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        find_targets(tableau, branch, |s| {
            s.operator().is_some_and(is_biconditional) || s.negatum().and_then(|n| n.operator()).is_some_and(is_biconditional)
        })
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let node_id = target.node.expect("BiconditionalRule targets always name a node");
        let node = tableau.node(node_id).clone();
        let sentence = node.sentence.clone().unwrap();
        let negated = sentence.is_negated();
        let inner = if negated { sentence.negatum().unwrap().clone() } else { sentence };
        let operands = inner.operands();
        let (a, b) = (operands[0].clone(), operands[1].clone());
        let forward = Sentence::operated(crate::lexicon::Operator::MaterialConditional, vec![a.clone(), b.clone()]);
        let backward = Sentence::operated(crate::lexicon::Operator::MaterialConditional, vec![b, a]);
        let decomposition = decompose_conjunction_like(status_of(&node), negated, forward, backward);
        apply_decomposition(tableau, target.branch, node_id, decomposition, self.designation)
    }
}

/// Matches `¬¬A`: collapses to `A` unchanged, since negation is involutive
/// in every logic this crate implements.
#[derive(Debug)]
pub struct DoubleNegationRule {
    pub designation: bool,
}

impl Rule for DoubleNegationRule {
    fn name(&self) -> &'static str {
        "DoubleNegation"
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        find_targets(tableau, branch, |s| {
            s.negatum().is_some_and(|inner| inner.is_negated())
        })
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let node_id = target.node.expect("DoubleNegationRule targets always name a node");
        let node = tableau.node(node_id).clone();
        let inner = node.sentence.as_ref().unwrap().negatum().unwrap().negatum().unwrap().clone();
        let status = status_of(&node);
        tableau.append(target.branch, stamp(&node, inner, status, self.designation))?;
        tableau.tick(target.branch, node_id)?;
        Ok(vec![target.branch])
    }
}

/// Matches `†A` and `¬†A` (`Assertion` is semantically the identity).
#[derive(Debug)]
pub struct AssertionRule {
    pub designation: bool,
}

impl Rule for AssertionRule {
    fn name(&self) -> &'static str {
        "Assertion"
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        find_targets(tableau, branch, |s| {
            s.operator() == Some(crate::lexicon::Operator::Assertion)
                || s.negatum().and_then(|n| n.operator()) == Some(crate::lexicon::Operator::Assertion)
        })
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let node_id = target.node.expect("AssertionRule targets always name a node");
        let node = tableau.node(node_id).clone();
        let sentence = node.sentence.clone().unwrap();
        let negated = sentence.is_negated();
        let inner = if negated { sentence.negatum().unwrap().clone() } else { sentence };
        let asserted = inner.operands()[0].clone();
        let result = if negated { asserted.negate() } else { asserted };
        let status = status_of(&node);
        tableau.append(target.branch, stamp(&node, result, status, self.designation))?;
        tableau.tick(target.branch, node_id)?;
        Ok(vec![target.branch])
    }
}
