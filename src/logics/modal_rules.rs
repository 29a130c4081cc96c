//! Modal rules: Possibility/Necessity and the access-relation frame-
//! constraint rules (spec §4.3).

use crate::lexicon::Sentence;
use crate::rules::{unticked_nodes, AccessMemo, Rule, Target};
use crate::tableau::{BranchId, Node, NodeBuilder, Tableau, TableauError};

fn status_of(node: &Node) -> bool {
    node.designated.unwrap_or(true)
}

enum ModalOp {
    Possibility,
    Necessity,
}

/// `(effective_operator, effective_content)`, folding `¬◇A ~ □¬A` and
/// `¬□A ~ ◇¬A`.
fn effective(sentence: &Sentence) -> Option<(ModalOp, Sentence)> {
    match sentence.operator() {
        Some(crate::lexicon::Operator::Possibility) => {
            return Some((ModalOp::Possibility, sentence.operands()[0].clone()));
        }
        Some(crate::lexicon::Operator::Necessity) => {
            return Some((ModalOp::Necessity, sentence.operands()[0].clone()));
        }
        _ => {}
    }
    let inner = sentence.negatum()?;
    match inner.operator()? {
        crate::lexicon::Operator::Possibility => {
            Some((ModalOp::Necessity, inner.operands()[0].negate()))
        }
        crate::lexicon::Operator::Necessity => {
            Some((ModalOp::Possibility, inner.operands()[0].negate()))
        }
        _ => None,
    }
}

fn stamp_at(sentence: Sentence, status: bool, world: i32, designation: bool) -> NodeBuilder {
    let mut b = NodeBuilder::new().sentence(sentence).world(world);
    if designation {
        b = b.designated(status);
    }
    b
}

/// Matches `◇A` and (via the dual) `¬□A`.
#[derive(Debug)]
pub struct PossibilityRule {
    pub designation: bool,
}

impl Rule for PossibilityRule {
    fn name(&self) -> &'static str {
        "Possibility"
    }

    fn ticking(&self) -> bool {
        false
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        unticked_nodes(tableau, branch)
            .filter_map(|n| {
                let node = tableau.node(n);
                let sentence = node.sentence.as_ref()?;
                let (op, _) = effective(sentence)?;
                let w = node.world.unwrap_or(0);
                let status = status_of(node);
                // +◇ and -□ (~ ◇¬A) both need a fresh world, fired once;
                // -◇ and +□ need the all-accessible-worlds case, handled by
                // NecessityRule.
                let fresh_case = matches!((&op, status), (ModalOp::Possibility, true) | (ModalOp::Necessity, false));
                if !fresh_case || tableau.has_existential_fired(branch, n) {
                    return None;
                }
                Some(Target::new(branch).node(n).world(w).new_world(tableau.new_world(branch)))
            })
            .collect()
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let node_id = target.node.expect("PossibilityRule targets always name a node");
        let node = tableau.node(node_id).clone();
        let sentence = node.sentence.as_ref().unwrap().clone();
        let (_, content) = effective(&sentence).expect("target matched a possibility sentence");
        let w = node.world.unwrap_or(0);
        let w2 = target.new_world.expect("PossibilityRule targets always carry a new world");
        let status = status_of(&node);
        tableau.append(target.branch, NodeBuilder::new().access(w, w2))?;
        tableau.append(target.branch, stamp_at(content, status, w2, self.designation))?;
        tableau.mark_existential_fired(target.branch, node_id)?;
        Ok(vec![target.branch])
    }
}

/// Matches `□A` and (via the dual) `¬◇A`.
#[derive(Debug)]
pub struct NecessityRule {
    pub designation: bool,
}

impl Rule for NecessityRule {
    fn name(&self) -> &'static str {
        "Necessity"
    }

    fn ticking(&self) -> bool {
        false
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        let memo = AccessMemo::new();
        let mut out = Vec::new();
        for n in unticked_nodes(tableau, branch).collect::<Vec<_>>() {
            let node = tableau.node(n);
            let Some(sentence) = node.sentence.as_ref() else { continue };
            let Some((op, _)) = effective(sentence) else { continue };
            let w = node.world.unwrap_or(0);
            let status = status_of(node);
            let all_case = matches!((&op, status), (ModalOp::Necessity, true) | (ModalOp::Possibility, false));
            if !all_case {
                continue;
            }
            for &w2 in memo.accessible_from(tableau, branch, w).iter() {
                if !tableau.has_modal_fired(branch, n, w2) {
                    out.push(Target::new(branch).node(n).world(w).new_world(w2));
                }
            }
        }
        out
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let node_id = target.node.expect("NecessityRule targets always name a node");
        let node = tableau.node(node_id).clone();
        let sentence = node.sentence.as_ref().unwrap().clone();
        let (_, content) = effective(&sentence).expect("target matched a necessity sentence");
        let w2 = target.new_world.expect("NecessityRule targets always carry a target world");
        let status = status_of(&node);
        tableau.append(target.branch, stamp_at(content, status, w2, self.designation))?;
        tableau.mark_modal_fired(target.branch, node_id, w2)?;
        Ok(vec![target.branch])
    }
}

/// Serial (D): every world has at least one successor.
#[derive(Debug)]
pub struct SerialRule;

impl Rule for SerialRule {
    fn name(&self) -> &'static str {
        "Serial"
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        let memo = AccessMemo::new();
        tableau
            .branch(branch)
            .worlds()
            .iter()
            .filter(|&&w| memo.accessible_from(tableau, branch, w).is_empty())
            .map(|&w| Target::new(branch).world(w).new_world(tableau.new_world(branch)))
            .collect()
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let w1 = target.world.expect("SerialRule targets always carry a source world");
        let w2 = target.new_world.expect("SerialRule targets always carry a fresh world");
        tableau.append(target.branch, NodeBuilder::new().access(w1, w2))?;
        Ok(vec![target.branch])
    }
}

/// Reflexive (T): every world accesses itself.
#[derive(Debug)]
pub struct ReflexiveRule;

impl Rule for ReflexiveRule {
    fn name(&self) -> &'static str {
        "Reflexive"
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        tableau
            .branch(branch)
            .worlds()
            .iter()
            .filter(|&&w| !crate::rules::has_access(tableau, branch, w, w))
            .map(|&w| Target::new(branch).world(w).new_world(w))
            .collect()
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let w = target.world.expect("ReflexiveRule targets always carry a world");
        tableau.append(target.branch, NodeBuilder::new().access(w, w))?;
        Ok(vec![target.branch])
    }
}

/// Transitive (S4): close the access relation.
#[derive(Debug)]
pub struct TransitiveRule;

impl Rule for TransitiveRule {
    fn name(&self) -> &'static str {
        "Transitive"
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        let memo = AccessMemo::new();
        let worlds: Vec<i32> = tableau.branch(branch).worlds().iter().copied().collect();
        for &w1 in &worlds {
            for &w2 in memo.accessible_from(tableau, branch, w1).iter() {
                for &w3 in memo.accessible_from(tableau, branch, w2).iter() {
                    if !crate::rules::has_access(tableau, branch, w1, w3) {
                        return vec![Target::new(branch).world(w1).new_world(w3)];
                    }
                }
            }
        }
        Vec::new()
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let w1 = target.world.expect("TransitiveRule targets always carry a source world");
        let w3 = target.new_world.expect("TransitiveRule targets always carry a destination world");
        tableau.append(target.branch, NodeBuilder::new().access(w1, w3))?;
        Ok(vec![target.branch])
    }
}

/// Symmetric (S5): add the reverse of every access edge.
#[derive(Debug)]
pub struct SymmetricRule;

impl Rule for SymmetricRule {
    fn name(&self) -> &'static str {
        "Symmetric"
    }

    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target> {
        let memo = AccessMemo::new();
        let worlds: Vec<i32> = tableau.branch(branch).worlds().iter().copied().collect();
        for &w1 in &worlds {
            for &w2 in memo.accessible_from(tableau, branch, w1).iter() {
                if !crate::rules::has_access(tableau, branch, w2, w1) {
                    return vec![Target::new(branch).world(w2).new_world(w1)];
                }
            }
        }
        Vec::new()
    }

    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError> {
        let w2 = target.world.expect("SymmetricRule targets always carry a source world");
        let w1 = target.new_world.expect("SymmetricRule targets always carry a destination world");
        tableau.append(target.branch, NodeBuilder::new().access(w2, w1))?;
        Ok(vec![target.branch])
    }
}
