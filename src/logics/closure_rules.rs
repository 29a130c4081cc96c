//! Closure rules: the fixed sets a logic registers to flag a branch
//! contradictory (spec §4.2 "Closure rules are special").

use crate::rules::{ClosureRule, Target};
use crate::tableau::{BranchId, Node, Tableau};

/// Two nodes contradict only at the same world — `A@w0` and `¬A@w1` say
/// nothing about each other. Non-modal sentences carry no world (`None`
/// on both sides), so this degrades to unconditional equality there.
fn same_world(a: &Node, b: &Node) -> bool {
    a.world == b.world
}

/// Classical closure: a branch closes if it contains both `A` and `¬A` at
/// the same world.
#[derive(Debug)]
pub struct ClassicalClosureRule;

impl ClosureRule for ClassicalClosureRule {
    fn name(&self) -> &'static str {
        "ClassicalClosure"
    }

    fn check(&self, tableau: &Tableau, branch: BranchId) -> Option<Target> {
        let nodes = tableau.branch(branch).nodes();
        for &n1 in nodes {
            let node1 = tableau.node(n1);
            let Some(s1) = node1.sentence.as_ref() else {
                continue;
            };
            if s1.is_negated() {
                continue;
            }
            let negatum = s1.negate();
            if let Some(&n2) = nodes.iter().find(|&&n2| {
                let node2 = tableau.node(n2);
                node2.sentence.as_ref() == Some(&negatum) && same_world(node1, node2)
            }) {
                return Some(Target::new(branch).node(n1).extra_node(n2));
            }
        }
        None
    }
}

/// Many-valued closure for sentences with the same designation marker
/// appearing both designated and as the same value's contradiction —
/// here: `+A` and `−A` both present for the *same* sentence `A`. This
/// never legitimately occurs on an open branch built by sound rules, but
/// is kept as a defensive closure rule matching the spec's
/// `DesignationClosure` entry.
#[derive(Debug)]
pub struct DesignationClosureRule;

impl ClosureRule for DesignationClosureRule {
    fn name(&self) -> &'static str {
        "DesignationClosure"
    }

    fn check(&self, tableau: &Tableau, branch: BranchId) -> Option<Target> {
        let b = tableau.branch(branch);
        for &n1 in b.nodes() {
            let node1 = tableau.node(n1);
            let (Some(s1), Some(d1)) = (&node1.sentence, node1.designated) else {
                continue;
            };
            for &n2 in b.nodes() {
                if n2 == n1 {
                    continue;
                }
                let node2 = tableau.node(n2);
                if node2.sentence.as_ref() == Some(s1) && node2.designated == Some(!d1) && same_world(node1, node2) {
                    return Some(Target::new(branch).node(n1).extra_node(n2));
                }
            }
        }
        None
    }
}

/// Glut closure: a branch closes if it has `+A` and `+¬A` both designated
/// for some `A` — a "glut" (both-true witness), used by LP-family logics
/// where gluts are designated but still contradictory for refutation
/// purposes.
#[derive(Debug)]
pub struct GlutClosureRule;

impl ClosureRule for GlutClosureRule {
    fn name(&self) -> &'static str {
        "GlutClosure"
    }

    fn check(&self, tableau: &Tableau, branch: BranchId) -> Option<Target> {
        designation_pair_closure(tableau, branch, true)
    }
}

/// Gap closure: a branch closes if it has `−A` and `−¬A` both undesignated
/// for some `A` — the dual of glut closure, used by K3-family logics.
#[derive(Debug)]
pub struct GapClosureRule;

impl ClosureRule for GapClosureRule {
    fn name(&self) -> &'static str {
        "GapClosure"
    }

    fn check(&self, tableau: &Tableau, branch: BranchId) -> Option<Target> {
        designation_pair_closure(tableau, branch, false)
    }
}

fn designation_pair_closure(tableau: &Tableau, branch: BranchId, designated: bool) -> Option<Target> {
    let nodes = tableau.branch(branch).nodes();
    for &n1 in nodes {
        let node1 = tableau.node(n1);
        if node1.designated != Some(designated) {
            continue;
        }
        let Some(s1) = node1.sentence.as_ref() else {
            continue;
        };
        if s1.is_negated() {
            continue;
        }
        let negatum = s1.negate();
        if let Some(&n2) = nodes.iter().find(|&&n2| {
            let node2 = tableau.node(n2);
            node2.designated == Some(designated) && node2.sentence.as_ref() == Some(&negatum) && same_world(node1, node2)
        }) {
            return Some(Target::new(branch).node(n1).extra_node(n2));
        }
    }
    None
}
