//! Rule groups and the rules root: ordered precedence over a logic's rule
//! set (spec §4.3 "Rule groups").

use crate::tableau::Tableau;

use super::rule::{ClosureRule, Rule};
use super::target::Target;

/// An ordered set of rules tried together, at one precedence level. A
/// logic's [`RulesRoot`] tries groups in declared order and rules within a
/// group in declared order — rule-declaration order is the first
/// tie-breaking key (spec §4.3, §9's "Open Questions resolved": tie-breaks
/// are per-group, since groups already carry priority order).
pub struct RuleGroup {
    pub name: &'static str,
    pub rules: Vec<Box<dyn Rule>>,
}

impl RuleGroup {
    pub fn new(name: &'static str, rules: Vec<Box<dyn Rule>>) -> Self {
        Self { name, rules }
    }

    /// Every `(rule_index, target, score)` this group can apply right now,
    /// across every open branch.
    fn candidates(&self, tableau: &Tableau) -> Vec<(usize, Target, i64)> {
        let mut out = Vec::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            for branch in tableau.open_branches() {
                for target in rule.search_targets(tableau, branch.id()) {
                    let score = rule.score_candidate(tableau, &target);
                    out.push((idx, target, score));
                }
            }
        }
        out
    }

    /// The best `(rule_index, target)` in this group, or `None` if the
    /// group has nothing to offer. When `rank_optim` is true, ties break by
    /// `(rule declaration order, branch id, node id)` read left to right;
    /// when false, the first candidate found wins (declaration order over
    /// branches in arena order).
    pub fn best(&self, tableau: &Tableau, rank_optim: bool) -> Option<(usize, Target, i64)> {
        let candidates = self.candidates(tableau);
        if candidates.is_empty() {
            return None;
        }
        if !rank_optim {
            return candidates.into_iter().next();
        }
        candidates.into_iter().max_by(|a, b| {
            let key = |c: &(usize, Target, i64)| {
                (
                    c.2,
                    std::cmp::Reverse(c.0),
                    std::cmp::Reverse(c.1.branch.0),
                    std::cmp::Reverse(c.1.earliest_node().map(|n| n.0).unwrap_or(u32::MAX)),
                )
            };
            key(a).cmp(&key(b))
        })
    }

    /// The best score available in this group right now — used for "group
    /// optimization" (spec §4.2: skip a group whose best score is ≤ 0).
    pub fn best_score(&self, tableau: &Tableau, rank_optim: bool) -> Option<i64> {
        self.best(tableau, rank_optim).map(|(_, _, score)| score)
    }
}

/// A logic's full rule pipeline: the closure group (always tried first),
/// then ordinary rule groups in declared precedence order (spec §4.3).
pub struct RulesRoot {
    pub closure: Vec<Box<dyn ClosureRule>>,
    pub groups: Vec<RuleGroup>,
}

impl RulesRoot {
    pub fn new(closure: Vec<Box<dyn ClosureRule>>, groups: Vec<RuleGroup>) -> Self {
        Self { closure, groups }
    }
}
