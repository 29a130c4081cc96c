//! The [`Rule`] trait: a single tableau-building move (spec §4.3).

use crate::tableau::{BranchId, Tableau, TableauError};

use super::target::Target;

/// A descriptor of one kind of tableau-building move.
///
/// Implementors are small, stateless structs — one per (operator,
/// designation, negation) combination, one per quantifier, one per modal
/// operator, one per frame constraint. Dispatch is a closed enum of
/// trait-object lists per [`super::RuleGroup`], not open-ended dynamic
/// registration (spec §9: "Dynamic dispatch collapses to a closed enum of
/// rule variants plus a trait-object list per group").
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Stable name used in history entries and diagnostics.
    fn name(&self) -> &'static str;

    /// `0` for a non-branching rule, `n - 1` for a rule that splits a
    /// branch into `n` siblings.
    fn branching(&self) -> u32 {
        0
    }

    /// Whether the source node is ticked on every resulting branch once
    /// this rule applies.
    fn ticking(&self) -> bool {
        true
    }

    /// Find every place on `branch` this rule could fire.
    fn search_targets(&self, tableau: &Tableau, branch: BranchId) -> Vec<Target>;

    /// Score a candidate target; higher is preferred. The default defers to
    /// [`super::scoring::rank_score`], the heuristic spec §4.3 describes
    /// ("Target scoring"); a rule may override this to prefer or suppress
    /// specific targets.
    fn score_candidate(&self, tableau: &Tableau, target: &Target) -> i64 {
        super::scoring::rank_score(tableau, target)
    }

    /// Apply `target`, returning the branch id(s) of every resulting
    /// branch (the source branch continues to exist as the first result
    /// for a non-branching rule).
    fn apply(&self, tableau: &mut Tableau, target: &Target) -> Result<Vec<BranchId>, TableauError>;
}

/// A closure rule: queried every closure pass, never "applies" a
/// transformation beyond flagging the branch closed (spec §4.2).
pub trait ClosureRule: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// If `branch` contains whatever this rule considers a contradiction,
    /// return the target naming the witnessing node(s).
    fn check(&self, tableau: &Tableau, branch: BranchId) -> Option<Target>;
}
