//! The step loop: closure pass, rule-group selection, application, and
//! termination (spec §4.2 "Algorithm").

use std::time::Instant;

use crate::logics::Logic;
use crate::predicates::Argument;
use crate::rules::Target;
use crate::tableau::{BranchId, NodeBuilder, NodeFlag, Tableau, TableauError};

use super::options::ProveOptions;

/// The outcome of one [`step`] call.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub applied: bool,
    pub rule: Option<&'static str>,
    pub target: Option<Target>,
}

impl StepOutcome {
    fn none() -> Self {
        Self { applied: false, rule: None, target: None }
    }
}

/// Run `logic` against `argument` to termination (spec §4.2's `build`).
pub fn build(logic: &'static Logic, argument: Argument, opts: &ProveOptions) -> Result<Tableau, TableauError> {
    let span = tracing::info_span!("tableau.build", logic = logic.name);
    let _enter = span.enter();

    let mut tableau = if opts.auto_build_trunk {
        logic.start(argument)?
    } else {
        Tableau::new(logic.name, argument)
    };

    let deadline = opts.timeout.map(|d| Instant::now() + d);

    while !tableau.finished {
        if opts.max_steps.is_some_and(|max| tableau.step() >= max) {
            mark_premature(&mut tableau);
            break;
        }
        if deadline.is_some_and(|dl| Instant::now() >= dl) {
            mark_premature(&mut tableau);
            break;
        }
        step(logic, &mut tableau, opts)?;
    }

    if opts.build_models && tableau.invalid {
        attach_models(logic, &mut tableau);
    }

    tracing::info!(
        logic = logic.name,
        valid = tableau.valid,
        invalid = tableau.invalid,
        premature = tableau.premature,
        steps = tableau.step(),
        "tableau build finished"
    );

    Ok(tableau)
}

/// Advance `tableau` by one step: a closure pass followed by (at most) one
/// rule application. Returns what happened, for callers inspecting/animating
/// a build one step at a time (spec §4.2's `step`).
pub fn step(logic: &'static Logic, tableau: &mut Tableau, opts: &ProveOptions) -> Result<StepOutcome, TableauError> {
    if tableau.finished {
        return Err(TableauError::AlreadyFinished);
    }

    run_closure_pass(logic, tableau)?;

    if tableau.all_branches_closed() {
        finish(tableau, true);
        return Ok(StepOutcome::none());
    }

    match select_and_apply(logic, tableau, opts)? {
        Some(outcome) => {
            tableau.advance_step();
            Ok(outcome)
        }
        None => {
            debug_assert!(
                tableau.open_branches().all(|b| tableau.is_exhausted(b.id())),
                "no rule group yielded a target but an open branch still has an unticked node"
            );
            finish(tableau, false);
            Ok(StepOutcome::none())
        }
    }
}

/// One ply of a proof, yielded by [`StepIter`]: the tableau's step counter
/// after the call, paired with what that step did.
#[derive(Debug, Clone)]
pub struct StepResult {
    pub ply: u32,
    pub outcome: StepOutcome,
}

/// Drives a tableau one [`step`] at a time and yields each ply, for callers
/// that want to animate or inspect a build instead of running it to
/// completion with [`build`].
///
/// Grounded on the teacher's `Lexer: Iterator` pattern: `next()` advances the
/// underlying state machine by one unit and returns `None` once the tableau
/// is `finished`, rather than requiring the caller to track that themselves.
pub struct StepIter<'t> {
    logic: &'static Logic,
    tableau: &'t mut Tableau,
    opts: ProveOptions,
}

impl<'t> StepIter<'t> {
    pub fn new(logic: &'static Logic, tableau: &'t mut Tableau, opts: ProveOptions) -> Self {
        Self { logic, tableau, opts }
    }
}

impl<'t> Iterator for StepIter<'t> {
    type Item = Result<StepResult, TableauError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tableau.finished {
            return None;
        }
        match step(self.logic, self.tableau, &self.opts) {
            Ok(outcome) => Some(Ok(StepResult { ply: self.tableau.step(), outcome })),
            Err(err) => Some(Err(err)),
        }
    }
}

/// Query every closure rule against every open branch, closing any branch a
/// rule flags. Order follows `RulesRoot::closure`'s declaration order within
/// a branch; branches themselves are visited in arena order.
fn run_closure_pass(logic: &'static Logic, tableau: &mut Tableau) -> Result<(), TableauError> {
    loop {
        let hit = tableau.open_branches().find_map(|branch| {
            logic.rules.closure.iter().find_map(|rule| rule.check(tableau, branch.id()).map(|target| (rule.name(), target)))
        });
        let Some((rule_name, target)) = hit else { break };
        tableau.append(target.branch, NodeBuilder::new().flag(NodeFlag::Closure))?;
        tableau.close_branch(target.branch, rule_name)?;
    }
    Ok(())
}

/// Try each rule group in declared precedence order; apply the first one
/// offering a usable target (spec §4.2 step 2-3).
fn select_and_apply(
    logic: &'static Logic,
    tableau: &mut Tableau,
    opts: &ProveOptions,
) -> Result<Option<StepOutcome>, TableauError> {
    for group in &logic.rules.groups {
        let Some((idx, target, score)) = group.best(tableau, opts.is_rank_optim) else {
            continue;
        };
        if opts.is_group_optim && score <= 0 {
            continue;
        }
        let rule = &group.rules[idx];
        rule.apply(tableau, &target)?;
        tableau.record(rule.name(), target.branch, target.node);
        tracing::debug!(group = group.name, rule = rule.name(), branch = target.branch.0, score, "rule applied");
        return Ok(Some(StepOutcome { applied: true, rule: Some(rule.name()), target: Some(target) }));
    }
    Ok(None)
}

fn finish(tableau: &mut Tableau, valid: bool) {
    tableau.finished = true;
    tableau.completed = true;
    tableau.valid = valid;
    tableau.invalid = !valid;
}

fn mark_premature(tableau: &mut Tableau) {
    tableau.finished = true;
    tableau.premature = true;
    tracing::warn!(logic = tableau.logic(), steps = tableau.step(), "tableau terminated prematurely");
}

/// Extract a [`crate::tableau::Model`] from every open branch once the
/// tableau has finished invalid (spec §4.5).
fn attach_models(logic: &'static Logic, tableau: &mut Tableau) {
    let open: Vec<BranchId> = tableau.open_branches().map(|b| b.id()).collect();
    for branch in open {
        let model = crate::logics::extract_model(tableau, branch, &logic.meta);
        tableau.models.push(model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Operator, Sentence};
    use crate::logics::lookup;
    use crate::predicates::Argument;

    fn modus_ponens() -> Argument {
        let a = Sentence::atomic(0, 0);
        let b = Sentence::atomic(1, 0);
        let cond = Sentence::operated(Operator::MaterialConditional, vec![a.clone(), b.clone()]);
        Argument::new(b, vec![a, cond])
    }

    #[test]
    fn cpl_modus_ponens_is_valid() {
        let logic = lookup("CPL").unwrap();
        let tableau = build(logic, modus_ponens(), &ProveOptions::default()).unwrap();
        assert!(tableau.valid);
        assert!(tableau.completed);
        assert!(!tableau.premature);
        assert!(tableau.all_branches_closed());
    }

    #[test]
    fn fde_excluded_middle_is_invalid_with_gap_countermodel() {
        let logic = lookup("FDE").unwrap();
        let a = Sentence::atomic(0, 0);
        let lem = Sentence::operated(Operator::Disjunction, vec![a.clone(), a.negate()]);
        let argument = Argument::new(lem, vec![]);
        let tableau = build(logic, argument, &ProveOptions::default()).unwrap();
        assert!(tableau.invalid);
        assert!(!tableau.models.is_empty());
        assert!(tableau.models.iter().any(|m| m.is_countermodel));
    }

    #[test]
    fn k_necessitated_modus_ponens_is_valid() {
        let logic = lookup("K").unwrap();
        let a = Sentence::atomic(0, 0);
        let b = Sentence::atomic(1, 0);
        let cond = Sentence::operated(Operator::MaterialConditional, vec![a.clone(), b.clone()]);
        let box_a = Sentence::operated(Operator::Necessity, vec![a]);
        let box_cond = Sentence::operated(Operator::Necessity, vec![cond]);
        let box_b = Sentence::operated(Operator::Necessity, vec![b]);
        let argument = Argument::new(box_b, vec![box_a, box_cond]);
        let tableau = build(logic, argument, &ProveOptions::default()).unwrap();
        assert!(tableau.valid);
    }

    #[test]
    fn max_steps_of_zero_terminates_premature() {
        let logic = lookup("CPL").unwrap();
        let opts = ProveOptions { max_steps: Some(0), ..ProveOptions::default() };
        let tableau = build(logic, modus_ponens(), &opts).unwrap();
        assert!(tableau.premature);
        assert!(!tableau.valid);
        assert!(!tableau.invalid);
    }

    #[test]
    fn step_iter_drives_a_tableau_to_the_same_verdict_as_build() {
        let logic = lookup("CPL").unwrap();
        let opts = ProveOptions::default();
        let mut tableau = logic.start(modus_ponens()).unwrap();

        let mut plies = Vec::new();
        for result in StepIter::new(logic, &mut tableau, opts) {
            plies.push(result.unwrap());
        }

        assert!(!plies.is_empty());
        assert!(tableau.finished);
        assert!(tableau.valid);
    }

    #[test]
    fn step_iter_stops_once_the_tableau_is_finished() {
        let logic = lookup("CPL").unwrap();
        let mut tableau = logic.start(modus_ponens()).unwrap();
        let mut iter = StepIter::new(logic, &mut tableau, ProveOptions::default());
        while iter.next().is_some() {}
        assert!(iter.next().is_none());
    }
}
