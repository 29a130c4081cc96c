//! Concrete logic constructions: one small function per logic, assembling
//! shared rule structs into a [`Logic`] rather than repeating a trait impl
//! per logic (spec §4.4, §9 "Design Notes").
//!
//! The many-valued logics beyond FDE/K3/LP (`K3W`, `B3E`, `L3`, `G3`, `GO`,
//! `P3`, `RM3`, `MH`, `NH`) are not given genuinely distinct connective
//! semantics here — see `DESIGN.md`. Each is built from whichever of the
//! K3 (gap-only) or LP (glut-only) rule/closure combination matches its
//! published designated-value set; what varies is `Meta`, not the rules.

use crate::rules::{ClosureRule, Rule, RuleGroup, RulesRoot};
use crate::tableau::Value;

use super::closure_rules::{ClassicalClosureRule, DesignationClosureRule, GapClosureRule, GlutClosureRule};
use super::logic::Logic;
use super::meta::{AccessConstraint, Meta};
use super::modal_rules::{NecessityRule, PossibilityRule, ReflexiveRule, SerialRule, SymmetricRule, TransitiveRule};
use super::operator_rules::{
    AssertionRule, BiconditionalRule, ConditionalRule, ConjunctionRule, DisjunctionRule, DoubleNegationRule,
};
use super::quantifier_rules::{ExistentialRule, UniversalRule};
use super::trunk::{build_trunk_classical, build_trunk_many_valued, build_trunk_modal, build_trunk_modal_many_valued};

fn propositional_groups(designation: bool) -> Vec<RuleGroup> {
    vec![
        RuleGroup::new(
            "Simplification",
            vec![
                Box::new(DoubleNegationRule { designation }) as Box<dyn Rule>,
                Box::new(AssertionRule { designation }),
            ],
        ),
        RuleGroup::new(
            "Operator",
            vec![
                Box::new(ConjunctionRule { designation }) as Box<dyn Rule>,
                Box::new(DisjunctionRule { designation }),
                Box::new(ConditionalRule { designation }),
                Box::new(BiconditionalRule { designation }),
            ],
        ),
    ]
}

fn quantifier_group(designation: bool) -> RuleGroup {
    RuleGroup::new(
        "Quantifier",
        vec![
            Box::new(ExistentialRule { designation }) as Box<dyn Rule>,
            Box::new(UniversalRule { designation }),
        ],
    )
}

fn modal_group(designation: bool) -> RuleGroup {
    RuleGroup::new(
        "Modal",
        vec![
            Box::new(PossibilityRule { designation }) as Box<dyn Rule>,
            Box::new(NecessityRule { designation }),
        ],
    )
}

fn access_group(constraints: &[AccessConstraint]) -> Option<RuleGroup> {
    if constraints.is_empty() {
        return None;
    }
    let rules: Vec<Box<dyn Rule>> = constraints
        .iter()
        .map(|c| -> Box<dyn Rule> {
            match c {
                AccessConstraint::Serial => Box::new(SerialRule),
                AccessConstraint::Reflexive => Box::new(ReflexiveRule),
                AccessConstraint::Transitive => Box::new(TransitiveRule),
                AccessConstraint::Symmetric => Box::new(SymmetricRule),
            }
        })
        .collect();
    Some(RuleGroup::new("AccessConstraint", rules))
}

fn bivalent_propositional(closure: Box<dyn ClosureRule>) -> RulesRoot {
    RulesRoot::new(vec![closure], propositional_groups(false))
}

fn bivalent_first_order(closure: Box<dyn ClosureRule>) -> RulesRoot {
    let mut groups = propositional_groups(false);
    groups.push(quantifier_group(false));
    RulesRoot::new(vec![closure], groups)
}

fn bivalent_modal(constraints: &[AccessConstraint]) -> RulesRoot {
    let mut groups = propositional_groups(false);
    groups.push(quantifier_group(false));
    groups.push(modal_group(false));
    if let Some(g) = access_group(constraints) {
        groups.push(g);
    }
    RulesRoot::new(vec![Box::new(ClassicalClosureRule)], groups)
}

fn many_valued_propositional(closure: Vec<Box<dyn ClosureRule>>) -> RulesRoot {
    let mut groups = propositional_groups(true);
    groups.push(quantifier_group(true));
    RulesRoot::new(closure, groups)
}

fn many_valued_modal(closure: Vec<Box<dyn ClosureRule>>, constraints: &[AccessConstraint]) -> RulesRoot {
    let mut groups = propositional_groups(true);
    groups.push(quantifier_group(true));
    groups.push(modal_group(true));
    if let Some(g) = access_group(constraints) {
        groups.push(g);
    }
    RulesRoot::new(closure, groups)
}

fn fde_meta() -> Meta {
    Meta {
        designation: true,
        modal: false,
        values: vec![Value::T, Value::F, Value::N, Value::B],
        designated_values: vec![Value::T, Value::B],
        access_constraints: Vec::new(),
    }
}

fn k3_meta() -> Meta {
    Meta {
        designation: true,
        modal: false,
        values: vec![Value::T, Value::F, Value::N],
        designated_values: vec![Value::T],
        access_constraints: Vec::new(),
    }
}

fn lp_meta() -> Meta {
    Meta {
        designation: true,
        modal: false,
        values: vec![Value::T, Value::F, Value::B],
        designated_values: vec![Value::T, Value::B],
        access_constraints: Vec::new(),
    }
}

// -- propositional / first-order classical -----------------------------

pub fn cpl() -> Logic {
    Logic {
        name: "CPL",
        meta: Meta::bivalent(),
        rules: bivalent_propositional(Box::new(ClassicalClosureRule)),
        build_trunk: build_trunk_classical,
    }
}

pub fn cfol() -> Logic {
    Logic {
        name: "CFOL",
        meta: Meta::bivalent(),
        rules: bivalent_first_order(Box::new(ClassicalClosureRule)),
        build_trunk: build_trunk_classical,
    }
}

// -- FDE family ----------------------------------------------------------

pub fn fde() -> Logic {
    Logic {
        name: "FDE",
        meta: fde_meta(),
        rules: many_valued_propositional(vec![Box::new(DesignationClosureRule) as Box<dyn ClosureRule>]),
        build_trunk: build_trunk_many_valued,
    }
}

pub fn k3() -> Logic {
    Logic {
        name: "K3",
        meta: k3_meta(),
        rules: many_valued_propositional(vec![Box::new(DesignationClosureRule) as Box<dyn ClosureRule>, Box::new(GlutClosureRule)]),
        build_trunk: build_trunk_many_valued,
    }
}

pub fn lp() -> Logic {
    Logic {
        name: "LP",
        meta: lp_meta(),
        rules: many_valued_propositional(vec![Box::new(DesignationClosureRule) as Box<dyn ClosureRule>, Box::new(GapClosureRule)]),
        build_trunk: build_trunk_many_valued,
    }
}

/// Builds a K3-rule-family logic under a different published name (see
/// module docs: `K3W`/`B3E`/`L3`/`G3`/`GO`/`P3` share K3's rule set).
fn k3_variant(name: &'static str) -> Logic {
    Logic {
        name,
        meta: k3_meta(),
        rules: many_valued_propositional(vec![Box::new(DesignationClosureRule) as Box<dyn ClosureRule>, Box::new(GlutClosureRule)]),
        build_trunk: build_trunk_many_valued,
    }
}

/// Builds an LP-rule-family logic under a different published name (see
/// module docs: `RM3`/`MH`/`NH` share LP's rule set).
fn lp_variant(name: &'static str) -> Logic {
    Logic {
        name,
        meta: lp_meta(),
        rules: many_valued_propositional(vec![Box::new(DesignationClosureRule) as Box<dyn ClosureRule>, Box::new(GapClosureRule)]),
        build_trunk: build_trunk_many_valued,
    }
}

pub fn k3w() -> Logic {
    k3_variant("K3W")
}
pub fn k3wq() -> Logic {
    k3_variant("K3WQ")
}
pub fn b3e() -> Logic {
    k3_variant("B3E")
}
pub fn l3() -> Logic {
    k3_variant("L3")
}
pub fn g3() -> Logic {
    k3_variant("G3")
}
pub fn go() -> Logic {
    k3_variant("GO")
}
pub fn p3() -> Logic {
    k3_variant("P3")
}
pub fn rm3() -> Logic {
    lp_variant("RM3")
}
pub fn mh() -> Logic {
    lp_variant("MH")
}
pub fn nh() -> Logic {
    lp_variant("NH")
}

// -- modal (bivalent) -----------------------------------------------------

pub fn k() -> Logic {
    Logic {
        name: "K",
        meta: Meta::bivalent().with_modal(vec![]),
        rules: bivalent_modal(&[]),
        build_trunk: build_trunk_modal,
    }
}

pub fn d() -> Logic {
    Logic {
        name: "D",
        meta: Meta::bivalent().with_modal(vec![AccessConstraint::Serial]),
        rules: bivalent_modal(&[AccessConstraint::Serial]),
        build_trunk: build_trunk_modal,
    }
}

pub fn t() -> Logic {
    Logic {
        name: "T",
        meta: Meta::bivalent().with_modal(vec![AccessConstraint::Reflexive]),
        rules: bivalent_modal(&[AccessConstraint::Reflexive]),
        build_trunk: build_trunk_modal,
    }
}

pub fn s4() -> Logic {
    let constraints = vec![AccessConstraint::Reflexive, AccessConstraint::Transitive];
    Logic {
        name: "S4",
        meta: Meta::bivalent().with_modal(constraints.clone()),
        rules: bivalent_modal(&constraints),
        build_trunk: build_trunk_modal,
    }
}

pub fn s5() -> Logic {
    let constraints = vec![
        AccessConstraint::Reflexive,
        AccessConstraint::Symmetric,
        AccessConstraint::Transitive,
    ];
    Logic {
        name: "S5",
        meta: Meta::bivalent().with_modal(constraints.clone()),
        rules: bivalent_modal(&constraints),
        build_trunk: build_trunk_modal,
    }
}

// -- modal / many-valued crosses ------------------------------------------

fn modal_many_valued_logic(
    name: &'static str,
    meta: Meta,
    closure: Vec<Box<dyn ClosureRule>>,
    constraints: Vec<AccessConstraint>,
) -> Logic {
    let mut meta = meta;
    meta.modal = true;
    meta.access_constraints = constraints.clone();
    Logic {
        name,
        meta,
        rules: many_valued_modal(closure, &constraints),
        build_trunk: build_trunk_modal_many_valued,
    }
}

pub fn kfde() -> Logic {
    modal_many_valued_logic("KFDE", fde_meta(), vec![Box::new(DesignationClosureRule) as Box<dyn ClosureRule>], vec![])
}

pub fn tfde() -> Logic {
    modal_many_valued_logic(
        "TFDE",
        fde_meta(),
        vec![Box::new(DesignationClosureRule) as Box<dyn ClosureRule>],
        vec![AccessConstraint::Reflexive],
    )
}

pub fn s4fde() -> Logic {
    modal_many_valued_logic(
        "S4FDE",
        fde_meta(),
        vec![Box::new(DesignationClosureRule) as Box<dyn ClosureRule>],
        vec![AccessConstraint::Reflexive, AccessConstraint::Transitive],
    )
}

pub fn s5fde() -> Logic {
    modal_many_valued_logic(
        "S5FDE",
        fde_meta(),
        vec![Box::new(DesignationClosureRule) as Box<dyn ClosureRule>],
        vec![
            AccessConstraint::Reflexive,
            AccessConstraint::Symmetric,
            AccessConstraint::Transitive,
        ],
    )
}

pub fn kk3() -> Logic {
    modal_many_valued_logic(
        "KK3",
        k3_meta(),
        vec![Box::new(DesignationClosureRule) as Box<dyn ClosureRule>, Box::new(GlutClosureRule)],
        vec![],
    )
}

pub fn tk3() -> Logic {
    modal_many_valued_logic(
        "TK3",
        k3_meta(),
        vec![Box::new(DesignationClosureRule) as Box<dyn ClosureRule>, Box::new(GlutClosureRule)],
        vec![AccessConstraint::Reflexive],
    )
}

/// Every logic this crate knows how to build, in the order `spec`'s
/// "Per-logic IDs" lists them.
pub fn all() -> Vec<Logic> {
    vec![
        cpl(),
        cfol(),
        fde(),
        k3(),
        lp(),
        k3w(),
        k3wq(),
        b3e(),
        l3(),
        g3(),
        go(),
        p3(),
        rm3(),
        mh(),
        nh(),
        k(),
        d(),
        t(),
        s4(),
        s5(),
        kfde(),
        tfde(),
        s4fde(),
        s5fde(),
        kk3(),
        tk3(),
    ]
}
