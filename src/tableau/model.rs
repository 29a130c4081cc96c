//! Counter-models extracted from a completed open branch (spec §4.5).

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::lexicon::{Parameter, Predicate, Sentence};

/// A truth value. Bivalent logics use only `T`/`F`; many-valued logics with
/// a glut/gap scheme use all four (`B` = both designated, `N` = neither).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    T,
    F,
    N,
    B,
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Value::T => "T",
            Value::F => "F",
            Value::N => "N",
            Value::B => "B",
        };
        f.write_str(s)
    }
}

/// The interpretation at a single world: atomic valuations plus each
/// predicate's extension and anti-extension.
#[derive(Debug, Clone, Default)]
pub struct WorldModel {
    pub world: i32,
    pub values: BTreeMap<Sentence, Value>,
    pub extensions: BTreeMap<Predicate, BTreeSet<Vec<Parameter>>>,
    pub anti_extensions: BTreeMap<Predicate, BTreeSet<Vec<Parameter>>>,
}

impl WorldModel {
    pub fn new(world: i32) -> Self {
        Self {
            world,
            ..Default::default()
        }
    }

    pub fn value_of(&self, sentence: &Sentence) -> Option<Value> {
        self.values.get(sentence).copied()
    }
}

/// An assignment read off an open branch: one interpretation per world
/// (a single `w0` world for non-modal logics), plus the access relation
/// between them once closed under the logic's frame constraints.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub worlds: Vec<WorldModel>,
    pub access: BTreeSet<(i32, i32)>,
    /// `true` iff the premises are all designated and the conclusion is not
    /// designated at `w0` — the definition of countermodel (spec §4.5).
    pub is_countermodel: bool,
}

impl Model {
    pub fn world(&self, w: i32) -> Option<&WorldModel> {
        self.worlds.iter().find(|wm| wm.world == w)
    }

    pub fn value_at(&self, sentence: &Sentence, w: i32) -> Option<Value> {
        self.world(w).and_then(|wm| wm.value_of(sentence))
    }
}
