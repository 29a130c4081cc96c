//! [`Logic`]: one concrete logic, as data rather than as a trait impl.
//!
//! Twenty-odd logics sharing most of their rule set are naturally a handful
//! of constructor functions returning the same struct, not twenty trait
//! implementations repeating the same boilerplate — the teacher's
//! dialect-table pattern generalized from strings to rule sets.

use crate::predicates::Argument;
use crate::rules::RulesRoot;
use crate::tableau::{Tableau, TableauError};

use super::meta::Meta;

/// A fully self-describing logic: its metadata, its rules, and how to seed
/// a tableau's root branch from an argument.
pub struct Logic {
    pub name: &'static str,
    pub meta: Meta,
    pub rules: RulesRoot,
    pub build_trunk: fn(&mut Tableau, &Argument) -> Result<(), TableauError>,
}

impl std::fmt::Debug for Logic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logic").field("name", &self.name).field("meta", &self.meta).finish_non_exhaustive()
    }
}

impl Logic {
    /// A fresh [`Tableau`] for `argument`, trunk already built.
    pub fn start(&'static self, argument: Argument) -> Result<Tableau, TableauError> {
        let mut tableau = Tableau::new(self.name, argument);
        let arg = tableau.argument().clone();
        (self.build_trunk)(&mut tableau, &arg)?;
        tableau.advance_step();
        Ok(tableau)
    }
}
