//! An indexed collection of predicates: the two fixed system predicates
//! plus whatever the caller declares.
//!
//! Grounded on the teacher's symbol-table arena: a flat `Vec` is the single
//! source of truth, with a side index for the `(index, subscript)` lookup
//! key used throughout parsing and rule application.

use rustc_hash::FxHashMap;

use crate::lexicon::Predicate;

use super::error::PredicateStoreError;

/// A read-mostly table of declared predicates, indexed by `(index,
/// subscript)`.
///
/// Always contains `Existence` and `Identity`; user predicates are added
/// with [`PredicateStore::declare`]. Once built, a store is typically
/// shared read-only across many tableau builds (spec §5).
#[derive(Debug, Clone)]
pub struct PredicateStore {
    arena: Vec<Predicate>,
    by_coords: FxHashMap<(i32, u32), usize>,
}

impl Default for PredicateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PredicateStore {
    pub fn new() -> Self {
        let mut store = Self {
            arena: Vec::new(),
            by_coords: FxHashMap::default(),
        };
        store.insert_unchecked(Predicate::existence());
        store.insert_unchecked(Predicate::identity());
        store
    }

    fn insert_unchecked(&mut self, predicate: Predicate) {
        let idx = self.arena.len();
        self.by_coords
            .insert((predicate.index, predicate.subscript), idx);
        self.arena.push(predicate);
    }

    /// Declare a user predicate. Errors if a predicate already exists at
    /// `(index, subscript)` with a different arity, or if it collides with
    /// a system predicate's reserved index range.
    pub fn declare(
        &mut self,
        index: i32,
        subscript: u32,
        arity: usize,
    ) -> Result<Predicate, PredicateStoreError> {
        if index < 0 {
            return Err(PredicateStoreError::SystemPredicateConflict(Predicate::new(
                index, subscript, arity,
            )));
        }
        if let Some(existing) = self.get(index, subscript) {
            if existing.arity != arity {
                return Err(PredicateStoreError::DuplicatePredicate(
                    index, subscript, existing.arity,
                ));
            }
            return Ok(existing);
        }
        let predicate = Predicate::new(index, subscript, arity);
        self.insert_unchecked(predicate);
        Ok(predicate)
    }

    pub fn get(&self, index: i32, subscript: u32) -> Option<Predicate> {
        self.by_coords
            .get(&(index, subscript))
            .map(|&i| self.arena[i])
    }

    pub fn get_or_err(&self, index: i32, subscript: u32) -> Result<Predicate, PredicateStoreError> {
        self.get(index, subscript)
            .ok_or(PredicateStoreError::MissingPredicate(index, subscript))
    }

    pub fn existence(&self) -> Predicate {
        Predicate::existence()
    }

    pub fn identity(&self) -> Predicate {
        Predicate::identity()
    }

    pub fn user_predicates(&self) -> impl Iterator<Item = &Predicate> {
        self.arena.iter().filter(|p| !p.is_system())
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_has_system_predicates() {
        let store = PredicateStore::new();
        assert!(store.get(crate::lexicon::EXISTENCE_INDEX, 0).is_some());
    }

    #[test]
    fn declare_is_idempotent_for_same_arity() {
        let mut store = PredicateStore::new();
        let a = store.declare(0, 0, 2).unwrap();
        let b = store.declare(0, 0, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn declare_rejects_arity_change() {
        let mut store = PredicateStore::new();
        store.declare(0, 0, 2).unwrap();
        let err = store.declare(0, 0, 3).unwrap_err();
        assert!(matches!(err, PredicateStoreError::DuplicatePredicate(0, 0, 2)));
    }
}
