//! A logic's self-description (spec §4.4: "Every logic is self-describing
//! via its `Meta`").

use crate::tableau::Value;

/// A frame constraint the access relation must satisfy (spec §4.3
/// "Access-relation rules").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessConstraint {
    Serial,
    Reflexive,
    Transitive,
    Symmetric,
}

/// What a logic is, independent of its rule implementation — enough for a
/// caller to introspect a logic without running it.
#[derive(Debug, Clone)]
pub struct Meta {
    /// Whether nodes carry a `+`/`−` designation marker (true for every
    /// many-valued logic in this family; false for CPL/CFOL, K, D, T, S4,
    /// S5 in their bivalent form).
    pub designation: bool,
    pub modal: bool,
    pub values: Vec<Value>,
    pub designated_values: Vec<Value>,
    pub access_constraints: Vec<AccessConstraint>,
}

impl Meta {
    pub fn is_designated(&self, value: Value) -> bool {
        self.designated_values.contains(&value)
    }

    pub fn bivalent() -> Self {
        Self {
            designation: false,
            modal: false,
            values: vec![Value::T, Value::F],
            designated_values: vec![Value::T],
            access_constraints: Vec::new(),
        }
    }

    pub fn with_modal(mut self, constraints: Vec<AccessConstraint>) -> Self {
        self.modal = true;
        self.access_constraints = constraints;
        self
    }
}
