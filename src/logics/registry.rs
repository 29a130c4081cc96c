//! The process-wide logic registry: every [`Logic`] this crate knows,
//! keyed by its short name, built once and shared for the life of the
//! process (spec §9 "Design Notes": "process-wide immutable registries
//! populated at init").

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::definitions;
use super::logic::Logic;

static REGISTRY: Lazy<HashMap<&'static str, Logic>> = Lazy::new(|| {
    definitions::all().into_iter().map(|logic| (logic.name, logic)).collect()
});

/// Look up a logic by its short name (`"CPL"`, `"K3"`, `"S5FDE"`, …).
pub fn lookup(name: &str) -> Option<&'static Logic> {
    REGISTRY.get(name)
}

/// Every registered logic's short name, in registration order is not
/// preserved by the backing `HashMap` — callers needing a stable order
/// should sort this.
pub fn names() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_logic_is_registered() {
        for name in [
            "CPL", "CFOL", "FDE", "K3", "LP", "K3W", "K3WQ", "B3E", "L3", "G3", "GO", "P3", "RM3", "MH", "NH", "K",
            "D", "T", "S4", "S5", "KFDE", "TFDE", "S4FDE", "S5FDE", "KK3", "TK3",
        ] {
            assert!(lookup(name).is_some(), "missing logic {name}");
        }
    }

    #[test]
    fn unknown_logic_is_none() {
        assert!(lookup("NOPE").is_none());
    }
}
