//! Parser/writer round-trip tests against the public API.

pub mod tests_round_trip;
