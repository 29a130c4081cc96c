//! [`ProveOptions`]: the knobs a `build()` call accepts (spec §4.2 "Public
//! contract").

use std::time::Duration;

/// Options governing one `build()` run. Defaults match the spec's expected
/// common case: both optimization layers on, models built, trunk built
/// automatically, no step/time cap.
#[derive(Debug, Clone)]
pub struct ProveOptions {
    pub max_steps: Option<u32>,
    pub timeout: Option<Duration>,
    pub is_rank_optim: bool,
    pub is_group_optim: bool,
    pub build_models: bool,
    pub auto_build_trunk: bool,
}

impl Default for ProveOptions {
    fn default() -> Self {
        Self {
            max_steps: None,
            timeout: None,
            is_rank_optim: true,
            is_group_optim: true,
            build_models: true,
            auto_build_trunk: true,
        }
    }
}
