//! Stochastic route-status signal.
//!
//! Presentation flavor only: the status is sampled independently on every
//! call with fixed weights and has no basis in real road data. The random
//! source is injected so tests can pin outcomes.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Long-run probability of a `Clear` sample.
pub const CLEAR_PROBABILITY: f64 = 0.9;

/// Sampled accessibility of the path to a clan's place of origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    /// 暢通 — the path can be walked.
    Clear,
    /// 受阻 — the old trail is currently hard to pass.
    Blocked,
}

impl RouteStatus {
    pub fn is_clear(self) -> bool {
        matches!(self, Self::Clear)
    }
}

impl Display for RouteStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clear => write!(f, "clear"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

/// Draws one route status with weights 0.9 clear / 0.1 blocked.
pub fn sample_route_status<R: Rng + ?Sized>(rng: &mut R) -> RouteStatus {
    if rng.gen_bool(CLEAR_PROBABILITY) {
        RouteStatus::Clear
    } else {
        RouteStatus::Blocked
    }
}
