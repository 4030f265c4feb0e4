//! Side assignment
//!
//! The two supplied debaters are bound to sides by a uniform random
//! permutation at session start, and the binding is fixed for the
//! session's lifetime. The random source is injected so tests can seed it.

use crate::debate::request::ParticipantSpec;
use rand::Rng;

/// The session's fixed debater-to-side binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePair {
    pub affirmative: ParticipantSpec,
    pub negative: ParticipantSpec,
}

/// Assign the two debaters to sides with a uniform coin flip.
pub fn assign_sides<R: Rng + ?Sized>(
    first: ParticipantSpec,
    second: ParticipantSpec,
    rng: &mut R,
) -> SidePair {
    if rng.gen_bool(0.5) {
        SidePair {
            affirmative: first,
            negative: second,
        }
    } else {
        SidePair {
            affirmative: second,
            negative: first,
        }
    }
}
