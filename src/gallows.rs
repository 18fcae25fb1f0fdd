//! Gallows drawings, one per penalty count.

use crate::game_state::MAX_PENALTY;

const STAGES: [&str; MAX_PENALTY + 1] = [
    r"
 ---------------
   |         |
   |
   |
   |
   |
   |
 --------",
    r"
 ---------------
   |         |
   |        (_)
   |
   |
   |
   |
 --------",
    r"
 ---------------
   |         |
   |        (_)
   |         |
   |         |
   |
   |
 --------",
    r"
 ---------------
   |         |
   |        (_)
   |        /|
   |         |
   |
   |
 --------",
    r"
 ---------------
   |         |
   |        (_)
   |        /|\
   |         |
   |
   |
 --------",
    r"
 ---------------
   |         |
   |        (_)
   |        /|\
   |         |
   |        /
   |
 --------",
    r"
 ---------------
   |         |
   |        (_)
   |        /|\
   |         |
   |        / \
   |
 --------",
];

/// Drawing for the given penalty count, clamped at the final stage.
pub fn stage(penalty_count: usize) -> &'static str {
    STAGES[penalty_count.min(MAX_PENALTY)]
}
