//! Status line derived from the displayed snapshot.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// What the status line reports for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("winner: {_0}")]
    Winner(Mark),
    /// Every cell is filled and nobody won.
    #[display("draw")]
    Draw,
    /// Play continues with this mark.
    #[display("next turn: {_0}")]
    NextTurn(Mark),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings() {
        assert_eq!(Status::Winner(Mark::X).to_string(), "winner: X");
        assert_eq!(Status::Draw.to_string(), "draw");
        assert_eq!(Status::NextTurn(Mark::O).to_string(), "next turn: O");
    }
}
