//! Difficulty tiers and their wire tokens.

use serde::{Deserialize, Serialize};

/// Selects which strategy the engine plays.
///
/// | variant         | token        | strategy                         |
/// |-----------------|--------------|----------------------------------|
/// | `Random`        | `easy`       | uniform random legal move        |
/// | `Blocking`      | `normal`     | win, else block, else random     |
/// | `Minimax`       | `hard`       | exhaustive minimax               |
/// | `MinimaxPruned` | `impossible` | alpha-beta pruned minimax        |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
    strum::EnumString, strum::EnumIter,
)]
pub enum Difficulty {
    /// Uniform random legal move.
    #[default]
    #[serde(rename = "easy")]
    #[strum(serialize = "easy")]
    Random,
    /// Single-ply heuristic: take a win, else block, else random.
    #[serde(rename = "normal")]
    #[strum(serialize = "normal")]
    Blocking,
    /// Exhaustive minimax.
    #[serde(rename = "hard")]
    #[strum(serialize = "hard")]
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[serde(rename = "impossible")]
    #[strum(serialize = "impossible")]
    MinimaxPruned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_map_to_tiers() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Random);
        assert_eq!(
            "normal".parse::<Difficulty>().unwrap(),
            Difficulty::Blocking
        );
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Minimax);
        assert_eq!(
            "impossible".parse::<Difficulty>().unwrap(),
            Difficulty::MinimaxPruned
        );
    }

    #[test]
    fn test_unknown_token_rejected() {
        assert!("nightmare".parse::<Difficulty>().is_err());
        assert!("HARD".parse::<Difficulty>().is_err());
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_display_uses_token() {
        assert_eq!(Difficulty::MinimaxPruned.to_string(), "impossible");
        assert_eq!(
            serde_json::to_string(&Difficulty::Blocking).unwrap(),
            "\"normal\""
        );
    }
}
