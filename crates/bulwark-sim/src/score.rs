//! Running score kept by the engine across ticks.

use serde::{Deserialize, Serialize};

/// Session counters. Reset with the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Monsters removed from play for any reason: killed, breached or stranded.
    pub kills: u32,
    /// Monsters that reached the final waypoint. Also counted in `kills`.
    pub breaches: u32,
    pub shots_fired: u32,
    pub hits: u32,
}

impl ScoreState {
    /// Fraction of fired bullets that connected. 0.0 before the first shot.
    pub fn accuracy(&self) -> f32 {
        if self.shots_fired == 0 {
            0.0
        } else {
            self.hits as f32 / self.shots_fired as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        assert_eq!(ScoreState::default().accuracy(), 0.0);

        let score = ScoreState {
            shots_fired: 4,
            hits: 3,
            ..Default::default()
        };
        assert!((score.accuracy() - 0.75).abs() < 1e-6);
    }
}
