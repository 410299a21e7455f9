//! Score contributions for each relevance signal.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Query is a substring of the title
    pub title: f64,
    /// Query is a substring of the content
    pub content: f64,
    /// Per keyword overlapping the query in either direction
    pub keyword: f64,
    /// Per keyword reached through the synonym table
    pub semantic: f64,
    /// Upper bound of the final score
    pub cap: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title:    0.30,
            content:  0.40,
            keyword:  0.10,
            semantic: 0.05,
            cap:      1.00,
        }
    }
}

impl ScoreWeights {
    /// All contributions must be non-negative so the floor of a score stays 0.
    pub fn validate(&self) -> bool {
        [self.title, self.content, self.keyword, self.semantic]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
            && self.cap.is_finite()
            && self.cap > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        assert!(ScoreWeights::default().validate());
    }

    #[test]
    fn test_negative_weight_is_invalid() {
        let w = ScoreWeights { keyword: -0.1, ..Default::default() };
        assert!(!w.validate());
    }
}
