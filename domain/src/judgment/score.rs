//! Score types - the result representation a judge attaches to its judgment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from score construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("invalid score bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("score value {value} is outside bounds [{min}, {max}]")]
    OutOfBounds { value: f64, min: f64, max: f64 },
}

/// Result representation attached to a [`Judgment`](super::Judgment).
///
/// A judge produces at most one score per judgment. Boolean scores fit
/// pass/fail gates, numerical scores fit graded evaluations (optionally
/// bounded), and categorical scores fit label-based verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    /// A binary result
    Boolean(bool),
    /// A numerical result, optionally bounded
    Numerical {
        value: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    /// A label-based result
    Categorical(String),
}

impl Score {
    /// Create a boolean score
    pub fn boolean(value: bool) -> Self {
        Score::Boolean(value)
    }

    /// Create an unbounded numerical score
    pub fn numerical(value: f64) -> Self {
        Score::Numerical {
            value,
            min: None,
            max: None,
        }
    }

    /// Create a bounded numerical score.
    ///
    /// Fails if `min > max` or the value falls outside the bounds.
    pub fn numerical_bounded(value: f64, min: f64, max: f64) -> Result<Self, ScoreError> {
        if min > max {
            return Err(ScoreError::InvalidBounds { min, max });
        }
        if value < min || value > max {
            return Err(ScoreError::OutOfBounds { value, min, max });
        }
        Ok(Score::Numerical {
            value,
            min: Some(min),
            max: Some(max),
        })
    }

    /// Create a categorical score
    pub fn categorical(label: impl Into<String>) -> Self {
        Score::Categorical(label.into())
    }

    /// The boolean value, if this is a boolean score
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Score::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// The numerical value, if this is a numerical score
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Score::Numerical { value, .. } => Some(*value),
            _ => None,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Boolean(v) => write!(f, "{}", v),
            Score::Numerical {
                value,
                min: Some(min),
                max: Some(max),
            } => write!(f, "{} (in [{}, {}])", value, min, max),
            Score::Numerical { value, .. } => write!(f, "{}", value),
            Score::Categorical(label) => write!(f, "{}", label),
        }
    }
}
