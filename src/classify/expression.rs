//! Facial-expression classifier over action-unit coefficients.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::frame::FaceSnapshot;

/// Expression labels the classifier can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Surprised,
    Smiling,
    Sad,
    Angry,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Expression::Surprised => "surprised",
            Expression::Smiling => "smiling",
            Expression::Sad => "sad",
            Expression::Angry => "angry",
        };
        f.write_str(label)
    }
}

/// Coefficient thresholds for the expression rule sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExpressionRules {
    /// Jaw-lower coefficients inside [-band, band] count as a closed jaw.
    pub jaw_lower_band: f32,
    /// Minimum lip-stretcher coefficient for a smile.
    pub lip_stretcher_min: f32,
}

impl Default for ExpressionRules {
    fn default() -> Self {
        Self {
            jaw_lower_band: 0.25,
            lip_stretcher_min: 0.4,
        }
    }
}

/// Classify one face snapshot, or `None` if no rule set matches.
///
/// The four rule sets are evaluated in fixed order and a later match
/// overwrites an earlier one, so the last matching rule wins. This ordering
/// is part of the observable behavior and must not be reordered into
/// first-match-wins. Classification itself never fails; an unconverged
/// snapshot simply yields no label.
pub fn classify_expression(face: &FaceSnapshot, rules: &ExpressionRules) -> Option<Expression> {
    if !face.tracking_succeeded {
        return None;
    }

    let jaw_open = face.jaw_lower.abs() > rules.jaw_lower_band;
    let mut label = None;

    if jaw_open && face.brow_lower < 0.0 {
        label = Some(Expression::Surprised);
    }
    if face.lip_stretcher > rules.lip_stretcher_min || face.lip_corner_depressor < 0.0 {
        label = Some(Expression::Smiling);
    }
    if face.brow_raiser < 0.0 && face.lip_corner_depressor > 0.0 {
        label = Some(Expression::Sad);
    }
    if (face.brow_lower > 0.0 && jaw_open)
        || (face.brow_lower > 0.0 && face.lip_corner_depressor > 0.0)
    {
        label = Some(Expression::Angry);
    }

    label
}
