//! Release-time commit decision.

/// Sign of a committed gesture along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisDirection {
    Negative,
    Positive,
}

impl AxisDirection {
    pub fn of(value: f32) -> Option<Self> {
        if value > 0.0 {
            Some(AxisDirection::Positive)
        } else if value < 0.0 {
            Some(AxisDirection::Negative)
        } else {
            None
        }
    }

    pub fn signum(self) -> f32 {
        match self {
            AxisDirection::Negative => -1.0,
            AxisDirection::Positive => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitDecision {
    Commit(AxisDirection),
    SnapBack,
}

/// Per-direction distance thresholds plus an optional velocity threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitThresholds {
    /// Displayed distance needed to commit in the negative direction.
    pub negative: f32,
    /// Displayed distance needed to commit in the positive direction.
    pub positive: f32,
    /// Release speed that commits regardless of distance.
    pub velocity: Option<f32>,
}

impl CommitThresholds {
    pub fn symmetric(distance: f32) -> Self {
        Self {
            negative: distance,
            positive: distance,
            velocity: None,
        }
    }

    pub fn asymmetric(negative: f32, positive: f32) -> Self {
        Self {
            negative,
            positive,
            velocity: None,
        }
    }

    pub fn with_velocity(mut self, velocity: Option<f32>) -> Self {
        self.velocity = velocity;
        self
    }

    /// Distance threshold for a displacement with the sign of `displayed`.
    pub fn distance_for(&self, displayed: f32) -> f32 {
        if displayed < 0.0 {
            self.negative
        } else {
            self.positive
        }
    }
}

/// Decides a release.
///
/// Distance wins over velocity: a displacement past its threshold commits in
/// its own direction even if the pointer was flicked back. Otherwise a fast
/// enough release commits in the direction of the velocity.
pub fn decide_commit(displayed: f32, velocity: f32, thresholds: &CommitThresholds) -> CommitDecision {
    if let Some(direction) = AxisDirection::of(displayed) {
        if displayed.abs() >= thresholds.distance_for(displayed) {
            return CommitDecision::Commit(direction);
        }
    }
    if let (Some(limit), Some(direction)) = (thresholds.velocity, AxisDirection::of(velocity)) {
        if velocity.is_finite() && velocity.abs() >= limit {
            return CommitDecision::Commit(direction);
        }
    }
    CommitDecision::SnapBack
}
