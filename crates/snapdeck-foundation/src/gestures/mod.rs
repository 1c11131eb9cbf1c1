mod commit;
mod drag;
mod resistance;

pub use commit::{decide_commit, AxisDirection, CommitDecision, CommitThresholds};
pub use drag::{DragRelease, DragTracker};
pub use resistance::{rubber_band, saturating, DragResistance};

#[cfg(test)]
#[path = "../tests/gestures_tests.rs"]
mod tests;
