//! Testing utilities and harness for Snapdeck

pub mod haptics;
pub mod robot;
pub mod robot_assertions;

pub use haptics::RecordingHaptics;
pub use robot::*;

pub mod prelude {
    pub use crate::haptics::RecordingHaptics;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
