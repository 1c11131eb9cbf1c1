use super::*;

use snapdeck_core::Runtime;

const FRAME: u64 = 16_666_667;

fn run(runtime: &Runtime, frames: usize, now: &mut u64) {
    for _ in 0..frames {
        if !runtime.has_frame_callbacks() {
            return;
        }
        *now += FRAME;
        runtime.drain_frame_callbacks(*now);
    }
}

#[test]
fn toggling_springs_width_between_idle_and_recording() {
    let runtime = Runtime::default();
    let mut now = 0;
    let mut button = RecordingButton::new(runtime.handle());
    assert_eq!(button.width(), IDLE_WIDTH);
    assert_eq!(button.icon(), RecordingIcon::Microphone);

    assert!(button.toggle());
    assert_eq!(button.icon(), RecordingIcon::Stop);
    assert_eq!(button.icon_scale(), ICON_POP_SCALE);
    run(&runtime, 600, &mut now);
    assert_eq!(button.width(), RECORDING_WIDTH);
    assert_eq!(button.icon_scale(), 1.0);
    assert!(!button.is_animating());

    assert!(!button.toggle());
    run(&runtime, 600, &mut now);
    assert_eq!(button.width(), IDLE_WIDTH);
}

#[test]
fn second_tap_mid_spring_retargets_from_current_width() {
    let runtime = Runtime::default();
    let mut now = 0;
    let mut button = RecordingButton::new(runtime.handle());
    button.toggle();
    run(&runtime, 6, &mut now);
    let mid = button.width();
    assert!(mid > IDLE_WIDTH && mid < RECORDING_WIDTH + 10.0);

    button.toggle();
    assert_eq!(button.width(), mid);
    run(&runtime, 600, &mut now);
    assert_eq!(button.width(), IDLE_WIDTH);
    assert!(!button.is_recording());
}

#[test]
fn width_spring_is_underdamped() {
    let spec = width_spring();
    assert!(spec.damping_ratio < 1.0);
    assert_eq!(spec.stiffness, 320.0);
}
