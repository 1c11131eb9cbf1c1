//! A minimal real-time host: stamps pointer events with an [`InputClock`],
//! queues them through a [`PointerDispatcher`] and paces frames at 60 Hz.

use std::thread;
use std::time::Duration;

use snapdeck_core::Runtime;
use snapdeck_foundation::{InputClock, PointerDispatcher, PointerEvent, PointerInputTarget};
use snapdeck_ui_graphics::Point;

const FRAME: Duration = Duration::from_micros(16_667);
const MAX_SETTLE_FRAMES: usize = 300;

pub struct Host {
    runtime: Runtime,
    clock: InputClock,
    dispatcher: PointerDispatcher,
}

impl Host {
    pub fn new(runtime: Runtime) -> Self {
        Self {
            runtime,
            clock: InputClock::new(),
            dispatcher: PointerDispatcher::new(),
        }
    }

    /// Sleeps one frame period, delivers queued input, then runs the frame.
    pub fn frame(&mut self, target: &mut dyn PointerInputTarget) {
        thread::sleep(FRAME);
        self.dispatcher.dispatch_to(target);
        self.runtime.drain_frame_callbacks(self.clock.now_nanos());
        target.on_frame();
    }

    /// Plays a straight-line drag over `frames` frames and waits for the
    /// target to come to rest.
    pub fn drag(
        &mut self,
        target: &mut dyn PointerInputTarget,
        from: Point,
        to: Point,
        frames: u32,
    ) {
        self.dispatcher
            .push(PointerEvent::down(from, self.clock.now_ms()));
        let steps = frames.max(1);
        for step in 1..=steps {
            self.frame(target);
            let t = step as f32 / steps as f32;
            let at = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.dispatcher.push(PointerEvent::moved(at, self.clock.now_ms()));
        }
        self.dispatcher.push(PointerEvent::up(to, self.clock.now_ms()));
        self.settle(target);
    }

    /// Pumps frames until the target is idle.
    pub fn settle(&mut self, target: &mut dyn PointerInputTarget) {
        self.frame(target);
        let mut frames = 0;
        while (!target.is_idle() || self.runtime.has_frame_callbacks())
            && frames < MAX_SETTLE_FRAMES
        {
            self.frame(target);
            frames += 1;
        }
        if frames == MAX_SETTLE_FRAMES {
            log::warn!("target did not settle in {} frames", MAX_SETTLE_FRAMES);
        }
    }
}
