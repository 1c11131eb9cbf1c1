use web_time::Instant;

/// Monotonic millisecond clock for stamping pointer events.
#[derive(Debug, Clone, Copy)]
pub struct InputClock {
    origin: Instant,
}

impl InputClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds since the clock was created.
    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    /// Nanoseconds since the clock was created, for frame timestamps.
    pub fn now_nanos(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

impl Default for InputClock {
    fn default() -> Self {
        Self::new()
    }
}
