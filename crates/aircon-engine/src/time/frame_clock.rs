use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

/// Timing for one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, within the clock's clamp range.
    pub dt: f32,
    pub now: Instant,
    /// Starts at 0 and wraps.
    pub frame_index: u64,
}

/// Hands out one `FrameTime` per frame.
///
/// A stall (window drag, minimize, debugger) shows up as one step of at most
/// 250 ms; back-to-back ticks still advance by at least 100 µs.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    ticks: u64,
    range: RangeInclusive<Duration>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::clamped(Duration::from_micros(100)..=Duration::from_millis(250))
    }

    pub fn clamped(range: RangeInclusive<Duration>) -> Self {
        debug_assert!(range.start() <= range.end());
        Self { last: Instant::now(), ticks: 0, range }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let elapsed = now.saturating_duration_since(self.last);
        let dt = elapsed.clamp(*self.range.start(), *self.range.end());
        self.last = now;

        let frame_index = self.ticks;
        self.ticks = self.ticks.wrapping_add(1);
        FrameTime { dt: dt.as_secs_f32(), now, frame_index }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
