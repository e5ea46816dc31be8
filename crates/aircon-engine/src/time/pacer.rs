use std::time::{Duration, Instant};

/// Deadline sleep to a fixed target frame interval.
///
/// This is not a scheduler: `wait` blocks the calling thread until the next
/// deadline and then schedules the one after. A frame that overran its slot
/// does not cause catch-up frames; the next deadline restarts from now.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Option<Instant>,
}

impl FramePacer {
    /// `fps == 0` is treated as 1.
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the current deadline, measured at `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.next {
            Some(deadline) => deadline.saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }

    /// Sleeps until the current deadline (if any) and arms the next one.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }

    fn advance(&mut self, now: Instant) {
        let next = match self.next {
            Some(deadline) if deadline + self.interval > now => deadline + self.interval,
            _ => now + self.interval,
        };
        self.next = Some(next);
    }
}
