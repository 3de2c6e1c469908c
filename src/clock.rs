use instant::Instant;

/// Timing handed to the controller on each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame, never negative
    pub delta: f32,
    /// Running time in seconds; drives the holding pulse phase
    pub time: f64,
}

impl FrameTime {
    pub fn new(delta: f32, time: f64) -> Self {
        Self {
            delta: sanitize_delta(delta),
            time,
        }
    }
}

/// Produces [`FrameTime`]s from the wall clock or from fixed steps.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last_instant: Instant,
    time: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_instant: Instant::now(),
            time: 0.0,
        }
    }

    /// Advance by the wall-clock time since the previous call.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.duration_since(self.last_instant);
        self.last_instant = now;
        self.step(dt.as_secs_f32())
    }

    /// Advance by a fixed `delta`, for headless runs and tests.
    pub fn step(&mut self, delta: f32) -> FrameTime {
        let delta = sanitize_delta(delta);
        self.time += delta as f64;
        FrameTime {
            delta,
            time: self.time,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() {
        delta.max(0.0)
    } else {
        0.0
    }
}
