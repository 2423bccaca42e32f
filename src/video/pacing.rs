/// Converts host ticks into video frame steps
///
/// A video recorded at `fps` shown by a host ticking at `tick_rate` moves
/// one frame every `pacing` ticks. Leftover ticks carry over to the next
/// call, so `tick(1)` sixty times and `tick(60)` once land on the same
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    pacing: u32,
    counter: u32,
}

impl FramePacer {
    pub fn new(tick_rate: u32, fps: f64) -> Self {
        let ratio = tick_rate as f64 / fps;
        let pacing = if ratio.is_finite() {
            (ratio.round() as u32).max(1)
        } else {
            1
        };
        FramePacer { pacing, counter: 0 }
    }

    #[cfg(test)]
    pub fn pacing(&self) -> u32 {
        self.pacing
    }

    /// Adds `ticks` and returns how many frame steps are now due
    pub fn tick(&mut self, ticks: u32) -> u32 {
        self.counter = self.counter.saturating_add(ticks);
        let steps = self.counter / self.pacing;
        self.counter %= self.pacing;
        steps
    }
}
