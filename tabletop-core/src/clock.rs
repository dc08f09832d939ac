use std::time::Instant;

/// Wall-clock time between consecutive frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock
{
  last: Instant,
  delta: f32,
}

impl Default for FrameClock
{
  fn default() -> Self
  {
    Self::new()
  }
}

impl FrameClock
{
  pub fn new() -> Self
  {
    Self::starting_at(Instant::now())
  }

  pub fn starting_at(start: Instant) -> Self
  {
    Self { last: start, delta: 0.0 }
  }

  /// Seconds since the previous tick.
  pub fn tick(&mut self) -> f32
  {
    self.tick_at(Instant::now())
  }

  /// An instant earlier than the previous tick yields 0.0 and does not
  /// move the clock backwards.
  pub fn tick_at(&mut self, now: Instant) -> f32
  {
    self.delta = now.saturating_duration_since(self.last).as_secs_f32();
    self.last = self.last.max(now);
    self.delta
  }

  /// Seconds between the last two ticks.
  pub fn delta(&self) -> f32
  {
    self.delta
  }
}
