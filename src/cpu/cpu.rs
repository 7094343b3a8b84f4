use crate::cpu::CPU;

impl CPU {
  pub fn new() -> CPU {
    CPU {
      ticks: 0,
      halted: false,
      stopped: false,
    }
  }

  /// Clear the run gates and zero the clock.
  pub fn reset(&mut self) {
    self.ticks = 0;
    self.halted = false;
    self.stopped = false;
  }

  pub fn stop(&mut self) {
    self.stopped = true;
  }

  pub fn is_stopped(&self) -> bool {
    self.stopped
  }

  /// Suspend fetching until an enabled interrupt becomes pending.
  pub fn halt(&mut self) {
    self.halted = true;
  }

  pub fn wake(&mut self) {
    self.halted = false;
  }

  pub fn is_halted(&self) -> bool {
    self.halted
  }

  pub fn increase_ticks(&mut self, t: u32) {
    self.ticks = self.ticks.wrapping_add(u64::from(t));
  }

  /// Take back cycles charged earlier. The clock saturates at zero, so a
  /// correction larger than the elapsed count is lost rather than carried
  /// against later increases.
  pub fn decrease_ticks(&mut self, t: u32) {
    let t = u64::from(t);
    if t > self.ticks {
      debug!("Clock correction of {} clamped at {}", t, self.ticks);
    }
    self.ticks = self.ticks.saturating_sub(t);
  }

  pub fn ticks(&self) -> u64 {
    self.ticks
  }
}
