//! Interrupt controller: master enable, the enabled mask and the pending
//! flags for the five hardware sources.

/// Cycles spent pushing PC and jumping to a vector.
pub const INTERRUPT_CYCLES: u32 = 12;

/// Only the low five bits of either mask mean anything.
const SOURCES: u8 = 0b11111;

/// Interrupt sources, declared in service priority order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Interrupt {
  VBlank,
  LcdStat,
  Timer,
  Serial,
  Joypad,
}

impl Interrupt {
  /// All sources, highest priority first.
  pub const ALL: [Interrupt; 5] = [
    Interrupt::VBlank,
    Interrupt::LcdStat,
    Interrupt::Timer,
    Interrupt::Serial,
    Interrupt::Joypad,
  ];

  /// Bit of this source in the enabled and pending masks.
  pub fn bit(self) -> u8 {
    1 << (self as u8)
  }

  /// Address execution jumps to when this source is serviced.
  pub fn vector(self) -> u16 {
    0x40 + 8 * u16::from(self as u8)
  }
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Interrupts {
  master: bool,
  enabled: u8,
  pending: u8,
}

impl Interrupts {
  pub fn new() -> Interrupts {
    Interrupts::default()
  }

  pub fn reset(&mut self) {
    *self = Interrupts::default();
  }

  pub fn master(&self) -> bool {
    self.master
  }

  pub fn set_master(&mut self, on: bool) {
    self.master = on;
  }

  pub fn enabled(&self) -> u8 {
    self.enabled
  }

  pub fn set_enabled(&mut self, mask: u8) {
    self.enabled = mask & SOURCES;
  }

  pub fn enable(&mut self, int: Interrupt) {
    self.enabled |= int.bit();
  }

  pub fn disable(&mut self, int: Interrupt) {
    self.enabled &= !int.bit();
  }

  pub fn pending(&self) -> u8 {
    self.pending
  }

  pub fn set_pending(&mut self, mask: u8) {
    self.pending = mask & SOURCES;
  }

  /// Raise the pending flag for `int`.
  pub fn request(&mut self, int: Interrupt) {
    self.pending |= int.bit();
  }

  pub fn is_pending(&self, int: Interrupt) -> bool {
    self.pending & int.bit() != 0
  }

  /// Highest priority source that is both enabled and pending, regardless
  /// of the master switch.
  pub fn next(&self) -> Option<Interrupt> {
    let mask = self.enabled & self.pending;
    Interrupt::ALL.iter().copied().find(|i| mask & i.bit() != 0)
  }

  /// Pick the source to service, if any. Servicing drops the master switch
  /// and that source's pending flag; the caller does the jump.
  pub fn step(&mut self) -> Option<Interrupt> {
    if !self.master {
      return None;
    }
    let int = self.next()?;
    self.master = false;
    self.pending &= !int.bit();
    Some(int)
  }
}
