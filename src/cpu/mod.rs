mod alu;
pub mod cb;
mod cpu;
pub mod ops;
mod reg;

#[cfg(test)]
mod optest;

pub use self::reg::{C, H, N, Z};

/// Processor run state. Instruction semantics live in `ops` and `cb`;
/// this only tracks time and whether fetching is gated.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct CPU {
  /// Elapsed clock cycles.
  ticks: u64,

  halted: bool,
  stopped: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Registers {
  /// General-purpose registers.
  pub a: u8,
  pub b: u8,
  pub c: u8,
  pub d: u8,
  pub e: u8,
  f: u8, // Flag register, low nibble always 0.
  pub h: u8,
  pub l: u8,

  /// Program counter.
  pub pc: u16,

  /// Stack pointer.
  pub sp: u16,
}
