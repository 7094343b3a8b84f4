use std::fmt;

use crate::cpu::Registers;

pub const Z: u8 = 0x80;
pub const N: u8 = 0x40;
pub const H: u8 = 0x20;
pub const C: u8 = 0x10;

const FLAGS: u8 = Z | N | H | C;

impl Registers {
  pub fn new() -> Registers {
    Registers {
      a: 0x01,
      f: 0xb0,
      b: 0x00,
      c: 0x13,
      d: 0x00,
      e: 0xd8,
      h: 0x01,
      l: 0x4d,

      sp: 0xfffe,
      pc: 0x100,
    }
  }

  /// Restore the post-boot values.
  pub fn reset(&mut self) {
    *self = Registers::new();
  }

  pub fn f(&self) -> u8 {
    self.f
  }
  pub fn set_f(&mut self, value: u8) {
    self.f = value & FLAGS;
  }

  pub fn af(&self) -> u16 {
    (u16::from(self.a) << 8) | u16::from(self.f)
  }
  pub fn bc(&self) -> u16 {
    (u16::from(self.b) << 8) | u16::from(self.c)
  }
  pub fn de(&self) -> u16 {
    (u16::from(self.d) << 8) | u16::from(self.e)
  }
  pub fn hl(&self) -> u16 {
    (u16::from(self.h) << 8) | u16::from(self.l)
  }

  pub fn set_af(&mut self, value: u16) {
    self.a = (value >> 8) as u8;
    self.set_f(value as u8);
  }
  pub fn set_bc(&mut self, value: u16) {
    self.b = (value >> 8) as u8;
    self.c = value as u8;
  }
  pub fn set_de(&mut self, value: u16) {
    self.d = (value >> 8) as u8;
    self.e = value as u8;
  }
  pub fn set_hl(&mut self, value: u16) {
    self.h = (value >> 8) as u8;
    self.l = value as u8;
  }

  pub fn hl_inc(&mut self) {
    if self.l == 0xff {
      self.h = self.h.wrapping_add(1);
    }
    self.l = self.l.wrapping_add(1);
  }
  pub fn hl_dec(&mut self) {
    if self.l == 0 {
      self.h = self.h.wrapping_sub(1);
    }
    self.l = self.l.wrapping_sub(1);
  }

  pub fn z(&self) -> bool {
    //! Zero flag
    self.f & Z != 0
  }
  pub fn n(&self) -> bool {
    //! Subtract flag
    self.f & N != 0
  }
  pub fn h(&self) -> bool {
    //! Half carry flag
    self.f & H != 0
  }
  pub fn c(&self) -> bool {
    //! Carry flag
    self.f & C != 0
  }

  /// Set every flag in `mask` (any combination of `Z`, `N`, `H`, `C`).
  pub fn set_flags(&mut self, mask: u8) {
    self.f |= mask & FLAGS;
  }
  /// Clear every flag in `mask`, leaving the others alone.
  pub fn clear_flags(&mut self, mask: u8) {
    self.f &= !mask;
  }
  pub fn set_flag_if(&mut self, mask: u8, cond: bool) {
    if cond {
      self.set_flags(mask);
    } else {
      self.clear_flags(mask);
    }
  }
  pub fn clear_all_flags(&mut self) {
    self.f = 0;
  }
}

impl Default for Registers {
  fn default() -> Registers {
    Registers::new()
  }
}

impl fmt::Display for Registers {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let flag = |set: bool, c: char| if set { c } else { '-' };
    write!(
      f,
      "AF={:04x} BC={:04x} DE={:04x} HL={:04x} SP={:04x} PC={:04x} [{}{}{}{}]",
      self.af(),
      self.bc(),
      self.de(),
      self.hl(),
      self.sp,
      self.pc,
      flag(self.z(), 'Z'),
      flag(self.n(), 'N'),
      flag(self.h(), 'H'),
      flag(self.c(), 'C'),
    )
  }
}
