mod bios;
mod ram;

pub use self::bios::{BootRom, BootRomKind, CGB_BIOS_SIZE, DMG_BIOS_SIZE};
pub use self::ram::Ram;

use crate::error::Result;

pub const WRAM_SIZE: usize = 0x2000;

pub const WRAM_START: u16 = 0xc000;
pub const ECHO_START: u16 = 0xe000;
pub const ECHO_END: u16 = 0xfdff;
pub const OAM_START: u16 = 0xfe00;
pub const OAM_END: u16 = 0xfe9f;
pub const HRAM_START: u16 = 0xff80;

/// Routes the 16-bit address space. Only the boot rom and work ram are
/// backed; every other region reads as 0 and drops writes.
#[derive(Debug)]
pub struct Memory {
  bios: BootRom,
  boot_mode: bool,

  wram: Ram,
}

impl Memory {
  pub fn new(bios: BootRom) -> Result<Memory> {
    Ok(Memory {
      bios,
      boot_mode: true,
      wram: Ram::new(WRAM_SIZE)?,
    })
  }

  pub fn bios(&self) -> &BootRom {
    &self.bios
  }

  pub fn wram(&self) -> &Ram {
    &self.wram
  }

  pub fn boot_mode(&self) -> bool {
    self.boot_mode
  }

  /// Map (`true`) or unmap the boot rom over the bottom of rom bank 0.
  pub fn set_boot_mode(&mut self, on: bool) {
    if self.boot_mode != on {
      debug!("Boot rom {}", if on { "mapped" } else { "unmapped" });
    }
    self.boot_mode = on;
  }

  fn bios_mapped(&self, addr: u16) -> bool {
    if !self.boot_mode {
      return false;
    }
    let addr = addr as usize;
    addr < DMG_BIOS_SIZE || (self.bios.is_cgb() && addr < CGB_BIOS_SIZE)
  }

  /// Read a byte at address `addr`.
  pub fn rb(&self, addr: u16) -> u8 {
    match addr >> 12 {
      // ROM 0, overlaid by the boot rom.
      0x0 => {
        if self.bios_mapped(addr) {
          self.bios.rb(addr)
        } else {
          0
        }
      }
      // ROM 0 / ROM 1 (unbanked)
      0x1..=0x7 => 0,
      // VRAM
      0x8..=0x9 => 0,
      // ERAM
      0xa..=0xb => 0,
      // WRAM
      0xc..=0xd => self.wram.rb((addr - WRAM_START) as usize),
      // WRAM Shadow
      0xe => self.wram.rb((addr - ECHO_START) as usize),
      _ => match addr {
        ECHO_START..=ECHO_END => self.wram.rb((addr - ECHO_START) as usize),
        // OAM
        OAM_START..=OAM_END => 0,
        // Unusable / I/O, interrupt registers and zero page.
        _ => 0,
      },
    }
  }

  /// Read a 2-byte little-endian word from `addr`.
  pub fn rw(&self, addr: u16) -> u16 {
    let a = u16::from(self.rb(addr));
    let b = u16::from(self.rb(addr.wrapping_add(1)));
    (b << 8) | a
  }

  /// Write `value` at address `addr`.
  pub fn wb(&mut self, addr: u16, value: u8) {
    match addr >> 12 {
      // ROM, including whatever the boot rom overlays.
      0x0..=0x7 => (),
      // VRAM
      0x8..=0x9 => (),
      // ERAM
      0xa..=0xb => (),
      // WRAM
      0xc..=0xd => self.wram.wb((addr - WRAM_START) as usize, value),
      // WRAM Shadow
      0xe => self.wram.wb((addr - ECHO_START) as usize, value),
      _ => match addr {
        ECHO_START..=ECHO_END => {
          self.wram.wb((addr - ECHO_START) as usize, value)
        }
        // OAM
        OAM_START..=OAM_END => (),
        _ => (),
      },
    }
  }

  /// Write a 2-byte little-endian word to `addr`.
  pub fn ww(&mut self, addr: u16, value: u16) {
    self.wb(addr, (value & 0xff) as u8);
    self.wb(addr.wrapping_add(1), ((value >> 8) & 0xff) as u8);
  }

  /// Write an arbitrary number of bytes to memory.
  pub fn write(&mut self, addr: u16, values: &[u8]) {
    let mut cur = addr;
    for v in values {
      self.wb(cur, *v);
      cur = cur.wrapping_add(1);
    }
  }
}
