use crate::gameboy::GameBoy;

/// The stack grows down from SP and holds words little-endian, so a pushed
/// word's high byte sits at the higher address.
impl GameBoy {
  pub fn push_byte(&mut self, value: u8) {
    self.regs.sp = self.regs.sp.wrapping_sub(1);
    self.mem.wb(self.regs.sp, value);
  }

  pub fn push_word(&mut self, value: u16) {
    self.push_byte((value >> 8) as u8);
    self.push_byte(value as u8);
  }

  pub fn pop_byte(&mut self) -> u8 {
    let value = self.mem.rb(self.regs.sp);
    self.regs.sp = self.regs.sp.wrapping_add(1);
    value
  }

  pub fn pop_word(&mut self) -> u16 {
    let lo = u16::from(self.pop_byte());
    let hi = u16::from(self.pop_byte());
    (hi << 8) | lo
  }
}
