//! Flag-producing arithmetic shared by the primary and CB tables.
//!
//! Every helper takes the register file explicitly and returns the
//! computed value; storing it is left to the caller so the same helper
//! serves registers and `(HL)`.

use crate::cpu::reg::{C, H, N, Z};
use crate::cpu::Registers;

fn zero(value: u8) -> u8 {
  if value == 0 {
    Z
  } else {
    0
  }
}

pub fn inc(regs: &mut Registers, n: u8) -> u8 {
  let result = n.wrapping_add(1);
  regs.set_flag_if(Z, result == 0);
  regs.clear_flags(N);
  regs.set_flag_if(H, n & 0xf == 0xf);
  result
}

pub fn dec(regs: &mut Registers, n: u8) -> u8 {
  let result = n.wrapping_sub(1);
  regs.set_flag_if(Z, result == 0);
  regs.set_flags(N);
  regs.set_flag_if(H, n & 0xf == 0);
  result
}

fn add_with_carry(regs: &mut Registers, n: u8, carry: u8) -> u8 {
  let a = regs.a;
  let result = a.wrapping_add(n).wrapping_add(carry);
  let mut f = zero(result);
  if (a & 0xf) + (n & 0xf) + carry > 0xf {
    f |= H;
  }
  if u16::from(a) + u16::from(n) + u16::from(carry) > 0xff {
    f |= C;
  }
  regs.set_f(f);
  result
}

fn sub_with_carry(regs: &mut Registers, n: u8, carry: u8) -> u8 {
  let a = regs.a;
  let result = a.wrapping_sub(n).wrapping_sub(carry);
  let mut f = N | zero(result);
  if (a & 0xf) < (n & 0xf) + carry {
    f |= H;
  }
  if u16::from(a) < u16::from(n) + u16::from(carry) {
    f |= C;
  }
  regs.set_f(f);
  result
}

pub fn add(regs: &mut Registers, n: u8) {
  regs.a = add_with_carry(regs, n, 0);
}

pub fn adc(regs: &mut Registers, n: u8) {
  let c = regs.c() as u8;
  regs.a = add_with_carry(regs, n, c);
}

pub fn sub(regs: &mut Registers, n: u8) {
  regs.a = sub_with_carry(regs, n, 0);
}

pub fn sbc(regs: &mut Registers, n: u8) {
  let c = regs.c() as u8;
  regs.a = sub_with_carry(regs, n, c);
}

/// Compare: flags as for `sub`, A unchanged.
pub fn cp(regs: &mut Registers, n: u8) {
  sub_with_carry(regs, n, 0);
}

pub fn and(regs: &mut Registers, n: u8) {
  regs.a &= n;
  let f = zero(regs.a) | H;
  regs.set_f(f);
}

pub fn or(regs: &mut Registers, n: u8) {
  regs.a |= n;
  let f = zero(regs.a);
  regs.set_f(f);
}

pub fn xor(regs: &mut Registers, n: u8) {
  regs.a ^= n;
  let f = zero(regs.a);
  regs.set_f(f);
}

/// ADD HL,nn. Z is left as it was.
pub fn add_hl(regs: &mut Registers, n: u16) {
  let hl = regs.hl();
  regs.clear_flags(N);
  regs.set_flag_if(H, (hl & 0x0fff) + (n & 0x0fff) > 0x0fff);
  regs.set_flag_if(C, u32::from(hl) + u32::from(n) > 0xffff);
  regs.set_hl(hl.wrapping_add(n));
}

/// SP plus a signed 8-bit offset, as used by ADD SP,e and LD HL,SP+e.
/// Carries come from the unsigned low byte addition.
pub fn add_sp(regs: &mut Registers, e: u8) -> u16 {
  let sp = regs.sp;
  let offset = e as i8 as i16 as u16;
  let mut f = 0;
  if (sp & 0x0f) + u16::from(e & 0x0f) > 0x0f {
    f |= H;
  }
  if (sp & 0xff) + u16::from(e) > 0xff {
    f |= C;
  }
  regs.set_f(f);
  sp.wrapping_add(offset)
}

/// Decimal adjust A after a BCD add or subtract.
pub fn daa(regs: &mut Registers) {
  let mut a = regs.a;
  let mut carry = regs.c();
  if !regs.n() {
    if regs.c() || a > 0x99 {
      a = a.wrapping_add(0x60);
      carry = true;
    }
    if regs.h() || (a & 0x0f) > 0x09 {
      a = a.wrapping_add(0x06);
    }
  } else {
    if regs.c() {
      a = a.wrapping_sub(0x60);
    }
    if regs.h() {
      a = a.wrapping_sub(0x06);
    }
  }
  regs.a = a;
  regs.clear_flags(H);
  regs.set_flag_if(Z, a == 0);
  regs.set_flag_if(C, carry);
}

pub fn cpl(regs: &mut Registers) {
  regs.a = !regs.a;
  regs.set_flags(N | H);
}

pub fn scf(regs: &mut Registers) {
  regs.clear_flags(N | H);
  regs.set_flags(C);
}

pub fn ccf(regs: &mut Registers) {
  let c = regs.c();
  regs.clear_flags(N | H);
  regs.set_flag_if(C, !c);
}

fn shifted(regs: &mut Registers, result: u8, carry: bool) -> u8 {
  let f = zero(result) | if carry { C } else { 0 };
  regs.set_f(f);
  result
}

pub fn rlc(regs: &mut Registers, n: u8) -> u8 {
  shifted(regs, n.rotate_left(1), n & 0x80 != 0)
}

pub fn rrc(regs: &mut Registers, n: u8) -> u8 {
  shifted(regs, n.rotate_right(1), n & 0x01 != 0)
}

pub fn rl(regs: &mut Registers, n: u8) -> u8 {
  let c = regs.c() as u8;
  shifted(regs, (n << 1) | c, n & 0x80 != 0)
}

pub fn rr(regs: &mut Registers, n: u8) -> u8 {
  let c = (regs.c() as u8) << 7;
  shifted(regs, (n >> 1) | c, n & 0x01 != 0)
}

pub fn sla(regs: &mut Registers, n: u8) -> u8 {
  shifted(regs, n << 1, n & 0x80 != 0)
}

pub fn sra(regs: &mut Registers, n: u8) -> u8 {
  // Sign extend.
  shifted(regs, ((n as i8) >> 1) as u8, n & 0x01 != 0)
}

pub fn swap(regs: &mut Registers, n: u8) -> u8 {
  shifted(regs, n.rotate_left(4), false)
}

pub fn srl(regs: &mut Registers, n: u8) -> u8 {
  shifted(regs, n >> 1, n & 0x01 != 0)
}

/// BIT b,n. C is left as it was.
pub fn bit(regs: &mut Registers, b: u8, n: u8) {
  regs.set_flag_if(Z, n & (1 << b) == 0);
  regs.clear_flags(N);
  regs.set_flags(H);
}
