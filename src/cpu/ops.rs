//! Primary opcode table.
//!
//! Every one of the 256 primary codes maps to an [`Opcode`]: a mnemonic, a
//! base cycle cost and a handler taking zero, one or two operand bytes. The
//! eleven codes with no operation are `None`. Conditional jumps, calls and
//! returns carry their not-taken cost here and add the difference themselves
//! when the branch is taken.

use crate::cpu::alu;
use crate::cpu::cb;
use crate::error::{Error, Result};
use crate::gameboy::GameBoy;

/// Handler shape, by operand width.
#[derive(Copy, Clone)]
pub enum Exec {
  Void(fn(&mut GameBoy)),
  Byte(fn(&mut GameBoy, u8)),
  Word(fn(&mut GameBoy, u16)),
}

#[derive(Copy, Clone)]
pub struct Opcode {
  pub name: &'static str,
  pub cycles: u32,
  pub exec: Exec,
}

impl Opcode {
  /// Operand bytes following the opcode.
  pub fn operand_len(&self) -> u16 {
    match self.exec {
      Exec::Void(_) => 0,
      Exec::Byte(_) => 1,
      Exec::Word(_) => 2,
    }
  }

  /// Instruction length in bytes, opcode included.
  pub fn length(&self) -> u16 {
    1 + self.operand_len()
  }
}

pub fn lookup(code: u8) -> Option<&'static Opcode> {
  OPCODES[code as usize].as_ref()
}

/// Fetch the opcode at PC, read its operands and run it.
///
/// Operands are consumed before the handler runs, so PC already points at
/// the next instruction when jumps and calls see it.
pub fn execute_next(gb: &mut GameBoy) -> Result<()> {
  let addr = gb.regs.pc;
  let code = gb.mem.rb(addr);
  gb.regs.pc = addr.wrapping_add(1);

  let op = match lookup(code) {
    Some(op) => op,
    None => {
      warn!("Invalid opcode 0x{:02x} at 0x{:04x}", code, addr);
      return Err(Error::InvalidOpcode { opcode: code, addr });
    }
  };

  match op.exec {
    Exec::Void(f) => {
      trace!("0x{:04x}: {}", addr, op.name);
      f(gb);
    }
    Exec::Byte(f) => {
      let n = bump(gb);
      trace!("0x{:04x}: {} n=0x{:02x}", addr, op.name, n);
      f(gb, n);
    }
    Exec::Word(f) => {
      let nn = gb.mem.rw(gb.regs.pc);
      gb.regs.pc = gb.regs.pc.wrapping_add(2);
      trace!("0x{:04x}: {} nn=0x{:04x}", addr, op.name, nn);
      f(gb, nn);
    }
  }

  gb.cpu.increase_ticks(op.cycles);
  Ok(())
}

fn bump(gb: &mut GameBoy) -> u8 {
  let n = gb.mem.rb(gb.regs.pc);
  gb.regs.pc = gb.regs.pc.wrapping_add(1);
  n
}

// Extra cycles a taken branch costs over the table entry.
const JR_TAKEN: u32 = 4;
const JP_TAKEN: u32 = 4;
const CALL_TAKEN: u32 = 12;
const RET_TAKEN: u32 = 12;

fn jr(gb: &mut GameBoy, e: u8) {
  gb.regs.pc = gb.regs.pc.wrapping_add(e as i8 as u16);
}

fn jr_if(gb: &mut GameBoy, cond: bool, e: u8) {
  if cond {
    jr(gb, e);
    gb.cpu.increase_ticks(JR_TAKEN);
  }
}

fn jp_if(gb: &mut GameBoy, cond: bool, nn: u16) {
  if cond {
    gb.regs.pc = nn;
    gb.cpu.increase_ticks(JP_TAKEN);
  }
}

fn call(gb: &mut GameBoy, nn: u16) {
  let pc = gb.regs.pc;
  gb.push_word(pc);
  gb.regs.pc = nn;
}

fn call_if(gb: &mut GameBoy, cond: bool, nn: u16) {
  if cond {
    call(gb, nn);
    gb.cpu.increase_ticks(CALL_TAKEN);
  }
}

fn ret(gb: &mut GameBoy) {
  gb.regs.pc = gb.pop_word();
}

fn ret_if(gb: &mut GameBoy, cond: bool) {
  if cond {
    ret(gb);
    gb.cpu.increase_ticks(RET_TAKEN);
  }
}

fn rst(gb: &mut GameBoy, vector: u16) {
  call(gb, vector);
}

fn read_hl(gb: &GameBoy) -> u8 {
  gb.mem.rb(gb.regs.hl())
}

fn write_hl(gb: &mut GameBoy, value: u8) {
  let hl = gb.regs.hl();
  gb.mem.wb(hl, value);
}

fn inc_hl_ind(gb: &mut GameBoy) {
  let n = read_hl(gb);
  let r = alu::inc(&mut gb.regs, n);
  write_hl(gb, r);
}

fn dec_hl_ind(gb: &mut GameBoy) {
  let n = read_hl(gb);
  let r = alu::dec(&mut gb.regs, n);
  write_hl(gb, r);
}

// The accumulator rotates always clear Z, unlike their CB forms.
fn rlca(gb: &mut GameBoy) {
  let a = gb.regs.a;
  gb.regs.a = alu::rlc(&mut gb.regs, a);
  gb.regs.clear_flags(super::Z);
}

fn rrca(gb: &mut GameBoy) {
  let a = gb.regs.a;
  gb.regs.a = alu::rrc(&mut gb.regs, a);
  gb.regs.clear_flags(super::Z);
}

fn rla(gb: &mut GameBoy) {
  let a = gb.regs.a;
  gb.regs.a = alu::rl(&mut gb.regs, a);
  gb.regs.clear_flags(super::Z);
}

fn rra(gb: &mut GameBoy) {
  let a = gb.regs.a;
  gb.regs.a = alu::rr(&mut gb.regs, a);
  gb.regs.clear_flags(super::Z);
}

fn add_hl(gb: &mut GameBoy, n: u16) {
  alu::add_hl(&mut gb.regs, n);
}

fn ldh_write(gb: &mut GameBoy, offset: u8) {
  let a = gb.regs.a;
  gb.mem.wb(0xff00 | u16::from(offset), a);
}

fn ldh_read(gb: &mut GameBoy, offset: u8) {
  gb.regs.a = gb.mem.rb(0xff00 | u16::from(offset));
}

fn pop_af(gb: &mut GameBoy) {
  let v = gb.pop_word();
  gb.regs.set_af(v);
}

fn push_af(gb: &mut GameBoy) {
  let v = gb.regs.af();
  gb.push_word(v);
}

fn add_sp(gb: &mut GameBoy, e: u8) {
  gb.regs.sp = alu::add_sp(&mut gb.regs, e);
}

fn ld_hl_sp(gb: &mut GameBoy, e: u8) {
  let r = alu::add_sp(&mut gb.regs, e);
  gb.regs.set_hl(r);
}

macro_rules! void {
  ($name:expr, $cycles:expr, |$gb:ident| $body:expr) => {
    Some(Opcode {
      name: $name,
      cycles: $cycles,
      exec: Exec::Void(|$gb: &mut GameBoy| $body),
    })
  };
  ($name:expr, $cycles:expr, $f:expr) => {
    Some(Opcode {
      name: $name,
      cycles: $cycles,
      exec: Exec::Void($f),
    })
  };
}

macro_rules! byte {
  ($name:expr, $cycles:expr, |$gb:ident, $n:ident| $body:expr) => {
    Some(Opcode {
      name: $name,
      cycles: $cycles,
      exec: Exec::Byte(|$gb: &mut GameBoy, $n: u8| $body),
    })
  };
  ($name:expr, $cycles:expr, $f:expr) => {
    Some(Opcode {
      name: $name,
      cycles: $cycles,
      exec: Exec::Byte($f),
    })
  };
}

macro_rules! word {
  ($name:expr, $cycles:expr, |$gb:ident, $nn:ident| $body:expr) => {
    Some(Opcode {
      name: $name,
      cycles: $cycles,
      exec: Exec::Word(|$gb: &mut GameBoy, $nn: u16| $body),
    })
  };
}

// LD r,r'
macro_rules! ld {
  ($name:expr, $dst:ident, $src:ident) => {
    void!($name, 4, |gb| gb.regs.$dst = gb.regs.$src)
  };
}

// LD r,(HL)
macro_rules! ld_from_hl {
  ($name:expr, $dst:ident) => {
    void!($name, 8, |gb| gb.regs.$dst = read_hl(gb))
  };
}

// LD (HL),r
macro_rules! ld_to_hl {
  ($name:expr, $src:ident) => {
    void!($name, 8, |gb| {
      let v = gb.regs.$src;
      write_hl(gb, v)
    })
  };
}

// LD r,n
macro_rules! ld_imm {
  ($name:expr, $dst:ident) => {
    byte!($name, 8, |gb, n| gb.regs.$dst = n)
  };
}

macro_rules! inc {
  ($name:expr, $r:ident) => {
    void!($name, 4, |gb| {
      let n = gb.regs.$r;
      gb.regs.$r = alu::inc(&mut gb.regs, n)
    })
  };
}

macro_rules! dec {
  ($name:expr, $r:ident) => {
    void!($name, 4, |gb| {
      let n = gb.regs.$r;
      gb.regs.$r = alu::dec(&mut gb.regs, n)
    })
  };
}

// 8-bit arithmetic on A with a register, (HL) or immediate operand.
macro_rules! alu {
  ($name:expr, $f:path, hl) => {
    void!($name, 8, |gb| {
      let n = read_hl(gb);
      $f(&mut gb.regs, n)
    })
  };
  ($name:expr, $f:path, imm) => {
    byte!($name, 8, |gb, n| $f(&mut gb.regs, n))
  };
  ($name:expr, $f:path, $r:ident) => {
    void!($name, 4, |gb| {
      let n = gb.regs.$r;
      $f(&mut gb.regs, n)
    })
  };
}

macro_rules! pair {
  (ld $name:expr, $set:ident) => {
    word!($name, 12, |gb, nn| gb.regs.$set(nn))
  };
  (inc $name:expr, $get:ident, $set:ident) => {
    void!($name, 8, |gb| {
      let v = gb.regs.$get().wrapping_add(1);
      gb.regs.$set(v)
    })
  };
  (dec $name:expr, $get:ident, $set:ident) => {
    void!($name, 8, |gb| {
      let v = gb.regs.$get().wrapping_sub(1);
      gb.regs.$set(v)
    })
  };
  (push $name:expr, $get:ident) => {
    void!($name, 16, |gb| {
      let v = gb.regs.$get();
      gb.push_word(v)
    })
  };
  (pop $name:expr, $set:ident) => {
    void!($name, 12, |gb| {
      let v = gb.pop_word();
      gb.regs.$set(v)
    })
  };
}

macro_rules! rst {
  ($name:expr, $vector:expr) => {
    void!($name, 16, |gb| rst(gb, $vector))
  };
}

static OPCODES: [Option<Opcode>; 256] = [
  // 0x00
  void!("NOP", 4, |_gb| ()),
  pair!(ld "LD BC,nn", set_bc),
  void!("LD (BC),A", 8, |gb| {
    let (addr, a) = (gb.regs.bc(), gb.regs.a);
    gb.mem.wb(addr, a)
  }),
  pair!(inc "INC BC", bc, set_bc),
  inc!("INC B", b),
  dec!("DEC B", b),
  ld_imm!("LD B,n", b),
  void!("RLCA", 4, rlca),
  word!("LD (nn),SP", 20, |gb, nn| {
    let sp = gb.regs.sp;
    gb.mem.ww(nn, sp)
  }),
  void!("ADD HL,BC", 8, |gb| {
    let n = gb.regs.bc();
    add_hl(gb, n)
  }),
  void!("LD A,(BC)", 8, |gb| gb.regs.a = gb.mem.rb(gb.regs.bc())),
  pair!(dec "DEC BC", bc, set_bc),
  inc!("INC C", c),
  dec!("DEC C", c),
  ld_imm!("LD C,n", c),
  void!("RRCA", 4, rrca),
  // 0x10
  byte!("STOP", 4, |gb, _n| gb.stop()),
  pair!(ld "LD DE,nn", set_de),
  void!("LD (DE),A", 8, |gb| {
    let (addr, a) = (gb.regs.de(), gb.regs.a);
    gb.mem.wb(addr, a)
  }),
  pair!(inc "INC DE", de, set_de),
  inc!("INC D", d),
  dec!("DEC D", d),
  ld_imm!("LD D,n", d),
  void!("RLA", 4, rla),
  byte!("JR e", 12, jr),
  void!("ADD HL,DE", 8, |gb| {
    let n = gb.regs.de();
    add_hl(gb, n)
  }),
  void!("LD A,(DE)", 8, |gb| gb.regs.a = gb.mem.rb(gb.regs.de())),
  pair!(dec "DEC DE", de, set_de),
  inc!("INC E", e),
  dec!("DEC E", e),
  ld_imm!("LD E,n", e),
  void!("RRA", 4, rra),
  // 0x20
  byte!("JR NZ,e", 8, |gb, e| {
    let cond = !gb.regs.z();
    jr_if(gb, cond, e)
  }),
  pair!(ld "LD HL,nn", set_hl),
  void!("LD (HL+),A", 8, |gb| {
    let a = gb.regs.a;
    write_hl(gb, a);
    gb.regs.hl_inc()
  }),
  pair!(inc "INC HL", hl, set_hl),
  inc!("INC H", h),
  dec!("DEC H", h),
  ld_imm!("LD H,n", h),
  void!("DAA", 4, |gb| alu::daa(&mut gb.regs)),
  byte!("JR Z,e", 8, |gb, e| {
    let cond = gb.regs.z();
    jr_if(gb, cond, e)
  }),
  void!("ADD HL,HL", 8, |gb| {
    let n = gb.regs.hl();
    add_hl(gb, n)
  }),
  void!("LD A,(HL+)", 8, |gb| {
    gb.regs.a = read_hl(gb);
    gb.regs.hl_inc()
  }),
  pair!(dec "DEC HL", hl, set_hl),
  inc!("INC L", l),
  dec!("DEC L", l),
  ld_imm!("LD L,n", l),
  void!("CPL", 4, |gb| alu::cpl(&mut gb.regs)),
  // 0x30
  byte!("JR NC,e", 8, |gb, e| {
    let cond = !gb.regs.c();
    jr_if(gb, cond, e)
  }),
  word!("LD SP,nn", 12, |gb, nn| gb.regs.sp = nn),
  void!("LD (HL-),A", 8, |gb| {
    let a = gb.regs.a;
    write_hl(gb, a);
    gb.regs.hl_dec()
  }),
  void!("INC SP", 8, |gb| gb.regs.sp = gb.regs.sp.wrapping_add(1)),
  void!("INC (HL)", 12, inc_hl_ind),
  void!("DEC (HL)", 12, dec_hl_ind),
  byte!("LD (HL),n", 12, write_hl),
  void!("SCF", 4, |gb| alu::scf(&mut gb.regs)),
  byte!("JR C,e", 8, |gb, e| {
    let cond = gb.regs.c();
    jr_if(gb, cond, e)
  }),
  void!("ADD HL,SP", 8, |gb| {
    let n = gb.regs.sp;
    add_hl(gb, n)
  }),
  void!("LD A,(HL-)", 8, |gb| {
    gb.regs.a = read_hl(gb);
    gb.regs.hl_dec()
  }),
  void!("DEC SP", 8, |gb| gb.regs.sp = gb.regs.sp.wrapping_sub(1)),
  inc!("INC A", a),
  dec!("DEC A", a),
  ld_imm!("LD A,n", a),
  void!("CCF", 4, |gb| alu::ccf(&mut gb.regs)),
  // 0x40
  ld!("LD B,B", b, b),
  ld!("LD B,C", b, c),
  ld!("LD B,D", b, d),
  ld!("LD B,E", b, e),
  ld!("LD B,H", b, h),
  ld!("LD B,L", b, l),
  ld_from_hl!("LD B,(HL)", b),
  ld!("LD B,A", b, a),
  ld!("LD C,B", c, b),
  ld!("LD C,C", c, c),
  ld!("LD C,D", c, d),
  ld!("LD C,E", c, e),
  ld!("LD C,H", c, h),
  ld!("LD C,L", c, l),
  ld_from_hl!("LD C,(HL)", c),
  ld!("LD C,A", c, a),
  // 0x50
  ld!("LD D,B", d, b),
  ld!("LD D,C", d, c),
  ld!("LD D,D", d, d),
  ld!("LD D,E", d, e),
  ld!("LD D,H", d, h),
  ld!("LD D,L", d, l),
  ld_from_hl!("LD D,(HL)", d),
  ld!("LD D,A", d, a),
  ld!("LD E,B", e, b),
  ld!("LD E,C", e, c),
  ld!("LD E,D", e, d),
  ld!("LD E,E", e, e),
  ld!("LD E,H", e, h),
  ld!("LD E,L", e, l),
  ld_from_hl!("LD E,(HL)", e),
  ld!("LD E,A", e, a),
  // 0x60
  ld!("LD H,B", h, b),
  ld!("LD H,C", h, c),
  ld!("LD H,D", h, d),
  ld!("LD H,E", h, e),
  ld!("LD H,H", h, h),
  ld!("LD H,L", h, l),
  ld_from_hl!("LD H,(HL)", h),
  ld!("LD H,A", h, a),
  ld!("LD L,B", l, b),
  ld!("LD L,C", l, c),
  ld!("LD L,D", l, d),
  ld!("LD L,E", l, e),
  ld!("LD L,H", l, h),
  ld!("LD L,L", l, l),
  ld_from_hl!("LD L,(HL)", l),
  ld!("LD L,A", l, a),
  // 0x70
  ld_to_hl!("LD (HL),B", b),
  ld_to_hl!("LD (HL),C", c),
  ld_to_hl!("LD (HL),D", d),
  ld_to_hl!("LD (HL),E", e),
  ld_to_hl!("LD (HL),H", h),
  ld_to_hl!("LD (HL),L", l),
  void!("HALT", 4, |gb| gb.halt()),
  ld_to_hl!("LD (HL),A", a),
  ld!("LD A,B", a, b),
  ld!("LD A,C", a, c),
  ld!("LD A,D", a, d),
  ld!("LD A,E", a, e),
  ld!("LD A,H", a, h),
  ld!("LD A,L", a, l),
  ld_from_hl!("LD A,(HL)", a),
  ld!("LD A,A", a, a),
  // 0x80
  alu!("ADD A,B", alu::add, b),
  alu!("ADD A,C", alu::add, c),
  alu!("ADD A,D", alu::add, d),
  alu!("ADD A,E", alu::add, e),
  alu!("ADD A,H", alu::add, h),
  alu!("ADD A,L", alu::add, l),
  alu!("ADD A,(HL)", alu::add, hl),
  alu!("ADD A,A", alu::add, a),
  alu!("ADC A,B", alu::adc, b),
  alu!("ADC A,C", alu::adc, c),
  alu!("ADC A,D", alu::adc, d),
  alu!("ADC A,E", alu::adc, e),
  alu!("ADC A,H", alu::adc, h),
  alu!("ADC A,L", alu::adc, l),
  alu!("ADC A,(HL)", alu::adc, hl),
  alu!("ADC A,A", alu::adc, a),
  // 0x90
  alu!("SUB B", alu::sub, b),
  alu!("SUB C", alu::sub, c),
  alu!("SUB D", alu::sub, d),
  alu!("SUB E", alu::sub, e),
  alu!("SUB H", alu::sub, h),
  alu!("SUB L", alu::sub, l),
  alu!("SUB (HL)", alu::sub, hl),
  alu!("SUB A", alu::sub, a),
  alu!("SBC A,B", alu::sbc, b),
  alu!("SBC A,C", alu::sbc, c),
  alu!("SBC A,D", alu::sbc, d),
  alu!("SBC A,E", alu::sbc, e),
  alu!("SBC A,H", alu::sbc, h),
  alu!("SBC A,L", alu::sbc, l),
  alu!("SBC A,(HL)", alu::sbc, hl),
  alu!("SBC A,A", alu::sbc, a),
  // 0xa0
  alu!("AND B", alu::and, b),
  alu!("AND C", alu::and, c),
  alu!("AND D", alu::and, d),
  alu!("AND E", alu::and, e),
  alu!("AND H", alu::and, h),
  alu!("AND L", alu::and, l),
  alu!("AND (HL)", alu::and, hl),
  alu!("AND A", alu::and, a),
  alu!("XOR B", alu::xor, b),
  alu!("XOR C", alu::xor, c),
  alu!("XOR D", alu::xor, d),
  alu!("XOR E", alu::xor, e),
  alu!("XOR H", alu::xor, h),
  alu!("XOR L", alu::xor, l),
  alu!("XOR (HL)", alu::xor, hl),
  alu!("XOR A", alu::xor, a),
  // 0xb0
  alu!("OR B", alu::or, b),
  alu!("OR C", alu::or, c),
  alu!("OR D", alu::or, d),
  alu!("OR E", alu::or, e),
  alu!("OR H", alu::or, h),
  alu!("OR L", alu::or, l),
  alu!("OR (HL)", alu::or, hl),
  alu!("OR A", alu::or, a),
  alu!("CP B", alu::cp, b),
  alu!("CP C", alu::cp, c),
  alu!("CP D", alu::cp, d),
  alu!("CP E", alu::cp, e),
  alu!("CP H", alu::cp, h),
  alu!("CP L", alu::cp, l),
  alu!("CP (HL)", alu::cp, hl),
  alu!("CP A", alu::cp, a),
  // 0xc0
  void!("RET NZ", 8, |gb| {
    let cond = !gb.regs.z();
    ret_if(gb, cond)
  }),
  pair!(pop "POP BC", set_bc),
  word!("JP NZ,nn", 12, |gb, nn| {
    let cond = !gb.regs.z();
    jp_if(gb, cond, nn)
  }),
  word!("JP nn", 16, |gb, nn| gb.regs.pc = nn),
  word!("CALL NZ,nn", 12, |gb, nn| {
    let cond = !gb.regs.z();
    call_if(gb, cond, nn)
  }),
  pair!(push "PUSH BC", bc),
  alu!("ADD A,n", alu::add, imm),
  rst!("RST 00H", 0x00),
  void!("RET Z", 8, |gb| {
    let cond = gb.regs.z();
    ret_if(gb, cond)
  }),
  void!("RET", 16, ret),
  word!("JP Z,nn", 12, |gb, nn| {
    let cond = gb.regs.z();
    jp_if(gb, cond, nn)
  }),
  byte!("PREFIX CB", 0, cb::execute),
  word!("CALL Z,nn", 12, |gb, nn| {
    let cond = gb.regs.z();
    call_if(gb, cond, nn)
  }),
  word!("CALL nn", 24, |gb, nn| call(gb, nn)),
  alu!("ADC A,n", alu::adc, imm),
  rst!("RST 08H", 0x08),
  // 0xd0
  void!("RET NC", 8, |gb| {
    let cond = !gb.regs.c();
    ret_if(gb, cond)
  }),
  pair!(pop "POP DE", set_de),
  word!("JP NC,nn", 12, |gb, nn| {
    let cond = !gb.regs.c();
    jp_if(gb, cond, nn)
  }),
  None,
  word!("CALL NC,nn", 12, |gb, nn| {
    let cond = !gb.regs.c();
    call_if(gb, cond, nn)
  }),
  pair!(push "PUSH DE", de),
  alu!("SUB n", alu::sub, imm),
  rst!("RST 10H", 0x10),
  void!("RET C", 8, |gb| {
    let cond = gb.regs.c();
    ret_if(gb, cond)
  }),
  void!("RETI", 16, |gb| gb.return_from_interrupt()),
  word!("JP C,nn", 12, |gb, nn| {
    let cond = gb.regs.c();
    jp_if(gb, cond, nn)
  }),
  None,
  word!("CALL C,nn", 12, |gb, nn| {
    let cond = gb.regs.c();
    call_if(gb, cond, nn)
  }),
  None,
  alu!("SBC A,n", alu::sbc, imm),
  rst!("RST 18H", 0x18),
  // 0xe0
  byte!("LDH (n),A", 12, ldh_write),
  pair!(pop "POP HL", set_hl),
  void!("LD (C),A", 8, |gb| {
    let c = gb.regs.c;
    ldh_write(gb, c)
  }),
  None,
  None,
  pair!(push "PUSH HL", hl),
  alu!("AND n", alu::and, imm),
  rst!("RST 20H", 0x20),
  byte!("ADD SP,e", 16, add_sp),
  void!("JP HL", 4, |gb| gb.regs.pc = gb.regs.hl()),
  word!("LD (nn),A", 16, |gb, nn| {
    let a = gb.regs.a;
    gb.mem.wb(nn, a)
  }),
  None,
  None,
  None,
  alu!("XOR n", alu::xor, imm),
  rst!("RST 28H", 0x28),
  // 0xf0
  byte!("LDH A,(n)", 12, ldh_read),
  void!("POP AF", 12, pop_af),
  void!("LD A,(C)", 8, |gb| {
    let c = gb.regs.c;
    ldh_read(gb, c)
  }),
  void!("DI", 4, |gb| gb.ints.set_master(false)),
  None,
  void!("PUSH AF", 16, push_af),
  alu!("OR n", alu::or, imm),
  rst!("RST 30H", 0x30),
  byte!("LD HL,SP+e", 12, ld_hl_sp),
  void!("LD SP,HL", 8, |gb| gb.regs.sp = gb.regs.hl()),
  word!("LD A,(nn)", 16, |gb, nn| gb.regs.a = gb.mem.rb(nn)),
  void!("EI", 4, |gb| gb.ints.set_master(true)),
  None,
  None,
  alu!("CP n", alu::cp, imm),
  rst!("RST 38H", 0x38),
];
