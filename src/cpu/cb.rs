//! CB-prefixed opcodes.
//!
//! The second byte fully decodes: bits 0-2 pick the operand, bits 3-5 the
//! bit index or shift kind, bits 6-7 the group.

use std::fmt;

use crate::cpu::alu;
use crate::gameboy::GameBoy;

/// Operand selected by the low three bits.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Target {
  B,
  C,
  D,
  E,
  H,
  L,
  /// The byte at (HL).
  HLInd,
  A,
}

impl Target {
  const fn decode(code: u8) -> Target {
    match code & 0x07 {
      0 => Target::B,
      1 => Target::C,
      2 => Target::D,
      3 => Target::E,
      4 => Target::H,
      5 => Target::L,
      6 => Target::HLInd,
      _ => Target::A,
    }
  }

  fn read(self, gb: &GameBoy) -> u8 {
    match self {
      Target::B => gb.regs.b,
      Target::C => gb.regs.c,
      Target::D => gb.regs.d,
      Target::E => gb.regs.e,
      Target::H => gb.regs.h,
      Target::L => gb.regs.l,
      Target::HLInd => gb.mem.rb(gb.regs.hl()),
      Target::A => gb.regs.a,
    }
  }

  fn write(self, gb: &mut GameBoy, value: u8) {
    match self {
      Target::B => gb.regs.b = value,
      Target::C => gb.regs.c = value,
      Target::D => gb.regs.d = value,
      Target::E => gb.regs.e = value,
      Target::H => gb.regs.h = value,
      Target::L => gb.regs.l = value,
      Target::HLInd => {
        let hl = gb.regs.hl();
        gb.mem.wb(hl, value)
      }
      Target::A => gb.regs.a = value,
    }
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let s = match *self {
      Target::B => "B",
      Target::C => "C",
      Target::D => "D",
      Target::E => "E",
      Target::H => "H",
      Target::L => "L",
      Target::HLInd => "(HL)",
      Target::A => "A",
    };
    f.write_str(s)
  }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Kind {
  Rlc,
  Rrc,
  Rl,
  Rr,
  Sla,
  Sra,
  Swap,
  Srl,
  Bit(u8),
  Res(u8),
  Set(u8),
}

impl Kind {
  const fn decode(code: u8) -> Kind {
    let y = (code >> 3) & 0x07;
    match code >> 6 {
      0 => match y {
        0 => Kind::Rlc,
        1 => Kind::Rrc,
        2 => Kind::Rl,
        3 => Kind::Rr,
        4 => Kind::Sla,
        5 => Kind::Sra,
        6 => Kind::Swap,
        _ => Kind::Srl,
      },
      1 => Kind::Bit(y),
      2 => Kind::Res(y),
      _ => Kind::Set(y),
    }
  }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CbOpcode {
  pub kind: Kind,
  pub target: Target,
}

impl CbOpcode {
  pub const fn decode(code: u8) -> CbOpcode {
    CbOpcode {
      kind: Kind::decode(code),
      target: Target::decode(code),
    }
  }

  /// Register forms take 8 cycles, (HL) forms 16.
  pub fn cycles(&self) -> u32 {
    match self.target {
      Target::HLInd => 16,
      _ => 8,
    }
  }
}

impl fmt::Display for CbOpcode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.kind {
      Kind::Rlc => write!(f, "RLC {}", self.target),
      Kind::Rrc => write!(f, "RRC {}", self.target),
      Kind::Rl => write!(f, "RL {}", self.target),
      Kind::Rr => write!(f, "RR {}", self.target),
      Kind::Sla => write!(f, "SLA {}", self.target),
      Kind::Sra => write!(f, "SRA {}", self.target),
      Kind::Swap => write!(f, "SWAP {}", self.target),
      Kind::Srl => write!(f, "SRL {}", self.target),
      Kind::Bit(b) => write!(f, "BIT {},{}", b, self.target),
      Kind::Res(b) => write!(f, "RES {},{}", b, self.target),
      Kind::Set(b) => write!(f, "SET {},{}", b, self.target),
    }
  }
}

static CB_OPCODES: [CbOpcode; 256] = build_table();

const fn build_table() -> [CbOpcode; 256] {
  let mut table = [CbOpcode::decode(0); 256];
  let mut i = 0;
  while i < 256 {
    table[i] = CbOpcode::decode(i as u8);
    i += 1;
  }
  table
}

pub fn lookup(code: u8) -> &'static CbOpcode {
  &CB_OPCODES[code as usize]
}

/// Run the CB-prefixed operation `code`. PC is already past both bytes.
pub fn execute(gb: &mut GameBoy, code: u8) {
  let op = lookup(code);
  trace!("CB 0x{:02x}: {}", code, op);

  let n = op.target.read(gb);
  let result = match op.kind {
    Kind::Bit(b) => {
      alu::bit(&mut gb.regs, b, n);
      None
    }
    Kind::Res(b) => Some(n & !(1 << b)),
    Kind::Set(b) => Some(n | (1 << b)),
    Kind::Rlc => Some(alu::rlc(&mut gb.regs, n)),
    Kind::Rrc => Some(alu::rrc(&mut gb.regs, n)),
    Kind::Rl => Some(alu::rl(&mut gb.regs, n)),
    Kind::Rr => Some(alu::rr(&mut gb.regs, n)),
    Kind::Sla => Some(alu::sla(&mut gb.regs, n)),
    Kind::Sra => Some(alu::sra(&mut gb.regs, n)),
    Kind::Swap => Some(alu::swap(&mut gb.regs, n)),
    Kind::Srl => Some(alu::srl(&mut gb.regs, n)),
  };
  if let Some(r) = result {
    op.target.write(gb, r);
  }

  gb.cpu.increase_ticks(op.cycles());
}
