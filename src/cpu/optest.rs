use crate::cpu::{C, H, N, Z};
use crate::error::Error;
use crate::gameboy::GameBoy;
use crate::mem::{BootRom, BootRomKind};

fn init() -> GameBoy {
  let bios = BootRom::new(BootRomKind::Dmg, vec![0; 0x100]).unwrap();
  let mut gb = GameBoy::new(bios).unwrap();
  // Start in WRAM with the stack in WRAM too.
  gb.regs.pc = 0xc000;
  gb.regs.sp = 0xd000;
  gb
}

/// Place `bytes` at PC, step once and return the cycles it took.
fn exec(gb: &mut GameBoy, bytes: &[u8]) -> u64 {
  let pc = gb.regs.pc;
  gb.mem.write(pc, bytes);
  let before = gb.cpu.ticks();
  gb.step().unwrap();
  gb.cpu.ticks() - before
}

fn run(gb: &mut GameBoy, bytes: &[u8], len: u16, time_expected: u64) {
  let start = gb.regs.pc;
  let time_actual = exec(gb, bytes);
  // Test time.
  assert_eq!(time_actual, time_expected);
  // Test that the PC was incremented.
  assert_eq!(gb.regs.pc, start + len);
}

#[test]
fn nop() {
  let mut gb = init();
  run(&mut gb, &[0x00], 1, 4);
}

#[test]
fn ld_nn_n() {
  macro_rules! run_test {
    ($reg:ident, $opcode:expr) => {{
      let mut gb = init();
      let f = gb.regs.f();
      run(&mut gb, &[$opcode, 0x42], 2, 8);
      assert_eq!(gb.regs.f(), f);
      assert_eq!(gb.regs.$reg, 0x42);
    }};
  }
  run_test!(b, 0x06);
  run_test!(c, 0x0e);
  run_test!(d, 0x16);
  run_test!(e, 0x1e);
  run_test!(h, 0x26);
  run_test!(l, 0x2e);
  run_test!(a, 0x3e);
}

#[test]
fn ld_r1_r2() {
  macro_rules! reg_reg {
    ($r1:ident, $r2:ident, $opcode:expr) => {{
      let mut gb = init();
      gb.regs.$r2 = 0x42;
      let f = gb.regs.f();
      run(&mut gb, &[$opcode], 1, 4);
      assert_eq!(gb.regs.f(), f);
      assert_eq!(gb.regs.$r1, 0x42);
      assert_eq!(gb.regs.$r2, 0x42);
    }};
  }

  reg_reg!(a, a, 0x7f);
  reg_reg!(a, b, 0x78);
  reg_reg!(a, c, 0x79);
  reg_reg!(a, d, 0x7a);
  reg_reg!(a, e, 0x7b);
  reg_reg!(a, h, 0x7c);
  reg_reg!(a, l, 0x7d);

  reg_reg!(b, b, 0x40);
  reg_reg!(b, c, 0x41);
  reg_reg!(b, d, 0x42);
  reg_reg!(b, e, 0x43);
  reg_reg!(b, h, 0x44);
  reg_reg!(b, l, 0x45);
  reg_reg!(b, a, 0x47);

  reg_reg!(c, b, 0x48);
  reg_reg!(d, e, 0x53);
  reg_reg!(e, a, 0x5f);
  reg_reg!(h, l, 0x65);
  reg_reg!(l, h, 0x6c);
}

#[test]
fn ld_hl_indirect() {
  let mut gb = init();
  gb.regs.set_hl(0xc100);
  gb.regs.b = 0x99;
  run(&mut gb, &[0x70], 1, 8);
  assert_eq!(gb.mem.rb(0xc100), 0x99);

  run(&mut gb, &[0x7e], 1, 8);
  assert_eq!(gb.regs.a, 0x99);

  run(&mut gb, &[0x36, 0x17], 2, 12);
  assert_eq!(gb.mem.rb(0xc100), 0x17);
}

#[test]
fn ld_hl_inc_dec() {
  let mut gb = init();
  gb.regs.set_hl(0xc100);
  gb.regs.a = 0x5a;
  run(&mut gb, &[0x22], 1, 8);
  assert_eq!(gb.mem.rb(0xc100), 0x5a);
  assert_eq!(gb.regs.hl(), 0xc101);

  run(&mut gb, &[0x32], 1, 8);
  assert_eq!(gb.mem.rb(0xc101), 0x5a);
  assert_eq!(gb.regs.hl(), 0xc100);

  gb.regs.a = 0;
  run(&mut gb, &[0x2a], 1, 8);
  assert_eq!(gb.regs.a, 0x5a);
  assert_eq!(gb.regs.hl(), 0xc101);
}

#[test]
fn ld_pairs() {
  let mut gb = init();
  run(&mut gb, &[0x01, 0x34, 0x12], 3, 12);
  assert_eq!(gb.regs.bc(), 0x1234);
  run(&mut gb, &[0x31, 0xfe, 0xdf], 3, 12);
  assert_eq!(gb.regs.sp, 0xdffe);

  run(&mut gb, &[0x08, 0x00, 0xc2], 3, 20);
  assert_eq!(gb.mem.rb(0xc200), 0xfe);
  assert_eq!(gb.mem.rb(0xc201), 0xdf);

  gb.regs.set_hl(0xc300);
  run(&mut gb, &[0xf9], 1, 8);
  assert_eq!(gb.regs.sp, 0xc300);
}

#[test]
fn inc_dec() {
  let mut gb = init();
  gb.regs.a = 0x0f;
  // Starts with Z H C set; C must survive.
  assert_eq!(gb.regs.f(), Z | H | C);
  run(&mut gb, &[0x3c], 1, 4);
  assert_eq!(gb.regs.a, 0x10);
  assert_eq!(gb.regs.f(), H | C);

  gb.regs.b = 0x01;
  run(&mut gb, &[0x05], 1, 4);
  assert_eq!(gb.regs.b, 0);
  assert_eq!(gb.regs.f(), Z | N | C);

  gb.regs.set_de(0xffff);
  run(&mut gb, &[0x13], 1, 8);
  assert_eq!(gb.regs.de(), 0);
  // 16-bit INC leaves flags alone.
  assert_eq!(gb.regs.f(), Z | N | C);

  gb.regs.set_hl(0xc100);
  gb.mem.wb(0xc100, 0xff);
  run(&mut gb, &[0x34], 1, 12);
  assert_eq!(gb.mem.rb(0xc100), 0);
  assert!(gb.regs.z());
}

#[test]
fn alu_ops() {
  let mut gb = init();
  gb.regs.a = 0x3a;
  gb.regs.b = 0xc6;
  run(&mut gb, &[0x80], 1, 4);
  assert_eq!(gb.regs.a, 0);
  assert_eq!(gb.regs.f(), Z | H | C);

  run(&mut gb, &[0xce, 0x01], 2, 8);
  assert_eq!(gb.regs.a, 0x02);

  run(&mut gb, &[0xfe, 0x02], 2, 8);
  assert_eq!(gb.regs.a, 0x02);
  assert_eq!(gb.regs.f(), Z | N);

  run(&mut gb, &[0xaf], 1, 4);
  assert_eq!(gb.regs.a, 0);
  assert_eq!(gb.regs.f(), Z);

  gb.regs.set_hl(0xc100);
  gb.mem.wb(0xc100, 0x0f);
  gb.regs.a = 0xf0;
  run(&mut gb, &[0xb6], 1, 8);
  assert_eq!(gb.regs.a, 0xff);
  assert_eq!(gb.regs.f(), 0);
}

#[test]
fn daa_after_add() {
  let mut gb = init();
  // LD A,45h; ADD A,38h; DAA
  gb.mem.write(0xc000, &[0x3e, 0x45, 0xc6, 0x38, 0x27]);
  for _ in 0..3 {
    gb.step().unwrap();
  }
  assert_eq!(gb.regs.a, 0x83);
  assert!(!gb.regs.c());
  assert_eq!(gb.cpu.ticks(), 8 + 8 + 4);
}

#[test]
fn rotate_a_clears_z() {
  let mut gb = init();
  gb.regs.a = 0x80;
  gb.regs.set_f(0);
  run(&mut gb, &[0x17], 1, 4);
  // RLA leaves 0 in A but Z stays clear.
  assert_eq!(gb.regs.a, 0);
  assert_eq!(gb.regs.f(), C);

  run(&mut gb, &[0x1f], 1, 4);
  assert_eq!(gb.regs.a, 0x80);
  assert_eq!(gb.regs.f(), 0);
}

#[test]
fn add_hl_keeps_z() {
  let mut gb = init();
  gb.regs.set_f(Z);
  gb.regs.set_hl(0x8a23);
  gb.regs.set_bc(0x0605);
  run(&mut gb, &[0x09], 1, 8);
  assert_eq!(gb.regs.hl(), 0x9028);
  assert_eq!(gb.regs.f(), Z | H);
}

#[test]
fn sp_offsets() {
  let mut gb = init();
  gb.regs.sp = 0xc0ff;
  run(&mut gb, &[0xe8, 0x01], 2, 16);
  assert_eq!(gb.regs.sp, 0xc100);
  assert_eq!(gb.regs.f(), H | C);

  run(&mut gb, &[0xf8, 0xfe], 2, 12);
  assert_eq!(gb.regs.hl(), 0xc0fe);
  assert_eq!(gb.regs.sp, 0xc100);
}

#[test]
fn jr() {
  let mut gb = init();
  // Backwards jump to itself.
  assert_eq!(exec(&mut gb, &[0x18, 0xfe]), 12);
  assert_eq!(gb.regs.pc, 0xc000);

  gb.regs.set_f(0);
  assert_eq!(exec(&mut gb, &[0x20, 0x10]), 12);
  assert_eq!(gb.regs.pc, 0xc012);

  gb.regs.set_f(Z);
  assert_eq!(exec(&mut gb, &[0x20, 0x10]), 8);
  assert_eq!(gb.regs.pc, 0xc014);

  assert_eq!(exec(&mut gb, &[0x38, 0x10]), 8);
  assert_eq!(gb.regs.pc, 0xc016);
}

#[test]
fn jp() {
  let mut gb = init();
  assert_eq!(exec(&mut gb, &[0xc3, 0x00, 0xc1]), 16);
  assert_eq!(gb.regs.pc, 0xc100);

  gb.regs.set_f(C);
  assert_eq!(exec(&mut gb, &[0xd2, 0x00, 0xc2]), 12);
  assert_eq!(gb.regs.pc, 0xc103);
  assert_eq!(exec(&mut gb, &[0xda, 0x00, 0xc2]), 16);
  assert_eq!(gb.regs.pc, 0xc200);

  gb.regs.set_hl(0xc400);
  assert_eq!(exec(&mut gb, &[0xe9]), 4);
  assert_eq!(gb.regs.pc, 0xc400);
}

#[test]
fn call_ret() {
  let mut gb = init();
  assert_eq!(exec(&mut gb, &[0xcd, 0x00, 0xc1]), 24);
  assert_eq!(gb.regs.pc, 0xc100);
  assert_eq!(gb.regs.sp, 0xcffe);
  assert_eq!(gb.mem.rw(0xcffe), 0xc003);

  assert_eq!(exec(&mut gb, &[0xc9]), 16);
  assert_eq!(gb.regs.pc, 0xc003);
  assert_eq!(gb.regs.sp, 0xd000);
}

#[test]
fn conditional_call_ret() {
  let mut gb = init();
  gb.regs.set_f(0);
  assert_eq!(exec(&mut gb, &[0xcc, 0x00, 0xc1]), 12);
  assert_eq!(gb.regs.pc, 0xc003);
  assert_eq!(gb.regs.sp, 0xd000);

  assert_eq!(exec(&mut gb, &[0xc4, 0x00, 0xc1]), 24);
  assert_eq!(gb.regs.pc, 0xc100);

  assert_eq!(exec(&mut gb, &[0xc8]), 8);
  assert_eq!(gb.regs.pc, 0xc101);

  assert_eq!(exec(&mut gb, &[0xc0]), 20);
  assert_eq!(gb.regs.pc, 0xc006);
  assert_eq!(gb.regs.sp, 0xd000);
}

#[test]
fn rst() {
  let mut gb = init();
  assert_eq!(exec(&mut gb, &[0xef]), 16);
  assert_eq!(gb.regs.pc, 0x28);
  assert_eq!(gb.mem.rw(gb.regs.sp), 0xc001);
}

#[test]
fn push_pop() {
  let mut gb = init();
  gb.regs.set_bc(0x1234);
  run(&mut gb, &[0xc5], 1, 16);
  run(&mut gb, &[0xd1], 1, 12);
  assert_eq!(gb.regs.de(), 0x1234);
  assert_eq!(gb.regs.sp, 0xd000);
}

#[test]
fn pop_af_masks_flags() {
  let mut gb = init();
  gb.regs.set_bc(0x12ff);
  run(&mut gb, &[0xc5], 1, 16);
  run(&mut gb, &[0xf1], 1, 12);
  assert_eq!(gb.regs.a, 0x12);
  assert_eq!(gb.regs.f(), 0xf0);

  run(&mut gb, &[0xf5], 1, 16);
  assert_eq!(gb.mem.rw(gb.regs.sp), 0x12f0);
}

#[test]
fn cb_bit() {
  let mut gb = init();
  gb.regs.h = 0x80;
  gb.regs.set_f(N | C);
  run(&mut gb, &[0xcb, 0x7c], 2, 8);
  assert_eq!(gb.regs.f(), H | C);

  gb.regs.set_hl(0xc100);
  gb.mem.wb(0xc100, 0x7f);
  run(&mut gb, &[0xcb, 0x7e], 2, 16);
  assert_eq!(gb.regs.f(), Z | H | C);
}

#[test]
fn cb_writes_back() {
  let mut gb = init();
  gb.regs.set_hl(0xc100);
  gb.mem.wb(0xc100, 0x01);
  // SET 3,(HL)
  run(&mut gb, &[0xcb, 0xde], 2, 16);
  assert_eq!(gb.mem.rb(0xc100), 0x09);
  // RES 0,(HL)
  run(&mut gb, &[0xcb, 0x86], 2, 16);
  assert_eq!(gb.mem.rb(0xc100), 0x08);

  gb.regs.a = 0xf1;
  // SWAP A
  run(&mut gb, &[0xcb, 0x37], 2, 8);
  assert_eq!(gb.regs.a, 0x1f);
  assert_eq!(gb.regs.f(), 0);

  gb.regs.b = 0x80;
  // SLA B
  run(&mut gb, &[0xcb, 0x20], 2, 8);
  assert_eq!(gb.regs.b, 0);
  assert_eq!(gb.regs.f(), Z | C);
}

#[test]
fn invalid_opcode() {
  let mut gb = init();
  gb.mem.wb(0xc000, 0xdb);
  let regs = gb.regs.clone();
  let wram = gb.mem.wram().as_slice().to_vec();
  match gb.step() {
    Err(Error::InvalidOpcode { opcode, addr }) => {
      assert_eq!(opcode, 0xdb);
      assert_eq!(addr, 0xc000);
    }
    r => panic!("unexpected result {:?}", r),
  }
  assert_eq!(gb.regs.pc, 0xc001);
  assert_eq!(gb.cpu.ticks(), 0);
  // Nothing but PC moved.
  gb.regs.pc = regs.pc;
  assert_eq!(gb.regs, regs);
  assert_eq!(gb.mem.wram().as_slice(), &wram[..]);
}

#[test]
fn halt() {
  let mut gb = init();
  gb.ints.set_master(true);
  run(&mut gb, &[0x76], 1, 4);
  assert!(gb.cpu.is_halted());
  // Idles in place.
  assert_eq!(exec(&mut gb, &[]), 4);
  assert_eq!(gb.regs.pc, 0xc001);
}

#[test]
fn halt_without_master() {
  let mut gb = init();
  run(&mut gb, &[0x76, 0x3c], 2, 4);
  assert!(!gb.cpu.is_halted());
}

#[test]
fn stop() {
  let mut gb = init();
  run(&mut gb, &[0x10, 0x00], 2, 4);
  assert!(gb.cpu.is_stopped());
  assert_eq!(exec(&mut gb, &[0x3c]), 0);
  assert_eq!(gb.regs.pc, 0xc002);
}

#[test]
fn ei_di_reti() {
  let mut gb = init();
  run(&mut gb, &[0xfb], 1, 4);
  assert!(gb.ints.master());
  run(&mut gb, &[0xf3], 1, 4);
  assert!(!gb.ints.master());

  gb.push_word(0xc200);
  assert_eq!(exec(&mut gb, &[0xd9]), 16);
  assert_eq!(gb.regs.pc, 0xc200);
  assert!(gb.ints.master());
}

#[test]
fn boot_program() {
  // LD A,42h; LD (C000h),A; STOP
  let mut image = vec![0; 0x100];
  image[..7].copy_from_slice(&[0x3e, 0x42, 0xea, 0x00, 0xc0, 0x10, 0x00]);
  let bios = BootRom::new(BootRomKind::Dmg, image).unwrap();
  let mut gb = GameBoy::new(bios).unwrap();
  gb.regs.pc = 0x0000;
  let elapsed = gb.run_for(1000).unwrap();
  assert!(gb.cpu.is_stopped());
  assert_eq!(gb.mem.rb(0xc000), 0x42);
  assert_eq!(elapsed, 8 + 16 + 4);
}
