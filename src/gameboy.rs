use crate::cpu::{ops, Registers, CPU};
use crate::error::Result;
use crate::interrupts::{Interrupts, INTERRUPT_CYCLES};
use crate::mem::{BootRom, Memory};

/// Cycles charged for each step spent halted.
const HALT_CYCLES: u32 = 4;

/// The whole machine: processor state, registers, bus and interrupts.
#[derive(Debug)]
pub struct GameBoy {
  pub cpu: CPU,
  pub regs: Registers,
  pub mem: Memory,
  pub ints: Interrupts,
}

impl GameBoy {
  pub fn new(bios: BootRom) -> Result<GameBoy> {
    info!("Starting with {:?} boot rom", bios.kind());
    Ok(GameBoy {
      cpu: CPU::new(),
      regs: Registers::new(),
      mem: Memory::new(bios)?,
      ints: Interrupts::new(),
    })
  }

  /// Return to the power-on state. Work ram keeps its contents.
  pub fn reset(&mut self) {
    debug!("Reset");
    self.cpu.reset();
    self.regs.reset();
    self.ints.reset();
    self.mem.set_boot_mode(true);
  }

  /// Stop the machine until the next reset.
  pub fn stop(&mut self) {
    debug!("STOP at 0x{:04x}", self.regs.pc);
    self.cpu.stop();
  }

  /// Suspend fetching. With the master switch down there is nothing to
  /// wake the processor, so the byte after HALT is skipped instead.
  pub fn halt(&mut self) {
    if self.ints.master() {
      debug!("HALT at 0x{:04x}", self.regs.pc);
      self.cpu.halt();
    } else {
      self.regs.pc = self.regs.pc.wrapping_add(1);
    }
  }

  /// Run one instruction, or one idle slot while halted, then service
  /// interrupts. A stopped machine does nothing.
  pub fn step(&mut self) -> Result<()> {
    if self.cpu.is_stopped() {
      return Ok(());
    }

    if self.cpu.is_halted() {
      self.cpu.increase_ticks(HALT_CYCLES);
    } else {
      ops::execute_next(self)?;
    }

    self.handle_interrupts();
    Ok(())
  }

  /// Step until at least `cycles` have elapsed or the machine stops.
  /// Returns the cycles actually elapsed.
  pub fn run_for(&mut self, cycles: u64) -> Result<u64> {
    let start = self.cpu.ticks();
    while self.cpu.ticks() - start < cycles && !self.cpu.is_stopped() {
      self.step()?;
    }
    Ok(self.cpu.ticks() - start)
  }

  /// RETI: pop PC and raise the master switch.
  pub fn return_from_interrupt(&mut self) {
    self.regs.pc = self.pop_word();
    self.ints.set_master(true);
  }

  fn handle_interrupts(&mut self) {
    if self.cpu.is_halted() && self.ints.next().is_some() {
      debug!("Leaving HALT");
      self.cpu.wake();
    }

    if let Some(int) = self.ints.step() {
      debug!(
        "Interrupt {:?} -> 0x{:04x} from 0x{:04x}",
        int,
        int.vector(),
        self.regs.pc
      );
      let pc = self.regs.pc;
      self.push_word(pc);
      self.regs.pc = int.vector();
      self.cpu.increase_ticks(INTERRUPT_CYCLES);
    }
  }
}
