#[macro_use]
extern crate log;

pub mod cpu;
pub mod error;
pub mod gameboy;
pub mod interrupts;
pub mod mem;
mod stack;

pub use crate::error::{Error, Result};
pub use crate::gameboy::GameBoy;
pub use crate::interrupts::{Interrupt, Interrupts};
pub use crate::mem::{BootRom, BootRomKind, Memory, Ram};
