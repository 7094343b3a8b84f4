use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::mem::BootRomKind;

#[derive(Error, Debug)]
pub enum Error {
  /// One of the eleven primary opcodes with no assigned operation.
  /// `addr` is where the opcode byte was fetched from.
  #[error("invalid opcode 0x{opcode:02x} at 0x{addr:04x}")]
  InvalidOpcode { opcode: u8, addr: u16 },

  #[error("{kind:?} boot rom must be {expected} bytes, got {actual}")]
  BootRomSize {
    kind: BootRomKind,
    expected: usize,
    actual: usize,
  },

  #[error("ram size must be between 1 and {max} bytes, got {actual}")]
  RamSize { max: usize, actual: usize },

  #[error("failed to read {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

pub type Result<T> = std::result::Result<T, Error>;
