use std::io::{self, Write};

use crate::error::{Error, Result};

/// Largest store the 16-bit bus could ever index.
const MAX_RAM_SIZE: usize = 0x10000;

/// Flat, fixed-size byte store. Indices are not wrapped: callers pass
/// offsets already reduced to `0..len()`.
#[derive(Debug, Clone)]
pub struct Ram {
  data: Vec<u8>,
}

impl Ram {
  pub fn new(size: usize) -> Result<Ram> {
    if size == 0 || size > MAX_RAM_SIZE {
      return Err(Error::RamSize {
        max: MAX_RAM_SIZE,
        actual: size,
      });
    }
    Ok(Ram {
      data: vec![0; size],
    })
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  pub fn rb(&self, idx: usize) -> u8 {
    self.data[idx]
  }

  pub fn wb(&mut self, idx: usize, value: u8) {
    self.data[idx] = value;
  }

  pub fn as_slice(&self) -> &[u8] {
    &self.data
  }

  /// Write a hex dump, `bytes_per_row` bytes per line, each line prefixed
  /// with the offset of its first byte.
  pub fn dump<W: Write>(&self, out: &mut W, bytes_per_row: usize) -> io::Result<()> {
    let bytes_per_row = bytes_per_row.max(1);
    for (row, chunk) in self.data.chunks(bytes_per_row).enumerate() {
      write!(out, "{:04x}:", row * bytes_per_row)?;
      for b in chunk {
        write!(out, " {:02x}", b)?;
      }
      writeln!(out)?;
    }
    Ok(())
  }
}
