use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub const DMG_BIOS_SIZE: usize = 0x100;
pub const CGB_BIOS_SIZE: usize = 0x800;

/// Hardware variant a boot ROM image belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BootRomKind {
  /// Original Game Boy, 256-byte image.
  Dmg,
  /// Game Boy Color, 2048-byte image.
  Cgb,
}

impl BootRomKind {
  pub fn size(self) -> usize {
    match self {
      BootRomKind::Dmg => DMG_BIOS_SIZE,
      BootRomKind::Cgb => CGB_BIOS_SIZE,
    }
  }
}

/// Read-only boot ROM image. The size always matches the variant.
#[derive(Clone)]
pub struct BootRom {
  kind: BootRomKind,
  data: Vec<u8>,
}

impl BootRom {
  pub fn new(kind: BootRomKind, data: Vec<u8>) -> Result<BootRom> {
    if data.len() != kind.size() {
      return Err(Error::BootRomSize {
        kind,
        expected: kind.size(),
        actual: data.len(),
      });
    }
    Ok(BootRom { kind, data })
  }

  /// Load an image from disk and validate its size.
  pub fn from_file<P: AsRef<Path>>(kind: BootRomKind, path: P) -> Result<BootRom> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| Error::Io {
      path: path.to_path_buf(),
      source,
    })?;
    debug!("Loaded {:?} boot rom from {}", kind, path.display());
    BootRom::new(kind, data)
  }

  pub fn kind(&self) -> BootRomKind {
    self.kind
  }

  pub fn is_variant(&self, kind: BootRomKind) -> bool {
    self.kind == kind
  }

  pub fn is_dmg(&self) -> bool {
    self.is_variant(BootRomKind::Dmg)
  }

  pub fn is_cgb(&self) -> bool {
    self.is_variant(BootRomKind::Cgb)
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Read the byte at `addr`. Addresses past the image read as 0.
  pub fn rb(&self, addr: u16) -> u8 {
    match self.data.get(addr as usize) {
      Some(b) => *b,
      None => {
        warn!("Boot rom read out of range: 0x{:04x}", addr);
        0
      }
    }
  }
}

impl fmt::Debug for BootRom {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("BootRom")
      .field("kind", &self.kind)
      .field("len", &self.data.len())
      .finish()
  }
}
