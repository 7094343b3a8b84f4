#[macro_use]
extern crate log;

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use gb_core::mem::{ECHO_START, WRAM_START};
use gb_core::{BootRom, BootRomKind, GameBoy};

#[derive(Parser)]
#[command(version, about = "Run a Game Boy boot rom or raw program on the CPU core")]
struct Args {
  /// Path to boot ROM file
  bootrom: PathBuf,

  /// Boot ROM is a 2048-byte CGB image
  #[arg(long)]
  cgb: bool,

  /// Raw program copied into work RAM before running
  #[arg(long)]
  program: Option<PathBuf>,

  /// Hex address the program is copied to
  #[arg(long, default_value = "c000", value_parser = parse_hex)]
  load_addr: u16,

  /// Hex address to start executing at [default: 0000]
  #[arg(long, value_parser = parse_hex)]
  entry: Option<u16>,

  /// Maximum number of steps to run
  #[arg(long, default_value_t = 1_000_000)]
  steps: u64,

  /// Stop once this many clock cycles have elapsed
  #[arg(long)]
  cycles: Option<u64>,

  /// Print work RAM when done
  #[arg(long)]
  dump_wram: bool,
}

fn parse_hex(s: &str) -> Result<u16, ParseIntError> {
  let s = s.trim_start_matches("0x").trim_start_matches("0X");
  u16::from_str_radix(s, 16)
}

fn main() -> anyhow::Result<()> {
  env_logger::init();
  let args = Args::parse();

  let kind = if args.cgb {
    BootRomKind::Cgb
  } else {
    BootRomKind::Dmg
  };
  let bios = BootRom::from_file(kind, &args.bootrom).context("loading boot rom")?;
  let mut gb = GameBoy::new(bios)?;

  if let Some(path) = &args.program {
    let program = fs::read(path)
      .with_context(|| format!("reading program {}", path.display()))?;
    let start = usize::from(args.load_addr);
    let end = start + program.len();
    if start < usize::from(WRAM_START) || end > usize::from(ECHO_START) {
      bail!(
        "program of {} bytes at 0x{:04x} does not fit in work ram",
        program.len(),
        args.load_addr
      );
    }
    gb.mem.write(args.load_addr, &program);
    info!("Loaded {} bytes at 0x{:04x}", program.len(), args.load_addr);
  }

  gb.regs.pc = args.entry.unwrap_or(0x0000);

  let mut steps = 0;
  while steps < args.steps && !gb.cpu.is_stopped() {
    if let Some(limit) = args.cycles {
      if gb.cpu.ticks() >= limit {
        break;
      }
    }
    gb.step()
      .with_context(|| format!("after {} steps: {}", steps, gb.regs))?;
    steps += 1;
  }

  info!(
    "Ran {} steps, {} cycles{}",
    steps,
    gb.cpu.ticks(),
    if gb.cpu.is_stopped() { ", stopped" } else { "" }
  );
  println!("{}", gb.regs);

  if args.dump_wram {
    let stdout = io::stdout();
    gb.mem
      .wram()
      .dump(&mut stdout.lock(), 16)
      .context("dumping work ram")?;
  }

  Ok(())
}
