use std::io::Write;

use anyhow::{bail, Context, Result};
use gameboj::machine::TICKS_PER_CYCLE;
use gameboj::{Cartridge, GameBoy, MachineConfig, CLOCK_FREQ};

/// Machine cycles run when no count is given: ten emulated seconds.
const DEFAULT_CYCLES: u64 = 10 * CLOCK_FREQ / TICKS_PER_CYCLE;

const BOOT_ROM_ENV: &str = "GAMEBOJ_BOOT_ROM";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        bail!("usage: gameboj_headless <rom.gb> [machine cycles]");
    };
    let cycles = match args.next() {
        Some(count) => count
            .parse::<u64>()
            .with_context(|| format!("invalid cycle count '{count}'"))?,
        None => DEFAULT_CYCLES,
    };

    log::info!("Playing ROM path: '{rom_path}'");
    let rom = std::fs::read(&rom_path).with_context(|| format!("failed to read ROM '{rom_path}'"))?;
    let cartridge = Cartridge::from_rom(rom).with_context(|| format!("failed to load ROM '{rom_path}'"))?;

    let config = match std::env::var_os(BOOT_ROM_ENV) {
        Some(path) => {
            let boot_rom = std::fs::read(&path)
                .with_context(|| format!("failed to read boot ROM {}", path.to_string_lossy()))?;
            if boot_rom.len() != 256 {
                bail!("boot ROM must be 256 bytes, got {}", boot_rom.len());
            }
            MachineConfig::builder()
                .cartridge(cartridge)
                .boot_rom(boot_rom)
                .build()
        }
        None => MachineConfig::builder().cartridge(cartridge).build(),
    };

    let mut gb = GameBoy::new(config);
    let result = gb.run_until(cycles * TICKS_PER_CYCLE);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&gb.serial_output())?;
    stdout.flush()?;

    result.with_context(|| format!("CPU stopped after {} cycles", gb.cycles()))?;
    log::info!("Ran {} machine cycles", gb.cycles());
    Ok(())
}
