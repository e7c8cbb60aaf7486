// NES Emulator - Command line entry point
//
// Loads a single iNES ROM and runs it headlessly for a fixed number of
// frames, reporting cartridge/mapper errors with a non-zero exit code.
// There is no windowing or audio surface in this build; a host embedding
// this crate drives `Emulator::run_frame` and reads `frame_buffer()` itself.

use nes_rs::Emulator;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "nes-rs".to_string());
    let Some(rom_path) = args.next() else {
        eprintln!("usage: {} <rom.nes>", program);
        return ExitCode::FAILURE;
    };

    let mut emulator = match Emulator::load_rom(&rom_path) {
        Ok(emulator) => emulator,
        Err(e) => {
            eprintln!("failed to load '{}': {}", rom_path, e);
            return ExitCode::FAILURE;
        }
    };

    println!("loaded '{}'", rom_path);
    for _ in 0..60 {
        emulator.run_frame();
    }
    println!(
        "ran 60 frames ({} CPU cycles)",
        emulator.cpu().cycles
    );

    ExitCode::SUCCESS
}
