// Common test utilities for ROM-based integration tests
//
// Drives Blargg-convention test ROMs (CPU, PPU, sprite suites) through a
// real Cartridge -> Mapper -> Ppu -> Bus -> Cpu stack. These ROMs signal
// completion through a fixed memory protocol at $6000-$6004:
//
// - $6001-$6003 hold the magic bytes DE B0 61 once the harness is live.
// - $6000 holds 0x80 while running, 0x81 if a reset is requested, and the
//   final result code (0 = pass) once the test has finished.
// - $6004 onward holds a null-terminated ASCII status message.

#![allow(dead_code)]

use nes_rs::bus::Bus;
use nes_rs::cartridge::mappers::create_mapper;
use nes_rs::cartridge::Cartridge;
use nes_rs::cpu::Cpu;
use nes_rs::ppu::Ppu;
use std::cell::RefCell;
use std::rc::Rc;

/// Result of running a test ROM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed(u8),
    Timeout,
}

fn harness_status(bus: &mut Bus) -> Option<u8> {
    if bus.read(0x6001) == 0xDE && bus.read(0x6002) == 0xB0 && bus.read(0x6003) == 0x61 {
        Some(bus.read(0x6000))
    } else {
        None
    }
}

fn read_message(bus: &mut Bus) -> String {
    let mut message = String::new();
    let mut addr = 0x6004u16;
    for _ in 0..1024 {
        let byte = bus.read(addr);
        if byte == 0 {
            break;
        }
        if (0x20..=0x7E).contains(&byte) {
            message.push(byte as char);
        } else if byte == b'\n' {
            message.push('\n');
        }
        addr = addr.wrapping_add(1);
    }
    message
}

/// Load a ROM, run it to completion against the harness protocol above, and
/// report the final pass/fail status together with its status message.
///
/// `max_cpu_cycles` bounds the run so a stuck test fails fast instead of
/// hanging the suite.
pub fn run_blargg_style_test(rom_path: &str, max_cpu_cycles: u64) -> Result<(bool, String), String> {
    let data = std::fs::read(rom_path)
        .map_err(|e| format!("failed to read ROM {}: {}", rom_path, e))?;
    let cartridge = Cartridge::from_ines_bytes(&data).map_err(|e| e.to_string())?;
    let mapper = Rc::new(RefCell::new(
        create_mapper(cartridge).map_err(|e| e.to_string())?,
    ));
    let ppu = Ppu::new(mapper.clone());
    let mut bus = Bus::new(mapper, ppu);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);

    let mut odd_cycle = false;
    for _ in 0..max_cpu_cycles {
        if bus.dma_in_progress() {
            bus.tick_dma(odd_cycle);
        } else {
            cpu.step(&mut bus);
        }
        odd_cycle = !odd_cycle;

        for _ in 0..3 {
            bus.ppu.step();
        }
        if bus.ppu.nmi_pending() {
            bus.ppu.clear_nmi();
            cpu.request_nmi();
        }
        if bus.mapper_irq_pending() {
            cpu.request_irq();
        }

        if let Some(status) = harness_status(&mut bus) {
            if status != 0x80 && status != 0x81 {
                let message = read_message(&mut bus);
                return Ok((status == 0, message));
            }
        }
    }

    Err(format!(
        "test ROM {} did not signal completion within {} cycles",
        rom_path, max_cpu_cycles
    ))
}
