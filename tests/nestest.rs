// Nestest ROM integration test
// This test runs the Nestest ROM and compares the CPU trace log with the golden log

use nes_rs::bus::Bus;
use nes_rs::cartridge::mappers::create_mapper;
use nes_rs::cartridge::{Cartridge, Mirroring};
use nes_rs::cpu::Cpu;
use nes_rs::ppu::Ppu;
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::rc::Rc;

fn test_bus() -> Bus {
    let cartridge = Cartridge {
        prg_rom: vec![0u8; 32 * 1024],
        chr_rom: vec![0u8; 8 * 1024],
        chr_is_ram: true,
        mapper_id: 0,
        mirroring: Mirroring::Horizontal,
        has_battery: false,
    };
    let mapper = Rc::new(RefCell::new(create_mapper(cartridge).unwrap()));
    let ppu = Ppu::new(mapper.clone());
    Bus::new(mapper, ppu)
}

#[test]
#[ignore] // Run with: cargo test nestest -- --ignored --nocapture
fn nestest_cpu_test() {
    let rom_path = "tests/nes-test-rom/other/nestest.nes";
    let rom_data = fs::read(rom_path).expect("Failed to load Nestest ROM");
    let cartridge = Cartridge::from_ines_bytes(&rom_data).expect("Failed to parse Nestest ROM");
    let mapper = Rc::new(RefCell::new(create_mapper(cartridge).unwrap()));
    let ppu = Ppu::new(mapper.clone());
    let mut bus = Bus::new(mapper, ppu);
    let mut cpu = Cpu::new();

    let log_path = "tests/nes-test-rom/other/nestest.log";
    let golden_log = fs::read_to_string(log_path).expect("Failed to load golden log");
    let golden_lines: Vec<&str> = golden_log.lines().collect();

    // Set PC to $C000 for automation mode (instead of using reset vector)
    cpu.pc = 0xC000;
    cpu.cycles = 7; // Start at cycle 7 to match golden log

    let mut trace_file =
        fs::File::create("nestest_trace.log").expect("Failed to create trace log file");

    let mut mismatches = Vec::new();
    let max_instructions = 5003; // Nestest runs about 5003 instructions in automation mode

    for instruction_num in 0..max_instructions {
        let trace_line = cpu.trace(&mut bus);
        writeln!(trace_file, "{}", trace_line).expect("Failed to write to trace file");

        if instruction_num < golden_lines.len() {
            let golden_line = golden_lines[instruction_num];
            if !compare_trace_lines(&trace_line, golden_line) {
                mismatches.push((
                    instruction_num + 1,
                    trace_line.clone(),
                    golden_line.to_string(),
                ));
                if mismatches.len() <= 10 {
                    println!("\nMismatch at instruction {}:", instruction_num + 1);
                    println!("Expected: {}", golden_line);
                    println!("Got:      {}", trace_line);
                }
            }
        }

        cpu.step(&mut bus);

        // $02/$03 hold the official/unofficial opcode error codes; both
        // should stay $00 for the whole automation run.
        let result_02 = bus.read(0x02);
        let result_03 = bus.read(0x03);

        if result_02 != 0 || result_03 != 0 {
            println!("\nNestest failed!");
            println!("Error code: $02=${:02X}, $03=${:02X}", result_02, result_03);
            break;
        }
    }

    println!("\nNestest execution complete");
    println!("Total mismatches: {}", mismatches.len());
    println!("Trace log written to: nestest_trace.log");

    let result_02 = bus.read(0x02);
    let result_03 = bus.read(0x03);
    println!("\nFinal test result:");
    println!("$02 = {:02X} (expected: 00)", result_02);
    println!("$03 = {:02X} (expected: 00)", result_03);

    assert_eq!(result_02, 0, "Test failed: $02 should be $00");
    assert_eq!(result_03, 0, "Test failed: $03 should be $00");

    if !mismatches.is_empty() {
        println!("\nNote: {} trace mismatches detected", mismatches.len());
    }
}

/// Compare trace lines up through the SP register and the CYC counter,
/// skipping the PPU dot/scanline columns (whose exact format differs).
fn compare_trace_lines(actual: &str, expected: &str) -> bool {
    let actual_registers = actual
        .find("SP:")
        .map(|pos| &actual[..(pos + 5).min(actual.len())])
        .unwrap_or(actual);
    let expected_registers = expected
        .find("SP:")
        .map(|pos| &expected[..(pos + 5).min(expected.len())])
        .unwrap_or(expected);

    let actual_cyc = actual.split("CYC:").nth(1).map(str::trim);
    let expected_cyc = expected.split("CYC:").nth(1).map(str::trim);

    actual_registers == expected_registers && actual_cyc == expected_cyc
}

#[test]
fn nestest_quick_smoke_test() {
    let mut cpu = Cpu::new();
    let mut bus = test_bus();

    // LDA #$42, STA $00, BRK
    bus.write(0x8000, 0xA9);
    bus.write(0x8001, 0x42);
    bus.write(0x8002, 0x85);
    bus.write(0x8003, 0x00);
    bus.write(0x8004, 0x00);

    cpu.pc = 0x8000;

    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.pc, 0x8002);

    cpu.step(&mut bus);
    assert_eq!(bus.read(0x00), 0x42);
    assert_eq!(cpu.pc, 0x8004);
}
