// CPU Benchmarks
// Performance benchmarks for CPU instruction execution

use criterion::{criterion_group, criterion_main, Criterion};
use nes_rs::cartridge::mappers::create_mapper;
use nes_rs::cartridge::{Cartridge, Mirroring};
use nes_rs::{Bus, Cpu, Ppu};
use std::cell::RefCell;
use std::hint::black_box;
use std::rc::Rc;

/// A bus backed by a writable NROM cartridge (CHR-RAM, zeroed PRG). Test
/// programs are written into internal RAM rather than PRG-ROM, since real
/// cartridge space isn't writable on this mapper.
fn bench_bus() -> Bus {
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

/// Benchmark CPU instruction execution
/// Tests various common instruction patterns to measure dispatch and execution performance
fn bench_cpu_instructions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_instructions");

    // Benchmark NOP instruction (simplest operation)
    group.bench_function("nop", |b| {
        let mut cpu = Cpu::new();
        let mut bus = bench_bus();

        // NOP = 0xEA (2 cycles each)
        for i in 0..256 {
            bus.write(i, 0xEA);
        }
        cpu.pc = 0;

        b.iter(|| {
            cpu.step(black_box(&mut bus));
        });
    });

    // Benchmark LDA immediate (common load operation)
    group.bench_function("lda_immediate", |b| {
        let mut cpu = Cpu::new();
        let mut bus = bench_bus();

        // LDA #$42 (0xA9 0x42)
        for i in (0..256).step_by(2) {
            bus.write(i, 0xA9);
            bus.write(i + 1, 0x42);
        }
        cpu.pc = 0;

        b.iter(|| {
            cpu.step(black_box(&mut bus));
        });
    });

    // Benchmark ADC immediate (arithmetic operation)
    group.bench_function("adc_immediate", |b| {
        let mut cpu = Cpu::new();
        let mut bus = bench_bus();

        // ADC #$01 (0x69 0x01)
        for i in (0..256).step_by(2) {
            bus.write(i, 0x69);
            bus.write(i + 1, 0x01);
        }
        cpu.pc = 0;

        b.iter(|| {
            cpu.step(black_box(&mut bus));
        });
    });

    // Benchmark STA absolute (memory write operation)
    group.bench_function("sta_absolute", |b| {
        let mut cpu = Cpu::new();
        let mut bus = bench_bus();

        // STA $0300 (0x8D 0x00 0x03)
        for i in (0..256).step_by(3) {
            if i + 2 < 256 {
                bus.write(i, 0x8D);
                bus.write(i + 1, 0x00);
                bus.write(i + 2, 0x03);
            }
        }
        cpu.pc = 0;

        b.iter(|| {
            cpu.step(black_box(&mut bus));
        });
    });

    // Benchmark JMP absolute (control flow)
    group.bench_function("jmp_absolute", |b| {
        let mut cpu = Cpu::new();
        let mut bus = bench_bus();

        // JMP $0000, a self-loop.
        bus.write(0x0000, 0x4C);
        bus.write(0x0001, 0x00);
        bus.write(0x0002, 0x00);
        cpu.pc = 0x0000;

        b.iter(|| {
            cpu.step(black_box(&mut bus));
        });
    });

    group.finish();
}

/// Benchmark a sequence of mixed instructions (realistic workload)
fn bench_instruction_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("instruction_sequences");

    group.bench_function("typical_sequence", |b| {
        let mut cpu = Cpu::new();
        let mut bus = bench_bus();

        let mut addr = 0x0000u16;

        // LDA #$00
        bus.write(addr, 0xA9);
        addr += 1;
        bus.write(addr, 0x00);
        addr += 1;

        // STA $0300
        bus.write(addr, 0x8D);
        addr += 1;
        bus.write(addr, 0x00);
        addr += 1;
        bus.write(addr, 0x03);
        addr += 1;

        // LDX #$05
        bus.write(addr, 0xA2);
        addr += 1;
        bus.write(addr, 0x05);
        addr += 1;

        // INX
        bus.write(addr, 0xE8);
        addr += 1;

        // DEX
        bus.write(addr, 0xCA);
        addr += 1;

        // BNE back to LDA
        bus.write(addr, 0xD0);
        addr += 1;
        bus.write(addr, 0xF6); // -10 bytes

        cpu.pc = 0x0000;

        b.iter(|| {
            // Execute one full iteration (11 instructions)
            for _ in 0..11 {
                cpu.step(black_box(&mut bus));
            }
        });
    });

    group.finish();
}

/// Benchmark CPU execution over multiple frames
/// Simulates realistic emulator workload
fn bench_frame_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_execution");
    group.sample_size(20); // Reduce sample size for longer benchmarks

    group.bench_function("1000_cycles", |b| {
        let mut cpu = Cpu::new();
        let mut bus = bench_bus();

        for i in 0..0x0800u16 {
            bus.write(i, 0xEA); // NOP
        }
        cpu.pc = 0x0000;

        b.iter(|| {
            let start_cycles = cpu.cycles;
            while cpu.cycles - start_cycles < 1000 {
                cpu.step(black_box(&mut bus));
            }
        });
    });

    group.bench_function("29780_cycles_one_frame", |b| {
        let mut cpu = Cpu::new();
        let mut bus = bench_bus();

        for i in 0..0x0800u16 {
            bus.write(i, 0xEA); // NOP
        }
        cpu.pc = 0x0000;

        b.iter(|| {
            // NES CPU runs at ~1.789773 MHz
            // At 60 FPS: ~29,780 cycles per frame
            let start_cycles = cpu.cycles;
            while cpu.cycles - start_cycles < 29780 {
                cpu.step(black_box(&mut bus));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cpu_instructions,
    bench_instruction_sequence,
    bench_frame_execution
);
criterion_main!(benches);
