// Emulator module - Main emulator coordinator
//
// Wires a loaded cartridge through its mapper into the PPU and CPU buses,
// and drives the PPU:CPU 3:1 clock ratio that keeps scanline timing, vblank
// NMIs, and mapper IRQs synchronized with CPU execution.

mod config;

pub use config::{EmulatorConfig, HotkeyConfig, VideoConfig};

use crate::bus::Bus;
use crate::cartridge::mappers::create_mapper;
use crate::cartridge::{Cartridge, CartridgeError};
use crate::cpu::Cpu;
use crate::ppu::Ppu;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Main emulator structure
///
/// Coordinates the CPU, PPU, and cartridge/mapper for a single loaded game.
pub struct Emulator {
    cpu: Cpu,
    bus: Bus,
    config: EmulatorConfig,
    rom_path: PathBuf,
    paused: bool,
    cpu_cycle_is_odd: bool,
}

impl Emulator {
    /// Load a ROM file and build a fully wired emulator ready to run.
    ///
    /// Unlike an idle emulator-with-no-cartridge, the PPU and bus both
    /// require a mapper to exist at construction time, so there is no
    /// separate "new, then load" step: loading the ROM *is* construction.
    pub fn load_rom<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;
        let mapper = Rc::new(RefCell::new(create_mapper(cartridge)?));
        let ppu = Ppu::new(mapper.clone());
        let mut bus = Bus::new(mapper, ppu);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);

        Ok(Emulator {
            cpu,
            bus,
            config: EmulatorConfig::load_or_default(),
            rom_path: path.to_path_buf(),
            paused: false,
            cpu_cycle_is_odd: false,
        })
    }

    /// Reset all components to power-on state, as if pressing the reset button.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.bus.ppu.reset();
        self.bus.reset();
        self.paused = false;
    }

    /// Run the emulator until a full video frame has been produced.
    ///
    /// Does nothing while paused; callers poll `is_paused()` if they need
    /// to distinguish "no frame because paused" from "no frame yet".
    pub fn run_frame(&mut self) {
        if self.paused {
            return;
        }
        while !self.step_cpu_cycle() {}
    }

    /// Advance by exactly one CPU cycle (and the three PPU dots that share
    /// it), servicing vblank NMI and mapper IRQ requests along the way.
    /// Returns `true` on the dot that completed a video frame.
    fn step_cpu_cycle(&mut self) -> bool {
        if self.bus.dma_in_progress() {
            self.bus.tick_dma(self.cpu_cycle_is_odd);
        } else {
            self.cpu.step(&mut self.bus);
        }
        self.cpu_cycle_is_odd = !self.cpu_cycle_is_odd;

        let mut frame_done = false;
        for _ in 0..3 {
            if self.bus.ppu.step() {
                frame_done = true;
            }
        }

        if self.bus.ppu.nmi_pending() {
            self.bus.ppu.clear_nmi();
            self.cpu.request_nmi();
        }
        if self.bus.mapper_irq_pending() {
            self.cpu.request_irq();
        }

        frame_done
    }

    /// The most recently completed frame, as packed ABGR8888 pixels.
    pub fn frame_buffer(&self) -> &[u32] {
        self.bus.ppu.frame_buffer()
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EmulatorConfig {
        &mut self.config
    }

    pub fn rom_path(&self) -> &Path {
        &self.rom_path
    }
}
