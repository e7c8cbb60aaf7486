// NES Emulator Library
// Core library for the NES emulator implementation

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod emulator;
pub mod input;
pub mod ppu;

// Re-export main types for convenience
pub use bus::{Bus, MemoryMappedDevice};
pub use cartridge::{Cartridge, CartridgeError, Mapper, Mirroring};
pub use cpu::Cpu;
pub use debug::{
    CpuDebugger, CpuState, Debugger, LogLevel, Logger, MemoryRegion, MemoryViewer, PpuDebugger,
    PpuState, SpriteInfo, TraceEntry,
};
pub use emulator::{Emulator, EmulatorConfig};
pub use input::{Controller, ControllerIO};
pub use ppu::Ppu;

#[cfg(test)]
mod tests {
    use super::*;
    use cartridge::mappers::create_mapper;
    use cartridge::Mirroring;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_library_components() {
        // Test that all components can be instantiated
        let cartridge = Cartridge {
            prg_rom: vec![0u8; 32 * 1024],
            chr_rom: vec![0u8; 8 * 1024],
            chr_is_ram: true,
            mapper_id: 0,
            mirroring: Mirroring::Horizontal,
            has_battery: false,
        };
        let mapper = Rc::new(RefCell::new(create_mapper(cartridge).unwrap()));
        let _cpu = Cpu::new();
        let ppu = Ppu::new(mapper.clone());
        let _bus = Bus::new(mapper, ppu);
        let _controller = Controller::new();
        let _controller_io = ControllerIO::new();
    }
}
