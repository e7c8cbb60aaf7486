//! PPU unit tests, organized by the piece of behavior under test.

use super::*;
use crate::cartridge::mappers::create_mapper;
use crate::cartridge::Cartridge;

pub(crate) fn test_ppu() -> Ppu {
    test_ppu_with_mirroring(Mirroring::Horizontal)
}

pub(crate) fn test_ppu_with_mirroring(mirroring: Mirroring) -> Ppu {
    let cartridge = Cartridge {
        prg_rom: vec![0u8; 16 * 1024],
        chr_rom: vec![0u8; 8 * 1024],
        chr_is_ram: true,
        mapper_id: 0,
        mirroring,
        has_battery: false,
    };
    let mapper = Rc::new(RefCell::new(create_mapper(cartridge).unwrap()));
    Ppu::new(mapper)
}

mod rendering;

#[test]
fn power_on_state_is_zeroed() {
    let ppu = test_ppu();
    assert_eq!(ppu.ppuctrl, 0);
    assert_eq!(ppu.scanline, 0);
    assert_eq!(ppu.dot, 0);
    assert!(!ppu.nmi_pending());
}

#[test]
fn reset_clears_registers_but_keeps_mirroring() {
    let mut ppu = test_ppu_with_mirroring(Mirroring::Vertical);
    ppu.write_register(0, 0xFF);
    ppu.v = 0x1234;
    ppu.reset();
    assert_eq!(ppu.ppuctrl, 0);
    assert_eq!(ppu.v, 0);
    assert_eq!(ppu.mirroring, Mirroring::Vertical);
}

#[test]
fn oam_dma_byte_write_advances_oam_addr() {
    let mut ppu = test_ppu();
    ppu.oam_addr = 10;
    ppu.write_oam_byte(0x55);
    assert_eq!(ppu.oam[10], 0x55);
    assert_eq!(ppu.oam_addr, 11);
}
