// Mapper 0 (NROM): fixed 16 or 32 KiB PRG-ROM, fixed 8 KiB CHR-ROM/RAM.

use crate::cartridge::{Cartridge, CartridgeError, Mapper, Mirroring};

pub struct Mapper0 {
    prg_rom: Vec<u8>,
    chr_mem: Vec<u8>,
    chr_is_ram: bool,
    mirroring: Mirroring,
    prg_mask: u16,
}

impl Mapper0 {
    pub fn new(cartridge: Cartridge) -> Result<Self, CartridgeError> {
        let prg_len = cartridge.prg_rom.len();
        if prg_len != 16 * 1024 && prg_len != 32 * 1024 {
            return Err(CartridgeError::InvalidRom(format!(
                "NROM requires 16 or 32 KiB of PRG-ROM, found {} bytes",
                prg_len
            )));
        }

        // 16 KiB carts mirror $8000-$BFFF into $C000-$FFFF; masking by
        // 0x3FFF on a 16 KiB image and 0x7FFF on a 32 KiB image produces
        // that mirror without a branch at access time.
        let prg_mask = if prg_len == 16 * 1024 { 0x3FFF } else { 0x7FFF };

        Ok(Mapper0 {
            prg_rom: cartridge.prg_rom,
            chr_mem: cartridge.chr_rom,
            chr_is_ram: cartridge.chr_is_ram,
            mirroring: cartridge.mirroring,
            prg_mask,
        })
    }
}

impl Mapper for Mapper0 {
    fn cpu_read(&self, addr: u16) -> u8 {
        if addr < 0x8000 {
            return 0;
        }
        let index = (addr - 0x8000) & self.prg_mask;
        self.prg_rom[index as usize]
    }

    fn cpu_write(&mut self, _addr: u16, _value: u8) {
        // PRG-ROM is not writable on NROM.
    }

    fn ppu_read(&self, addr: u16) -> u8 {
        self.chr_mem[(addr & 0x1FFF) as usize]
    }

    fn ppu_write(&mut self, addr: u16, value: u8) {
        if self.chr_is_ram {
            self.chr_mem[(addr & 0x1FFF) as usize] = value;
        }
        // Writes to CHR-ROM are ignored.
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}
