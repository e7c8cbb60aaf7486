// Memory viewer - hex dumps and byte-pattern search over CPU and PPU
// address space, for the same kind of inspection a disassembler gives
// you at the instruction level but over raw bytes.

use crate::bus::Bus;
use crate::ppu::Ppu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryRegion {
    Cpu,
    PpuNametables,
    PpuPatternTables,
    PpuPalette,
    PpuOam,
}

/// Formats a byte slice as a classic two-column hex dump: address,
/// hex bytes, ASCII gutter. Shared by every `dump_*` method below so
/// the layout only lives in one place.
fn hex_dump(base_addr: usize, bytes: &[u8], bytes_per_row: usize) -> String {
    let mut output = String::new();

    for (row, chunk) in bytes.chunks(bytes_per_row).enumerate() {
        let addr = base_addr + row * bytes_per_row;
        output.push_str(&format!("${:04X}:  ", addr));

        for col in 0..bytes_per_row {
            match chunk.get(col) {
                Some(byte) => output.push_str(&format!("{:02X} ", byte)),
                None => output.push_str("   "),
            }
        }

        output.push_str(" | ");

        for col in 0..bytes_per_row {
            match chunk.get(col) {
                Some(&byte) if (0x20..=0x7E).contains(&byte) => output.push(byte as char),
                Some(_) => output.push('.'),
                None => output.push(' '),
            }
        }

        output.push('\n');
    }

    output
}

/// Hex-dumps and searches CPU/PPU memory. `bytes_per_row` controls the
/// width of every dump this produces.
pub struct MemoryViewer {
    bytes_per_row: usize,
}

impl MemoryViewer {
    pub fn new() -> Self {
        MemoryViewer { bytes_per_row: 16 }
    }

    pub fn set_bytes_per_row(&mut self, bytes: usize) {
        self.bytes_per_row = bytes;
    }

    pub fn dump_cpu_memory(&self, bus: &mut Bus, start: u16, length: usize) -> String {
        let bytes: Vec<u8> = (0..length)
            .map(|offset| bus.read(start.wrapping_add(offset as u16)))
            .collect();
        hex_dump(start as usize, &bytes, self.bytes_per_row)
    }

    pub fn dump_ppu_memory(
        &self,
        ppu: &Ppu,
        region: MemoryRegion,
        start: usize,
        length: usize,
    ) -> String {
        let source: &[u8] = match region {
            MemoryRegion::PpuNametables => &ppu.nametables,
            MemoryRegion::PpuPalette => &ppu.palette_ram,
            MemoryRegion::PpuOam => &ppu.oam,
            MemoryRegion::Cpu | MemoryRegion::PpuPatternTables => &[],
        };
        let end = (start + length).min(source.len());
        let bytes = if start < end { &source[start..end] } else { &[] };
        hex_dump(start, bytes, self.bytes_per_row)
    }

    /// Every starting address in `[start, end]` where `pattern` matches
    /// byte-for-byte against CPU memory.
    pub fn search_cpu_memory(&self, bus: &mut Bus, pattern: &[u8], start: u16, end: u16) -> Vec<u16> {
        if pattern.is_empty() || end < start {
            return Vec::new();
        }

        let last_start = end.saturating_sub(pattern.len() as u16 - 1);
        let mut matches = Vec::new();
        let mut addr = start;

        loop {
            let is_match = pattern
                .iter()
                .enumerate()
                .all(|(i, &byte)| bus.read(addr.wrapping_add(i as u16)) == byte);
            if is_match {
                matches.push(addr);
            }
            if addr >= last_start {
                break;
            }
            addr += 1;
        }

        matches
    }

    pub fn read_byte(&self, bus: &mut Bus, addr: u16) -> u8 {
        bus.read(addr)
    }

    pub fn read_word(&self, bus: &mut Bus, addr: u16) -> u16 {
        bus.read_u16(addr)
    }

    pub fn dump_zero_page(&self, bus: &mut Bus) -> String {
        format!(
            "Zero Page ($0000-$00FF):\n{}",
            self.dump_cpu_memory(bus, 0x0000, 0x100)
        )
    }

    pub fn dump_stack(&self, bus: &mut Bus) -> String {
        format!(
            "Stack ($0100-$01FF):\n{}",
            self.dump_cpu_memory(bus, 0x0100, 0x100)
        )
    }

    pub fn dump_palette(&self, ppu: &Ppu) -> String {
        format!(
            "Palette RAM ($3F00-$3F1F):\n{}",
            self.dump_ppu_memory(ppu, MemoryRegion::PpuPalette, 0, 32)
        )
    }

    pub fn dump_oam(&self, ppu: &Ppu) -> String {
        format!(
            "OAM (Sprite Memory):\n{}",
            self.dump_ppu_memory(ppu, MemoryRegion::PpuOam, 0, 256)
        )
    }
}

impl Default for MemoryViewer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::test_bus;

    #[test]
    fn defaults_to_sixteen_bytes_per_row() {
        let viewer = MemoryViewer::new();
        assert_eq!(viewer.bytes_per_row, 16);
    }

    #[test]
    fn bytes_per_row_is_configurable() {
        let mut viewer = MemoryViewer::new();
        viewer.set_bytes_per_row(8);
        assert_eq!(viewer.bytes_per_row, 8);
    }

    #[test]
    fn read_byte_and_word_match_the_bus() {
        let mut bus = test_bus();
        let viewer = MemoryViewer::new();

        bus.write(0x1234, 0x34);
        bus.write(0x1235, 0x12);

        assert_eq!(viewer.read_byte(&mut bus, 0x1234), 0x34);
        assert_eq!(viewer.read_word(&mut bus, 0x1234), 0x1234);
    }

    #[test]
    fn search_finds_every_occurrence_of_a_pattern() {
        let mut bus = test_bus();
        let viewer = MemoryViewer::new();

        bus.write(0x1000, 0xDE);
        bus.write(0x1001, 0xAD);
        bus.write(0x1002, 0xBE);
        bus.write(0x1003, 0xEF);

        let matches = viewer.search_cpu_memory(&mut bus, &[0xDE, 0xAD, 0xBE, 0xEF], 0x1000, 0x1FFF);
        assert_eq!(matches, vec![0x1000]);
    }

    #[test]
    fn search_with_empty_pattern_finds_nothing() {
        let mut bus = test_bus();
        let viewer = MemoryViewer::new();
        assert!(viewer.search_cpu_memory(&mut bus, &[], 0x0000, 0xFFFF).is_empty());
    }

    #[test]
    fn hex_dump_layout_shows_address_and_bytes() {
        let mut bus = test_bus();
        let viewer = MemoryViewer::new();

        for i in 0..32u16 {
            bus.write(0x8000 + i, i as u8);
        }

        let dump = viewer.dump_cpu_memory(&mut bus, 0x8000, 32);
        assert!(dump.contains("$8000:"));
        assert!(dump.contains("$8010:"));
        assert!(dump.lines().count() == 2);
    }

    #[test]
    fn ppu_oam_dump_reads_from_the_oam_array() {
        let mut bus = test_bus();
        bus.ppu.write_oam_byte(0xAB);
        let viewer = MemoryViewer::new();
        let dump = viewer.dump_oam(&bus.ppu);
        assert!(dump.contains("AB"));
    }
}
