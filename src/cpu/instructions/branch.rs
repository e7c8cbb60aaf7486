// Conditional branch instructions. All eight share one addressing mode
// (relative) and one timing rule, so they're thin wrappers around a
// single `branch` helper that differ only in which flag they test.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    pub fn bcc(&mut self, _bus: &Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(!self.get_carry(), addr_result)
    }

    pub fn bcs(&mut self, _bus: &Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(self.get_carry(), addr_result)
    }

    pub fn beq(&mut self, _bus: &Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(self.get_zero(), addr_result)
    }

    pub fn bne(&mut self, _bus: &Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(!self.get_zero(), addr_result)
    }

    pub fn bmi(&mut self, _bus: &Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(self.get_negative(), addr_result)
    }

    pub fn bpl(&mut self, _bus: &Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(!self.get_negative(), addr_result)
    }

    pub fn bvc(&mut self, _bus: &Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(!self.get_overflow(), addr_result)
    }

    pub fn bvs(&mut self, _bus: &Bus, addr_result: &AddressingResult) -> u8 {
        self.branch(self.get_overflow(), addr_result)
    }

    /// Common branch logic: base cost is already accounted for by the
    /// dispatcher, so this only reports the extra cycles a taken
    /// branch adds — 1, plus another if it crosses a page.
    #[inline]
    fn branch(&mut self, condition: bool, addr_result: &AddressingResult) -> u8 {
        if !condition {
            return 0;
        }
        self.pc = addr_result.address;
        if addr_result.page_crossed {
            2
        } else {
            1
        }
    }
}
