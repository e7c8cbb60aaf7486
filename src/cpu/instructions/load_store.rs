// Load/store instructions. Loads set Z/N from the value fetched;
// stores never touch flags.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    pub fn lda(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a = value;
        self.update_zero_and_negative_flags(value);
    }

    pub fn ldx(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.x = value;
        self.update_zero_and_negative_flags(value);
    }

    pub fn ldy(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.y = value;
        self.update_zero_and_negative_flags(value);
    }

    pub fn sta(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.a);
    }

    pub fn stx(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.x);
    }

    pub fn sty(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        bus.write(addr_result.address, self.y);
    }
}
