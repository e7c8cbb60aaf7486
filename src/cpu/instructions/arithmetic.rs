// Arithmetic instructions: add/subtract with carry, memory and
// register increment/decrement.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// ADC - A = A + M + C. Sets C on unsigned overflow past 0xFF and
    /// V when the two operands share a sign but the result doesn't
    /// (the classic signed-overflow case).
    pub fn adc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        let carry = self.get_carry() as u16;
        let sum = self.a as u16 + value as u16 + carry;

        self.set_carry(sum > 0xFF);
        let result = sum as u8;
        self.set_overflow((self.a ^ result) & (value ^ result) & 0x80 != 0);

        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// SBC - A = A - M - (1-C), implemented as ADC against the one's
    /// complement of M so the same carry/overflow math applies.
    pub fn sbc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        let inverted = !value;
        let carry = self.get_carry() as u16;
        let sum = self.a as u16 + inverted as u16 + carry;

        self.set_carry(sum > 0xFF);
        let result = sum as u8;
        self.set_overflow((self.a ^ result) & (inverted ^ result) & 0x80 != 0);

        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// INC - increment the byte at the effective address, wrapping
    /// past 0xFF. Flag update is split out into `inc_update_flags`
    /// since the dispatcher reads the written value back before
    /// touching Z/N.
    pub fn inc(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = bus.read(addr_result.address);
        bus.write(addr_result.address, value.wrapping_add(1));
    }

    #[inline]
    pub fn inc_update_flags(&mut self, value: u8) {
        self.update_zero_and_negative_flags(value);
    }

    /// DEC - decrement the byte at the effective address, wrapping
    /// past 0x00.
    pub fn dec(&self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = bus.read(addr_result.address);
        bus.write(addr_result.address, value.wrapping_sub(1));
    }

    #[inline]
    pub fn dec_update_flags(&mut self, value: u8) {
        self.update_zero_and_negative_flags(value);
    }

    pub fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
    }

    pub fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
    }

    pub fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
    }

    pub fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
    }
}
