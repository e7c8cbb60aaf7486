// Shift and rotate instructions. All four read either the accumulator or
// a memory operand, transform one bit pattern, and write the result back
// to wherever it came from, so they share one read-transform-write helper
// and differ only in the transform.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// ASL - shift left, bit 0 filled with 0, bit 7 goes to carry.
    pub fn asl(&mut self, bus: &mut Bus, addr_result: &AddressingResult, is_accumulator: bool) {
        self.shift(bus, addr_result, is_accumulator, |value| {
            let carry_out = value & 0x80 != 0;
            (value << 1, carry_out)
        });
    }

    /// LSR - shift right, bit 7 filled with 0, bit 0 goes to carry.
    pub fn lsr(&mut self, bus: &mut Bus, addr_result: &AddressingResult, is_accumulator: bool) {
        self.shift(bus, addr_result, is_accumulator, |value| {
            let carry_out = value & 0x01 != 0;
            (value >> 1, carry_out)
        });
    }

    /// ROL - shift left with the old carry rotated into bit 0.
    pub fn rol(&mut self, bus: &mut Bus, addr_result: &AddressingResult, is_accumulator: bool) {
        let carry_in = self.get_carry() as u8;
        self.shift(bus, addr_result, is_accumulator, |value| {
            let carry_out = value & 0x80 != 0;
            ((value << 1) | carry_in, carry_out)
        });
    }

    /// ROR - shift right with the old carry rotated into bit 7.
    pub fn ror(&mut self, bus: &mut Bus, addr_result: &AddressingResult, is_accumulator: bool) {
        let carry_in = if self.get_carry() { 0x80 } else { 0 };
        self.shift(bus, addr_result, is_accumulator, |value| {
            let carry_out = value & 0x01 != 0;
            ((value >> 1) | carry_in, carry_out)
        });
    }

    /// Shared shift/rotate body: read the operand (accumulator or
    /// memory), apply `transform` to get the new value and outgoing
    /// carry, update C/Z/N, and write the result back to its source.
    #[inline]
    fn shift(
        &mut self,
        bus: &mut Bus,
        addr_result: &AddressingResult,
        is_accumulator: bool,
        transform: impl FnOnce(u8) -> (u8, bool),
    ) {
        let value = if is_accumulator {
            self.a
        } else {
            bus.read(addr_result.address)
        };

        let (result, carry_out) = transform(value);
        self.set_carry(carry_out);
        self.update_zero_and_negative_flags(result);

        if is_accumulator {
            self.a = result;
        } else {
            bus.write(addr_result.address, result);
        }
    }
}
