// Stack operation instructions for 6502 CPU
// These instructions handle pushing and pulling values to/from the stack.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::flags;
use crate::cpu::Cpu;

impl Cpu {
    // ========================================
    // Stack Operation Instructions
    // ========================================

    /// PHA - Push Accumulator
    ///
    /// Pushes the contents of the accumulator onto the stack.
    /// The stack pointer is decremented after the push.
    ///
    /// Operation: [SP] = A, SP = SP - 1
    ///
    /// Flags affected: None
    ///
    /// Cycles: 3 cycles
    ///
    /// # Arguments
    /// * `bus` - The memory bus for stack operations
    /// * `addr_result` - Unused (implied addressing mode)
    ///
    /// # Returns
    /// Always returns 0 (no additional cycles)
    ///
    /// # Example
    /// ```text
    /// LDA #$42    ; Load $42 into accumulator
    /// PHA         ; Push $42 onto stack
    /// ```
    pub fn pha(&mut self, bus: &mut Bus, _addr_result: &AddressingResult) -> u8 {
        self.stack_push(bus, self.a);
        0
    }

    /// PLA - Pull Accumulator
    ///
    /// Pulls a byte from the stack and stores it in the accumulator.
    /// The stack pointer is incremented before the pull.
    ///
    /// Operation: SP = SP + 1, A = [SP]
    ///
    /// Flags affected:
    /// - Z: Set if the pulled value is zero
    /// - N: Set if bit 7 of the pulled value is set
    ///
    /// Cycles: 4 cycles
    ///
    /// # Arguments
    /// * `bus` - The memory bus for stack operations
    /// * `addr_result` - Unused (implied addressing mode)
    ///
    /// # Returns
    /// Always returns 0 (no additional cycles)
    ///
    /// # Example
    /// ```text
    /// PLA         ; Pull value from stack into accumulator
    /// ```
    pub fn pla(&mut self, bus: &mut Bus, _addr_result: &AddressingResult) -> u8 {
        self.a = self.stack_pop(bus);
        self.update_zero_and_negative_flags(self.a);
        0
    }

    /// PHP - Push Processor Status
    ///
    /// Pushes the processor status register (P) onto the stack.
    /// According to 6502 specification, the B flag is set to 1 when pushed by PHP.
    /// The UNUSED flag (bit 5) is always set to 1 when pushed.
    ///
    /// Operation: [SP] = P | 0x30, SP = SP - 1
    ///
    /// Flags affected: None (the pushed value has B=1, but the CPU's status register is unchanged)
    ///
    /// Cycles: 3 cycles
    ///
    /// # Arguments
    /// * `bus` - The memory bus for stack operations
    /// * `addr_result` - Unused (implied addressing mode)
    ///
    /// # Returns
    /// Always returns 0 (no additional cycles)
    ///
    /// # Example
    /// ```text
    /// PHP         ; Push processor status onto stack
    /// ```
    ///
    /// # Implementation Note
    /// The 6502 always pushes the status register with the B flag set to 1 and
    /// the UNUSED flag set to 1 (bits 4 and 5). This means the pushed value is
    /// (status | 0x30). The actual CPU status register is not modified.
    pub fn php(&mut self, bus: &mut Bus, _addr_result: &AddressingResult) -> u8 {
        // Push status with B flag and UNUSED flag set to 1
        // B flag (bit 4) and UNUSED flag (bit 5) must be set when pushed
        let status_to_push = self.status | flags::BREAK | flags::UNUSED;
        self.stack_push(bus, status_to_push);
        0
    }

    /// PLP - Pull Processor Status
    ///
    /// Pulls a byte from the stack and stores it in the processor status register (P).
    /// The stack pointer is incremented before the pull.
    ///
    /// According to 6502 specification, the UNUSED flag (bit 5) is always set to 1
    /// in the status register, and the B flag from the stack is ignored.
    ///
    /// Operation: SP = SP + 1, P = [SP] | 0x20 (with B flag ignored)
    ///
    /// Flags affected: All flags are loaded from the stack
    /// - C: Carry
    /// - Z: Zero
    /// - I: Interrupt Disable
    /// - D: Decimal (unused in NES)
    /// - V: Overflow
    /// - N: Negative
    /// - B: Ignored from stack (not modified in status register)
    /// - UNUSED: Always set to 1
    ///
    /// Cycles: 4 cycles
    ///
    /// # Arguments
    /// * `bus` - The memory bus for stack operations
    /// * `addr_result` - Unused (implied addressing mode)
    ///
    /// # Returns
    /// Always returns 0 (no additional cycles)
    ///
    /// # Example
    /// ```text
    /// PLP         ; Pull processor status from stack
    /// ```
    ///
    /// # Implementation Note
    /// When pulling status from stack:
    /// 1. The UNUSED flag (bit 5) is always set to 1 in the CPU status register
    /// 2. The B flag (bit 4) from the stack is ignored (not copied to status register)
    ///
    /// This is important for RTI (Return from Interrupt) which behaves differently.
    pub fn plp(&mut self, bus: &mut Bus, _addr_result: &AddressingResult) -> u8 {
        let status_from_stack = self.stack_pop(bus);

        // Save the current B flag before updating status
        let current_b_flag = self.get_flag(flags::BREAK);

        // Set status from stack, forcing UNUSED flag (bit 5) to 1
        self.status = status_from_stack | flags::UNUSED;

        // Restore the B flag to its previous value (ignore B flag from stack)
        self.update_flag(flags::BREAK, current_b_flag);

        0
    }
}
