// Debug module - Debugging tools for NES emulator
//
// This module provides debugging capabilities including:
// - CPU debugger (step execution, breakpoints, register/stack dump)
// - Memory viewer (CPU and PPU memory space, hex dump)
// - PPU debugger (nametable, pattern table, palette, OAM viewers)
// - Logging (CPU trace, PPU trace, configurable log levels)
//
// All debugging features are optional and designed to have minimal
// performance impact when disabled.

pub mod cpu;
pub mod logger;
pub mod memory;
pub mod ppu;

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::ppu::Ppu;
use std::collections::HashSet;
use std::time::{Duration, Instant};

pub use cpu::{CpuDebugger, CpuState};
pub use logger::{LogLevel, Logger, TraceDetail, TraceEntry};
pub use memory::{MemoryRegion, MemoryViewer};
pub use ppu::{PpuDebugger, PpuState, SpriteInfo};

/// Step mode for execution control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// No stepping, continuous execution
    None,
    /// Execute one CPU instruction
    Instruction,
    /// Execute until next PPU scanline
    Scanline,
    /// Execute until next frame (VBlank)
    Frame,
}

/// Performance metrics for execution monitoring
#[derive(Debug, Clone)]
pub struct PerformanceMetrics {
    /// Current frames per second
    pub fps: f32,
    /// CPU cycles executed in last frame
    pub cpu_cycles_per_frame: u64,
    /// PPU cycles executed in last frame
    pub ppu_cycles_per_frame: u64,
    /// Total frames executed
    pub total_frames: u64,
    /// Total instructions executed
    pub total_instructions: u64,
    /// Time spent in emulation
    pub execution_time: Duration,
    /// Frame times for graphing (last 60 frames)
    pub frame_times: Vec<Duration>,
    /// Start time for uptime tracking
    start_time: Instant,
    /// Last frame time for FPS calculation
    last_frame_time: Option<Instant>,
    /// CPU cycles at start of current frame
    frame_start_cpu_cycles: u64,
    /// PPU cycles at start of current frame
    frame_start_ppu_cycles: u64,
}

impl PerformanceMetrics {
    /// Create a new performance metrics instance
    pub fn new() -> Self {
        Self {
            fps: 0.0,
            cpu_cycles_per_frame: 0,
            ppu_cycles_per_frame: 0,
            total_frames: 0,
            total_instructions: 0,
            execution_time: Duration::ZERO,
            frame_times: Vec::with_capacity(60),
            start_time: Instant::now(),
            last_frame_time: None,
            frame_start_cpu_cycles: 0,
            frame_start_ppu_cycles: 0,
        }
    }

    /// Update metrics at the start of a new frame
    pub fn start_frame(&mut self, cpu_cycles: u64, ppu_cycles: u64) {
        self.frame_start_cpu_cycles = cpu_cycles;
        self.frame_start_ppu_cycles = ppu_cycles;
    }

    /// Update metrics at the end of a frame
    pub fn end_frame(&mut self, cpu_cycles: u64, ppu_cycles: u64) {
        let now = Instant::now();

        // Calculate frame time
        if let Some(last_time) = self.last_frame_time {
            let frame_time = now.duration_since(last_time);

            // Update FPS
            if !frame_time.is_zero() {
                self.fps = 1.0 / frame_time.as_secs_f32();
            }

            // Store frame time for graphing (keep last 60 frames)
            self.frame_times.push(frame_time);
            if self.frame_times.len() > 60 {
                self.frame_times.remove(0);
            }
        }

        self.last_frame_time = Some(now);

        // Calculate cycles per frame
        self.cpu_cycles_per_frame = cpu_cycles.saturating_sub(self.frame_start_cpu_cycles);
        self.ppu_cycles_per_frame = ppu_cycles.saturating_sub(self.frame_start_ppu_cycles);

        // Update totals
        self.total_frames += 1;
        self.execution_time = self.start_time.elapsed();
    }

    /// Record an instruction execution
    pub fn record_instruction(&mut self) {
        self.total_instructions += 1;
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get uptime as a formatted string
    pub fn uptime_string(&self) -> String {
        let uptime = self.start_time.elapsed();
        let hours = uptime.as_secs() / 3600;
        let minutes = (uptime.as_secs() % 3600) / 60;
        let seconds = uptime.as_secs() % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Main debugger interface
///
/// Provides a unified interface for all debugging features.
/// The debugger can be enabled/disabled at runtime to avoid
/// performance overhead during normal emulation.
pub struct Debugger {
    /// CPU debugger
    pub cpu: CpuDebugger,

    /// Memory viewer
    pub memory: MemoryViewer,

    /// PPU debugger
    pub ppu: PpuDebugger,

    /// Logger
    pub logger: Logger,

    /// Whether debugging is enabled
    enabled: bool,

    /// Breakpoints (set of addresses)
    breakpoints: HashSet<u16>,

    /// Whether execution is paused
    paused: bool,

    /// Current step mode
    step_mode: StepMode,

    /// Target scanline for step scanline mode
    target_scanline: Option<u16>,

    /// Target frame for step frame mode
    target_frame: Option<u64>,

    /// Performance metrics
    pub metrics: PerformanceMetrics,
}

impl Debugger {
    /// Create a new debugger instance
    ///
    /// # Returns
    ///
    /// A new debugger with all features enabled
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::debug::Debugger;
    ///
    /// let debugger = Debugger::new();
    /// ```
    pub fn new() -> Self {
        Debugger {
            cpu: CpuDebugger::new(),
            memory: MemoryViewer::new(),
            ppu: PpuDebugger::new(),
            logger: Logger::new(),
            enabled: false,
            breakpoints: HashSet::new(),
            paused: false,
            step_mode: StepMode::None,
            target_scanline: None,
            target_frame: None,
            metrics: PerformanceMetrics::new(),
        }
    }

    /// Enable debugging
    ///
    /// When enabled, the debugger will track CPU and PPU state,
    /// check breakpoints, and log execution.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable debugging
    ///
    /// When disabled, the debugger has minimal overhead.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Check if debugging is enabled
    ///
    /// # Returns
    ///
    /// `true` if debugging is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add a breakpoint at the specified address
    ///
    /// # Arguments
    ///
    /// * `addr` - The address to break at
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::debug::Debugger;
    ///
    /// let mut debugger = Debugger::new();
    /// debugger.add_breakpoint(0x8000); // Break at start of ROM
    /// ```
    pub fn add_breakpoint(&mut self, addr: u16) {
        self.breakpoints.insert(addr);
    }

    /// Remove a breakpoint at the specified address
    ///
    /// # Arguments
    ///
    /// * `addr` - The address to remove breakpoint from
    ///
    /// # Returns
    ///
    /// `true` if a breakpoint was removed
    pub fn remove_breakpoint(&mut self, addr: u16) -> bool {
        self.breakpoints.remove(&addr)
    }

    /// Clear all breakpoints
    pub fn clear_breakpoints(&mut self) {
        self.breakpoints.clear();
    }

    /// Get all breakpoints
    ///
    /// # Returns
    ///
    /// A vector containing all breakpoint addresses
    pub fn breakpoints(&self) -> Vec<u16> {
        self.breakpoints.iter().copied().collect()
    }

    /// Check if execution should break at the current PC
    ///
    /// # Arguments
    ///
    /// * `cpu` - Reference to the CPU
    ///
    /// # Returns
    ///
    /// `true` if execution should pause
    pub fn should_break(&self, cpu: &Cpu) -> bool {
        if !self.enabled {
            return false;
        }

        self.breakpoints.contains(&cpu.pc)
    }

    /// Pause execution
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume execution
    pub fn resume(&mut self) {
        self.paused = false;
        self.step_mode = StepMode::None;
        self.target_scanline = None;
        self.target_frame = None;
    }

    /// Check if execution is paused
    ///
    /// # Returns
    ///
    /// `true` if execution is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Execute one instruction and pause (step mode)
    ///
    /// This allows exactly one instruction to execute even if the debugger
    /// is currently paused, then re-enters the paused state.
    pub fn step(&mut self) {
        self.step_instruction();
    }

    /// Execute one CPU instruction (alias for step)
    pub fn step_instruction(&mut self) {
        self.step_mode = StepMode::Instruction;
        self.target_scanline = None;
        self.target_frame = None;
    }

    /// Execute until the next PPU scanline
    ///
    /// # Arguments
    ///
    /// * `ppu` - Reference to the PPU to get current scanline
    pub fn step_scanline(&mut self, ppu: &Ppu) {
        self.step_mode = StepMode::Scanline;
        // Target the next scanline (wrap around at 261)
        let current_scanline = ppu.scanline();
        self.target_scanline = Some((current_scanline + 1) % 262);
        self.target_frame = None;
    }

    /// Execute until the next frame (VBlank)
    pub fn step_frame(&mut self) {
        self.step_mode = StepMode::Frame;
        self.target_scanline = None;
        // Target the next frame
        self.target_frame = Some(self.metrics.total_frames + 1);
    }

    /// Get the current step mode
    pub fn step_mode(&self) -> StepMode {
        self.step_mode
    }

    /// Called before executing each CPU instruction
    ///
    /// This should be called by the emulator before executing each instruction.
    /// It checks breakpoints, logs execution, and handles stepping.
    ///
    /// # Arguments
    ///
    /// * `cpu` - Reference to the CPU
    /// * `bus` - Reference to the bus
    ///
    /// # Returns
    ///
    /// `true` if execution should continue, `false` if paused
    pub fn before_instruction(&mut self, cpu: &Cpu, bus: &mut Bus) -> bool {
        if !self.enabled {
            return true;
        }

        let stepping = self.step_mode != StepMode::None;

        // If we're not stepping and already paused, don't execute further instructions
        if self.paused && !stepping {
            return false;
        }

        // In normal run mode (not single-step), honor breakpoints
        if !stepping && self.should_break(cpu) {
            self.pause();
            return false;
        }

        // Log CPU state if tracing is enabled
        if self.logger.cpu_trace_enabled() {
            let state = self.cpu.capture_state(cpu, bus);
            self.logger.log_cpu(cpu.cycles, state);
        }

        // If we were in step instruction mode, consume it and pause
        if self.step_mode == StepMode::Instruction {
            self.step_mode = StepMode::None;
            self.paused = true;
        }

        // Record instruction execution for performance metrics
        self.metrics.record_instruction();

        true
    }

    /// Called after each PPU step
    ///
    /// This should be called by the emulator after each PPU step.
    /// It logs PPU state if tracing is enabled.
    ///
    /// # Arguments
    ///
    /// * `ppu` - Reference to the PPU
    pub fn after_ppu_step(&mut self, ppu: &Ppu) {
        if !self.enabled {
            return;
        }

        // Log PPU state if tracing is enabled
        if self.logger.ppu_trace_enabled() {
            let state = self.ppu.capture_state(ppu);
            self.logger.log_ppu(ppu.frame_count(), state);
        }

        // Check if we've reached the target scanline
        if self.step_mode == StepMode::Scanline {
            if let Some(target) = self.target_scanline {
                if ppu.scanline() == target {
                    self.step_mode = StepMode::None;
                    self.target_scanline = None;
                    self.paused = true;
                }
            }
        }
    }

    /// Called at the start of a new frame
    ///
    /// This should be called by the emulator at the start of each frame
    /// to update performance metrics and check frame stepping.
    ///
    /// # Arguments
    ///
    /// * `cpu` - Reference to the CPU for cycle count
    pub fn on_frame_start(&mut self, cpu: &Cpu) {
        if !self.enabled {
            return;
        }

        // PPU runs at 3x CPU speed
        let ppu_cycles = cpu.cycles * 3;
        self.metrics.start_frame(cpu.cycles, ppu_cycles);
    }

    /// Called at the end of a frame (VBlank)
    ///
    /// This should be called by the emulator at the end of each frame
    /// to update performance metrics and check frame stepping.
    ///
    /// # Arguments
    ///
    /// * `cpu` - Reference to the CPU for cycle count
    pub fn on_frame_end(&mut self, cpu: &Cpu) {
        if !self.enabled {
            return;
        }

        // PPU runs at 3x CPU speed
        let ppu_cycles = cpu.cycles * 3;
        self.metrics.end_frame(cpu.cycles, ppu_cycles);

        // Check if we've reached the target frame
        if self.step_mode == StepMode::Frame {
            if let Some(target) = self.target_frame {
                if self.metrics.total_frames >= target {
                    self.step_mode = StepMode::None;
                    self.target_frame = None;
                    self.paused = true;
                }
            }
        }
    }

    /// Get the current CPU state
    ///
    /// # Arguments
    ///
    /// * `cpu` - Reference to the CPU
    /// * `bus` - Reference to the bus
    ///
    /// # Returns
    ///
    /// The current CPU state
    pub fn get_cpu_state(&self, cpu: &Cpu, bus: &mut Bus) -> CpuState {
        self.cpu.capture_state(cpu, bus)
    }

    /// Get the current PPU state
    ///
    /// # Arguments
    ///
    /// * `ppu` - Reference to the PPU
    ///
    /// # Returns
    ///
    /// The current PPU state
    pub fn get_ppu_state(&self, ppu: &Ppu) -> PpuState {
        self.ppu.capture_state(ppu)
    }
}

impl Default for Debugger {
    fn default() -> Self {
        Self::new()
    }
}
