// Logging - level-gated trace capture for CPU/PPU execution
//
// The core itself never prints anything; this is the only channel state
// leaves it through before a human reads it. Three levels cover the whole
// crate: `Error` for load-time cartridge failures, `Info` for coarse
// emulator-lifecycle notes, and `Debug` for per-step CPU/PPU traces that
// only matter while chasing a specific bug.

use super::cpu::CpuState;
use super::ppu::PpuState;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Info,
    Debug,
}

/// What a single [`TraceEntry`] is carrying.
#[derive(Debug, Clone)]
pub enum TraceDetail {
    Cpu(CpuState),
    Ppu(PpuState),
    Note(String),
}

/// One captured moment of execution history, stamped with the CPU cycle
/// count it was recorded at so entries from different sources can be
/// interleaved and read back in order.
#[derive(Debug, Clone)]
pub struct TraceEntry {
    pub level: LogLevel,
    pub cycle: u64,
    pub detail: TraceDetail,
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            TraceDetail::Cpu(state) => write!(f, "{:>10} CPU {}", self.cycle, state),
            TraceDetail::Ppu(state) => write!(f, "{:>10} PPU {}", self.cycle, state),
            TraceDetail::Note(message) => write!(f, "{:>10} {}", self.cycle, message),
        }
    }
}

/// Buffers recent trace entries in memory and, optionally, mirrors them
/// to a file as they arrive. CPU and PPU tracing are gated independently
/// from each other and both require `LogLevel::Debug` to do anything, so
/// enabling one without raising the level is a no-op rather than a
/// silent footgun.
pub struct Logger {
    level: LogLevel,
    cpu_trace: bool,
    ppu_trace: bool,
    history: Vec<TraceEntry>,
    history_limit: usize,
    mirror: Option<File>,
}

impl Logger {
    pub fn new() -> Self {
        Logger {
            level: LogLevel::Error,
            cpu_trace: false,
            ppu_trace: false,
            history: Vec::new(),
            history_limit: 10_000,
            mirror: None,
        }
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_cpu_trace(&mut self, enabled: bool) {
        self.cpu_trace = enabled;
    }

    pub fn set_ppu_trace(&mut self, enabled: bool) {
        self.ppu_trace = enabled;
    }

    pub fn cpu_trace_enabled(&self) -> bool {
        self.cpu_trace && self.level >= LogLevel::Debug
    }

    pub fn ppu_trace_enabled(&self) -> bool {
        self.ppu_trace && self.level >= LogLevel::Debug
    }

    /// Mirror every future entry to `path` as it's recorded, in addition
    /// to buffering it in memory.
    pub fn mirror_to_file<P: AsRef<Path>>(&mut self, path: P) -> std::io::Result<()> {
        self.mirror = Some(File::create(path)?);
        Ok(())
    }

    pub fn stop_mirroring(&mut self) {
        self.mirror = None;
    }

    /// Cap the in-memory history at `limit` entries (0 = unbounded),
    /// dropping the oldest entries immediately if already over.
    pub fn set_history_limit(&mut self, limit: usize) {
        self.history_limit = limit;
        self.trim();
    }

    pub fn log_cpu(&mut self, cycle: u64, state: CpuState) {
        if self.cpu_trace_enabled() {
            self.record(LogLevel::Debug, cycle, TraceDetail::Cpu(state));
        }
    }

    pub fn log_ppu(&mut self, cycle: u64, state: PpuState) {
        if self.ppu_trace_enabled() {
            self.record(LogLevel::Debug, cycle, TraceDetail::Ppu(state));
        }
    }

    /// Log a free-form note at `level`, dropped if it's more verbose than
    /// the current threshold.
    pub fn note(&mut self, level: LogLevel, cycle: u64, message: impl Into<String>) {
        if level <= self.level {
            self.record(level, cycle, TraceDetail::Note(message.into()));
        }
    }

    fn record(&mut self, level: LogLevel, cycle: u64, detail: TraceDetail) {
        let entry = TraceEntry { level, cycle, detail };
        if let Some(file) = &mut self.mirror {
            let _ = writeln!(file, "{}", entry);
        }
        self.history.push(entry);
        self.trim();
    }

    fn trim(&mut self) {
        if self.history_limit > 0 && self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(0..excess);
        }
    }

    pub fn history(&self) -> &[TraceEntry] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// The most recent `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> &[TraceEntry] {
        let start = self.history.len().saturating_sub(count);
        &self.history[start..]
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_quiet() {
        let logger = Logger::new();
        assert_eq!(logger.level(), LogLevel::Error);
        assert!(!logger.cpu_trace_enabled());
        assert!(!logger.ppu_trace_enabled());
    }

    #[test]
    fn trace_needs_both_the_flag_and_debug_level() {
        let mut logger = Logger::new();
        logger.set_cpu_trace(true);
        assert!(!logger.cpu_trace_enabled(), "Error level should still suppress it");

        logger.set_level(LogLevel::Debug);
        assert!(logger.cpu_trace_enabled());

        logger.set_cpu_trace(false);
        assert!(!logger.cpu_trace_enabled());
    }

    #[test]
    fn ppu_trace_is_independent_of_cpu_trace() {
        let mut logger = Logger::new();
        logger.set_level(LogLevel::Debug);
        logger.set_ppu_trace(true);

        assert!(logger.ppu_trace_enabled());
        assert!(!logger.cpu_trace_enabled());
    }

    #[test]
    fn note_respects_the_level_threshold() {
        let mut logger = Logger::new();
        logger.set_level(LogLevel::Info);

        logger.note(LogLevel::Debug, 0, "too verbose, dropped");
        assert!(logger.history().is_empty());

        logger.note(LogLevel::Info, 1, "kept");
        assert_eq!(logger.history().len(), 1);
    }

    #[test]
    fn history_caps_at_the_configured_limit() {
        let mut logger = Logger::new();
        logger.set_level(LogLevel::Info);
        logger.set_history_limit(3);

        for i in 0..4u64 {
            logger.note(LogLevel::Info, i, format!("entry {i}"));
        }

        assert_eq!(logger.history().len(), 3);
        match &logger.history()[0].detail {
            TraceDetail::Note(message) => assert_eq!(message, "entry 1"),
            _ => panic!("expected a note"),
        }
    }

    #[test]
    fn recent_returns_the_tail() {
        let mut logger = Logger::new();
        logger.set_level(LogLevel::Info);

        for i in 0..5u64 {
            logger.note(LogLevel::Info, i, format!("{i}"));
        }

        let tail = logger.recent(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].cycle, 3);
        assert_eq!(tail[1].cycle, 4);
    }

    #[test]
    fn clear_empties_history_without_touching_settings() {
        let mut logger = Logger::new();
        logger.set_level(LogLevel::Info);
        logger.note(LogLevel::Info, 0, "x");

        logger.clear();

        assert!(logger.history().is_empty());
        assert_eq!(logger.level(), LogLevel::Info);
    }

    #[test]
    fn level_ordering_gates_from_least_to_most_verbose() {
        assert!(LogLevel::Error < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }
}
