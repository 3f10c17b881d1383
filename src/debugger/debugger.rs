use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl DebugLevel {
    pub fn from_u8(level: u8) -> Self {
        match level {
            0 => DebugLevel::Off,
            1 => DebugLevel::Error,
            2 => DebugLevel::Warn,
            3 => DebugLevel::Info,
            4 => DebugLevel::Debug,
            _ => DebugLevel::Trace,
        }
    }

    /// Colored label for the level, empty for `Off`.
    pub fn tag(self) -> String {
        use color::*;

        let (color, name) = match self {
            DebugLevel::Off => return String::new(),
            DebugLevel::Error => (RED, "ERROR"),
            DebugLevel::Warn => (YELLOW, "WARN"),
            DebugLevel::Info => (GREEN, "INFO"),
            DebugLevel::Debug => (BLUE, "DEBUG"),
            DebugLevel::Trace => (GRAY, "TRACE"),
        };
        format!("{color}{name}{RESET}")
    }
}

pub static DEBUG_LEVEL: AtomicU8 = AtomicU8::new(DebugLevel::Off as u8);

/// Subsystem tag printed in front of every log line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Component {
    Config,
    Disk,
    Mmu,
    Fault,
    Evict,
    Workload,
    Sim,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Component::Config => "config",
            Component::Disk => "disk",
            Component::Mmu => "mmu",
            Component::Fault => "fault",
            Component::Evict => "evict",
            Component::Workload => "workload",
            Component::Sim => "sim",
        };
        f.write_str(name)
    }
}

pub fn set_debug_level(level: DebugLevel) {
    DEBUG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn get_debug_level() -> DebugLevel {
    DebugLevel::from_u8(DEBUG_LEVEL.load(Ordering::Relaxed))
}

pub fn should_log(level: DebugLevel) -> bool {
    level != DebugLevel::Off && (level as u8) <= DEBUG_LEVEL.load(Ordering::Relaxed)
}

/// Writes one log line to stderr. The macros check `should_log` first.
pub fn emit(level: DebugLevel, component: Component, message: std::fmt::Arguments<'_>) {
    eprintln!("{} [{}] {}", level.tag(), component, message);
}

pub mod color {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const GRAY: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}
