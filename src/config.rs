use std::{fmt, path::PathBuf, str::FromStr};

use crate::{common::PAGE_SIZE, debugger::DebugLevel, replacement::Strategy, workload::Workload};

pub const USAGE: &str = "use: virtmem <npages> <nframes> <rand|fifo|custom> <alpha|beta|gamma|delta> [--debug=N] [--seed=N] [--disk=PATH]";

/// Seed of the run's random generator unless `--seed` says otherwise.
pub const DEFAULT_SEED: u64 = 1;

pub const DEFAULT_DISK_PATH: &str = "myvirtualdisk";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Usage,
    InvalidCount { name: &'static str, value: String },
    TooLarge { name: &'static str, value: String },
    UnknownStrategy(String),
    UnknownWorkload(String),
    InvalidFlag(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Usage => f.write_str(USAGE),
            ConfigError::InvalidCount { name, value } => {
                write!(f, "{} must be a positive integer, got '{}'", name, value)
            }
            ConfigError::TooLarge { name, value } => {
                write!(f, "{} of {} pages does not fit in memory", name, value)
            }
            ConfigError::UnknownStrategy(name) => {
                write!(f, "unknown algorithm '{}' (expected rand, fifo or custom)", name)
            }
            ConfigError::UnknownWorkload(name) => {
                write!(
                    f,
                    "unknown program '{}' (expected alpha, beta, gamma or delta)",
                    name
                )
            }
            ConfigError::InvalidFlag(flag) => write!(f, "invalid option '{}'", flag),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub npages: usize,
    pub nframes: usize,
    pub strategy: Strategy,
    pub workload: Workload,
    pub seed: u64,
    pub debug_level: DebugLevel,
    pub disk_path: PathBuf,
}

impl Config {
    pub fn new(npages: usize, nframes: usize, strategy: Strategy, workload: Workload) -> Self {
        Self {
            npages,
            nframes,
            strategy,
            workload,
            seed: DEFAULT_SEED,
            debug_level: DebugLevel::Off,
            disk_path: PathBuf::from(DEFAULT_DISK_PATH),
        }
    }

    /// Parses the command line, program name excluded: four positionals
    /// followed or interleaved by `--debug=N`, `--seed=N`, `--disk=PATH`.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positional = Vec::new();
        let mut seed = DEFAULT_SEED;
        let mut debug_level = DebugLevel::Off;
        let mut disk_path = PathBuf::from(DEFAULT_DISK_PATH);

        for arg in args {
            let arg = arg.as_ref();
            if let Some(level) = arg.strip_prefix("--debug=") {
                debug_level = level
                    .parse::<u8>()
                    .map(DebugLevel::from_u8)
                    .map_err(|_| ConfigError::InvalidFlag(arg.to_string()))?;
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = value
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidFlag(arg.to_string()))?;
            } else if let Some(path) = arg.strip_prefix("--disk=") {
                if path.is_empty() {
                    return Err(ConfigError::InvalidFlag(arg.to_string()));
                }
                disk_path = PathBuf::from(path);
            } else if arg.starts_with("--") {
                return Err(ConfigError::InvalidFlag(arg.to_string()));
            } else {
                positional.push(arg.to_string());
            }
        }

        let [npages, nframes, strategy, workload] =
            <[String; 4]>::try_from(positional).map_err(|_| ConfigError::Usage)?;

        Ok(Self {
            npages: parse_count("npages", &npages)?,
            nframes: parse_count("nframes", &nframes)?,
            strategy: strategy.parse()?,
            workload: workload.parse()?,
            seed,
            debug_level,
            disk_path,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_disk_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.disk_path = path.into();
        self
    }
}

fn parse_count(name: &'static str, value: &str) -> Result<usize, ConfigError> {
    let count = match usize::from_str(value) {
        Ok(n) if n > 0 => n,
        _ => {
            return Err(ConfigError::InvalidCount {
                name,
                value: value.to_string(),
            });
        }
    };

    if count.checked_mul(PAGE_SIZE).is_none() {
        return Err(ConfigError::TooLarge {
            name,
            value: value.to_string(),
        });
    }
    Ok(count)
}
