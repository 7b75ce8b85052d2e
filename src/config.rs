//! Runtime configuration from the environment and the command line.
//!
//! Environment variables are read first; flags override them.
//!
//! | Env | Flag | Meaning |
//! |-----|------|---------|
//! | `BLOCKDROP_SEED` | `--seed N` | RNG seed (default: from the clock) |
//! | `BLOCKDROP_LOG` | `--log PATH` | Write a log file |
//! | - | `--headless STEPS` | Run without a terminal and print the result as JSON |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

pub const SEED_ENV: &str = "BLOCKDROP_SEED";
pub const LOG_ENV: &str = "BLOCKDROP_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Fixed seed; `None` picks one from the clock at startup.
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    /// Tick budget for a headless run; `None` plays interactively.
    pub headless: Option<u32>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    ///
    /// Unparseable or blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_ENV).and_then(|s| s.trim().parse().ok());
        let log_path = lookup(LOG_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            seed,
            log_path,
            headless: None,
        }
    }

    /// Apply command line flags (program name excluded) on top of `self`.
    pub fn parse_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = flag_value(args, i, "--seed")?;
                    self.seed = Some(
                        v.parse::<u32>()
                            .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                    );
                }
                "--log" => {
                    i += 1;
                    let v = flag_value(args, i, "--log")?;
                    if v.trim().is_empty() {
                        return Err(anyhow!("empty --log path"));
                    }
                    self.log_path = Some(PathBuf::from(v));
                }
                "--headless" => {
                    i += 1;
                    let v = flag_value(args, i, "--headless")?;
                    self.headless = Some(
                        v.parse::<u32>()
                            .map_err(|_| anyhow!("invalid --headless value: {}", v))?,
                    );
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(seed_from_clock)
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
