use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

pub const LEVEL_ENV: &str = "IPV4_FIELD_LOG";

#[derive(Debug, Parser)]
#[command(name = "ipv4-field")]
#[command(about = "Drive segmented IPv4 fields from a command script.")]
pub struct CommandLine {
    /// Script to run; reads stdin when omitted
    pub script: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long = "log", env = LEVEL_ENV, default_value = "info")]
    pub log_level: LevelFilter,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
