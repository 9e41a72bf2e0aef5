//! CLI subcommands.

pub mod analyze;
pub mod batch;
pub mod config;

use std::path::Path;

use earnr_core::{EngineConfig, Platform};

/// Platform hint accepted on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PlatformArg {
    /// Baemin Connect
    Baemin,
    /// Coupang Eats
    Coupang,
    /// Unknown platform (generic patterns)
    Other,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Baemin => Platform::Baemin,
            PlatformArg::Coupang => Platform::Coupang,
            PlatformArg::Other => Platform::Other,
        }
    }
}

/// Load the engine config from `--config`, or fall back to defaults.
pub(crate) fn load_config(path: Option<&str>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(p) => Ok(EngineConfig::from_file(Path::new(p))?),
        None => Ok(EngineConfig::default()),
    }
}
