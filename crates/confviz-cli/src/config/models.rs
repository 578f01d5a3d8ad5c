use clap::ValueEnum;
use confviz::engine::config::{RankingConfig, VisualizationConfig};
use serde::Deserialize;
use std::path::PathBuf;

/// How the `convert` command treats output files that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverwritePolicy {
    /// Refuse to run if the conformer directory or the script already exists.
    #[default]
    Abort,
    /// Replace existing files.
    Overwrite,
    /// Leave existing conformer files untouched and only write missing ones.
    Skip,
}

impl std::str::FromStr for OverwritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub script_path: PathBuf,
    pub output_dir: PathBuf,
    pub policy: OverwritePolicy,
    pub all_structures: bool,
    pub write_summary: bool,
    pub core_config: VisualizationConfig,
}

pub struct RankConfig {
    pub input_path: PathBuf,
    pub ranking: RankingConfig,
}
