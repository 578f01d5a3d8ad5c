use crate::config::models::OverwritePolicy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "confviz - Split a CREST conformer ensemble into single structures and build a ChimeraX script that overlays them with population-weighted transparency.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write every retained conformer to its own XYZ file and generate a ChimeraX script.
    Convert(ConvertArgs),
    /// Print the Boltzmann ranking of an ensemble without writing any files.
    Rank(RankArgs),
}

/// Options shared by every command that ranks an ensemble.
#[derive(Args, Debug, Clone, Default)]
pub struct RankingArgs {
    /// Relative energy cutoff in kcal/mol; conformers at or above it are dropped [default: 6.0]
    #[arg(short, long = "energy", value_name = "KCAL_PER_MOL")]
    pub energy_cutoff: Option<f64>,

    /// Cumulative population threshold; 1.0 keeps every conformer below the energy cutoff [default: 1.0]
    #[arg(short, long = "population", value_name = "FRACTION")]
    pub population_cutoff: Option<f64>,

    /// Temperature used for the Boltzmann populations [default: 298.15]
    #[arg(short, long, value_name = "KELVIN")]
    pub temperature: Option<f64>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S ranking.energy-cutoff=3.0
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// CREST conformer ensemble (e.g., crest_conformers.xyz).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// ChimeraX script to generate (e.g., conformers.cxc).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    #[command(flatten)]
    pub ranking: RankingArgs,

    /// Reference atoms as used in the ChimeraX align command [default: *]
    #[arg(short, long, value_name = "ATOMS")]
    pub refatoms: Option<String>,

    /// Transparency in percent for a conformer with vanishing population [default: 100]
    #[arg(long, value_name = "PERCENT")]
    pub max_transparency: Option<f64>,

    /// Directory for the single-conformer files [default: "conformers" next to INPUT]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// What to do when output files already exist [default: abort]
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_existing: Option<OverwritePolicy>,

    /// Write every parsed conformer to the output directory, not only the retained ones.
    #[arg(long)]
    pub all_structures: bool,

    /// Do not write the populations.csv summary.
    #[arg(long)]
    pub no_summary: bool,
}

/// Arguments for the `rank` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    /// CREST conformer ensemble (e.g., crest_conformers.xyz).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub ranking: RankingArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_parses_positional_paths_and_overrides() {
        let cli = Cli::try_parse_from([
            "confviz",
            "-vv",
            "convert",
            "crest_conformers.xyz",
            "view.cxc",
            "-e",
            "3.5",
            "-p",
            "0.9",
            "-r",
            "C1,C2,C3",
            "--max-transparency",
            "80",
            "--on-existing",
            "overwrite",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert command");
        };
        assert_eq!(args.input, PathBuf::from("crest_conformers.xyz"));
        assert_eq!(args.output, PathBuf::from("view.cxc"));
        assert_eq!(args.ranking.energy_cutoff, Some(3.5));
        assert_eq!(args.ranking.population_cutoff, Some(0.9));
        assert_eq!(args.refatoms.as_deref(), Some("C1,C2,C3"));
        assert_eq!(args.max_transparency, Some(80.0));
        assert_eq!(args.on_existing, Some(OverwritePolicy::Overwrite));
        assert!(!args.no_summary);
    }

    #[test]
    fn rank_accepts_set_values() {
        let cli = Cli::try_parse_from([
            "confviz",
            "rank",
            "ensemble.xyz",
            "-S",
            "ranking.temperature=310",
        ])
        .unwrap();

        let Commands::Rank(args) = cli.command else {
            panic!("expected rank command");
        };
        assert_eq!(args.ranking.set_values, ["ranking.temperature=310"]);
        assert_eq!(args.ranking.temperature, None);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["confviz", "-q", "-v", "rank", "ensemble.xyz"]);
        assert!(result.is_err());
    }
}
